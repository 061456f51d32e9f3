use anyhow::Context;
use clap::Parser;
use recipe_finder::catalog::suggest_ingredients;
use recipe_finder::cli::{Cli, Commands};
use recipe_finder::format::{format_ingredient_results, format_name_results, format_recipe_detail};
use recipe_finder::error::Result;
use recipe_finder::logging::{self, LogFormat};
use recipe_finder::{
    Catalog, Pantry, RecipeDetail, RecipeServer, SearchFilters, search_by_ingredients,
    search_by_name,
};
use rmcp::{ServiceExt, transport::stdio};
use serde::Serialize;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    let default_level = match cli.command {
        Commands::Serve => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };
    logging::init(log_format, default_level);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Built-in catalog is invalid")?,
    };
    let catalog = Arc::new(catalog);

    match cli.command {
        Commands::Serve => serve(catalog).await,
        Commands::Ingredients {
            ingredients,
            match_type,
            limit,
        } => {
            let pantry: Pantry = ingredients.iter().collect();
            let filters = SearchFilters::with_match_type(match_type);
            let mut results =
                search_by_ingredients(catalog.recipes(), pantry.items(), filters.match_type);
            if let Some(limit) = limit {
                results.truncate(limit);
            }

            if cli.json {
                print_json(&results)
            } else {
                print!(
                    "{}",
                    format_ingredient_results(&results, pantry.items(), filters.match_type)
                );
                Ok(())
            }
        }
        Commands::Name { query, limit } => {
            let mut results = search_by_name(catalog.recipes(), &query);
            if let Some(limit) = limit {
                results.truncate(limit);
            }

            if cli.json {
                print_json(&results)
            } else {
                print!("{}", format_name_results(&results, &query));
                Ok(())
            }
        }
        Commands::Show { id, have } => {
            let recipe = catalog
                .get(&id)
                .with_context(|| format!("Recipe '{}' not found", id))?;
            let pantry: Pantry = have.iter().collect();
            let detail = RecipeDetail::new(recipe, pantry.items());

            if cli.json {
                print_json(&detail)
            } else {
                print!("{}", format_recipe_detail(&detail));
                Ok(())
            }
        }
        Commands::Suggest { input } => {
            let suggestions = suggest_ingredients::<&str>(input.trim(), &[]);
            if cli.json {
                print_json(&suggestions)
            } else {
                for suggestion in suggestions {
                    println!("{}", suggestion);
                }
                Ok(())
            }
        }
    }
}

async fn serve(catalog: Arc<Catalog>) -> Result<()> {
    tracing::info!("Starting recipe-finder MCP server with {} recipes", catalog.len());

    let server = RecipeServer::new(catalog);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
