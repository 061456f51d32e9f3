use crate::types::MatchMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Find recipes by the ingredients you have or by name", long_about = None)]
pub struct Cli {
    /// JSON recipe catalog to load instead of the built-in sample recipes
    #[arg(long, global = true, env = "RECIPE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio
    Serve,
    /// Rank recipes by the ingredients you have
    Ingredients {
        #[arg(required = true)]
        ingredients: Vec<String>,
        #[arg(short, long = "match", default_value_t = MatchMode::Some)]
        match_type: MatchMode,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Search recipes by name, description, tag or cuisine
    Name {
        query: String,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show a recipe, optionally highlighting the ingredients you have
    Show {
        id: String,
        #[arg(long = "have")]
        have: Vec<String>,
    },
    /// Suggest common ingredient names
    Suggest {
        input: String,
    },
}
