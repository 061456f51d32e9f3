//! MCP server exposing recipe search as tools.

use crate::catalog::Catalog;
use crate::state::RecipeState;
use crate::tools::{
    GetRecipeRequest, SearchByIngredientsRequest, SearchByNameRequest, SuggestIngredientsRequest,
    handle_get_recipe, handle_search_by_ingredients, handle_search_by_name,
    handle_suggest_ingredients,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for recipe discovery.
///
/// Holds one search session: the catalog and its result cache.
#[derive(Clone)]
pub struct RecipeServer {
    /// Catalog and session cache
    state: Arc<RecipeState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for RecipeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl RecipeServer {
    /// Create a server over the given catalog with an empty session cache.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            state: Arc::new(RecipeState::new(catalog)),
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared session state.
    pub fn state(&self) -> &Arc<RecipeState> {
        &self.state
    }

    #[tool(
        description = "Find recipes you can make from the ingredients you have. Returns recipes ranked by the percentage of required ingredients covered, with the ingredients you have and the ones you still need.",
        input_schema = inline_schema_for_type::<SearchByIngredientsRequest>()
    )]
    async fn search_by_ingredients(
        &self,
        Parameters(request): Parameters<SearchByIngredientsRequest>,
    ) -> std::result::Result<String, String> {
        handle_search_by_ingredients(&self.state, request).await
    }

    #[tool(
        description = "Search recipes by name, description, tag or cuisine (e.g. 'carbonara', 'italian', 'quick'). Recipes whose name matches are listed first.",
        input_schema = inline_schema_for_type::<SearchByNameRequest>()
    )]
    async fn search_by_name(
        &self,
        Parameters(request): Parameters<SearchByNameRequest>,
    ) -> std::result::Result<String, String> {
        handle_search_by_name(&self.state, request).await
    }

    #[tool(
        description = "Show a full recipe: times, servings, ingredients and instructions. Pass the ingredients from a previous ingredient search to mark each ingredient as available or needed.",
        input_schema = inline_schema_for_type::<GetRecipeRequest>()
    )]
    async fn get_recipe(
        &self,
        Parameters(request): Parameters<GetRecipeRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_recipe(&self.state, request).await
    }

    #[tool(
        description = "Suggest common ingredient names that contain the given text, for completing a partially typed ingredient.",
        input_schema = inline_schema_for_type::<SuggestIngredientsRequest>()
    )]
    async fn suggest_ingredients(
        &self,
        Parameters(request): Parameters<SuggestIngredientsRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_suggest_ingredients(&request))
    }
}

#[tool_handler]
impl ServerHandler for RecipeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "recipe-finder: find recipes from the ingredients you have or by name. \
                 Use search_by_ingredients or search_by_name to get recipe ids, then get_recipe for details.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools.
///
/// Inlines subschemas so `match_type` is rendered as an enum dropdown instead of a `$ref`.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let serde_json::Value::Object(json_object) = object else {
        panic!("Schema serialization produced non-object value");
    };

    Arc::new(json_object)
}
