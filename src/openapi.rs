use utoipa::OpenApi;

use crate::{
    models::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, MessageType, TableData, TableRow},
    routes,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::chat::ai_chat,
    ),
    components(
        schemas(HealthResponse, ChatRequest, ChatResponse, MessageType, TableData, TableRow, ErrorResponse)
    ),
    tags(
        (name = "System", description = "System health and status endpoints"),
        (name = "Chat", description = "Advisory chat assistant")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health/"));
        assert!(doc.paths.paths.contains_key("/ai/chat/"));
    }

    #[test]
    fn documents_the_chat_envelope() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &json["components"]["schemas"];
        assert!(schemas["ChatResponse"]["properties"]["messageType"].is_object());
        assert!(schemas["ChatResponse"]["properties"]["tableData"].is_object());
        assert!(schemas["HealthResponse"].is_object());
    }
}
