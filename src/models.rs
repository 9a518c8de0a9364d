use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    LongAnswer,
    TablePositive,
    TableNegative,
    Text,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct ChatRequest {
    /// Free-text question; missing or null is treated as an empty message.
    #[serde(default)]
    #[schema(example = "Is a CRUT the right strategy for me?")]
    pub message: Option<String>,
}

// Every field is always serialized; unused ones are empty or null
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub message_type: MessageType,
    pub title: String,
    pub subtitle: String,
    pub actions: Vec<String>,
    pub table_data: Option<TableData>,
    pub how_it_works: Vec<String>,
    pub how_to_setup: String,
    pub savings: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "Advisor API is running")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
