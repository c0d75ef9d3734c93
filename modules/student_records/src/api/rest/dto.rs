//! REST DTOs with serde and OpenAPI annotations

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student as it travels over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i64,
    pub name: Option<String>,
}
