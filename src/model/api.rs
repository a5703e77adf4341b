use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body returned for every failed request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by mutations that have nothing else to report.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request body carrying a single entity id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct IdDto {
    pub id: i32,
}

/// `?id=` query string used by the lookup endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Id of the entity to look up
    pub id: i32,
}
