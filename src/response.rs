//! Standardized response envelope.
//!
//! Every API reply, success or failure, is shaped as
//! `{success, message, data}`. Error responses always carry an empty
//! `data` object.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// The uniform JSON reply shape used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Object)]
    pub data: Value,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_keeps_data() {
        let response = ApiResponse::success("ok", json!({"user": {"id": "1"}}));
        assert!(response.success);
        assert_eq!(response.message, "ok");
        assert_eq!(response.data["user"]["id"], "1");
    }

    #[test]
    fn test_error_has_empty_data() {
        let response = ApiResponse::error("something failed");
        assert!(!response.success);
        assert_eq!(response.data, json!({}));
    }

    #[test]
    fn test_serialized_shape() {
        let response = ApiResponse::error("nope");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["message"], json!("nope"));
        assert_eq!(value["data"], json!({}));
    }
}
