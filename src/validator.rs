//! Request body validation.
//!
//! [`ValidatedJson`] deserializes a JSON body and runs the DTO's declared
//! validation rules before the handler sees it. Validation stops at the
//! first failing constraint and the request is rejected with HTTP 400 and
//! the rule's message in the response envelope.

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::utils::errors::AppError;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// The first failing constraint's message. Field errors are traversed in
/// sorted field order so the reported violation is stable when several
/// fields fail at once.
fn first_error(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

fn map_body_error(error_msg: &str) -> AppError {
    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::bad_request(format!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request("Invalid field type in request");
    }

    AppError::bad_request("Invalid request body")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(
                        "Missing 'Content-Type: application/json' header",
                    );
                }

                map_body_error(&rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(first_error(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Run a DTO's validation rules as route middleware, ahead of any layer
/// added before it. Used where validation must reject a malformed body
/// before the role gate runs, matching a validate-then-authorize
/// middleware chain.
pub async fn validate_body<T>(req: Request, next: Next) -> Result<Response, AppError>
where
    T: DeserializeOwned + Validate,
{
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if !content_type.starts_with("application/json") {
        return Err(AppError::bad_request(
            "Missing 'Content-Type: application/json' header",
        ));
    }

    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;

    {
        let value: T =
            serde_json::from_slice(&bytes).map_err(|err| map_body_error(&err.to_string()))?;
        value
            .validate()
            .map_err(|errors| AppError::bad_request(first_error(&errors)))?;
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn violation(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("invalid");
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Email field rule: non-empty, then RFC format.
pub fn validate_email_field(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(violation("Email cannot be empty."));
    }
    if !value.validate_email() {
        return Err(violation("Bad email format."));
    }
    Ok(())
}

/// Password policy, checked in order so the first violated rule wins:
/// non-empty, length in [8, 32], one uppercase, one lowercase, one digit,
/// one special (non-alphanumeric) character.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(violation("Password cannot be empty."));
    }
    let length = value.chars().count();
    if !(8..=32).contains(&length) {
        return Err(violation(
            "Password must be at least 8 characters long and at most 32 characters long.",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(violation(
            "Password must contain at least one uppercase letter.",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(violation(
            "Password must contain at least one lowercase letter.",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(violation("Password must contain at least one digit."));
    }
    if !value.chars().any(|c| !c.is_alphanumeric()) {
        return Err(violation(
            "Password must contain at least one special character.",
        ));
    }
    Ok(())
}

/// Identifier rule: non-empty, then UUID format.
pub fn validate_user_id(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(violation("userId cannot be empty."));
    }
    if Uuid::parse_str(value).is_err() {
        return Err(violation("userId must be a valid UUID."));
    }
    Ok(())
}
