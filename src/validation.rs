//! Validation of course payloads
//!
//! A payload is accepted when it is an object whose only key is `name` and
//! `name` is a string of at least [`NAME_MIN_LENGTH`] characters. Checks stop
//! at the first failure, so a report carries exactly one detail.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Minimum accepted course name length, in UTF-16 code units
pub const NAME_MIN_LENGTH: usize = 3;

const NAME_KEY: &str = "name";

/// How a failed validation is written back to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRender {
    /// The full report as JSON
    Structured,
    /// Only the first detail's message, as plain text
    Message,
}

/// Outcome of a failed validation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationReport {
    /// The payload as received
    #[serde(rename = "_original")]
    pub original: Value,
    pub details: Vec<ValidationDetail>,
}

/// One rule violation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationDetail {
    pub message: String,
    pub path: Vec<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub context: ValidationContext,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ValidationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ValidationReport {
    fn single(original: &Value, detail: ValidationDetail) -> Self {
        Self {
            original: original.clone(),
            details: vec![detail],
        }
    }

    /// Message text of the first violation
    pub fn first_message(&self) -> &str {
        self.details
            .first()
            .map(|detail| detail.message.as_str())
            .unwrap_or("validation failed")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first_message())
    }
}

impl ValidationDetail {
    fn for_key(
        key: &str,
        kind: &'static str,
        message: String,
        context: ValidationContext,
    ) -> Self {
        Self {
            message,
            path: vec![key.to_string()],
            kind,
            context,
        }
    }
}

/// Validate a create/update payload, returning the accepted name.
pub fn validate_course(payload: &Value) -> Result<String, ValidationReport> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationReport::single(
            payload,
            ValidationDetail {
                message: "\"value\" must be of type object".to_string(),
                path: Vec::new(),
                kind: "object.base",
                context: ValidationContext {
                    value: Some(payload.clone()),
                    label: "value".to_string(),
                    ..Default::default()
                },
            },
        ));
    };

    let name = validate_name(object.get(NAME_KEY))
        .map_err(|detail| ValidationReport::single(payload, detail))?;

    if let Some(detail) = unknown_key(object) {
        return Err(ValidationReport::single(payload, detail));
    }

    Ok(name)
}

fn validate_name(value: Option<&Value>) -> Result<String, ValidationDetail> {
    let context = |value: Option<&Value>, limit: Option<usize>| ValidationContext {
        limit,
        value: value.cloned(),
        label: NAME_KEY.to_string(),
        key: Some(NAME_KEY.to_string()),
        ..Default::default()
    };

    let Some(value) = value else {
        return Err(ValidationDetail::for_key(
            NAME_KEY,
            "any.required",
            format!("\"{NAME_KEY}\" is required"),
            context(None, None),
        ));
    };

    let Some(name) = value.as_str() else {
        return Err(ValidationDetail::for_key(
            NAME_KEY,
            "string.base",
            format!("\"{NAME_KEY}\" must be a string"),
            context(Some(value), None),
        ));
    };

    if name.is_empty() {
        return Err(ValidationDetail::for_key(
            NAME_KEY,
            "string.empty",
            format!("\"{NAME_KEY}\" is not allowed to be empty"),
            context(Some(value), None),
        ));
    }

    if name.encode_utf16().count() < NAME_MIN_LENGTH {
        return Err(ValidationDetail::for_key(
            NAME_KEY,
            "string.min",
            format!(
                "\"{NAME_KEY}\" length must be at least {NAME_MIN_LENGTH} characters long"
            ),
            context(Some(value), Some(NAME_MIN_LENGTH)),
        ));
    }

    Ok(name.to_string())
}

fn unknown_key(object: &Map<String, Value>) -> Option<ValidationDetail> {
    let (key, value) = object.iter().find(|(key, _)| key.as_str() != NAME_KEY)?;

    Some(ValidationDetail::for_key(
        key,
        "object.unknown",
        format!("\"{key}\" is not allowed"),
        ValidationContext {
            child: Some(key.clone()),
            value: Some(value.clone()),
            label: key.clone(),
            key: Some(key.clone()),
            ..Default::default()
        },
    ))
}
