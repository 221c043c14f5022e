//! Response envelopes
//!
//! Builds the three shapes a resolver hands back to the transport layer:
//! a bare record list (no wrapper needed), a paginated envelope, and a
//! success/error mutation envelope. Serialization to the wire protocol is
//! the transport's job; everything here is plain structured data.

use crate::args::Record;
use crate::pagination::{Page, PageStats};
use async_graphql::SimpleObject;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// A validation failure attached to a mutation envelope.
#[derive(SimpleObject, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    pub field: String,
    pub details: Vec<String>,
}

impl ValidationError {
    /// Standard error for required fields that arrived empty or absent.
    pub fn missing_fields(missing: &[&str], details: Vec<String>) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "Missing required fields".to_string(),
            field: missing.join(","),
            details,
        }
    }
}

/// Items of a paginated envelope.
///
/// The output schema decides whether a page carries full records or a
/// lossy one-line summary per record; the resolver picks the variant
/// explicitly.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PageItems {
    Summaries(Vec<String>),
    Records(Vec<Value>),
}

impl PageItems {
    /// Project records into the summary variant.
    pub fn summarize<F>(records: &[Value], projection: F) -> Self
    where
        F: Fn(&Record) -> String,
    {
        Self::Summaries(
            records
                .iter()
                .filter_map(|record| match record {
                    Value::Object(map) => Some(projection(map)),
                    _ => None,
                })
                .collect(),
        )
    }
}

/// Paginated envelope: items plus paging metadata.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse {
    pub items: PageItems,
    #[serde(flatten)]
    pub stats: PageStats,
    pub success: bool,
    pub message: String,
}

impl PaginatedResponse {
    /// Wrap a full-record page.
    pub fn records(page: Page, message: impl Into<String>) -> Self {
        Self {
            items: PageItems::Records(page.items),
            stats: page.stats,
            success: true,
            message: message.into(),
        }
    }

    /// Wrap a page projected to per-record summary strings.
    pub fn summaries<F>(page: Page, projection: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Record) -> String,
    {
        Self {
            items: PageItems::summarize(&page.items, projection),
            stats: page.stats,
            success: true,
            message: message.into(),
        }
    }
}

/// Mutation envelope: success carries data, failure carries errors.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<Value>,
    pub errors: Option<Vec<ValidationError>>,
}

impl MutationResponse {
    /// Successful mutation with its created/updated record.
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    /// Failed mutation with validation errors. Not an error signal to the
    /// transport layer; this is a normal return value.
    pub fn invalid(message: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }
}

/// Names of required string fields that are empty or absent in `input`.
pub fn missing_required<'a>(input: &Record, fields: &[&'a str]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|field| match input.get(**field) {
            Some(Value::String(s)) => s.is_empty(),
            _ => true,
        })
        .copied()
        .collect()
}

/// Synthesize a record identifier, unique per call.
pub fn new_record_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
