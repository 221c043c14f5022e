//! # plugin-resolvers
//!
//! Resolver utilities for demo GraphQL plugins.
//!
//! ## Features
//!
//! - **Typed Argument Access** - total accessors over untyped argument maps
//! - **Filtering** - stable, predicate-based selection over record collections
//! - **Pagination** - offset/limit slicing and page/pageSize with metadata
//! - **Response Envelopes** - paginated and mutation response wrappers
//! - **Demo Resolvers** - queries/mutations answering with seed data
//! - **REST Handlers** - axum handlers for the demo REST endpoints
//!
//! ## Usage
//!
//! ```rust
//! use plugin_resolvers::dataset::sample_products;
//! use plugin_resolvers::pagination::paginate;
//!
//! // Paginate the product seed data
//! let page = paginate(sample_products(), 1, 5);
//! assert_eq!(page.stats.total_pages, 1);
//! ```

pub mod args;
pub mod context;
pub mod dataset;
pub mod filter;
pub mod pagination;
pub mod resolvers;
pub mod response;
pub mod rest;

pub use args::{
    get_array_arg, get_bool_arg, get_float_arg, get_int_arg, get_int_array_arg,
    get_object_arg, get_object_array_arg, get_string_arg, get_string_array_arg, Record,
};
pub use context::RequestContext;
pub use filter::{field_array_contains, field_equals, filter_records};
pub use pagination::{paginate, slice_offset_limit, Page, PageStats};
pub use resolvers::{DemoPlugin, FieldResolver};
pub use response::{MutationResponse, PageItems, PaginatedResponse, ValidationError};

use thiserror::Error;

/// Plugin name reported in REST payloads.
pub const PLUGIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Plugin version reported in REST payloads.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolver errors
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Response encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, PluginError>;
