//! Demo query and mutation resolvers
//!
//! Each resolver is a pure function of the request context and the
//! already-parsed argument map. List queries run the same pipeline:
//! seed data, filter, paginate, wrap. Malformed arguments degrade to
//! defaults; the only user-visible failure is the mutation envelope's
//! `success: false` branch.

use crate::args::{
    get_bool_arg, get_float_arg, get_int_arg, get_int_array_arg, get_object_arg,
    get_object_array_arg, get_string_arg, get_string_array_arg, Record,
};
use crate::context::RequestContext;
use crate::dataset;
use crate::filter::{field_array_contains, field_equals};
use crate::pagination::{paginate, slice_offset_limit};
use crate::response::{
    missing_required, new_record_id, MutationResponse, PaginatedResponse, ValidationError,
};
use crate::{PluginError, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

/// Greeting assembled from the optional `name`, `object`, and
/// `arrayofObjects` arguments, prefixed with whatever identifiers the
/// host attached to the request.
pub async fn hello_world(ctx: &RequestContext, args: &Record) -> Result<Value> {
    tracing::debug!(plugin_id = ?ctx.plugin_id, "helloWorld called");

    let mut out = String::from("Hello World Plugin Response:\n");
    if let Some(id) = &ctx.plugin_id {
        out.push_str(&format!("Plugin ID: {id}\n"));
    }
    if let Some(id) = &ctx.project_id {
        out.push_str(&format!("Project ID: {id}\n"));
    }
    if let Some(id) = &ctx.user_id {
        out.push_str(&format!("User ID: {id}\n"));
    }
    if let Some(id) = &ctx.tenant_id {
        out.push_str(&format!("Tenant ID: {id}\n"));
    }

    let name = get_string_arg(args, "name", "World");
    out.push_str(&format!("Hello, {name}!\n"));

    let object = get_object_arg(args, "object");
    if !object.is_empty() {
        out.push_str(&format!(
            "Object received: name={} age={}\n",
            get_string_arg(&object, "name", ""),
            get_int_arg(&object, "age", 0),
        ));
    }

    let objects = get_object_array_arg(args, "arrayofObjects");
    if !objects.is_empty() {
        out.push_str("Array of objects received:\n");
        for (i, obj) in objects.iter().enumerate() {
            out.push_str(&format!(
                "  Object {}: name={} age={}\n",
                i + 1,
                get_string_arg(obj, "name", ""),
                get_int_arg(obj, "age", 0),
            ));
        }
    }

    Ok(Value::String(out))
}

/// Echoes a mixed bag of scalar-array and object-array arguments back as
/// a text summary.
pub async fn process_complex_data(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    tracing::debug!("processComplexData called");

    let mut out = String::from("Processing complex data:\n");

    let user = get_object_arg(args, "user");
    if !user.is_empty() {
        out.push_str(&format!(
            "User: ID={} Name={} Email={} Age={} Active={}\n",
            get_int_arg(&user, "id", 0),
            get_string_arg(&user, "name", ""),
            get_string_arg(&user, "email", ""),
            get_int_arg(&user, "age", 0),
            get_bool_arg(&user, "active", false),
        ));
    }

    let tags = get_string_array_arg(args, "tags");
    if !tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", tags.join(", ")));
    }

    let numbers = get_int_array_arg(args, "numbers");
    if !numbers.is_empty() {
        let joined: Vec<String> = numbers.iter().map(i64::to_string).collect();
        out.push_str(&format!("Numbers: {}\n", joined.join(", ")));
    }

    let users = get_object_array_arg(args, "users");
    if !users.is_empty() {
        out.push_str("Users:\n");
        for (i, user) in users.iter().enumerate() {
            out.push_str(&format!(
                "  User {}: ID={} Name={} Email={}\n",
                i + 1,
                get_int_arg(user, "id", 0),
                get_string_arg(user, "name", ""),
                get_string_arg(user, "email", ""),
            ));
        }
    }

    Ok(Value::String(out))
}

/// Mutation that echoes its `message` argument.
pub async fn say_hello(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    let message = get_string_arg(args, "message", "Hello!");
    Ok(Value::String(format!("Plugin says: {message}")))
}

/// Single hardcoded user record for the requested id.
pub async fn get_user_profile(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    let user_id = get_string_arg(args, "userId", "default-user");
    tracing::debug!(%user_id, "getUserProfile called");
    Ok(dataset::user_profile(&user_id))
}

/// Users filtered by active status, windowed by offset/limit.
///
/// Returns the bare list; this path carries no paging metadata.
pub async fn get_users(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    let limit = get_int_arg(args, "limit", 10);
    let offset = get_int_arg(args, "offset", 0);
    let active = get_bool_arg(args, "active", true);
    tracing::debug!(limit, offset, active, "getUsers called");

    let users = field_equals(dataset::sample_users(), "active", &Value::Bool(active));
    let page = slice_offset_limit(users, offset, limit);

    tracing::debug!(count = page.len(), "getUsers returning");
    Ok(Value::Array(page))
}

/// Single hardcoded product record for the requested id.
pub async fn get_product(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    let product_id = get_string_arg(args, "productId", "default-product");
    tracing::debug!(%product_id, "getProduct called");
    Ok(dataset::product_record(&product_id))
}

/// Products filtered by category, windowed by page/pageSize, wrapped in
/// the paginated envelope with one summary line per product.
pub async fn get_products_paginated(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    let page_number = get_int_arg(args, "page", 1);
    let page_size = get_int_arg(args, "pageSize", 5);
    let category = get_string_arg(args, "category", "");
    tracing::debug!(page_number, page_size, %category, "getProductsPaginated called");

    let products = field_array_contains(dataset::sample_products(), "categories", &category);
    let page = paginate(products, page_number, page_size);
    let count = page.items.len();

    let response = PaginatedResponse::summaries(
        page,
        product_summary,
        format!("Retrieved {count} products"),
    );
    Ok(serde_json::to_value(response)?)
}

fn product_summary(product: &Record) -> String {
    format!(
        "{} - {} (${:.2})",
        get_string_arg(product, "name", ""),
        get_string_arg(product, "description", ""),
        get_float_arg(product, "price", 0.0),
    )
}

/// Mutation creating a user from the `input` object.
///
/// Empty or absent name/email/username produce the `success: false`
/// envelope; a valid input yields a fresh record with a unique id.
pub async fn create_user(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    let input = get_object_arg(args, "input");
    let name = get_string_arg(&input, "name", "");
    let email = get_string_arg(&input, "email", "");
    let username = get_string_arg(&input, "username", "");
    tracing::debug!(%name, %email, %username, "createUser called");

    let missing = missing_required(&input, &["name", "email", "username"]);
    if !missing.is_empty() {
        tracing::debug!(?missing, "createUser rejected");
        let response = MutationResponse::invalid(
            "Name, email, and username are required",
            vec![ValidationError::missing_fields(
                &missing,
                vec!["All fields are required for user creation".to_string()],
            )],
        );
        return Ok(serde_json::to_value(response)?);
    }

    let user = json!({
        "id": new_record_id("user"),
        "name": name,
        "email": email,
        "username": username,
        "active": true,
        "createdAt": Utc::now().to_rfc3339(),
    });

    let response = MutationResponse::ok("User created successfully", user);
    Ok(serde_json::to_value(response)?)
}

/// Mutation summarizing an array of tag objects for a user.
pub async fn process_bulk_tags(_ctx: &RequestContext, args: &Record) -> Result<Value> {
    let user_id = get_string_arg(args, "userId", "default-user");
    let tags = get_object_array_arg(args, "tags");
    tracing::debug!(%user_id, count = tags.len(), "processBulkTags called");

    let mut out = format!("Processing {} tags for user: {user_id}\n", tags.len());
    for (i, tag) in tags.iter().enumerate() {
        out.push_str(&format!(
            "Tag {}: id={} name={} value={} weight={:.2} active={} metadata={}\n",
            i + 1,
            get_string_arg(tag, "tag_id", ""),
            get_string_arg(tag, "name", ""),
            get_string_arg(tag, "value", ""),
            get_float_arg(tag, "weight", 0.0),
            get_bool_arg(tag, "active", false),
            get_string_arg(tag, "metadata", ""),
        ));
    }

    Ok(Value::String(out))
}

/// Dispatch seam the host engine calls into.
#[async_trait]
pub trait FieldResolver: Send + Sync {
    /// Resolve a registered query or mutation field by name.
    async fn resolve_field(
        &self,
        ctx: &RequestContext,
        field: &str,
        args: &Record,
    ) -> Result<Value>;
}

/// The demo plugin: every registered field backed by the resolvers above.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoPlugin;

#[async_trait]
impl FieldResolver for DemoPlugin {
    async fn resolve_field(
        &self,
        ctx: &RequestContext,
        field: &str,
        args: &Record,
    ) -> Result<Value> {
        match field {
            "helloWorld" => hello_world(ctx, args).await,
            "processComplexData" => process_complex_data(ctx, args).await,
            "getUserProfile" => get_user_profile(ctx, args).await,
            "getUsers" => get_users(ctx, args).await,
            "getProduct" => get_product(ctx, args).await,
            "getProductsPaginated" => get_products_paginated(ctx, args).await,
            "sayHello" => say_hello(ctx, args).await,
            "createUser" => create_user(ctx, args).await,
            "processBulkTags" => process_bulk_tags(ctx, args).await,
            other => Err(PluginError::UnknownField(other.to_string())),
        }
    }
}
