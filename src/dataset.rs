//! Seed data for the demo resolvers
//!
//! Every constructor returns a fresh snapshot, so concurrent resolver
//! invocations never share mutable collections.

use chrono::{Duration, Utc};
use serde_json::{json, Value};

fn rfc3339_hours_ago(hours: i64) -> String {
    (Utc::now() - Duration::hours(hours)).to_rfc3339()
}

/// Sample users with nested address and tag records.
pub fn sample_users() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "name": "John Doe",
            "email": "john.doe@example.com",
            "username": "johndoe",
            "address": {
                "street": "123 Main St",
                "city": "New York",
                "state": "NY",
                "zip": "10001",
            },
            "tags": [
                {"key": "department", "val": "engineering"},
                {"key": "level", "val": "senior"},
            ],
            "active": true,
            "createdAt": rfc3339_hours_ago(24),
        }),
        json!({
            "id": "2",
            "name": "Jane Smith",
            "email": "jane.smith@example.com",
            "username": "janesmith",
            "address": {
                "street": "456 Oak Ave",
                "city": "Los Angeles",
                "state": "CA",
                "zip": "90210",
            },
            "tags": [
                {"key": "department", "val": "design"},
                {"key": "level", "val": "mid"},
            ],
            "active": false,
            "createdAt": rfc3339_hours_ago(48),
        }),
        json!({
            "id": "3",
            "name": "Bob Johnson",
            "email": "bob.johnson@example.com",
            "username": "bobjohnson",
            "address": {
                "street": "789 Pine Rd",
                "city": "Chicago",
                "state": "IL",
                "zip": "60601",
            },
            "tags": [
                {"key": "department", "val": "marketing"},
                {"key": "level", "val": "junior"},
            ],
            "active": true,
            "createdAt": rfc3339_hours_ago(72),
        }),
    ]
}

/// Sample products with tag and category arrays.
pub fn sample_products() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "name": "Laptop",
            "description": "High-performance laptop",
            "price": 999.99,
            "stock": 10,
            "tags": ["electronics", "computers"],
            "categories": ["electronics", "office"],
        }),
        json!({
            "id": "2",
            "name": "Coffee Mug",
            "description": "Ceramic coffee mug",
            "price": 12.99,
            "stock": 50,
            "tags": ["kitchen", "drinkware"],
            "categories": ["home", "kitchen"],
        }),
        json!({
            "id": "3",
            "name": "Book",
            "description": "Programming book",
            "price": 29.99,
            "stock": 25,
            "tags": ["education", "programming"],
            "categories": ["books", "education"],
        }),
    ]
}

/// Hardcoded profile record for the single-user query.
pub fn user_profile(user_id: &str) -> Value {
    json!({
        "id": user_id,
        "name": "John Doe",
        "email": "john.doe@example.com",
        "username": "johndoe",
        "address": {
            "street": "123 Main St",
            "city": "New York",
            "state": "NY",
            "zip": "10001",
        },
        "tags": [
            {"key": "department", "val": "engineering"},
            {"key": "level", "val": "senior"},
            {"key": "team", "val": "backend"},
        ],
        "active": true,
        "createdAt": Utc::now().to_rfc3339(),
    })
}

/// Hardcoded record for the single-product query.
pub fn product_record(product_id: &str) -> Value {
    json!({
        "id": product_id,
        "name": "Sample Product",
        "description": "This is a sample product from the plugin",
        "price": 29.99,
        "stock": 100,
        "tags": ["sample", "plugin", "demo"],
        "categories": ["electronics", "gadgets"],
    })
}
