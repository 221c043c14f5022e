//! Request context extraction
//!
//! The host engine merges a `_context` object into the raw argument map it
//! passes to resolvers. This module lifts the well-known identifiers out of
//! it; anything missing or malformed degrades to `None`.

use crate::args::{get_object_arg, Record};
use serde_json::Value;

/// Identifiers the host attaches to every resolver invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub plugin_id: Option<String>,
    pub project_id: Option<String>,
    pub user_id: Option<String>,
    pub tenant_id: Option<String>,
    pub request_id: Option<String>,
}

impl RequestContext {
    /// Build a context from the raw argument map.
    ///
    /// Returns an empty context if `_context` is absent or not an object.
    pub fn from_args(args: &Record) -> Self {
        let ctx = get_object_arg(args, "_context");
        Self {
            plugin_id: non_empty(&ctx, "plugin_id"),
            project_id: non_empty(&ctx, "project_id"),
            user_id: non_empty(&ctx, "user_id"),
            tenant_id: non_empty(&ctx, "tenant_id"),
            request_id: non_empty(&ctx, "request_id"),
        }
    }
}

fn non_empty(ctx: &Record, key: &str) -> Option<String> {
    match ctx.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_from_args() {
        let args = match json!({
            "_context": {
                "plugin_id": "demo-plugin",
                "project_id": "proj-1",
                "user_id": "",
                "tenant_id": 17,
            },
            "name": "Ada",
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let ctx = RequestContext::from_args(&args);
        assert_eq!(ctx.plugin_id.as_deref(), Some("demo-plugin"));
        assert_eq!(ctx.project_id.as_deref(), Some("proj-1"));
        // empty and mistyped values degrade to None
        assert_eq!(ctx.user_id, None);
        assert_eq!(ctx.tenant_id, None);
        assert_eq!(ctx.request_id, None);
    }

    #[test]
    fn test_missing_context_is_empty() {
        let args = Record::new();
        assert_eq!(RequestContext::from_args(&args), RequestContext::default());
    }

    #[test]
    fn test_mistyped_context_is_empty() {
        let mut args = Record::new();
        args.insert("_context".into(), json!("not-an-object"));
        assert_eq!(RequestContext::from_args(&args), RequestContext::default());
    }
}
