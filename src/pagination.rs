//! Offset/limit and page/pageSize pagination
//!
//! Two stateless strategies over an already-filtered collection. The
//! offset/limit mode returns a bare slice; only the page/pageSize mode
//! derives [`PageStats`]. The external response schema for the offset
//! path carries items only, so no totals are computed there.

use async_graphql::SimpleObject;
use serde::Serialize;
use serde_json::Value;

/// Paging metadata for the page/pageSize strategy.
#[derive(SimpleObject, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageStats {
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One page of records plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Value>,
    pub stats: PageStats,
}

/// Slice a collection by absolute skip count and max count.
///
/// Out-of-range parameters clamp; negative values are treated as zero.
pub fn slice_offset_limit(records: Vec<Value>, offset: i64, limit: i64) -> Vec<Value> {
    records
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

/// Window a collection by 1-based page index and page size.
///
/// `page < 1` and `page_size < 1` clamp to 1. A page past the end yields
/// empty items but still reports the full metadata.
pub fn paginate(records: Vec<Value>, page: i64, page_size: i64) -> Page {
    let current_page = page.max(1);
    let page_size = page_size.max(1);
    let total_count = records.len() as i64;
    let total_pages = (total_count as u64).div_ceil(page_size as u64) as i64;
    let offset = current_page.saturating_sub(1).saturating_mul(page_size);

    let items = if offset >= total_count {
        Vec::new()
    } else {
        records
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .collect()
    };

    Page {
        items,
        stats: PageStats {
            total_count,
            page_size,
            current_page,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(n: usize) -> Vec<Value> {
        (1..=n).map(|i| json!({"id": i.to_string()})).collect()
    }

    #[test]
    fn test_offset_limit_basic() {
        let sliced = slice_offset_limit(records(3), 0, 10);
        assert_eq!(sliced.len(), 3);
        assert_eq!(sliced[0]["id"], "1");
    }

    #[test]
    fn test_offset_limit_never_exceeds_limit_or_end() {
        assert_eq!(slice_offset_limit(records(10), 4, 3).len(), 3);
        assert_eq!(slice_offset_limit(records(3), 2, 10).len(), 1);
        assert!(slice_offset_limit(records(3), 5, 10).is_empty());
        assert!(slice_offset_limit(records(3), 0, 0).is_empty());
    }

    #[test]
    fn test_offset_limit_negative_params_clamp() {
        assert_eq!(slice_offset_limit(records(3), -2, 2).len(), 2);
        assert!(slice_offset_limit(records(3), 0, -1).is_empty());
    }

    #[test]
    fn test_first_page_holds_everything() {
        let page = paginate(records(3), 1, 5);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.stats.total_count, 3);
        assert_eq!(page.stats.total_pages, 1);
        assert!(!page.stats.has_next_page);
        assert!(!page.stats.has_previous_page);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(records(3), 2, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0]["id"], "3");
        assert_eq!(page.stats.total_pages, 2);
        assert!(!page.stats.has_next_page);
        assert!(page.stats.has_previous_page);
    }

    #[test]
    fn test_middle_page_flags() {
        let page = paginate(records(10), 2, 3);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0]["id"], "4");
        assert_eq!(page.stats.total_pages, 4);
        assert!(page.stats.has_next_page);
        assert!(page.stats.has_previous_page);
    }

    #[test]
    fn test_page_past_end_is_empty_with_metadata() {
        let page = paginate(records(3), 9, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.stats.total_count, 3);
        assert_eq!(page.stats.total_pages, 2);
        assert!(!page.stats.has_next_page);
        assert!(page.stats.has_previous_page);
    }

    #[test]
    fn test_invalid_page_size_clamps_to_one() {
        let page = paginate(records(3), 1, 0);
        assert_eq!(page.stats.page_size, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.stats.total_pages, 3);
    }

    #[test]
    fn test_invalid_page_clamps_to_one() {
        let page = paginate(records(3), 0, 2);
        assert_eq!(page.stats.current_page, 1);
        assert!(!page.stats.has_previous_page);
    }

    #[test]
    fn test_empty_collection() {
        let page = paginate(Vec::new(), 1, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.stats.total_pages, 0);
        assert!(!page.stats.has_next_page);
        assert!(!page.stats.has_previous_page);
    }

    #[test]
    fn test_extreme_page_size_does_not_overflow() {
        let page = paginate(records(3), 1, i64::MAX);
        assert_eq!(page.stats.total_pages, 1);
        assert_eq!(page.items.len(), 3);
        assert!(!page.stats.has_next_page);

        let page = paginate(records(3), i64::MAX, i64::MAX);
        assert!(page.items.is_empty());
        assert_eq!(page.stats.total_count, 3);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for (n, size, expected) in [(3, 2, 2), (4, 2, 2), (5, 2, 3), (1, 5, 1)] {
            let page = paginate(records(n), 1, size);
            assert_eq!(page.stats.total_pages, expected, "n={n} size={size}");
        }
    }
}
