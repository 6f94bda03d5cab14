use std::str::FromStr;

use super::entities::{
    FilterRequest, NormalizedQuery, OrderSpec, PageRequest, PageWindow, Predicate, QueryDirective,
    SearchRequest, WhereClauses,
};
use super::value_objects::ListQueryInput;

pub const DEFAULT_ORDER_FIELD: &str = "created_at";
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;

/// Turn raw list-request parameters into a [`NormalizedQuery`].
///
/// Never fails: unparsable numbers and unknown enum values degrade to the
/// documented defaults. The pagination block is emitted whenever the `page`
/// key is present at all; absence of the key, not failure to parse, is
/// what suppresses pagination.
pub fn normalize(input: Option<ListQueryInput>) -> NormalizedQuery {
    let Some(input) = input else {
        return NormalizedQuery::default();
    };

    let pagination = input.page.as_deref().map(|raw_page| PageRequest {
        page: parse_positive(raw_page, DEFAULT_PAGE),
        limit: input
            .limit
            .as_deref()
            .map_or(DEFAULT_LIMIT, |raw| parse_positive(raw, DEFAULT_LIMIT)),
    });

    let search = input.search_value.as_deref().map(|value| SearchRequest {
        value: value.trim().to_string(),
        fields: split_fields(input.search_fields.as_deref()),
        mode: parse_enum(input.search_type.as_deref()),
    });

    let filter = input.filter_value.as_deref().map(|value| FilterRequest {
        value: value.trim().to_string(),
        fields: split_fields(input.filter_fields.as_deref()),
        operator: parse_enum(input.filter_operator.as_deref()),
    });

    let order = OrderSpec {
        by: input
            .order_by
            .unwrap_or_else(|| DEFAULT_ORDER_FIELD.to_string()),
        dir: parse_enum(input.order_dir.as_deref()),
    };

    NormalizedQuery {
        pagination,
        order,
        search,
        filter,
    }
}

/// Build the storage directive for a normalized query.
///
/// Search clauses are merged first, filter clauses second; a field named by
/// both ends up with only the filter condition (last write wins). `skip` is
/// `(page - 1) * limit` with saturating arithmetic, so neither a zero page
/// nor a huge page can panic.
pub fn build_directive(query: &NormalizedQuery) -> QueryDirective {
    let mut where_clauses = WhereClauses::new();

    if let Some(search) = &query.search {
        for field in &search.fields {
            where_clauses.set(
                field.clone(),
                Predicate::from_search(search.mode, search.value.clone()),
            );
        }
    }

    if let Some(filter) = &query.filter {
        for field in &filter.fields {
            where_clauses.set(
                field.clone(),
                Predicate::from_filter(filter.operator, filter.value.clone()),
            );
        }
    }

    let pagination = query.pagination.map(|request| PageWindow {
        page: request.page,
        limit: request.limit,
        skip: request.page.saturating_sub(1).saturating_mul(request.limit),
    });

    QueryDirective {
        where_clauses,
        order_by: query.order.clone(),
        pagination,
    }
}

/// Parse a 1-based count, falling back on anything that is not a positive
/// integer.
fn parse_positive(raw: &str, fallback: u64) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => fallback,
        Ok(n) => n,
    }
}

/// Comma-split without trimming the individual names; downstream consumers
/// must tolerate literal empty-string fields from malformed input.
fn split_fields(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::to_string)
        .collect()
}

fn parse_enum<E: FromStr + Default>(raw: Option<&str>) -> E {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}
