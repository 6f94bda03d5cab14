use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Page metadata computed for a paginated list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationInfo {
    pub total_items: u64,
    pub total_pages: u64,
    pub last_page: u64,
    pub is_last_page: bool,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
    pub is_valid_page: bool,
    pub page: u64,
    pub limit: u64,
}

impl PaginationInfo {
    /// Pure arithmetic over a precomputed total.
    ///
    /// Rejects `limit == 0` instead of dividing by zero; everything else is
    /// derived: `total_pages = ceil(total / limit)`, a page past the end is
    /// flagged `is_last_page` with no `next_page`, and `is_valid_page`
    /// requires `0 < page <= total_pages` (so it is always false for an
    /// empty result set).
    pub fn compute(total_items: u64, page: u64, limit: u64) -> Result<Self, CoreError> {
        if limit == 0 {
            return Err(CoreError::BadRequest(
                "pagination limit must be at least 1".to_string(),
            ));
        }

        let total_pages = total_items.div_ceil(limit);
        let is_last_page = page >= total_pages;

        Ok(Self {
            total_items,
            total_pages,
            last_page: total_pages,
            is_last_page,
            next_page: if is_last_page { None } else { Some(page + 1) },
            prev_page: if page <= 1 { None } else { Some(page - 1) },
            is_valid_page: page > 0 && page <= total_pages,
            page,
            limit,
        })
    }
}

/// Outcome of a list operation.
///
/// Serializes either as the bare rows array (no pagination requested) or as
/// the `{"meta": ..., "data": ...}` wrapper. Every endpoint built on this
/// core honors the same duality.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ListResult<T> {
    All(Vec<T>),
    Paged { meta: PaginationInfo, data: Vec<T> },
}

impl<T> ListResult<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            ListResult::All(rows) => rows,
            ListResult::Paged { data, .. } => data,
        }
    }

    pub fn meta(&self) -> Option<&PaginationInfo> {
        match self {
            ListResult::All(_) => None,
            ListResult::Paged { meta, .. } => Some(meta),
        }
    }
}
