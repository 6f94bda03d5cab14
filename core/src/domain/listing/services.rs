use crate::domain::{
    common::entities::app_errors::CoreError,
    listing::{
        entities::{ListResult, PaginationInfo},
        ports::ListStore,
    },
    query::{build_directive, normalize, value_objects::ListQueryInput},
};

/// Run a full list operation against a store.
///
/// Normalizes the raw parameters and hands the resulting directive to the
/// store. When pagination was requested it also counts the matching rows
/// and attaches page metadata. Without a `page` key the caller gets the
/// bare rows back.
pub async fn run_list<T, S>(
    store: &S,
    input: Option<ListQueryInput>,
) -> Result<ListResult<T>, CoreError>
where
    T: Send + Sync + 'static,
    S: ListStore<T>,
{
    let query = normalize(input);
    let directive = build_directive(&query);

    tracing::debug!(
        clauses = directive.where_clauses.len(),
        paginated = directive.pagination.is_some(),
        order_by = %directive.order_by.by,
        "executing list directive"
    );

    let rows = store.fetch_rows(&directive).await?;

    match directive.pagination {
        None => Ok(ListResult::All(rows)),
        Some(window) => {
            let total = store.count_rows(&directive).await?;
            let meta = PaginationInfo::compute(total, window.page, window.limit)?;
            Ok(ListResult::Paged { meta, data: rows })
        }
    }
}
