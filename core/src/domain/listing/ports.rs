use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, query::entities::QueryDirective,
};

/// Storage collaborator executing a [`QueryDirective`].
///
/// Implementations translate the directive into whatever the backing store
/// understands; this crate only requires that a missing
/// `directive.pagination` means "fetch everything".
#[cfg_attr(test, mockall::automock)]
pub trait ListStore<T: Send + Sync + 'static>: Send + Sync {
    /// Fetch the rows selected by the directive, windowed by its
    /// pagination when present.
    fn fetch_rows(
        &self,
        directive: &QueryDirective,
    ) -> impl Future<Output = Result<Vec<T>, CoreError>> + Send;

    /// Count every row matching the directive's where clauses, ignoring
    /// the page window.
    fn count_rows(
        &self,
        directive: &QueryDirective,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
