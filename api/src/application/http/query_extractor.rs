use axum::{extract::FromRequestParts, http::request::Parts, response::Response};

use murmur_core::domain::query::value_objects::ListQueryInput;

/// Extractor for list-request query parameters (pagination, ordering,
/// search, filter).
///
/// Usage:
/// ```ignore
/// async fn handler(
///     ListQueryExtractor(input): ListQueryExtractor,
/// ) -> Result<Response<ListResult<Post>>, ApiError> {
///     // hand `input` to murmur_core::domain::listing::run_list
/// }
/// ```
///
/// Never rejects: an unreadable query string yields an empty input, which
/// normalizes to the default ordering with no pagination.
#[derive(Debug, Clone)]
pub struct ListQueryExtractor(pub ListQueryInput);

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let input: ListQueryInput =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(ListQueryExtractor(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> ListQueryInput {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        let ListQueryExtractor(input) = ListQueryExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        input
    }

    #[tokio::test]
    async fn test_extracts_known_parameters() {
        let input = extract(
            "/posts?page=2&limit=10&order_by=username&order_dir=asc&search_value=fe&search_fields=username,bio",
        )
        .await;

        assert_eq!(input.page.as_deref(), Some("2"));
        assert_eq!(input.limit.as_deref(), Some("10"));
        assert_eq!(input.order_by.as_deref(), Some("username"));
        assert_eq!(input.order_dir.as_deref(), Some("asc"));
        assert_eq!(input.search_value.as_deref(), Some("fe"));
        assert_eq!(input.search_fields.as_deref(), Some("username,bio"));
    }

    #[tokio::test]
    async fn test_ignores_passthrough_keys() {
        let input = extract("/posts?page=1&tab=trending&draft=true").await;
        assert_eq!(input.page.as_deref(), Some("1"));
        assert!(input.filter_value.is_none());
    }

    #[tokio::test]
    async fn test_empty_query_string_yields_default_input() {
        let input = extract("/posts").await;
        assert!(input.page.is_none());
        assert!(input.search_value.is_none());
        assert!(input.order_by.is_none());
    }
}
