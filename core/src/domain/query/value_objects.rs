use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw list-request parameters as they arrive on the query string.
///
/// Every field is optional and string-typed; unknown keys are ignored.
/// Nothing here is validated: [`crate::domain::query::normalize`] turns
/// this into a [`crate::domain::query::NormalizedQuery`] with best-effort
/// defaults and never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, ToSchema)]
pub struct ListQueryInput {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub order_by: Option<String>,
    pub order_dir: Option<String>,
    pub search_value: Option<String>,
    pub search_fields: Option<String>,
    pub search_type: Option<String>,
    pub filter_value: Option<String>,
    pub filter_fields: Option<String>,
    pub filter_operator: Option<String>,
}

impl ListQueryInput {
    /// Build from an already-decoded flat query map, keeping only the keys
    /// this core understands.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let take = |key: &str| query_map.get(key).cloned();

        Self {
            page: take("page"),
            limit: take("limit"),
            order_by: take("order_by"),
            order_dir: take("order_dir"),
            search_value: take("search_value"),
            search_fields: take("search_fields"),
            search_type: take("search_type"),
            filter_value: take("filter_value"),
            filter_fields: take("filter_fields"),
            filter_operator: take("filter_operator"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderDir {
    Asc,
    #[default]
    Desc,
}

impl FromStr for OrderDir {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(OrderDir::Asc),
            "desc" => Ok(OrderDir::Desc),
            _ => Err(()),
        }
    }
}

/// Substring matching mode for search conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Contains,
    Starts,
    Ends,
}

impl FromStr for SearchMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(SearchMode::Contains),
            "starts" => Ok(SearchMode::Starts),
            "ends" => Ok(SearchMode::Ends),
            _ => Err(()),
        }
    }
}

/// Comparison operator for filter conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Gt,
    Gte,
    Lt,
    Lte,
    #[default]
    Eq,
    Neq,
    In,
    Nin,
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "eq" => Ok(FilterOperator::Eq),
            "neq" => Ok(FilterOperator::Neq),
            "in" => Ok(FilterOperator::In),
            "nin" => Ok(FilterOperator::Nin),
            _ => Err(()),
        }
    }
}
