use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::value_objects::{FilterOperator, OrderDir, SearchMode};

/// Pagination intent carried through from the raw request.
///
/// Both fields are 1-based and already clamped to at least 1 by the
/// normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

/// Ordering specification. Serializes as the single-entry
/// `{"field": "dir"}` map the storage collaborator expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub by: String,
    pub dir: OrderDir,
}

impl Serialize for OrderSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.by, &self.dir)?;
        map.end()
    }
}

/// Search request: one value matched against several fields with one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub value: String,
    pub fields: Vec<String>,
    pub mode: SearchMode,
}

/// Filter request: one value compared against several fields with one
/// operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    pub value: String,
    pub fields: Vec<String>,
    pub operator: FilterOperator,
}

/// Strongly shaped intermediate representation of a list request.
///
/// `pagination`, `search` and `filter` are present iff the corresponding
/// key (`page`, `search_value`, `filter_value`) was present on the raw
/// input; `order` always carries a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub pagination: Option<PageRequest>,
    pub order: OrderSpec,
    pub search: Option<SearchRequest>,
    pub filter: Option<FilterRequest>,
}

impl Default for NormalizedQuery {
    fn default() -> Self {
        Self {
            pagination: None,
            order: OrderSpec {
                by: super::services::DEFAULT_ORDER_FIELD.to_string(),
                dir: OrderDir::Desc,
            },
            search: None,
            filter: None,
        }
    }
}

/// A single field condition. Serializes as the one-key operator object the
/// storage collaborator consumes, e.g. `{"contains": "ferris"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    Contains(String),
    Starts(String),
    Ends(String),
    Gt(String),
    Gte(String),
    Lt(String),
    Lte(String),
    Eq(String),
    Neq(String),
    In(String),
    Nin(String),
}

impl Predicate {
    pub fn from_search(mode: SearchMode, value: String) -> Self {
        match mode {
            SearchMode::Contains => Predicate::Contains(value),
            SearchMode::Starts => Predicate::Starts(value),
            SearchMode::Ends => Predicate::Ends(value),
        }
    }

    pub fn from_filter(operator: FilterOperator, value: String) -> Self {
        match operator {
            FilterOperator::Gt => Predicate::Gt(value),
            FilterOperator::Gte => Predicate::Gte(value),
            FilterOperator::Lt => Predicate::Lt(value),
            FilterOperator::Lte => Predicate::Lte(value),
            FilterOperator::Eq => Predicate::Eq(value),
            FilterOperator::Neq => Predicate::Neq(value),
            FilterOperator::In => Predicate::In(value),
            FilterOperator::Nin => Predicate::Nin(value),
        }
    }
}

/// Condition on a single field of the listed entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub field: String,
    pub predicate: Predicate,
}

/// Ordered list of field conditions.
///
/// At most one clause per field: [`WhereClauses::set`] replaces the
/// predicate of an existing clause in place, keeping its original
/// position. Serializes as a `{"field": {"op": "value"}}` map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClauses(Vec<WhereClause>);

impl WhereClauses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the clause for `field` (last write wins).
    pub fn set(&mut self, field: String, predicate: Predicate) {
        if let Some(existing) = self.0.iter_mut().find(|clause| clause.field == field) {
            existing.predicate = predicate;
        } else {
            self.0.push(WhereClause { field, predicate });
        }
    }

    pub fn get(&self, field: &str) -> Option<&Predicate> {
        self.0
            .iter()
            .find(|clause| clause.field == field)
            .map(|clause| &clause.predicate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WhereClause> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for WhereClauses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for clause in &self.0 {
            map.serialize_entry(&clause.field, &clause.predicate)?;
        }
        map.end()
    }
}

/// Offset/limit window computed from a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: u64,
    pub limit: u64,
    pub skip: u64,
}

impl PageWindow {
    /// The row-count limit under its storage-side name.
    pub fn take(&self) -> u64 {
        self.limit
    }
}

/// Backend-agnostic query directive handed to the storage collaborator.
///
/// `pagination: None` is the "fetch all, no limit" signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryDirective {
    #[serde(rename = "where")]
    pub where_clauses: WhereClauses,
    #[serde(rename = "orderBy")]
    pub order_by: OrderSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageWindow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_predicate_serializes_as_single_key_object() {
        let predicate = Predicate::Contains("ferris".to_string());
        assert_eq!(
            serde_json::to_value(&predicate).unwrap(),
            json!({"contains": "ferris"})
        );

        let predicate = Predicate::Gte("50".to_string());
        assert_eq!(
            serde_json::to_value(&predicate).unwrap(),
            json!({"gte": "50"})
        );
    }

    #[test]
    fn test_where_clauses_overwrite_keeps_position() {
        let mut clauses = WhereClauses::new();
        clauses.set("username".to_string(), Predicate::Contains("fe".to_string()));
        clauses.set("bio".to_string(), Predicate::Contains("fe".to_string()));
        clauses.set("username".to_string(), Predicate::Eq("ferris".to_string()));

        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses.get("username"),
            Some(&Predicate::Eq("ferris".to_string()))
        );
        // overwritten clause stays first
        assert_eq!(clauses.iter().next().unwrap().field, "username");
    }

    #[test]
    fn test_where_clauses_serialize_as_map() {
        let mut clauses = WhereClauses::new();
        clauses.set("content".to_string(), Predicate::Contains("hi".to_string()));
        clauses.set("likes".to_string(), Predicate::Gt("10".to_string()));

        assert_eq!(
            serde_json::to_value(&clauses).unwrap(),
            json!({
                "content": {"contains": "hi"},
                "likes": {"gt": "10"},
            })
        );
    }

    #[test]
    fn test_order_spec_serializes_as_single_entry_map() {
        let order = OrderSpec {
            by: "created_at".to_string(),
            dir: OrderDir::Desc,
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({"created_at": "desc"})
        );
    }

    #[test]
    fn test_directive_serialization_shape() {
        let mut where_clauses = WhereClauses::new();
        where_clauses.set("username".to_string(), Predicate::Starts("fe".to_string()));

        let directive = QueryDirective {
            where_clauses,
            order_by: OrderSpec {
                by: "created_at".to_string(),
                dir: OrderDir::Asc,
            },
            pagination: Some(PageWindow {
                page: 2,
                limit: 10,
                skip: 10,
            }),
        };

        assert_eq!(
            serde_json::to_value(&directive).unwrap(),
            json!({
                "where": {"username": {"starts": "fe"}},
                "orderBy": {"created_at": "asc"},
                "pagination": {"page": 2, "limit": 10, "skip": 10},
            })
        );
    }

    #[test]
    fn test_directive_omits_absent_pagination() {
        let directive = QueryDirective {
            where_clauses: WhereClauses::new(),
            order_by: OrderSpec {
                by: "created_at".to_string(),
                dir: OrderDir::Desc,
            },
            pagination: None,
        };

        let value = serde_json::to_value(&directive).unwrap();
        assert_eq!(value.get("pagination"), None);
        assert_eq!(value.get("where"), Some(&json!({})));
    }
}
