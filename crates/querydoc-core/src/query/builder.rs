/// Fluent query builder
///
/// A `QueryBuilder` is created by one of the [`Model`](crate::Model) verbs and
/// consumed and returned by every mutator, so a whole query reads as one
/// chain. Nothing is validated: the builder only accumulates fields.
use crate::error::Result;
use crate::query::operation::Operation;
use crate::query::record::{QueryRecord, ReturnClause, ReturnSpec, SubQuery, QUERY_VERSION};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

/// Offset used when `offset` is called without a value
pub const DEFAULT_OFFSET: u64 = 0;
/// Limit used when `limit` is called without a value
pub const DEFAULT_LIMIT: u64 = 10;

/// Accumulates the parameters of one query.
///
/// # Examples
///
/// ```
/// use querydoc_core::Model;
/// use serde_json::json;
///
/// let user = Model::factory("User");
/// let query = user.find().one().filter(json!({"active": true})).returns();
///
/// assert_eq!(
///     query.to_json()?,
///     r#"{"version":1,"method":"find","model":"User","queries":[],"one":true,"where":{"active":true},"return":{"actions":[]}}"#
/// );
/// # Ok::<(), querydoc_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    operation: Operation,
    model: String,
    name: Option<String>,
    queries: Vec<SubQuery>,
    one: bool,
    filter: Option<Value>,
    offset: Option<u64>,
    limit: Option<u64>,
    lets: Option<Map<String, Value>>,
    select: Option<String>,
    returning: Option<ReturnClause>,
}

impl QueryBuilder {
    /// Starts a query for `operation` against `model` with nothing else set.
    pub fn new(model: impl Into<String>, operation: Operation) -> Self {
        Self {
            operation,
            model: model.into(),
            name: None,
            queries: Vec::new(),
            one: false,
            filter: None,
            offset: None,
            limit: None,
            lets: None,
            select: None,
            returning: None,
        }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Names the query so other queries can refer to its result.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the `where` filter, replacing any previous one.
    pub fn filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Skips `offset` results. `None` means [`DEFAULT_OFFSET`].
    pub fn offset(mut self, offset: impl Into<Option<u64>>) -> Self {
        self.offset = Some(offset.into().unwrap_or(DEFAULT_OFFSET));
        self
    }

    /// Caps the result count. `None` means [`DEFAULT_LIMIT`].
    pub fn limit(mut self, limit: impl Into<Option<u64>>) -> Self {
        self.limit = Some(limit.into().unwrap_or(DEFAULT_LIMIT));
        self
    }

    /// Expect a single document rather than a list.
    pub fn one(mut self) -> Self {
        self.one = true;
        self
    }

    /// Binds a variable. Rebinding a key replaces its value but keeps its
    /// original position.
    pub fn let_var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.lets
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the projection. An empty string clears it.
    pub fn select(mut self, projection: impl Into<String>) -> Self {
        let projection = projection.into();
        self.select = if projection.is_empty() {
            None
        } else {
            Some(projection)
        };
        self
    }

    /// Embeds `sub` as an anonymous sub-query.
    ///
    /// The sub-query is captured as it is now; later changes to `sub` are
    /// not seen by this query.
    pub fn query(mut self, sub: &QueryBuilder) -> Self {
        trace!(parent = %self.model, sub = %sub.model, "Embedding sub-query");
        self.queries.push(SubQuery {
            id: None,
            query: sub.to_record(),
        });
        self
    }

    /// Embeds `sub` as a sub-query addressable by `id`.
    pub fn query_as(mut self, id: impl Into<String>, sub: &QueryBuilder) -> Self {
        let id = id.into();
        trace!(parent = %self.model, sub = %sub.model, id = %id, "Embedding sub-query");
        self.queries.push(SubQuery {
            id: Some(id),
            query: sub.to_record(),
        });
        self
    }

    /// Attaches an empty return spec.
    pub fn returns(mut self) -> Self {
        self.returning = Some(ReturnClause::Spec(ReturnSpec::default()));
        self
    }

    /// Attaches a [`Return`](crate::Return), a [`ReturnSpec`], or a plain
    /// JSON value. Empty values (`null`, `false`, `0`, `""`) fall back to an
    /// empty return spec.
    pub fn returning(mut self, clause: impl Into<ReturnClause>) -> Self {
        self.returning = match clause.into() {
            ReturnClause::Value(value) if is_empty_value(&value) => {
                Some(ReturnClause::Spec(ReturnSpec::default()))
            }
            clause => Some(clause),
        };
        self
    }

    /// Resolves the builder into the record it describes.
    pub fn to_record(&self) -> QueryRecord {
        QueryRecord {
            version: QUERY_VERSION,
            method: self.operation.method(),
            model: self.model.clone(),
            name: self.name.clone(),
            data: self.operation.data(),
            queries: self.queries.clone(),
            one: self.one,
            filter: self.filter.clone(),
            offset: self.offset,
            limit: self.limit,
            lets: self.lets.clone(),
            select: self.select.clone(),
            returning: self.returning.clone(),
        }
    }

    /// Serialize the record to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        self.to_record().to_json()
    }

    /// Serialize the record to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.to_record().to_json_pretty()
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl Serialize for QueryBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl From<&QueryBuilder> for QueryRecord {
    fn from(builder: &QueryBuilder) -> Self {
        builder.to_record()
    }
}

impl From<QueryBuilder> for QueryRecord {
    fn from(builder: QueryBuilder) -> Self {
        builder.to_record()
    }
}
