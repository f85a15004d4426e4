/// Entity model handles
///
/// A `Model` stands for one entity type (a collection or edge kind) and is
/// the entry point for every query against it.
use crate::query::builder::QueryBuilder;
use crate::query::operation::Operation;
use crate::query::returning::Return;
use serde_json::{Map, Value};
use tracing::debug;

/// A named entity type.
///
/// # Examples
///
/// ```
/// use querydoc_core::{Method, Model};
/// use serde_json::json;
///
/// let like = Model::factory("Like");
/// let record = like
///     .link_with("a", "b", json!({"more": "data"}).as_object().cloned().unwrap_or_default())
///     .to_record();
///
/// assert_eq!(record.method, Method::Link);
/// assert_eq!(record.data, Some(json!({"more": "data", "from": "a", "to": "b"})));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model {
    name: String,
}

impl Model {
    /// Creates a model handle tagged with `name`.
    pub fn factory(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(model = %name, "Defining model");
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn builder(&self, operation: Operation) -> QueryBuilder {
        debug!(model = %self.name, method = %operation.method(), "Starting query");
        let returns_by_default = operation.method().returns_by_default();
        let builder = QueryBuilder::new(self.name.clone(), operation);
        if returns_by_default {
            builder.returns()
        } else {
            builder
        }
    }

    /// A return spec with its value set, for use with
    /// [`QueryBuilder::returning`].
    pub fn return_value(&self, value: impl Into<Value>) -> Return {
        Return::with_value(value)
    }

    /// Read documents. Comes with an empty return spec attached.
    pub fn find(&self) -> QueryBuilder {
        self.builder(Operation::Find)
    }

    pub fn insert(&self, data: impl Into<Value>) -> QueryBuilder {
        self.builder(Operation::Insert(data.into()))
    }

    pub fn update(&self, data: impl Into<Value>) -> QueryBuilder {
        self.builder(Operation::Update(data.into()))
    }

    pub fn replace(&self, data: impl Into<Value>) -> QueryBuilder {
        self.builder(Operation::Replace(data.into()))
    }

    /// Delete documents. `filter`, when given, becomes the record's `data`;
    /// matching is otherwise left to [`QueryBuilder::filter`].
    pub fn remove(&self, filter: Option<Value>) -> QueryBuilder {
        self.builder(Operation::Remove(filter))
    }

    /// Count documents. Comes with an empty return spec attached.
    pub fn count(&self) -> QueryBuilder {
        self.builder(Operation::Count)
    }

    /// Insert `insert` if nothing matches, otherwise apply `update`.
    pub fn upsert(&self, insert: impl Into<Value>, update: impl Into<Value>) -> QueryBuilder {
        self.builder(Operation::Upsert {
            insert: insert.into(),
            update: update.into(),
        })
    }

    /// Create an edge between `from` and `to`.
    pub fn link(&self, from: impl Into<Value>, to: impl Into<Value>) -> QueryBuilder {
        self.link_with(from, to, Map::new())
    }

    /// Create an edge carrying extra `attributes`.
    pub fn link_with(
        &self,
        from: impl Into<Value>,
        to: impl Into<Value>,
        attributes: Map<String, Value>,
    ) -> QueryBuilder {
        self.builder(Operation::Link {
            from: from.into(),
            to: to.into(),
            attributes,
        })
    }

    /// Remove the edge between `from` and `to`.
    pub fn unlink(&self, from: impl Into<Value>, to: impl Into<Value>) -> QueryBuilder {
        self.builder(Operation::Unlink {
            from: from.into(),
            to: to.into(),
        })
    }

    /// Bulk load `items`.
    // TODO: nested item parsing; only the `{data: items}` envelope exists yet
    pub fn import<I, T>(&self, items: I) -> QueryBuilder
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.builder(Operation::Import(
            items.into_iter().map(Into::into).collect(),
        ))
    }
}
