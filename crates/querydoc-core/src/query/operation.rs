/// Operation verbs and the payload each one carries
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

/// The verb of a query, as written into the record's `method` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Find,
    Insert,
    Update,
    Replace,
    Remove,
    Count,
    Upsert,
    Link,
    Unlink,
    Import,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Find => "find",
            Method::Insert => "insert",
            Method::Update => "update",
            Method::Replace => "replace",
            Method::Remove => "remove",
            Method::Count => "count",
            Method::Upsert => "upsert",
            Method::Link => "link",
            Method::Unlink => "unlink",
            Method::Import => "import",
        }
    }

    /// Reads get an empty return spec attached as soon as they are created.
    pub fn returns_by_default(&self) -> bool {
        matches!(self, Method::Find | Method::Count)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb together with its payload
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Find,
    Insert(Value),
    Update(Value),
    Replace(Value),
    /// Remove matching documents; the filter is optional
    Remove(Option<Value>),
    Count,
    Upsert {
        insert: Value,
        update: Value,
    },
    /// Create an edge; `attributes` are stored alongside `from`/`to`
    Link {
        from: Value,
        to: Value,
        attributes: Map<String, Value>,
    },
    Unlink {
        from: Value,
        to: Value,
    },
    /// Bulk load. Only the `{data: items}` shape is defined so far.
    Import(Vec<Value>),
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::Find => Method::Find,
            Operation::Insert(_) => Method::Insert,
            Operation::Update(_) => Method::Update,
            Operation::Replace(_) => Method::Replace,
            Operation::Remove(_) => Method::Remove,
            Operation::Count => Method::Count,
            Operation::Upsert { .. } => Method::Upsert,
            Operation::Link { .. } => Method::Link,
            Operation::Unlink { .. } => Method::Unlink,
            Operation::Import(_) => Method::Import,
        }
    }

    /// The record's `data` field for this operation, if it has one.
    pub fn data(&self) -> Option<Value> {
        match self {
            Operation::Find | Operation::Count => None,
            Operation::Insert(data) | Operation::Update(data) | Operation::Replace(data) => {
                Some(data.clone())
            }
            Operation::Remove(filter) => filter.clone(),
            Operation::Upsert { insert, update } => Some(json!({
                "insert": insert,
                "update": update,
            })),
            Operation::Link {
                from,
                to,
                attributes,
            } => {
                // endpoints overwrite same-named attributes in place
                let mut data = attributes.clone();
                data.insert("from".to_string(), from.clone());
                data.insert("to".to_string(), to.clone());
                Some(Value::Object(data))
            }
            Operation::Unlink { from, to } => Some(json!({
                "from": from,
                "to": to,
            })),
            Operation::Import(items) => Some(json!({ "data": items })),
        }
    }
}
