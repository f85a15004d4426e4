/// Serializable query record types
///
/// These are the plain data structures a builder chain resolves to. Field
/// order here is the key order of the emitted JSON.
use crate::error::Result;
use crate::query::operation::Method;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Record format version stamped on every query.
pub const QUERY_VERSION: u32 = 1;

/// A complete query record describing one database operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub version: u32,
    pub method: Method,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Value>,
    #[serde(default)]
    pub queries: Vec<SubQuery>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub one: bool,
    #[serde(
        rename = "where",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lets: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub returning: Option<ReturnClause>,
}

/// A nested query embedded in its parent, optionally under an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub query: QueryRecord,
}

/// What a query hands back: either a return spec or an arbitrary value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReturnClause {
    Spec(ReturnSpec),
    Value(Value),
}

/// Result-shaping options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReturnSpec {
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<bool>,
    pub actions: Vec<ReturnAction>,
}

/// How a referenced sub-result is folded into the returned value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ReturnAction {
    /// Attach the target's result, optionally under another key
    Append {
        target: String,
        #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    /// Merge the target's fields into the result
    Merge { target: String },
}

impl QueryRecord {
    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record previously emitted by [`QueryRecord::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a sub-query by its id.
    pub fn sub_query(&self, id: &str) -> Option<&QueryRecord> {
        self.queries
            .iter()
            .find(|q| q.id.as_deref() == Some(id))
            .map(|q| &q.query)
    }
}

impl From<ReturnSpec> for ReturnClause {
    fn from(spec: ReturnSpec) -> Self {
        ReturnClause::Spec(spec)
    }
}

impl From<Value> for ReturnClause {
    /// A value shaped like a return spec becomes one, the same way the
    /// parser reads it back.
    fn from(value: Value) -> Self {
        match ReturnSpec::deserialize(&value) {
            Ok(spec) => ReturnClause::Spec(spec),
            Err(_) => ReturnClause::Value(value),
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// A field that is present is kept, even when it holds `null`.
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
