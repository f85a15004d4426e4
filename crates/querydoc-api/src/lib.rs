//! # querydoc
//!
//! A fluent DSL for describing database operations as JSON query documents.
//!
//! querydoc does not talk to a database. It models entities, lets you chain
//! the parameters of an operation onto them, and emits the resulting query
//! record as JSON for an engine elsewhere to execute.
//!
//! ## Quick Start
//!
//! ```rust
//! use querydoc::{Model, Return};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let identity = Model::factory("Identity");
//!     let user = Model::factory("User");
//!
//!     // A query other queries can reference by id
//!     let user_query = user
//!         .update(json!({"firstName": "John"}))
//!         .one()
//!         .filter(json!({"_key": "@{^.user}"}))
//!         .returns();
//!
//!     let query = identity
//!         .update(json!({"verified": true}))
//!         .one()
//!         .filter(json!({"_key": "217388"}))
//!         .name("ident")
//!         .query_as("user", &user_query)
//!         .returning(Return::with_value("ident").append_as("user", "myUser"));
//!
//!     let record = query.to_record();
//!     assert_eq!(record.sub_query("user").map(|q| q.model.as_str()), Some("User"));
//!     println!("{}", query.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! | verb | `data` |
//! |---|---|
//! | `find`, `count` | none, with an empty return spec attached |
//! | `insert`, `update`, `replace` | the document |
//! | `remove` | the optional filter |
//! | `upsert` | `{insert, update}` |
//! | `link`, `link_with`, `unlink` | `{...attributes, from, to}` |
//! | `import` | `{data: items}` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;
pub mod output;

// Re-export core types
pub use querydoc_core::{Error, Result};

// Query construction
pub use querydoc_core::{
    Method, Model, Operation, QueryBuilder, QueryRecord, Return, ReturnAction, ReturnClause,
    ReturnSpec, SubQuery, DEFAULT_LIMIT, DEFAULT_OFFSET, QUERY_VERSION,
};

// Output
pub use output::{write_query, OutputConfig, QueryWriter, DEFAULT_OUTPUT_FILE};

// Version information
/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_record_version_is_stable() {
        assert_eq!(QUERY_VERSION, 1);
        assert_eq!(Model::factory("User").find().to_record().version, QUERY_VERSION);
    }
}
