/// Query construction module
///
/// Entity models, fluent builders, and the JSON records they emit.
/// Fluent query builder
pub mod builder;
/// Entity model handles
pub mod model;
/// Operation verbs and their payloads
#[allow(missing_docs)]
pub mod operation;
/// Serializable query record types
#[allow(missing_docs)]
pub mod record;
/// Result-shaping builder
#[allow(missing_docs)]
pub mod returning;

// Re-export main types
pub use builder::{QueryBuilder, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use model::Model;
pub use operation::{Method, Operation};
pub use record::{QueryRecord, ReturnAction, ReturnClause, ReturnSpec, SubQuery, QUERY_VERSION};
pub use returning::Return;
