//! # querydoc Core
//!
//! Query record types and the fluent builders that produce them.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! **This crate is an internal implementation detail of querydoc.**
//!
//! Users should depend on the main `querydoc` crate instead, which
//! re-exports everything here alongside logging and output helpers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;

pub use error::{Error, Result};
pub use query::{
    Method, Model, Operation, QueryBuilder, QueryRecord, Return, ReturnAction, ReturnClause,
    ReturnSpec, SubQuery, DEFAULT_LIMIT, DEFAULT_OFFSET, QUERY_VERSION,
};
