//! Writing query documents to disk
//!
//! A query is written as a single JSON document, replacing whatever the
//! target file held before.

use querydoc_core::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File a query lands in when no path is configured
pub const DEFAULT_OUTPUT_FILE: &str = "query.json";

/// Output configuration options
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Destination file, truncated on every write
    pub path: PathBuf,
    /// Indent the written JSON
    pub pretty: bool,
    /// Log the query at info level after writing it
    pub echo: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            pretty: false,
            echo: true,
        }
    }
}

impl OutputConfig {
    /// Write to `path` instead of `query.json`
    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = path.into();
        self
    }

    /// Indent the written JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Toggle the info-level echo
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

/// Serializes queries and writes them to the configured file.
///
/// # Examples
///
/// ```rust,no_run
/// use querydoc::{Model, QueryWriter};
/// use serde_json::json;
///
/// let user = Model::factory("User");
/// let query = user.count().filter(json!({"active": true}));
///
/// let path = QueryWriter::new().write(&query)?;
/// assert!(path.ends_with("query.json"));
/// # Ok::<(), querydoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryWriter {
    config: OutputConfig,
}

impl QueryWriter {
    /// A writer targeting `query.json` in the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer with custom configuration
    pub fn with_config(config: OutputConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Serialize `query` the way [`QueryWriter::write`] would, without
    /// touching the filesystem.
    pub fn render<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(query)?
        } else {
            serde_json::to_string(query)?
        };
        Ok(json)
    }

    /// Serialize `query` and overwrite the output file with it.
    ///
    /// Serialization happens before the file is opened, so a query that
    /// cannot be serialized leaves the previous file untouched.
    pub fn write<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<PathBuf> {
        let json = self.render(query)?;
        let path = &self.config.path;

        debug!(path = %path.display(), bytes = json.len(), "Writing query");
        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(json.as_bytes())?;
        file.flush()?;

        if self.config.echo {
            let shown = if self.config.pretty {
                json
            } else {
                serde_json::to_string_pretty(query)?
            };
            info!(path = %path.display(), "Query written\n{}", shown);
        }

        Ok(path.clone())
    }
}

/// Writes `query` to `path` with default settings.
pub fn write_query<Q: Serialize + ?Sized, P: AsRef<Path>>(query: &Q, path: P) -> Result<PathBuf> {
    QueryWriter::with_config(OutputConfig::default().with_path(path.as_ref())).write(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use querydoc_core::Model;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.path, PathBuf::from("query.json"));
        assert!(!config.pretty);
        assert!(config.echo);
    }

    #[test]
    fn test_render_respects_pretty() {
        let query = Model::factory("User").count();
        let compact = QueryWriter::new().render(&query).unwrap();
        let pretty = QueryWriter::with_config(OutputConfig::default().with_pretty(true))
            .render(&query)
            .unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn test_write_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.json");
        let user = Model::factory("User");

        let long = user.import((0..50).map(|i| json!({ "n": i })));
        write_query(&long, &path).unwrap();
        let short = user.find();
        write_query(&short, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, short.to_json().unwrap());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("query.json");
        let err = write_query(&Model::factory("User").find(), &path).unwrap_err();
        assert!(matches!(err, querydoc_core::Error::Io(_)));
    }
}
