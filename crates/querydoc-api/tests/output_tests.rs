use querydoc::{Model, OutputConfig, QueryRecord, QueryWriter, Return};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Writer pointed at `query.json` inside a fresh temp dir
struct OutputFixture {
    #[allow(dead_code)]
    temp_dir: TempDir,
    writer: QueryWriter,
}

impl OutputFixture {
    fn new(config: OutputConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("query.json");
        Self {
            writer: QueryWriter::with_config(config.with_path(path)),
            temp_dir,
        }
    }

    fn read(&self) -> String {
        fs::read_to_string(&self.writer.config().path).expect("Failed to read query file")
    }
}

#[test]
fn test_written_file_matches_serialized_query() {
    let fixture = OutputFixture::new(OutputConfig::default());
    let query = Model::factory("User")
        .find()
        .one()
        .filter(json!({"active": true}))
        .returns();

    let path = fixture.writer.write(&query).unwrap();
    assert_eq!(path, fixture.writer.config().path);
    assert_eq!(fixture.read(), query.to_json().unwrap());
}

#[test]
fn test_each_write_replaces_previous_query() {
    let fixture = OutputFixture::new(OutputConfig::default().with_echo(false));
    let user = Model::factory("User");

    fixture
        .writer
        .write(&user.insert(json!({"firstName": "John", "lastName": "Smith"})))
        .unwrap();
    fixture.writer.write(&user.count()).unwrap();

    let record = QueryRecord::from_json(&fixture.read()).unwrap();
    assert_eq!(record, user.count().to_record());
}

#[test]
fn test_pretty_output_parses_to_same_record() {
    let fixture = OutputFixture::new(OutputConfig::default().with_pretty(true));
    let query = Model::factory("Identity")
        .update(json!({"verified": true}))
        .returning(Return::with_value("ident").id(None));

    fixture.writer.write(&query).unwrap();
    let written = fixture.read();

    assert!(written.contains("\n  \"method\": \"update\""));
    assert_eq!(QueryRecord::from_json(&written).unwrap(), query.to_record());
}

#[test]
fn test_records_can_be_written_directly() {
    let fixture = OutputFixture::new(OutputConfig::default());
    let record = Model::factory("Like").link("a", "b").to_record();

    fixture.writer.write(&record).unwrap();
    assert_eq!(fixture.read(), record.to_json().unwrap());
}

#[test]
fn test_serialization_failure_keeps_previous_file() {
    use querydoc::Error;
    use std::collections::HashMap;

    let fixture = OutputFixture::new(OutputConfig::default());
    let query = Model::factory("User").count();
    fixture.writer.write(&query).unwrap();

    // tuple keys cannot become JSON object keys
    let mut unserializable: HashMap<(i32, i32), i32> = HashMap::new();
    unserializable.insert((1, 2), 3);

    let err = fixture.writer.write(&unserializable).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    assert_eq!(fixture.read(), query.to_json().unwrap());
}
