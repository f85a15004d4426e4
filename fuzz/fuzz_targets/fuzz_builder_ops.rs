#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use querydoc::{Model, QueryRecord, Return};
use serde_json::{json, Map};

#[derive(Arbitrary, Debug)]
enum BuilderOp {
    Name(String),
    Filter(String),
    Offset(Option<u64>),
    Limit(Option<u64>),
    One,
    Let { key: String, value: i64 },
    Select(String),
    SubQuery { id: Option<String> },
    Returns,
    Append { target: String, alias: Option<String> },
    Merge(String),
}

fuzz_target!(|ops: Vec<BuilderOp>| {
    let user = Model::factory("User");
    let mut query = user.find();
    let mut ret = Return::new();

    // Limit operations to prevent timeout
    for op in ops.into_iter().take(64) {
        query = match op {
            BuilderOp::Name(name) => query.name(name),
            BuilderOp::Filter(key) => {
                let mut filter = Map::new();
                filter.insert(key, json!(true));
                query.filter(filter)
            }
            BuilderOp::Offset(n) => query.offset(n),
            BuilderOp::Limit(n) => query.limit(n),
            BuilderOp::One => query.one(),
            BuilderOp::Let { key, value } => query.let_var(key, value),
            BuilderOp::Select(projection) => query.select(projection),
            BuilderOp::SubQuery { id: Some(id) } => query.query_as(id, &user.count()),
            BuilderOp::SubQuery { id: None } => query.query(&user.count()),
            BuilderOp::Returns => query.returns(),
            BuilderOp::Append {
                target,
                alias: Some(alias),
            } => {
                ret = ret.append_as(target, alias);
                query
            }
            BuilderOp::Append {
                target,
                alias: None,
            } => {
                ret = ret.append(target);
                query
            }
            BuilderOp::Merge(target) => {
                ret = ret.merge(target);
                query
            }
        };
    }

    let query = query.returning(ret);
    if let Ok(json) = query.to_json() {
        let record = QueryRecord::from_json(&json);
        assert!(matches!(record, Ok(ref r) if *r == query.to_record()));
    }
});
