use criterion::{black_box, criterion_group, criterion_main, Criterion};
use querydoc_core::{Model, QueryBuilder, QueryRecord, Return};
use serde_json::json;

fn get_queries() -> Vec<(&'static str, QueryBuilder)> {
    let identity = Model::factory("Identity");
    let user = Model::factory("User");

    let user_query = user
        .update(json!({"firstName": "John"}))
        .one()
        .filter(json!({"_key": "@{^.user}"}))
        .returns();

    vec![
        ("find", user.find().one().filter(json!({"active": true}))),
        (
            "nested",
            identity
                .update(json!({"verified": true, "bogus": true}))
                .one()
                .filter(json!({"_key": "217388"}))
                .name("ident")
                .query_as("user", &user_query)
                .select("name")
                .returning(
                    Return::with_value("ident")
                        .append_as("user", "myUser")
                        .merge("user")
                        .id(None)
                        .computed(None),
                ),
        ),
        (
            "import",
            user.import((0..100).map(|i| json!({"firstName": format!("user{}", i)}))),
        ),
    ]
}

fn bench_serialize(c: &mut Criterion) {
    for (label, query) in get_queries() {
        c.bench_function(format!("serialize {}", label).as_str(), |b| {
            b.iter(|| black_box(&query).to_json().unwrap())
        });
    }
}

fn bench_parse(c: &mut Criterion) {
    for (label, query) in get_queries() {
        let json = query.to_json().unwrap();
        c.bench_function(format!("parse {}", label).as_str(), |b| {
            b.iter(|| QueryRecord::from_json(black_box(&json)).unwrap())
        });
    }
}

criterion_group!(benches, bench_serialize, bench_parse);
criterion_main!(benches);
