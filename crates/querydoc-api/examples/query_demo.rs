use querydoc::logging::LogConfig;
use querydoc::{Model, QueryBuilder, QueryWriter, Return};
use serde_json::{json, Map};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = LogConfig::info().init();

    let identity = Model::factory("Identity");
    let user = Model::factory("User");
    let like = Model::factory("Like");

    // Referenced by id from the identity update below
    let user_query = user
        .update(json!({"firstName": "John"}))
        .one()
        .filter(json!({"_key": "@{^.user}"}))
        .returns();

    let mut link_attributes = Map::new();
    link_attributes.insert("more".to_string(), json!("data"));

    let scenarios: Vec<(&str, QueryBuilder)> = vec![
        (
            "update identity, embed user",
            identity
                .update(json!({"verified": true, "bogus": true}))
                .one()
                .filter(json!({"_key": "217388"}))
                .name("ident")
                .query_as("user", &user_query)
                .select("name")
                .returning(
                    identity
                        .return_value("ident")
                        .append_as("user", "myUser")
                        .append_as("user", "myUser2")
                        .merge("user")
                        .id(None)
                        .computed(None),
                ),
        ),
        (
            "insert user, embed identity",
            user.insert(json!({"firstName": "John", "lastName": "Smith"}))
                .query_as(
                    "id1",
                    &identity
                        .update(json!({"provider": "hello", "verified": true}))
                        .filter(json!({"_key": "123"})),
                )
                .returns(),
        ),
        (
            "remove",
            user.remove(None)
                .one()
                .filter(json!({"active": true}))
                .returns(),
        ),
        (
            "find",
            user.find().one().filter(json!({"active": true})).returns(),
        ),
        ("count", user.count().filter(json!({"active": true})).returns()),
        (
            "upsert",
            user.upsert(
                json!({"name": "user", "firstName": "John"}),
                json!({"lastName": "Smith"}),
            )
            .one()
            .filter(json!({"name": "user"}))
            .returns(),
        ),
        (
            "bound variables",
            user.find()
                .one()
                .let_var("num", 1)
                .let_var("str", "Hello")
                .let_var("bool", true)
                .let_var("arr", json!([1, "two", true]))
                .let_var("obj", json!({"foo": "bar"}))
                .returning(
                    Return::new()
                        .append_as("num", "num1")
                        .append("bool")
                        .merge("arr")
                        .id(None)
                        .computed(None),
                ),
        ),
        (
            "import",
            user.import(vec![
                json!({"firstName": "Jane", "lastName": "Doe"}),
                json!({"firstName": "Fred", "lastName": "Flintstone"}),
            ]),
        ),
        ("link", like.link_with("a", "b", link_attributes)),
    ];

    println!("=== querydoc Query Demo ===\n");

    let writer = QueryWriter::new();
    for (label, query) in &scenarios {
        println!("{}:\n{}\n", label, writer.render(query)?);
    }

    // Only the first scenario ends up on disk
    let (label, query) = &scenarios[0];
    let path = writer.write(query)?;
    println!("Wrote '{}' to {}", label, path.display());

    Ok(())
}
