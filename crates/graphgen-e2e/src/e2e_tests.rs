use graphgen_runtime::{
    Context, Error, ExecutionContext, Field, Fragment, Int, Response, Selection,
};
use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::broken_schema;
use crate::generated::{self, Resolvers};
use crate::model::{Character, Droid, Human, Todo, TodoInput};

type Exec = fn(&mut ExecutionContext<'_, dyn Resolvers>, &[Selection]);

struct Store {
    todos: Vec<Todo>,
    hero: Option<Character>,
    recent: Option<Vec<String>>,
}

impl Store {
    fn new() -> Self {
        Self {
            todos: vec![todo("t1", "write tests", &["dev"]), todo("t2", "ship", &[])],
            hero: None,
            recent: None,
        }
    }

    fn with_hero(hero: Character) -> Self {
        Self {
            hero: Some(hero),
            ..Self::new()
        }
    }
}

fn todo(id: &str, text: &str, labels: &[&str]) -> Todo {
    Todo {
        id: id.to_string(),
        text: text.to_string(),
        done: false,
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

#[allow(non_snake_case)]
impl Resolvers for Store {
    fn Query_todos(&self, _ctx: &Context, first: Option<Int>) -> Result<Vec<Todo>, Error> {
        let limit = first.map_or(self.todos.len(), |n| n as usize);
        Ok(self.todos.iter().take(limit).cloned().collect())
    }

    fn Query_hero(&self, _ctx: &Context) -> Result<Option<Character>, Error> {
        Ok(self.hero.clone())
    }

    fn Query_recent(&self, _ctx: &Context) -> Result<Option<Vec<String>>, Error> {
        Ok(self.recent.clone())
    }

    fn Query_matrix(&self, _ctx: &Context) -> Vec<Option<Vec<Int>>> {
        vec![Some(vec![1, 2]), None, Some(vec![])]
    }

    fn Mutation_addTodo(&self, _ctx: &Context, input: TodoInput) -> Result<Todo, Error> {
        Ok(Todo {
            id: "t3".to_string(),
            text: input.text,
            done: input.done,
            labels: vec![],
        })
    }

    fn Todo_text(&self, _ctx: &Context, it: &Todo) -> Result<String, Error> {
        if it.id == "t2" {
            return Err("text unavailable".into());
        }
        Ok(it.text.clone())
    }
}

fn execute(store: &Store, exec: Exec, sel: Vec<Selection>) -> Response {
    execute_with(store, exec, sel, IndexMap::new())
}

fn execute_with(
    store: &Store,
    exec: Exec,
    sel: Vec<Selection>,
    fragments: IndexMap<String, Fragment>,
) -> Response {
    let mut ec = ExecutionContext::<dyn Resolvers>::new(Context::default(), store)
        .with_fragments(fragments);
    exec(&mut ec, &sel);
    ec.finish()
}

fn data(response: &Response) -> Value {
    response.data_value().unwrap()
}

fn field(name: &str, sub: &[&str]) -> Selection {
    Field::new(name)
        .select(sub.iter().map(|s| Field::new(*s).into()).collect())
        .into()
}

#[test]
fn todo_list_reports_failed_field_and_continues() {
    let response = execute(
        &Store::new(),
        generated::exec_query,
        vec![field("todos", &["id", "text"])],
    );

    assert_eq!(
        data(&response),
        json!({
            "todos": [
                { "id": "t1", "text": "write tests" },
                { "id": "t2", "text": null }
            ]
        })
    );
    assert_eq!(response.errors, vec![Error::new("text unavailable")]);
}

#[test]
fn aliases_and_basic_arguments() {
    let sel = vec![
        Field::new("todos")
            .alias("first")
            .arg("first", json!(1))
            .select(vec![Field::new("id").alias("key").into()])
            .into(),
    ];

    let response = execute(&Store::new(), generated::exec_query, sel);

    assert_eq!(data(&response), json!({ "first": [{ "key": "t1" }] }));
    assert!(response.errors.is_empty());
}

#[test]
fn explicit_null_optional_argument_is_absent() {
    let sel = vec![
        Field::new("todos")
            .arg("first", Value::Null)
            .select(vec![Field::new("id").into()])
            .into(),
    ];

    let response = execute(&Store::new(), generated::exec_query, sel);

    assert_eq!(
        data(&response),
        json!({ "todos": [{ "id": "t1" }, { "id": "t2" }] })
    );
    assert!(response.errors.is_empty());
}

#[test]
fn variable_and_method_bindings() {
    let response = execute(
        &Store::new(),
        generated::exec_query,
        vec![field("todos", &["done", "tags"])],
    );

    assert_eq!(
        data(&response),
        json!({
            "todos": [
                { "done": false, "tags": ["dev"] },
                { "done": false, "tags": [] }
            ]
        })
    );
}

#[test]
fn optional_hero_absent_is_null() {
    let response = execute(
        &Store::new(),
        generated::exec_query,
        vec![field("hero", &["name"])],
    );

    assert_eq!(data(&response), json!({ "hero": null }));
}

fn hero_selection() -> Vec<Selection> {
    vec![
        Field::new("hero")
            .select(vec![
                Selection::InlineFragment {
                    type_condition: Some("Human".to_string()),
                    selections: vec![Field::new("name").into()],
                },
                Selection::InlineFragment {
                    type_condition: Some("Droid".to_string()),
                    selections: vec![Field::new("primaryFunction").into()],
                },
            ])
            .into(),
    ]
}

#[test]
fn polymorphic_hero_dispatches_by_value_and_boxed() {
    let luke = Character::Human(Human {
        name: "Luke".to_string(),
    });
    let r2 = Character::DroidRef(Box::new(Droid {
        primary_function: "astromech".to_string(),
    }));

    let human = execute(&Store::with_hero(luke), generated::exec_query, hero_selection());
    let droid = execute(&Store::with_hero(r2), generated::exec_query, hero_selection());

    assert_eq!(data(&human), json!({ "hero": { "name": "Luke" } }));
    assert_eq!(
        data(&droid),
        json!({ "hero": { "primaryFunction": "astromech" } })
    );
}

#[test]
fn polymorphic_null_variant_is_null() {
    let response = execute(
        &Store::with_hero(Character::Null),
        generated::exec_query,
        hero_selection(),
    );

    assert_eq!(data(&response), json!({ "hero": null }));
}

#[test]
fn optional_list_absent_is_null_not_empty() {
    let response = execute(
        &Store::new(),
        generated::exec_query,
        vec![Field::new("recent").into()],
    );

    assert_eq!(data(&response), json!({ "recent": null }));
}

#[test]
fn optional_list_present_is_written() {
    let store = Store {
        recent: Some(vec!["t2".to_string(), "t1".to_string()]),
        ..Store::new()
    };

    let response = execute(&store, generated::exec_query, vec![Field::new("recent").into()]);

    assert_eq!(data(&response), json!({ "recent": ["t2", "t1"] }));
}

#[test]
fn list_optional_list_matrix() {
    let response = execute(
        &Store::new(),
        generated::exec_query,
        vec![Field::new("matrix").into()],
    );

    assert_eq!(data(&response), json!({ "matrix": [[1, 2], null, []] }));
}

#[test]
fn fragment_on_satisfied_interface_applies() {
    let mut fragments = IndexMap::new();
    fragments.insert(
        "NodeId".to_string(),
        Fragment {
            type_condition: "Node".to_string(),
            selections: vec![Field::new("id").into()],
        },
    );
    let sel = vec![
        Field::new("todos")
            .arg("first", json!(1))
            .select(vec![
                Selection::FragmentSpread("NodeId".to_string()),
                Field::new("done").into(),
            ])
            .into(),
    ];

    let response = execute_with(&Store::new(), generated::exec_query, sel, fragments);

    assert_eq!(
        data(&response),
        json!({ "todos": [{ "id": "t1", "done": false }] })
    );
}

#[test]
fn composite_argument_is_unpacked() {
    let sel = vec![
        Field::new("addTodo")
            .arg("input", json!({ "text": "release", "done": true }))
            .select(vec![
                Field::new("id").into(),
                Field::new("text").into(),
                Field::new("done").into(),
            ])
            .into(),
    ];

    let response = execute(&Store::new(), generated::exec_mutation, sel);

    assert_eq!(
        data(&response),
        json!({ "addTodo": { "id": "t3", "text": "release", "done": true } })
    );
    assert!(response.errors.is_empty());
}

#[test]
fn bad_composite_argument_is_reported_and_defaulted() {
    let sel = vec![
        Field::new("addTodo")
            .arg("input", json!({ "done": "yes" }))
            .select(vec![Field::new("text").into(), Field::new("done").into()])
            .into(),
    ];

    let response = execute(&Store::new(), generated::exec_mutation, sel);

    assert_eq!(
        data(&response),
        json!({ "addTodo": { "text": "", "done": false } })
    );
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.starts_with("invalid argument:"));
}

#[test]
#[should_panic(expected = "unknown field")]
fn unknown_field_is_fatal() {
    execute(
        &Store::new(),
        generated::exec_query,
        vec![Field::new("nope").into()],
    );
}

#[test]
fn satisfies_sets_and_schema() {
    assert_eq!(generated::TODO_SATISFIES, &["Todo", "Node"]);
    assert_eq!(generated::QUERY_SATISFIES, &["Query"]);

    generated::init();
    let schema = &*generated::PARSED_SCHEMA;
    for name in ["Node", "Todo", "Character", "TodoInput", "Query", "Mutation"] {
        assert!(schema.has_type(name), "{name}");
    }
}

struct NoResolvers;

impl broken_schema::Resolvers for NoResolvers {}

#[test]
fn malformed_schema_aborts_before_output() {
    let mut ec =
        ExecutionContext::<dyn broken_schema::Resolvers>::new(Context::default(), &NoResolvers);
    let sel: Vec<Selection> = vec![];

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        broken_schema::exec_query(&mut ec, &sel);
    }));

    let panic = result.unwrap_err();
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .unwrap_or_default();
    assert!(message.contains("embedded schema failed to parse"), "{message}");
    assert_eq!(ec.json.as_str(), "");
}
