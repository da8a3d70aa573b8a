//! Model builders shared by emitter tests.

use graphgen_core::{Arg, Field, Kind, Model, Modifier, Object};

pub fn basic(name: &str) -> Kind {
    Kind {
        name: name.to_string(),
        import: None,
        basic: true,
        graphql_name: name.to_string(),
        modifiers: vec![],
        implementors: vec![],
    }
}

/// Object kind qualified by the `model` import.
pub fn object_kind(name: &str) -> Kind {
    Kind {
        basic: false,
        import: Some("model".to_string()),
        ..basic(name)
    }
}

pub fn polymorphic(name: &str, implementors: &[&str]) -> Kind {
    Kind {
        implementors: implementors.iter().map(|n| object_kind(n)).collect(),
        ..object_kind(name)
    }
}

pub fn wrapped(kind: Kind, modifiers: &[Modifier]) -> Kind {
    Kind {
        modifiers: modifiers.to_vec(),
        ..kind
    }
}

pub fn object(name: &str, fields: Vec<Field>) -> Object {
    Object {
        name: name.to_string(),
        kind: object_kind(name),
        root: false,
        fields,
        satisfies: vec![],
    }
}

/// Root object: no instance, so no import qualifying its kind.
pub fn root(name: &str, fields: Vec<Field>) -> Object {
    Object {
        kind: Kind {
            import: None,
            ..object_kind(name)
        },
        root: true,
        ..object(name, fields)
    }
}

pub fn resolver_field(name: &str, kind: Kind) -> Field {
    Field {
        graphql_name: name.to_string(),
        var_name: None,
        method_name: None,
        args: vec![],
        kind,
        no_err: false,
    }
}

pub fn var_field(name: &str, var: &str, kind: Kind) -> Field {
    Field {
        var_name: Some(var.to_string()),
        no_err: true,
        ..resolver_field(name, kind)
    }
}

pub fn method_field(name: &str, method: &str, kind: Kind) -> Field {
    Field {
        method_name: Some(method.to_string()),
        ..resolver_field(name, kind)
    }
}

pub fn arg(name: &str, kind: Kind) -> Arg {
    Arg {
        name: name.to_string(),
        kind,
    }
}

pub fn model(objects: Vec<Object>) -> Model {
    let mut imports = indexmap::IndexMap::new();
    imports.insert("model".to_string(), "crate::model".to_string());
    Model {
        package: "todo".to_string(),
        imports,
        schema: String::new(),
        objects,
    }
}

/// Root `Query` listing `Todo`s; `Todo` reads `id` from the instance and
/// resolves `text` through the contract.
pub fn todo_model() -> Model {
    let mut model = model(vec![
        root(
            "Query",
            vec![resolver_field(
                "todos",
                wrapped(object_kind("Todo"), &[Modifier::List]),
            )],
        ),
        object(
            "Todo",
            vec![
                var_field("id", "it.id", basic("ID")),
                resolver_field("text", basic("String")),
            ],
        ),
    ]);
    model.schema = "type Query { todos: [Todo!]! }\ntype Todo { id: ID! text: String! }".to_string();
    model
}
