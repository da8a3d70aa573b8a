use crate::utils::{to_screaming_snake_case, to_snake_case};

#[test]
fn snake_case_from_pascal() {
    assert_eq!(to_snake_case("FooBar"), "foo_bar");
    assert_eq!(to_snake_case("Foo"), "foo");
}

#[test]
fn snake_case_from_camel() {
    assert_eq!(to_snake_case("fooBar"), "foo_bar");
    assert_eq!(to_snake_case("fooBarBaz"), "foo_bar_baz");
}

#[test]
fn snake_case_keeps_acronyms_together() {
    assert_eq!(to_snake_case("ID"), "id");
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_snake_case("TodoID"), "todo_id");
}

#[test]
fn snake_case_idempotent() {
    assert_eq!(to_snake_case("foo_bar"), "foo_bar");
    assert_eq!(to_snake_case("Foo_Bar"), "foo_bar");
}

#[test]
fn snake_case_digits() {
    assert_eq!(to_snake_case("Vec3Point"), "vec3_point");
}

#[test]
fn screaming_snake_case() {
    assert_eq!(to_screaming_snake_case("Query"), "QUERY");
    assert_eq!(to_screaming_snake_case("TodoList"), "TODO_LIST");
}
