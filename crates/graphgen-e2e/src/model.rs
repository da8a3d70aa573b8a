//! Host types the generated resolvers read from.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub labels: Vec<String>,
}

impl Todo {
    pub fn tags(&self) -> Vec<String> {
        self.labels.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Human {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Droid {
    pub primary_function: String,
}

/// Either implementor, held by value or boxed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Character {
    #[default]
    Null,
    Human(Human),
    HumanRef(Box<Human>),
    Droid(Droid),
    DroidRef(Box<Droid>),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TodoInput {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}
