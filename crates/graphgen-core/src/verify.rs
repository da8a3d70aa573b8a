//! Model consistency checks run before emission.
//!
//! These guard the emitter's preconditions; they do not validate the schema
//! itself.

use std::collections::{HashMap, HashSet};

use crate::utils::to_snake_case;
use crate::{Kind, Model};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{object}.{field}` is bound to both a variable and a method")]
    ConflictingBinding { object: String, field: String },

    #[error("kind `{kind}` is basic but declares implementors")]
    BasicWithImplementors { kind: String },

    #[error("kind `{kind}` does not name any object")]
    UnknownObject { kind: String },

    #[error("implementor `{implementor}` of `{kind}` must be a plain object kind")]
    InvalidImplementor { kind: String, implementor: String },

    #[error("object type `{graphql_name}` is declared more than once")]
    DuplicateObject { graphql_name: String },

    #[error("object types `{first}` and `{second}` both generate the name `{name}`")]
    NameCollision {
        first: String,
        second: String,
        name: String,
    },
}

impl Model {
    /// Check the invariants the emitter relies on.
    pub fn verify(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        let mut generated: HashMap<String, &str> = HashMap::new();
        for object in &self.objects {
            let graphql_name = object.kind.graphql_name.as_str();
            if !seen.insert(graphql_name) {
                return Err(ModelError::DuplicateObject {
                    graphql_name: graphql_name.to_string(),
                });
            }
            // Generated routine and static names derive from the snake case form.
            let name = to_snake_case(graphql_name);
            if let Some(first) = generated.insert(name.clone(), graphql_name) {
                return Err(ModelError::NameCollision {
                    first: first.to_string(),
                    second: graphql_name.to_string(),
                    name,
                });
            }
        }

        for object in &self.objects {
            for field in &object.fields {
                let has = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
                if has(&field.var_name) && has(&field.method_name) {
                    return Err(ModelError::ConflictingBinding {
                        object: object.name.clone(),
                        field: field.graphql_name.clone(),
                    });
                }
                self.verify_kind(&field.kind)?;
                for arg in &field.args {
                    if arg.kind.basic && arg.kind.is_polymorphic() {
                        return Err(ModelError::BasicWithImplementors {
                            kind: arg.kind.graphql_name.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn verify_kind(&self, kind: &Kind) -> Result<(), ModelError> {
        if kind.basic {
            if kind.is_polymorphic() {
                return Err(ModelError::BasicWithImplementors {
                    kind: kind.graphql_name.clone(),
                });
            }
            return Ok(());
        }

        if !kind.is_polymorphic() {
            return self.verify_object_ref(kind);
        }

        for implementor in &kind.implementors {
            if !implementor.is_plain_object() {
                return Err(ModelError::InvalidImplementor {
                    kind: kind.graphql_name.clone(),
                    implementor: implementor.graphql_name.clone(),
                });
            }
            self.verify_object_ref(implementor)?;
        }
        Ok(())
    }

    fn verify_object_ref(&self, kind: &Kind) -> Result<(), ModelError> {
        if self.object(&kind.graphql_name).is_none() {
            return Err(ModelError::UnknownObject {
                kind: kind.graphql_name.clone(),
            });
        }
        Ok(())
    }
}
