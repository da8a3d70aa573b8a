//! Requested selections and grouped field set collection.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::Value;

/// One entry of a requested selection set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(Field),
    /// Reference to a named fragment.
    FragmentSpread(String),
    InlineFragment {
        type_condition: Option<String>,
        selections: Vec<Selection>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub args: IndexMap<String, Value>,
    pub selections: Vec<Selection>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    pub fn select(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    /// The key this field is written under in the response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

/// Named fragment definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub type_condition: String,
    pub selections: Vec<Selection>,
}

/// A field of the grouped field set: every requested field sharing one
/// response key, merged.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedField {
    pub alias: String,
    pub name: String,
    pub args: IndexMap<String, Value>,
    pub selections: Vec<Selection>,
}

/// Group `selections` by response key, in first-seen order.
///
/// Fragments whose type condition is not in `satisfies` are skipped, as are
/// fragment spreads already present in `visited`.
pub(crate) fn collect_fields(
    selections: &[Selection],
    fragments: &IndexMap<String, Fragment>,
    satisfies: &[&str],
    visited: &mut HashSet<String>,
) -> Vec<CollectedField> {
    let mut grouped: IndexMap<String, CollectedField> = IndexMap::new();
    collect_into(selections, fragments, satisfies, visited, &mut grouped);
    grouped.into_values().collect()
}

fn collect_into(
    selections: &[Selection],
    fragments: &IndexMap<String, Fragment>,
    satisfies: &[&str],
    visited: &mut HashSet<String>,
    grouped: &mut IndexMap<String, CollectedField>,
) {
    for selection in selections {
        match selection {
            Selection::Field(field) => {
                let key = field.response_key();
                if let Some(existing) = grouped.get_mut(key) {
                    existing.selections.extend(field.selections.iter().cloned());
                    continue;
                }
                grouped.insert(
                    key.to_string(),
                    CollectedField {
                        alias: key.to_string(),
                        name: field.name.clone(),
                        args: field.args.clone(),
                        selections: field.selections.clone(),
                    },
                );
            }
            Selection::FragmentSpread(name) => {
                if !visited.insert(name.clone()) {
                    continue;
                }
                let Some(fragment) = fragments.get(name) else {
                    tracing::debug!(fragment = %name, "unknown fragment spread skipped");
                    continue;
                };
                if !satisfies.contains(&fragment.type_condition.as_str()) {
                    continue;
                }
                collect_into(&fragment.selections, fragments, satisfies, visited, grouped);
            }
            Selection::InlineFragment {
                type_condition,
                selections,
            } => {
                let applies = type_condition
                    .as_deref()
                    .is_none_or(|condition| satisfies.contains(&condition));
                if !applies {
                    continue;
                }
                collect_into(selections, fragments, satisfies, visited, grouped);
            }
        }
    }
}
