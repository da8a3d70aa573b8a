//! Embedded schema constant support.

use apollo_parser::Parser;
use apollo_parser::cst;
use indexmap::IndexSet;

use crate::invariants::ensure_parsed;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("schema parsing failed: {}", .0.join(", "))]
    ParseErrors(Vec<String>),
}

/// Parsed form of the schema source embedded in generated code.
#[derive(Debug, Clone)]
pub struct Schema {
    source: String,
    types: IndexSet<String>,
}

impl Schema {
    pub fn parse(source: &str) -> Result<Self, SchemaError> {
        let tree = Parser::new(source).parse();

        let errors: Vec<String> = tree.errors().map(|e| e.message().to_string()).collect();
        if !errors.is_empty() {
            return Err(SchemaError::ParseErrors(errors));
        }

        let mut types = IndexSet::new();
        for definition in tree.document().definitions() {
            let name = match definition {
                cst::Definition::ObjectTypeDefinition(def) => def.name(),
                cst::Definition::InterfaceTypeDefinition(def) => def.name(),
                cst::Definition::UnionTypeDefinition(def) => def.name(),
                cst::Definition::EnumTypeDefinition(def) => def.name(),
                cst::Definition::ScalarTypeDefinition(def) => def.name(),
                cst::Definition::InputObjectTypeDefinition(def) => def.name(),
                _ => None,
            };
            if let Some(name) = name {
                types.insert(name.text().to_string());
            }
        }

        Ok(Self {
            source: source.to_string(),
            types,
        })
    }

    /// Parse schema source known at build time. Failure is fatal.
    pub fn must_parse(source: &str) -> Self {
        ensure_parsed(Self::parse(source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Type names defined by the schema, in source order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|s| s.as_str())
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains(name)
    }
}
