#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Schema model consumed by the graphgen emitter.
//!
//! The model is produced upstream (schema parsing and member binding happen
//! elsewhere) and is treated as an immutable, read-only input:
//! - **Objects** own ordered **Fields**
//! - **Fields** carry their result **Kind**, call **Args** and host bindings
//! - **Kinds** describe a base type wrapped in a chain of **Modifiers**

use std::io::Read;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod verify;

pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use verify::ModelError;

// ============================================================================
// Model
// ============================================================================

/// Everything the emitter needs to produce one generated source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Name of the generated package, written into the file header.
    pub package: String,
    /// Local alias -> module path. Iterated in insertion order.
    #[serde(default)]
    pub imports: IndexMap<String, String>,
    /// Raw schema source, embedded verbatim into the generated file.
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub objects: Vec<Object>,
}

impl Model {
    /// Decode a model from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a model from a reader yielding JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, ModelError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Find an object by the GraphQL name of its type.
    pub fn object(&self, graphql_name: &str) -> Option<&Object> {
        self.objects
            .iter()
            .find(|o| o.kind.graphql_name == graphql_name)
    }

    /// All fields resolved through the generated resolver contract, in
    /// object then field declaration order.
    pub fn contract_fields(&self) -> impl Iterator<Item = (&Object, &Field)> {
        self.objects.iter().flat_map(|o| {
            o.fields
                .iter()
                .filter(|f| f.binding() == Binding::Resolver)
                .map(move |f| (o, f))
        })
    }
}

/// A schema object with its resolution-relevant fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Binding-side identifier, used to name contract operations.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Entry-point objects resolve without an instance.
    #[serde(default)]
    pub root: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Additional type names this object answers to, besides its own.
    #[serde(default)]
    pub satisfies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub graphql_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    #[serde(default)]
    pub args: Vec<Arg>,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Resolution cannot fail.
    #[serde(default)]
    pub no_err: bool,
}

/// How a field's value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// Read an existing host value.
    Var(&'a str),
    /// Call an existing host method.
    Method(&'a str),
    /// Call the generated resolver contract.
    Resolver,
}

impl Field {
    /// Classify the field's binding. Empty names count as unbound.
    ///
    /// When both names are set the variable wins; [`Model::verify`] rejects
    /// such fields before emission.
    pub fn binding(&self) -> Binding<'_> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }
        if let Some(var) = non_empty(&self.var_name) {
            return Binding::Var(var);
        }
        if let Some(method) = non_empty(&self.method_name) {
            return Binding::Method(method);
        }
        Binding::Resolver
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Kind,
}

// ============================================================================
// Kinds
// ============================================================================

/// Type descriptor: a base type wrapped in optional/list modifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kind {
    /// Binding-side (host) type name.
    pub name: String,
    /// Import alias qualifying the host type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    /// Primitive scalar-like type.
    #[serde(default)]
    pub basic: bool,
    pub graphql_name: String,
    /// Applied outermost first.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Concrete implementors of a polymorphic kind.
    #[serde(default)]
    pub implementors: Vec<Kind>,
}

/// One layer of nullability or list nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Optional,
    List,
}

impl Kind {
    pub fn is_polymorphic(&self) -> bool {
        !self.implementors.is_empty()
    }

    /// A bare object reference: no modifiers, not basic, not polymorphic.
    pub fn is_plain_object(&self) -> bool {
        self.modifiers.is_empty() && !self.basic && !self.is_polymorphic()
    }

    /// Whether the outermost modifier is `Optional`.
    pub fn is_optional(&self) -> bool {
        self.modifiers.first() == Some(&Modifier::Optional)
    }

    /// The same kind with the outermost modifier removed.
    pub fn strip_outer(&self) -> Kind {
        Kind {
            modifiers: self.modifiers.iter().skip(1).copied().collect(),
            ..self.clone()
        }
    }

    /// Host type name, qualified by the import alias when one is set.
    pub fn qualified_name(&self) -> String {
        match &self.import {
            Some(import) => format!("{}::{}", import, self.name),
            None => self.name.clone(),
        }
    }
}
