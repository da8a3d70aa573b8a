//! Core emitter struct and file-level layout.

use graphgen_core::{Kind, Model, Object};
use indexmap::IndexMap;

use super::naming::{routine_name, shim_name, use_declaration};
use super::printer::Printer;
use super::{Config, EmitError};

/// Rust source emitter for one schema model.
pub struct Emitter<'a> {
    pub(super) model: &'a Model,
    pub(super) config: Config,
    /// GraphQL type name -> object
    pub(super) objects: IndexMap<&'a str, &'a Object>,
    /// Output buffer
    pub(super) out: Printer,
}

/// Verify `model` and emit its generated source file.
pub fn emit(model: &Model, config: &Config) -> Result<String, EmitError> {
    model.verify()?;
    Emitter::new(model, config.clone()).emit()
}

impl<'a> Emitter<'a> {
    pub fn new(model: &'a Model, config: Config) -> Self {
        let objects = model
            .objects
            .iter()
            .map(|o| (o.kind.graphql_name.as_str(), o))
            .collect();
        Self {
            model,
            config,
            objects,
            out: Printer::new(),
        }
    }

    /// Emit the whole file. Identical models produce identical text.
    pub fn emit(mut self) -> Result<String, EmitError> {
        let model = self.model;
        tracing::debug!(
            package = %model.package,
            objects = model.objects.len(),
            "emitting resolvers"
        );

        self.emit_header();
        self.emit_imports();
        self.emit_contract();
        self.emit_satisfies();
        for object in &model.objects {
            self.emit_object_routine(object)?;
        }
        self.emit_schema();
        if self.config.exec_shims {
            self.emit_exec_shims();
        }

        Ok(self.out.finish())
    }

    /// The object a non-basic, non-polymorphic kind refers to.
    pub(super) fn object_for(&self, kind: &Kind) -> Result<&'a Object, EmitError> {
        self.objects
            .get(kind.graphql_name.as_str())
            .copied()
            .ok_or_else(|| EmitError::UnknownObject {
                kind: kind.graphql_name.clone(),
            })
    }

    /// Parameter type shared by every resolution routine.
    pub(super) fn exec_context_type(&self) -> String {
        format!(
            "&mut ExecutionContext<'_, dyn {}>",
            self.config.resolvers_trait
        )
    }

    fn emit_header(&mut self) {
        self.out.line(format!(
            "// Code generated by graphgen for package `{}`. DO NOT EDIT.",
            self.model.package
        ));
        self.out.blank();
    }

    fn emit_imports(&mut self) {
        self.out.line("use std::collections::HashSet;");
        self.out.line("use std::sync::LazyLock;");
        self.out.blank();
        self.out
            .line(format!("use {}::prelude::*;", self.config.runtime_crate));
        for (alias, path) in &self.model.imports {
            self.out.line(use_declaration(alias, path));
        }
        self.out.blank();
    }

    fn emit_schema(&mut self) {
        self.out.line(format!(
            "static SCHEMA_SOURCE: &str = {:?};",
            self.model.schema
        ));
        self.out.blank();
        self.out.line(
            "pub static PARSED_SCHEMA: LazyLock<Schema> = LazyLock::new(|| Schema::must_parse(SCHEMA_SOURCE));",
        );
        self.out.blank();
        self.out
            .line("/// Parse the embedded schema now instead of on first use.");
        self.out.open("pub fn init() {");
        self.out.line("LazyLock::force(&PARSED_SCHEMA);");
        self.out.close("}");
        self.out.blank();
        self.out
            .line("const _: fn() -> HashSet<String> = HashSet::new;");
        self.out.blank();
    }

    /// Entry points parse the embedded schema before any output is written.
    fn emit_exec_shims(&mut self) {
        let model = self.model;
        for object in model.objects.iter().filter(|o| o.root) {
            let graphql_name = &object.kind.graphql_name;
            self.out.open(format!(
                "pub fn {}(ec: {}, sel: &[Selection]) {{",
                shim_name(graphql_name),
                self.exec_context_type()
            ));
            self.out.line("LazyLock::force(&PARSED_SCHEMA);");
            self.out
                .line(format!("{}(ec, sel);", routine_name(graphql_name)));
            self.out.close("}");
            self.out.blank();
        }
    }
}
