//! Resolver contract and satisfies sets.

use super::Emitter;
use super::naming::{contract_op_name, escape_ident, host_type, satisfies_name};

impl Emitter<'_> {
    /// One trait method per field bound to neither a variable nor a method.
    /// Infallible fields return their value directly.
    pub(super) fn emit_contract(&mut self) {
        let model = self.model;
        self.out.line("#[allow(non_snake_case)]");
        self.out
            .open(format!("pub trait {} {{", self.config.resolvers_trait));
        for (object, field) in model.contract_fields() {
            let mut params = vec!["&self".to_string(), "ctx: &Context".to_string()];
            if !object.root {
                params.push(format!("it: &{}", host_type(&object.kind)));
            }
            for arg in &field.args {
                params.push(format!(
                    "{}: {}",
                    escape_ident(&arg.name),
                    host_type(&arg.kind)
                ));
            }
            let output = if field.no_err {
                host_type(&field.kind)
            } else {
                format!("Result<{}, Error>", host_type(&field.kind))
            };
            self.out.line(format!(
                "fn {}({}) -> {output};",
                contract_op_name(object, field),
                params.join(", ")
            ));
        }
        self.out.close("}");
        self.out.blank();
    }

    /// Per object: its own GraphQL name followed by every satisfied name.
    pub(super) fn emit_satisfies(&mut self) {
        let model = self.model;
        for object in &model.objects {
            let names: Vec<String> = std::iter::once(&object.kind.graphql_name)
                .chain(&object.satisfies)
                .map(|name| format!("{name:?}"))
                .collect();
            self.out.line(format!(
                "pub static {}: &[&str] = &[{}];",
                satisfies_name(&object.kind.graphql_name),
                names.join(", ")
            ));
        }
        self.out.blank();
    }
}
