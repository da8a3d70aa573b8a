//! Per-object resolution routines.

use graphgen_core::Object;

use super::naming::{host_type, routine_name, satisfies_name};
use super::{EmitError, Emitter};

const ROUTINE_ALLOWS: &str =
    "#[allow(dead_code, unused_variables, unused_assignments, unreachable_patterns, clippy::all)]";

impl Emitter<'_> {
    /// Emit the routine that writes one JSON object for `object`.
    ///
    /// Fields are dispatched by name over the grouped field set, each writing
    /// its response key then its value. Root objects take no instance.
    pub(super) fn emit_object_routine(&mut self, object: &Object) -> Result<(), EmitError> {
        let graphql_name = &object.kind.graphql_name;
        tracing::debug!(object = %graphql_name, fields = object.fields.len(), "emitting routine");

        let instance = if object.root {
            String::new()
        } else {
            format!(", it: &{}", host_type(&object.kind))
        };

        self.out.line(ROUTINE_ALLOWS);
        self.out.open(format!(
            "fn {}(ec: {}, sel: &[Selection]{instance}) {{",
            routine_name(graphql_name),
            self.exec_context_type()
        ));
        self.out.line(format!(
            "let grouped_field_set = ec.collect_fields(sel, {}, &mut HashSet::new());",
            satisfies_name(graphql_name)
        ));
        self.out.line("ec.json.begin_object();");
        self.out.open("for field in grouped_field_set {");
        self.out.open("match field.name.as_str() {");

        for field in &object.fields {
            tracing::trace!(object = %graphql_name, field = %field.graphql_name, "emitting field");
            self.out.open(format!("{:?} => {{", field.graphql_name));
            self.out.line("ec.json.object_key(&field.alias);");
            self.emit_resolution(object, field);
            self.emit_serialization(&field.kind, "res")?;
            self.out.close("}");
        }

        self.out.line("other => panic!(\"unknown field {other:?}\"),");
        self.out.close("}");
        self.out.close("}");
        self.out.line("ec.json.end_object();");
        self.out.close("}");
        self.out.blank();
        Ok(())
    }
}
