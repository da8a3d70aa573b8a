//! Field value resolution: binding strategy and argument binding.

use graphgen_core::{Binding, Field, Object};

use super::Emitter;
use super::naming::{arg_var, contract_op_name, host_type};

impl Emitter<'_> {
    /// Bind `res` to a reference to the field's value.
    pub(super) fn emit_resolution(&mut self, object: &Object, field: &Field) {
        match field.binding() {
            Binding::Var(var) => {
                self.out.line(format!("let res = &{var};"));
            }
            Binding::Method(method) => {
                self.emit_arg_bindings(field);
                let call = format!("{method}({})", call_args(field, None));
                self.emit_call(field, &call);
            }
            Binding::Resolver => {
                self.emit_arg_bindings(field);
                let call = format!(
                    "ec.resolvers.{}({})",
                    contract_op_name(object, field),
                    call_args(field, Some(object))
                );
                self.emit_call(field, &call);
            }
        }
    }

    /// Declare `arg{i}` for every argument, defaulted, then fill it from the
    /// request. Composite failures are reported and leave the default.
    pub(super) fn emit_arg_bindings(&mut self, field: &Field) {
        for (index, arg) in field.args.iter().enumerate() {
            let var = arg_var(index);
            self.out.line(format!(
                "let mut {var}: {} = Default::default();",
                host_type(&arg.kind)
            ));

            if !arg.kind.basic {
                self.out.open(format!(
                    "if let Err(err) = unpack_complex_arg(&mut {var}, field.args.get({:?})) {{",
                    arg.name
                ));
                self.out.line("ec.error(err);");
                self.out.close("}");
                continue;
            }

            self.out
                .open(format!("if let Some(tmp) = field.args.get({:?}) {{", arg.name));
            if arg.kind.is_optional() {
                // Explicit null coerces to `None`.
                self.out.line(format!(
                    "let tmp2: Option<{}> = coerce_arg(tmp);",
                    host_type(&arg.kind.strip_outer())
                ));
                self.out.line(format!("{var} = tmp2;"));
            } else {
                self.out.line(format!("{var} = coerce_arg(tmp);"));
            }
            self.out.close("}");
        }
    }

    fn emit_call(&mut self, field: &Field, call: &str) {
        if field.no_err {
            self.out.line(format!("let res = &{call};"));
            return;
        }

        self.out.open(format!("let res = match {call} {{"));
        self.out.line("Ok(res) => res,");
        self.out.open("Err(err) => {");
        self.out.line("ec.error(err);");
        self.out.line("ec.json.null();");
        self.out.line("continue;");
        self.out.close("}");
        self.out.close("};");
        self.out.line("let res = &res;");
    }
}

/// Call arguments. Contract calls lead with the context and, for non-root
/// objects, the instance.
fn call_args(field: &Field, contract_of: Option<&Object>) -> String {
    let mut args = Vec::new();
    if let Some(object) = contract_of {
        args.push("&ec.ctx".to_string());
        if !object.root {
            args.push("it".to_string());
        }
    }
    args.extend((0..field.args.len()).map(arg_var));
    args.join(", ")
}
