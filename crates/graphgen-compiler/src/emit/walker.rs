//! Serialization of a resolved value, driven by its kind's modifier chain.

use graphgen_core::{Kind, Modifier, Object};

use super::naming::{routine_name, writer_method};
use super::{EmitError, Emitter};

impl Emitter<'_> {
    /// Write the value named `val` according to `kind`.
    pub(super) fn emit_serialization(&mut self, kind: &Kind, val: &str) -> Result<(), EmitError> {
        self.walk(kind, val, &kind.modifiers, false)
    }

    /// `unwrapped` marks a value just bound out of an `Option`.
    fn walk(
        &mut self,
        kind: &Kind,
        val: &str,
        modifiers: &[Modifier],
        unwrapped: bool,
    ) -> Result<(), EmitError> {
        match modifiers.split_first() {
            Some((Modifier::Optional, rest)) => {
                self.out.open(format!("match {val} {{"));
                self.out.line("None => ec.json.null(),");
                self.out.open(format!("Some({val}) => {{"));
                self.walk(kind, val, rest, true)?;
                self.out.close("}");
                self.out.close("}");
            }
            Some((Modifier::List, rest)) => {
                let items = if unwrapped {
                    format!("{val}.iter()")
                } else {
                    val.to_string()
                };
                self.out.line("ec.json.begin_array();");
                self.out.open(format!("for val in {items} {{"));
                self.walk(kind, "val", rest, false)?;
                self.out.close("}");
                self.out.line("ec.json.end_array();");
            }
            None => self.walk_base(kind, val)?,
        }
        Ok(())
    }

    fn walk_base(&mut self, kind: &Kind, val: &str) -> Result<(), EmitError> {
        if kind.basic {
            self.out
                .line(format!("ec.json.{}({val});", writer_method(kind)));
            return Ok(());
        }
        if kind.is_polymorphic() {
            return self.emit_dispatch(kind, val);
        }
        let object = self.object_for(kind)?;
        self.out.line(format!("{};", delegate(object, val)));
        Ok(())
    }

    /// Match over the concrete implementors of a polymorphic value. Each
    /// implementor has a by-value and a boxed case.
    fn emit_dispatch(&mut self, kind: &Kind, val: &str) -> Result<(), EmitError> {
        let enum_name = kind.qualified_name();
        self.out.open(format!("match {val} {{"));
        self.out.line(format!("{enum_name}::Null => ec.json.null(),"));
        for implementor in &kind.implementors {
            let object = self.object_for(implementor)?;
            self.out.line(format!(
                "{enum_name}::{}(it) => {},",
                implementor.name,
                delegate(object, "it")
            ));
            self.out.line(format!(
                "{enum_name}::{}Ref(it) => {},",
                implementor.name,
                delegate(object, "&**it")
            ));
        }
        self.out.line(format!(
            "_ => panic!(\"unexpected type for {}\"),",
            kind.graphql_name
        ));
        self.out.close("}");
        Ok(())
    }
}

/// Call of `object`'s routine on the current field's sub-selections.
fn delegate(object: &Object, val: &str) -> String {
    let routine = routine_name(&object.kind.graphql_name);
    if object.root {
        format!("{routine}(ec, &field.selections)")
    } else {
        format!("{routine}(ec, &field.selections, {val})")
    }
}
