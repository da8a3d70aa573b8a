//! Streaming JSON writer used by generated resolution routines.
//!
//! Separators are placed by the writer itself: callers only open and close
//! containers, emit keys, and write scalar values.

use serde_json::{Number, Value};

#[derive(Debug, Default)]
pub struct JsonWriter {
    out: String,
    /// One entry per open container: whether it already holds an element.
    stack: Vec<bool>,
    /// A key was written and its value is still pending.
    after_key: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_object(&mut self) {
        self.value_prefix();
        self.out.push('{');
        self.stack.push(false);
    }

    pub fn end_object(&mut self) {
        self.stack.pop();
        self.out.push('}');
    }

    pub fn begin_array(&mut self) {
        self.value_prefix();
        self.out.push('[');
        self.stack.push(false);
    }

    pub fn end_array(&mut self) {
        self.stack.pop();
        self.out.push(']');
    }

    pub fn object_key(&mut self, key: &str) {
        self.separator();
        self.push_string(key);
        self.out.push(':');
        self.after_key = true;
    }

    pub fn null(&mut self) {
        self.value_prefix();
        self.out.push_str("null");
    }

    pub fn string(&mut self, value: &str) {
        self.value_prefix();
        self.push_string(value);
    }

    pub fn id(&mut self, value: &str) {
        self.string(value);
    }

    pub fn int(&mut self, value: &i64) {
        self.value_prefix();
        self.out.push_str(&value.to_string());
    }

    /// Non-finite floats have no JSON form and are written as `null`.
    pub fn float(&mut self, value: &f64) {
        self.value_prefix();
        match Number::from_f64(*value) {
            Some(n) => self.out.push_str(&n.to_string()),
            None => self.out.push_str("null"),
        }
    }

    pub fn boolean(&mut self, value: &bool) {
        self.value_prefix();
        self.out.push_str(if *value { "true" } else { "false" });
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn value_prefix(&mut self) {
        if self.after_key {
            self.after_key = false;
            return;
        }
        self.separator();
    }

    fn separator(&mut self) {
        if let Some(has_element) = self.stack.last_mut() {
            if *has_element {
                self.out.push(',');
            }
            *has_element = true;
        }
    }

    fn push_string(&mut self, value: &str) {
        self.out.push_str(&Value::from(value).to_string());
    }
}
