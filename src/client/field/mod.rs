//! Custom admin parameters rendered as dynamic form fields.
//!
//! The backend declares each parameter with a kind and a current value. The
//! form keeps an editable [`ParamField`] per parameter and, on submit, asks
//! every field for its outgoing value through the [`Field`] capability.

use serde_json::{Number, Value};

use crate::model::admin::{AdminParamDto, ParamFieldType};

/// Capability of a dynamic field to produce the value sent to the backend.
pub trait Field {
    fn name(&self) -> &str;

    fn outgoing_value(&self) -> Value;
}

/// Editable state of a field, one variant per input widget.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Raw input of a number field, parsed on submit.
    Number(String),
    TrueFalse(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamField {
    pub name: String,
    pub label: String,
    pub kind: ParamFieldType,
    pub value: FieldValue,
}

impl ParamField {
    pub fn from_param(param: &AdminParamDto) -> Self {
        let value = match param.field_type {
            ParamFieldType::Number => FieldValue::Number(number_input(&param.value)),
            ParamFieldType::TrueFalse => FieldValue::TrueFalse(truthy(&param.value)),
            ParamFieldType::String | ParamFieldType::Text | ParamFieldType::Unknown => {
                FieldValue::Text(text_input(&param.value))
            }
        };

        Self {
            name: param.name.clone(),
            label: if param.label.is_empty() {
                param.name.clone()
            } else {
                param.label.clone()
            },
            kind: param.field_type,
            value,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, ParamFieldType::Text)
    }
}

impl Field for ParamField {
    fn name(&self) -> &str {
        &self.name
    }

    fn outgoing_value(&self) -> Value {
        match &self.value {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Number(raw) => parse_number(raw),
            FieldValue::TrueFalse(checked) => Value::Bool(*checked),
        }
    }
}

/// Builds the editable field list in the order the backend declared it.
pub fn create_field_list(params: &[AdminParamDto]) -> Vec<ParamField> {
    params.iter().map(ParamField::from_param).collect()
}

fn text_input(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn number_input(value: &Value) -> String {
    match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        _ => String::new(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => matches!(text.as_str(), "true" | "1"),
        _ => false,
    }
}

/// Empty or unparsable input is sent as `null`.
fn parse_number(raw: &str) -> Value {
    let raw = raw.trim();
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }

    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
