use serde::{Deserialize, Serialize};

/// Selectable `{value, label}` pair used by the option pickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionType<T> {
    pub value: T,
    pub label: String,
}

impl<T> OptionType<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}
