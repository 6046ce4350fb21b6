use serde::{Deserialize, Serialize};
use std::fmt;

/// A contract violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub component_name: String,
    pub property_name: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        component_name: impl Into<String>,
        property_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            property_name: property_name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid prop `{}` supplied to `{}`: {}",
            self.property_name, self.component_name, self.message
        )
    }
}
