use crate::error::ValidationError;
use crate::validator::{PropCheck, Validator};
use std::collections::BTreeMap;
use stencil_common::Props;

/// A component's declared properties and how each one is validated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contract {
    props: BTreeMap<String, Validator>,
}

impl Contract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property
    pub fn prop(mut self, name: impl Into<String>, validator: Validator) -> Self {
        self.props.insert(name.into(), validator);
        self
    }

    pub fn declares(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn validator(&self, name: &str) -> Option<&Validator> {
        self.props.get(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Check every declared property against `props`, in name order.
    ///
    /// Undeclared properties are not checked; they are forwarded, not consumed.
    pub fn validate(&self, component_name: &str, props: &Props) -> Vec<ValidationError> {
        self.props
            .iter()
            .filter_map(|(name, validator)| {
                validator
                    .check(&PropCheck::new(component_name, name, props))
                    .err()
                    .map(|message| ValidationError::new(component_name, name.as_str(), message))
            })
            .collect()
    }
}
