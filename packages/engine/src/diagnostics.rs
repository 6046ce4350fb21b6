//! Reporting channel for contract violations.

use std::cell::RefCell;
use std::rc::Rc;
use stencil_validator::ValidationError;
use tracing::warn;

/// Receives advisory contract violations during resolution
pub trait DiagnosticSink {
    fn report(&self, error: &ValidationError);
}

/// Emits each violation as a `tracing` warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &ValidationError) {
        warn!(
            component = %error.component_name,
            prop = %error.property_name,
            "{}",
            error.message
        );
    }
}

/// Keeps violations in memory.
///
/// Clones share one buffer, so a caller can keep a handle while the engine owns
/// another.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    errors: Rc<RefCell<Vec<ValidationError>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        self.errors.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.errors.borrow_mut().clear();
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, error: &ValidationError) {
        self.errors.borrow_mut().push(error.clone());
    }
}
