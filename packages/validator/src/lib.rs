//! Validator combinators for component property contracts.
//!
//! A [`Validator`] is a tagged union of primitive type predicates and
//! combinators ([`every`], [`some`], [`disallow`], [`demand`], [`given_props`]).
//! A [`Contract`] maps each declared property name to one validator.
//!
//! Validation is advisory: it produces [`ValidationError`]s for a reporting
//! channel and never stops rendering.

mod combinators;
mod contract;
mod error;
mod validator;

pub use combinators::{demand, disallow, every, given_props, some};
pub use contract::Contract;
pub use error::ValidationError;
pub use validator::{PropCheck, Validator};
