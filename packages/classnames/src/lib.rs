//! Class-token builders.
//!
//! Each builder maps one property value to zero or one class token under a
//! naming convention. A [`ClassList`] collects tokens in call order and joins
//! them into the final `className` string. Call order is part of the output.

mod builders;
mod class_list;

pub use builders::*;
pub use class_list::ClassList;
