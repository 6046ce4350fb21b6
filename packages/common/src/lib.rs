pub mod error;
pub mod node;
pub mod props;
pub mod result;
pub mod value;

pub use error::*;
pub use node::*;
pub use props::*;
pub use result::*;
pub use value::*;
