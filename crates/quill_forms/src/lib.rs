pub mod control;
pub mod form;
pub mod properties;
pub mod serialization;

pub use control::*;
pub use form::*;
pub use properties::*;
pub use serialization::*;
