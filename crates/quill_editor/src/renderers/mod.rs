//! Built-in renderers, one module per property type.

pub mod boolean;
pub mod date_range;
pub mod dependent_option;
pub mod enumeration;
pub mod option_list;
pub mod range;
pub mod rich_text;
pub mod text;
