//! Utility functions for rule implementations.

pub mod entry;
pub mod naming;

#[doc(inline)]
pub use entry::{declares_entry_point, find_entry_class, is_entry_class, main_method};
#[doc(inline)]
pub use naming::{is_camel_case, is_pascal_case, is_upper_snake_case};
