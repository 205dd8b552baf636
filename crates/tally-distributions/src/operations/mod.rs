//! Arithmetic over independent random variables.
//!
//! Both operations are pure: operands are borrowed and never modified.

pub mod add;
pub mod scale;

pub use add::{add, add_with};
pub use scale::scale;
