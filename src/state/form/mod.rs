//! Sign-up form state and validation

mod field;
mod rules;
mod signup;

pub use field::*;
pub use rules::*;
pub use signup::*;
