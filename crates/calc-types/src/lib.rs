//! Calc Types
//!
//! This crate defines the numeric value type shared across the calculator
//! workspace (`calc-core` and `calc-api`). Keeping `Number` in its own crate
//! avoids circular dependencies between the arithmetic core and the API layer.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod number;

pub use number::Number;
