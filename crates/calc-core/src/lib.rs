#![deny(warnings)]
//! The validated arithmetic core for the calculator service.
//!
//! This crate provides the `Calculator` with its seven operations, the
//! textual operand parser, and the `PermissionChecker` collaborator that
//! gates the multiply operation. Every operation is a pure function over
//! validated `Number` inputs: domain violations (division by zero, negative
//! radicand, non-positive logarithm argument) surface as typed `CalcError`
//! values for the boundary layer to translate.

pub mod calculator;
pub mod error;
pub mod parser;
pub mod permission;

pub use calc_types::Number;
pub use calculator::Calculator;
pub use error::CalcError;
pub use permission::{AllowAll, PermissionChecker};

/// Result alias used throughout the arithmetic core.
pub type CalcResult = Result<Number, CalcError>;
