//! The permission collaborator consulted by gated operations.

use calc_types::Number;

/// External permission decision for a single operation call.
///
/// Implementations are stateless from the core's point of view: the
/// decision is re-evaluated on every call and a denial affects only that
/// call. Only `multiply` consults this collaborator.
pub trait PermissionChecker: Send + Sync {
    /// Returns whether the caller may execute `operation` on `operands`.
    fn validate(&self, operation: &str, operands: &[Number]) -> bool;
}

/// Checker that grants every operation. Used as the default collaborator
/// and as a test stand-in.
#[derive(Debug, Default)]
pub struct AllowAll;

impl PermissionChecker for AllowAll {
    fn validate(&self, _operation: &str, _operands: &[Number]) -> bool {
        true
    }
}
