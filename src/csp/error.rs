use thiserror::Error;

use crate::csp::{ConstraintId, Value, VariableId};

/// A misuse of the CSP primitives. These indicate a bug in a propagator or in the search driver,
/// or a malformed CSP construction. A deadlock is never reported this way.
#[derive(Debug, Error, PartialEq)]
pub enum CspError {
    #[error("variable {0} does not exist")]
    UnknownVariable(VariableId),
    #[error("constraint {0} does not exist")]
    UnknownConstraint(ConstraintId),
    #[error("{variable}: value {value} is not in the original domain")]
    NotInDomain { variable: String, value: Value },
    #[error("{variable}: value {value} is already pruned")]
    AlreadyPruned { variable: String, value: Value },
    #[error("{variable}: value {value} was never pruned")]
    NotPruned { variable: String, value: Value },
    #[error("{variable}: cannot assign pruned value {value}")]
    AssignPruned { variable: String, value: Value },
    #[error("{0} is already assigned")]
    AlreadyAssigned(String),
    #[error("{0} is not assigned")]
    NotAssigned(String),
    #[error("constraint {constraint}: {message}")]
    InvalidConstraint { constraint: String, message: String },
}
