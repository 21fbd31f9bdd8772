//! Propagators narrow the current domains of a CSP after an assignment.
//!
//! A propagator is called once before search with no variable, then once after every assignment
//! with the variable just assigned. It reports whether the CSP may still have a solution and
//! returns every pruning it made, in order, so the search can restore them when it backtracks.
//! Prunings are returned on deadlock as well.

pub use self::arc_consistency::ArcConsistency;
pub use self::forward_checking::ForwardChecking;
pub use self::plain::PlainCheck;

use std::fmt;
use std::fmt::{Display, Formatter};

use enum_dispatch::enum_dispatch;

use crate::csp::{ConstraintId, Csp, CspError, Pruning, Value, VariableId};

mod arc_consistency;
mod forward_checking;
mod plain;

#[enum_dispatch]
pub trait Propagate {
    /// Enforces consistency after `assigned` was assigned, or over the whole CSP when `None`.
    /// A deadlock is not an error. `Err` means the CSP was misused, such as naming a variable
    /// that does not exist or is not assigned.
    fn propagate(&self, csp: &mut Csp, assigned: Option<VariableId>) -> Result<Propagation, CspError>;
}

#[enum_dispatch(Propagate)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagator {
    PlainCheck,
    ForwardChecking,
    ArcConsistency,
}

impl Default for Propagator {
    fn default() -> Self {
        ArcConsistency.into()
    }
}

impl Display for Propagator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Propagator::PlainCheck(_) => "plain backtracking",
            Propagator::ForwardChecking(_) => "forward checking",
            Propagator::ArcConsistency(_) => "generalized arc consistency",
        };
        write!(f, "{}", s)
    }
}

/// The outcome of one propagator call
#[derive(Clone, Debug, PartialEq)]
pub struct Propagation {
    consistent: bool,
    pruned: Vec<Pruning>,
}

impl Propagation {
    pub(crate) fn consistent(pruned: Vec<Pruning>) -> Self {
        Self {
            consistent: true,
            pruned,
        }
    }

    pub(crate) fn deadlock(pruned: Vec<Pruning>) -> Self {
        Self {
            consistent: false,
            pruned,
        }
    }

    /// Returns false if the CSP has no solution from its current state
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    pub fn pruned(&self) -> &[Pruning] {
        &self.pruned
    }

    pub fn into_pruned(self) -> Vec<Pruning> {
        self.pruned
    }
}

/// The constraints of a variable reported as newly assigned
fn constraints_of_assigned(csp: &Csp, variable: VariableId) -> Result<Vec<ConstraintId>, CspError> {
    if variable >= csp.variables().len() {
        return Err(CspError::UnknownVariable(variable));
    }
    if !csp.variable(variable).is_assigned() {
        return Err(CspError::NotAssigned(csp.variable(variable).name().to_string()));
    }
    Ok(csp.constraints_with(variable).to_vec())
}

/// Returns true if every variable of the constraint is assigned and the values break it
fn is_violated(csp: &Csp, constraint: ConstraintId) -> bool {
    let constraint = csp.constraint(constraint);
    constraint
        .assigned_values(csp.variables())
        .map_or(false, |values| !constraint.check(&values))
}

/// Prunes every value of an unassigned variable that has no support in the constraint.
/// Returns true if anything was pruned.
fn revise(
    csp: &mut Csp,
    constraint: ConstraintId,
    variable: VariableId,
    pruned: &mut Vec<Pruning>,
) -> Result<bool, CspError> {
    let unsupported: Vec<Value> = {
        let c = csp.constraint(constraint);
        csp.variable(variable)
            .current_domain()
            .filter(|&value| !c.has_support(csp.variables(), variable, value))
            .collect()
    };
    for &value in &unsupported {
        pruned.push(csp.prune(variable, value)?);
    }
    Ok(!unsupported.is_empty())
}
