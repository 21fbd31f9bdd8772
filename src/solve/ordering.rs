//! Choose the next variable to branch on

use std::fmt;
use std::fmt::{Display, Formatter};

use enum_dispatch::enum_dispatch;

use crate::csp::{Csp, VariableId};

#[enum_dispatch]
pub trait SelectVariable {
    /// The next unassigned variable to branch on, or `None` if every variable is assigned
    fn select_variable(&self, csp: &Csp) -> Option<VariableId>;
}

#[enum_dispatch(SelectVariable)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableOrdering {
    MinimumRemainingValues,
    InputOrder,
}

impl Default for VariableOrdering {
    fn default() -> Self {
        MinimumRemainingValues.into()
    }
}

impl Display for VariableOrdering {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            VariableOrdering::MinimumRemainingValues(_) => "minimum remaining values",
            VariableOrdering::InputOrder(_) => "input order",
        };
        write!(f, "{}", s)
    }
}

/// Fail first: the unassigned variable with the smallest current domain. Ties go to the lowest id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinimumRemainingValues;

impl SelectVariable for MinimumRemainingValues {
    fn select_variable(&self, csp: &Csp) -> Option<VariableId> {
        csp.unassigned_variables()
            .min_by_key(|&id| csp.variable(id).domain_size())
    }
}

/// The first unassigned variable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOrder;

impl SelectVariable for InputOrder {
    fn select_variable(&self, csp: &Csp) -> Option<VariableId> {
        csp.unassigned_variables().next()
    }
}

#[cfg(test)]
mod tests {
    use crate::csp::{Csp, Variable};
    use crate::solve::ordering::{InputOrder, MinimumRemainingValues, SelectVariable, VariableOrdering};

    fn csp() -> Csp {
        let mut csp = Csp::new("ordering");
        csp.add_variable(Variable::new("a", 1..=4));
        csp.add_variable(Variable::new("b", 1..=4));
        csp.add_variable(Variable::new("c", 1..=4));
        csp
    }

    #[test]
    fn smallest_domain_first() {
        let mut csp = csp();
        csp.prune(2, 1).unwrap();
        assert_eq!(Some(2), MinimumRemainingValues.select_variable(&csp));
        csp.prune(1, 1).unwrap();
        csp.prune(1, 2).unwrap();
        assert_eq!(Some(1), MinimumRemainingValues.select_variable(&csp));
    }

    #[test]
    fn ties_go_to_first_variable() {
        let mut csp = csp();
        assert_eq!(Some(0), MinimumRemainingValues.select_variable(&csp));
        csp.prune(1, 4).unwrap();
        csp.prune(2, 4).unwrap();
        assert_eq!(Some(1), MinimumRemainingValues.select_variable(&csp));
    }

    #[test]
    fn skips_assigned_variables() {
        let mut csp = csp();
        csp.prune(1, 1).unwrap();
        csp.prune(1, 2).unwrap();
        csp.assign(1, 3).unwrap();
        csp.assign(0, 2).unwrap();
        // an assigned variable counts as one value but is never chosen
        assert_eq!(Some(2), MinimumRemainingValues.select_variable(&csp));
        assert_eq!(Some(2), InputOrder.select_variable(&csp));
        csp.assign(2, 1).unwrap();
        assert_eq!(None, VariableOrdering::default().select_variable(&csp));
        assert_eq!(None, VariableOrdering::from(InputOrder).select_variable(&csp));
    }
}
