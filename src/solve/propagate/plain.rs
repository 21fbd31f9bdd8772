use crate::csp::{Csp, CspError, VariableId};
use crate::solve::propagate::{constraints_of_assigned, is_violated, Propagate, Propagation};

/// Checks the constraints of the assigned variable once all of their variables are assigned.
/// Never prunes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainCheck;

impl Propagate for PlainCheck {
    fn propagate(&self, csp: &mut Csp, assigned: Option<VariableId>) -> Result<Propagation, CspError> {
        let variable = match assigned {
            Some(variable) => variable,
            None => return Ok(Propagation::consistent(Vec::new())),
        };
        for constraint in constraints_of_assigned(csp, variable)? {
            if is_violated(csp, constraint) {
                debug!("{} violated", csp.constraint(constraint));
                return Ok(Propagation::deadlock(Vec::new()));
            }
        }
        Ok(Propagation::consistent(Vec::new()))
    }
}
