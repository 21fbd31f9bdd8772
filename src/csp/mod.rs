//! Finite-domain constraint satisfaction problems

pub use self::constraint::Constraint;
pub use self::error::CspError;
pub use self::variable::Variable;

use crate::HashSet;

mod constraint;
mod error;
mod variable;

pub type Value = i32;
pub type VariableId = usize;
pub type ConstraintId = usize;

/// A value removed from a variable's current domain. Propagators report these so the search
/// can put them back when it backtracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: VariableId,
    pub value: Value,
}

impl Pruning {
    pub fn new(variable: VariableId, value: Value) -> Self {
        Self { variable, value }
    }
}

/// Owns the variables and constraints of a problem, and indexes the constraints of each variable
#[derive(Clone, Debug)]
pub struct Csp {
    name: String,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    // for every variable, the constraints with the variable in their scope
    variable_constraints: Vec<Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            constraints: Vec::new(),
            variable_constraints: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_variable(&mut self, variable: Variable) -> VariableId {
        let id = self.variables.len();
        self.variables.push(variable);
        self.variable_constraints.push(Vec::new());
        id
    }

    /// Adds a constraint after checking that its scope refers to distinct, known variables and
    /// that every tuple has one value per scope position
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, CspError> {
        let invalid = |message: String| CspError::InvalidConstraint {
            constraint: constraint.name().to_string(),
            message,
        };
        if constraint.scope().is_empty() {
            return Err(invalid("empty scope".into()));
        }
        if let Some(&id) = constraint.scope().iter().find(|&&id| id >= self.variables.len()) {
            return Err(CspError::UnknownVariable(id));
        }
        let distinct: HashSet<VariableId> = constraint.scope().iter().copied().collect();
        if distinct.len() != constraint.arity() {
            return Err(invalid("scope contains a variable more than once".into()));
        }
        if let Some(tuple) = constraint
            .tuples()
            .iter()
            .find(|tuple| tuple.len() != constraint.arity())
        {
            return Err(invalid(format!(
                "tuple {:?} does not match arity {}",
                tuple,
                constraint.arity()
            )));
        }
        let id = self.constraints.len();
        for &variable in constraint.scope() {
            self.variable_constraints[variable].push(id);
        }
        self.constraints.push(constraint);
        Ok(id)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id]
    }

    /// The constraints with `variable` in their scope
    pub fn constraints_with(&self, variable: VariableId) -> &[ConstraintId] {
        &self.variable_constraints[variable]
    }

    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_assigned())
            .map(|(id, _)| id)
    }

    pub fn assign(&mut self, id: VariableId, value: Value) -> Result<(), CspError> {
        self.variable_mut(id)?.assign(value)
    }

    pub fn unassign(&mut self, id: VariableId) -> Result<(), CspError> {
        self.variable_mut(id)?.unassign()
    }

    pub fn prune(&mut self, id: VariableId, value: Value) -> Result<Pruning, CspError> {
        self.variable_mut(id)?.prune(value)?;
        trace!("pruned {} from {}", value, self.variables[id].name());
        Ok(Pruning::new(id, value))
    }

    pub fn restore(&mut self, pruning: Pruning) -> Result<(), CspError> {
        self.variable_mut(pruning.variable)?.restore(pruning.value)
    }

    /// Restores a list of prunings, last first
    pub fn restore_all(&mut self, prunings: &[Pruning]) -> Result<(), CspError> {
        for &pruning in prunings.iter().rev() {
            self.restore(pruning)?;
        }
        Ok(())
    }

    /// The assigned value of every variable, if all are assigned
    pub fn assignment(&self) -> Option<Vec<Value>> {
        self.variables.iter().map(Variable::assigned_value).collect()
    }

    /// Returns true if every variable is assigned and every constraint is satisfied
    pub fn is_satisfied(&self) -> bool {
        self.constraints.iter().all(|c| {
            c.assigned_values(&self.variables)
                .map_or(false, |values| c.check(&values))
        }) && self.variables.iter().all(Variable::is_assigned)
    }

    fn variable_mut(&mut self, id: VariableId) -> Result<&mut Variable, CspError> {
        self.variables
            .get_mut(id)
            .ok_or(CspError::UnknownVariable(id))
    }
}
