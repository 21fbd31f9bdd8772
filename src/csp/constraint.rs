use std::fmt;
use std::fmt::{Display, Formatter};

use crate::csp::{Value, Variable, VariableId};
use crate::HashMap;

/// A constraint over an ordered scope of variables, given as the explicit table of value tuples
/// that satisfy it.
///
/// Support checks scan the tuples that carry the queried value at the queried position, so a
/// table costs O(|domain|^arity) to build and to hold. That is fine for puzzle-sized domains and
/// is the limit of this representation.
#[derive(Clone, Debug)]
pub struct Constraint {
    name: String,
    scope: Vec<VariableId>,
    tuples: Vec<Vec<Value>>,
    // (scope position, value) -> indices into `tuples`
    supports: HashMap<(usize, Value), Vec<usize>>,
}

impl Constraint {
    pub fn new(
        name: impl Into<String>,
        scope: Vec<VariableId>,
        tuples: impl IntoIterator<Item = Vec<Value>>,
    ) -> Self {
        let tuples: Vec<Vec<Value>> = tuples.into_iter().collect();
        let mut supports: HashMap<(usize, Value), Vec<usize>> = HashMap::default();
        for (i, tuple) in tuples.iter().enumerate() {
            for (position, &value) in tuple.iter().enumerate() {
                supports.entry((position, value)).or_default().push(i);
            }
        }
        Self {
            name: name.into(),
            scope,
            tuples,
            supports,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn tuples(&self) -> &[Vec<Value>] {
        &self.tuples
    }

    /// Returns true if `values` (one per scope position) is a satisfying tuple
    pub fn check(&self, values: &[Value]) -> bool {
        match values.first() {
            None => self.tuples.iter().any(Vec::is_empty),
            Some(&first) => self
                .supports
                .get(&(0, first))
                .map_or(false, |ids| ids.iter().any(|&i| self.tuples[i] == values)),
        }
    }

    pub fn unassigned_count(&self, variables: &[Variable]) -> usize {
        self.scope
            .iter()
            .filter(|&&id| !variables[id].is_assigned())
            .count()
    }

    pub fn unassigned_variables<'a>(
        &'a self,
        variables: &'a [Variable],
    ) -> impl Iterator<Item = VariableId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(move |&id| !variables[id].is_assigned())
    }

    /// The assigned values of the scope in order, if every scope variable is assigned
    pub fn assigned_values(&self, variables: &[Variable]) -> Option<Vec<Value>> {
        self.scope
            .iter()
            .map(|&id| variables[id].assigned_value())
            .collect()
    }

    /// Returns true if some satisfying tuple has `value` for `variable` and, for every other scope
    /// variable, a value in that variable's current domain
    pub fn has_support(&self, variables: &[Variable], variable: VariableId, value: Value) -> bool {
        let position = match self.scope.iter().position(|&id| id == variable) {
            Some(position) => position,
            None => return false,
        };
        let ids = match self.supports.get(&(position, value)) {
            Some(ids) => ids,
            None => return false,
        };
        ids.iter().any(|&i| {
            self.tuples[i]
                .iter()
                .zip(&self.scope)
                .enumerate()
                .all(|(p, (&v, &id))| p == position || variables[id].admits(v))
        })
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use crate::csp::{Constraint, Variable};

    fn less_than() -> (Vec<Variable>, Constraint) {
        let variables = vec![Variable::new("a", 1..=3), Variable::new("b", 1..=3)];
        let tuples = iproduct!(1..=3, 1..=3)
            .filter(|(a, b)| a < b)
            .map(|(a, b)| vec![a, b]);
        (variables, Constraint::new("a < b", vec![0, 1], tuples))
    }

    #[test]
    fn check() {
        let (_, c) = less_than();
        assert!(c.check(&[1, 2]));
        assert!(!c.check(&[2, 2]));
        assert!(!c.check(&[3, 1]));
        assert_eq!(3, c.tuples().len());
    }

    #[test]
    fn support_follows_current_domains() {
        let (mut variables, c) = less_than();
        assert!(c.has_support(&variables, 0, 2));
        assert!(!c.has_support(&variables, 0, 3));
        variables[1].prune(3).unwrap();
        assert!(!c.has_support(&variables, 0, 2));
        assert!(c.has_support(&variables, 0, 1));
        variables[1].assign(2).unwrap();
        assert!(c.has_support(&variables, 0, 1));
        assert!(!c.has_support(&variables, 0, 2));
    }

    #[test]
    fn unassigned() {
        let (mut variables, c) = less_than();
        assert_eq!(2, c.unassigned_count(&variables));
        assert_eq!(None, c.assigned_values(&variables));
        variables[0].assign(1).unwrap();
        assert_eq!(1, c.unassigned_count(&variables));
        assert_eq!(vec![1], c.unassigned_variables(&variables).collect::<Vec<_>>());
        variables[1].assign(3).unwrap();
        assert_eq!(Some(vec![1, 3]), c.assigned_values(&variables));
        assert_eq!(0, c.unassigned_count(&variables));
    }

    #[test]
    fn unknown_variable_has_no_support() {
        let (variables, c) = less_than();
        assert!(!c.has_support(&variables, 7, 1));
    }
}
