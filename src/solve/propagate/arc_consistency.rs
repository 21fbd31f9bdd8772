use crate::collections::LinkedAHashSet;
use crate::csp::{ConstraintId, Csp, CspError, VariableId};
use crate::solve::propagate::{constraints_of_assigned, revise, Propagate, Propagation};

/// Generalized arc consistency.
///
/// Keeps a queue of dirty constraints. For every variable of a dirty constraint, each value without
/// a supporting tuple over the current domains is pruned, and the other constraints on that variable
/// become dirty. Stops at a fixpoint or at the first wipeout.
///
/// Assigned variables are never pruned. If an assigned value loses its support the call ends in
/// deadlock, same as a wipeout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArcConsistency;

impl Propagate for ArcConsistency {
    fn propagate(&self, csp: &mut Csp, assigned: Option<VariableId>) -> Result<Propagation, CspError> {
        let mut dirty: LinkedAHashSet<ConstraintId> = match assigned {
            Some(variable) => constraints_of_assigned(csp, variable)?.into_iter().collect(),
            None => (0..csp.constraints().len()).collect(),
        };
        let mut pruned = Vec::new();
        while let Some(constraint) = dirty.pop_front() {
            let scope = csp.constraint(constraint).scope().to_vec();
            for variable in scope {
                if let Some(value) = csp.variable(variable).assigned_value() {
                    if !csp.constraint(constraint).has_support(csp.variables(), variable, value) {
                        debug!(
                            "{} = {} has no support in {}",
                            csp.variable(variable).name(),
                            value,
                            csp.constraint(constraint)
                        );
                        return Ok(Propagation::deadlock(pruned));
                    }
                    continue;
                }
                if !revise(csp, constraint, variable, &mut pruned)? {
                    continue;
                }
                if csp.variable(variable).domain_size() == 0 {
                    debug!("{} wiped out by {}", csp.variable(variable).name(), csp.constraint(constraint));
                    return Ok(Propagation::deadlock(pruned));
                }
                dirty.extend(
                    csp.constraints_with(variable)
                        .iter()
                        .copied()
                        .filter(|&other| other != constraint),
                );
            }
        }
        Ok(Propagation::consistent(pruned))
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::square::Coord;
    use crate::csp::Csp;
    use crate::model::ModelKind;
    use crate::solve::propagate::tests::{domains, model};
    use crate::solve::propagate::{ArcConsistency, Propagate};

    fn domain(csp: &Csp, variable: usize) -> Vec<i32> {
        csp.variable(variable).current_domain().collect()
    }

    /// every remaining value of every variable has a support in every one of its constraints
    fn assert_fixpoint(csp: &Csp) {
        for constraint in csp.constraints() {
            for &variable in constraint.scope() {
                for value in csp.variable(variable).current_domain() {
                    assert!(
                        constraint.has_support(csp.variables(), variable, value),
                        "{} = {} unsupported in {}",
                        csp.variable(variable).name(),
                        value,
                        constraint
                    );
                }
            }
        }
    }

    #[test]
    fn initial_call_prunes_given_and_marker() {
        let grid = "0 > 3 . 0 . 0\n0 . 0 . 0 . 0\n0 . 0 . 0 . 0\n0 . 0 . 0 . 0";
        for kind in vec![ModelKind::Binary, ModelKind::Nary] {
            let mut model = model(kind, grid);
            let cell = |row, col| model.variable_at(Coord::new(row, col));
            let (a, c, d) = (cell(0, 0), cell(0, 2), cell(0, 3));
            let csp = model.csp_mut();
            let propagation = ArcConsistency.propagate(csp, None).unwrap();
            assert!(propagation.is_consistent());
            assert_eq!(vec![4], domain(csp, a));
            assert_eq!(vec![1, 2], domain(csp, c));
            assert_eq!(vec![1, 2], domain(csp, d));
            assert_fixpoint(csp);
        }
    }

    #[test]
    fn initial_call_prunes_marker_without_given() {
        let grid = "0 > 0 . 0 . 0\n0 . 0 . 0 . 0\n0 . 0 . 0 . 0\n0 . 0 . 0 . 0";
        for kind in vec![ModelKind::Binary, ModelKind::Nary] {
            let mut model = model(kind, grid);
            let (a, b) = (model.variable_at(Coord::new(0, 0)), model.variable_at(Coord::new(0, 1)));
            let csp = model.csp_mut();
            let propagation = ArcConsistency.propagate(csp, None).unwrap();
            assert!(propagation.is_consistent());
            assert_eq!(vec![2, 3, 4], domain(csp, a));
            assert_eq!(vec![1, 2, 3], domain(csp, b));
            assert_eq!(2, propagation.pruned().len());
        }
    }

    #[test]
    fn fixpoint_after_assignment() {
        let grid = "0 . 0 < 0 . 3\n0 > 0 < 0 > 0\n0 . 4 . 0 < 0\n0 < 0 > 0 . 0";
        for kind in vec![ModelKind::Binary, ModelKind::Nary] {
            let mut model = model(kind, grid);
            let cell = model.variable_at(Coord::new(0, 0));
            let csp = model.csp_mut();
            assert!(ArcConsistency.propagate(csp, None).unwrap().is_consistent());
            assert_fixpoint(csp);
            csp.assign(cell, 2).unwrap();
            assert!(ArcConsistency.propagate(csp, Some(cell)).unwrap().is_consistent());
            assert_fixpoint(csp);
        }
    }

    #[test]
    fn cascade_reaches_constraints_without_the_assigned_variable() {
        // (0,0) = 1 leaves 2 for its neighbors, which leaves 1 for (1,1)
        let mut model = model(ModelKind::Binary, "0 . 0\n0 . 0");
        let cell = |row, col| model.variable_at(Coord::new(row, col));
        let (a, c, d) = (cell(0, 0), cell(1, 0), cell(1, 1));
        let csp = model.csp_mut();
        csp.assign(a, 1).unwrap();
        let propagation = ArcConsistency.propagate(csp, Some(a)).unwrap();
        assert!(propagation.is_consistent());
        assert_eq!(vec![2], domain(csp, c));
        assert_eq!(vec![1], domain(csp, d));
        assert_eq!(3, propagation.pruned().len());
    }

    #[test]
    fn unsupported_given_is_deadlock() {
        let mut model = model(ModelKind::Nary, "1 > 0 . 0\n0 . 0 . 0\n0 . 0 . 0");
        let before = domains(model.csp());
        let csp = model.csp_mut();
        let propagation = ArcConsistency.propagate(csp, None).unwrap();
        assert!(!propagation.is_consistent());
        csp.restore_all(propagation.pruned()).unwrap();
        assert_eq!(before, domains(csp));
    }
}
