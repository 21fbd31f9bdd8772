use crate::csp::{ConstraintId, Csp, CspError, Pruning, VariableId};
use crate::solve::propagate::{constraints_of_assigned, is_violated, revise, Propagate, Propagation};

/// After an assignment, prunes the last unassigned variable of every constraint on the assigned
/// variable down to the values that agree with the assigned ones.
///
/// Before search only unary constraints are checked. Grid models have none, so the initial call
/// is a no-op for them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardChecking;

impl Propagate for ForwardChecking {
    fn propagate(&self, csp: &mut Csp, assigned: Option<VariableId>) -> Result<Propagation, CspError> {
        let constraints: Vec<ConstraintId> = match assigned {
            Some(variable) => constraints_of_assigned(csp, variable)?,
            None => csp
                .constraints()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.arity() == 1)
                .map(|(id, _)| id)
                .collect(),
        };
        let mut pruned = Vec::new();
        for constraint in constraints {
            if !forward_check(csp, constraint, &mut pruned)? {
                return Ok(Propagation::deadlock(pruned));
            }
        }
        Ok(Propagation::consistent(pruned))
    }
}

/// Returns false on deadlock
fn forward_check(
    csp: &mut Csp,
    constraint: ConstraintId,
    pruned: &mut Vec<Pruning>,
) -> Result<bool, CspError> {
    let unassigned: Vec<VariableId> = csp
        .constraint(constraint)
        .unassigned_variables(csp.variables())
        .collect();
    match unassigned.as_slice() {
        [] => {
            if is_violated(csp, constraint) {
                debug!("{} violated", csp.constraint(constraint));
                return Ok(false);
            }
        }
        &[variable] => {
            revise(csp, constraint, variable, pruned)?;
            if csp.variable(variable).domain_size() == 0 {
                debug!("{} wiped out by {}", csp.variable(variable).name(), csp.constraint(constraint));
                return Ok(false);
            }
        }
        _ => {}
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::collections::square::Coord;
    use crate::csp::{Constraint, Csp, Pruning, Variable};
    use crate::model::ModelKind;
    use crate::solve::propagate::tests::{domains, model};
    use crate::solve::propagate::{ArcConsistency, ForwardChecking, Propagate};

    #[test]
    fn prunes_last_open_variable() {
        let mut model = model(ModelKind::Binary, "0 > 0 . 0\n0 . 0 . 0\n0 . 0 . 0");
        let (a, b) = (model.variable_at(Coord::new(0, 0)), model.variable_at(Coord::new(0, 1)));
        let csp = model.csp_mut();
        csp.assign(a, 2).unwrap();
        let propagation = ForwardChecking.propagate(csp, Some(a)).unwrap();
        assert!(propagation.is_consistent());
        // b loses 2 and 3 through the marker. The others in the row and column lose 2.
        assert_eq!(vec![1], csp.variable(b).current_domain().collect::<Vec<_>>());
        assert_eq!(&Pruning::new(b, 2), &propagation.pruned()[0]);
        assert_eq!(&Pruning::new(b, 3), &propagation.pruned()[1]);
        assert_eq!(5, propagation.pruned().len());
    }

    #[test]
    fn leaves_constraints_with_several_open_variables() {
        let mut model = model(ModelKind::Nary, "0 . 0 . 0\n0 . 0 . 0\n0 . 0 . 0");
        let a = model.variable_at(Coord::new(0, 0));
        let csp = model.csp_mut();
        csp.assign(a, 1).unwrap();
        let propagation = ForwardChecking.propagate(csp, Some(a)).unwrap();
        assert!(propagation.is_consistent());
        assert!(propagation.pruned().is_empty());
    }

    #[test]
    fn wipeout_is_deadlock_and_keeps_prunings() {
        let mut model = model(ModelKind::Binary, "0 > 0\n0 . 0");
        let (a, b) = (model.variable_at(Coord::new(0, 0)), model.variable_at(Coord::new(0, 1)));
        let csp = model.csp_mut();
        csp.assign(a, 1).unwrap();
        let propagation = ForwardChecking.propagate(csp, Some(a)).unwrap();
        assert!(!propagation.is_consistent());
        assert_eq!(&[Pruning::new(b, 1), Pruning::new(b, 2)], propagation.pruned());
        assert_eq!(0, csp.variable(b).domain_size());
        csp.restore_all(propagation.pruned()).unwrap();
        assert_eq!(2, csp.variable(b).domain_size());
    }

    #[test]
    fn initial_call_checks_unary_constraints() {
        let mut csp = Csp::new("unary");
        let x = csp.add_variable(Variable::new("x", 1..=4));
        csp.add_constraint(Constraint::new("x even", vec![x], vec![vec![2], vec![4]]))
            .unwrap();
        let propagation = ForwardChecking.propagate(&mut csp, None).unwrap();
        assert!(propagation.is_consistent());
        assert_eq!(vec![2, 4], csp.variable(x).current_domain().collect::<Vec<_>>());
    }

    #[test]
    fn initial_call_is_noop_on_grids() {
        let mut model = model(ModelKind::Nary, "0 > 0 . 0\n0 . 2 . 0\n0 . 0 > 0");
        let before = domains(model.csp());
        let propagation = ForwardChecking.propagate(model.csp_mut(), None).unwrap();
        assert!(propagation.is_consistent());
        assert_eq!(before, domains(model.csp()));
    }

    #[test]
    fn prunings_are_also_made_by_arc_consistency() {
        let grid = "0 > 0 . 0 . 0\n0 . 0 . 0 . 0\n0 . 0 . 0 < 0\n0 . 0 . 0 . 3";
        for kind in vec![ModelKind::Binary, ModelKind::Nary] {
            let mut fc_model = model(kind, grid);
            let mut gac_model = model(kind, grid);
            let cell = fc_model.variable_at(Coord::new(0, 1));
            fc_model.csp_mut().assign(cell, 2).unwrap();
            gac_model.csp_mut().assign(cell, 2).unwrap();
            let fc = ForwardChecking.propagate(fc_model.csp_mut(), Some(cell)).unwrap();
            let gac = ArcConsistency.propagate(gac_model.csp_mut(), Some(cell)).unwrap();
            assert!(!fc.pruned().is_empty());
            for pruning in fc.pruned() {
                assert!(gac.pruned().contains(pruning), "{:?}", pruning);
            }
        }
    }
}
