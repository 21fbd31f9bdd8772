use crate::collections::square::Coord;
use crate::csp::{Constraint, ConstraintId, Csp, CspError, Value, VariableId};
use crate::model::{add_pair_constraint, cell_variables, FutoshikiModel};
use crate::puzzle::Grid;

/// Builds a model with one all-different constraint per row and per column, and a binary
/// constraint for every marker
pub fn nary_model(grid: &Grid) -> Result<FutoshikiModel, CspError> {
    let width = grid.width();
    let mut csp = Csp::new(format!("futoshiki {}x{} n-ary", width, width));
    let cells = cell_variables(grid, &mut csp)?;
    for row in 0..width {
        let scope = (0..width).map(|col| cells[Coord::new(row, col)]).collect();
        add_all_different(&mut csp, format!("row {}", row + 1), scope)?;
    }
    for col in 0..width {
        let scope = cells.col(col).copied().collect();
        add_all_different(&mut csp, format!("column {}", col + 1), scope)?;
    }
    for (coord, relation) in grid.relations() {
        add_pair_constraint(&mut csp, &cells, coord, coord.right(), Some(relation))?;
    }
    debug!(
        "n-ary model: {} variables, {} constraints",
        csp.variables().len(),
        csp.constraints().len()
    );
    Ok(FutoshikiModel::new(csp, cells))
}

fn add_all_different(
    csp: &mut Csp,
    name: String,
    scope: Vec<VariableId>,
) -> Result<ConstraintId, CspError> {
    let domains: Vec<Vec<Value>> = scope
        .iter()
        .map(|&id| csp.variable(id).current_domain().collect())
        .collect();
    let tuples = distinct_tuples(&domains);
    trace!("{}: {} tuples", name, tuples.len());
    csp.add_constraint(Constraint::new(name, scope, tuples))
}

/// Every tuple drawn from `domains` (one value per domain) with no value repeated
fn distinct_tuples(domains: &[Vec<Value>]) -> Vec<Vec<Value>> {
    fn extend(domains: &[Vec<Value>], tuple: &mut Vec<Value>, tuples: &mut Vec<Vec<Value>>) {
        let domain = match domains.get(tuple.len()) {
            Some(domain) => domain,
            None => {
                tuples.push(tuple.clone());
                return;
            }
        };
        for &value in domain {
            if tuple.contains(&value) {
                continue;
            }
            tuple.push(value);
            extend(domains, tuple, tuples);
            tuple.pop();
        }
    }

    let mut tuples = Vec::new();
    extend(domains, &mut Vec::with_capacity(domains.len()), &mut tuples);
    tuples
}
