//! Encode Futoshiki grids as CSPs
//!
//! Both encodings have one variable per cell with domain `1..=N`, assigned up front when the grid
//! gives the cell a value. They accept exactly the same complete assignments and differ only in
//! how the rows and columns are constrained.

pub use self::binary::binary_model;
pub use self::nary::nary_model;

use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::iproduct;

use crate::collections::square::{Coord, Square};
use crate::csp::{Constraint, ConstraintId, Csp, CspError, Value, Variable, VariableId};
use crate::puzzle::{Grid, Relation, Solution};

mod binary;
mod nary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    /// A not-equal constraint for every pair of cells in a row or column
    Binary,
    /// An all-different constraint for every row and column
    Nary,
}

impl ModelKind {
    pub fn build(self, grid: &Grid) -> Result<FutoshikiModel, CspError> {
        match self {
            ModelKind::Binary => binary_model(grid),
            ModelKind::Nary => nary_model(grid),
        }
    }
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelKind::Binary => "binary",
            ModelKind::Nary => "n-ary",
        };
        write!(f, "{}", s)
    }
}

/// A CSP encoding of a grid, with the variable of every cell
#[derive(Clone, Debug)]
pub struct FutoshikiModel {
    csp: Csp,
    cells: Square<VariableId>,
}

impl FutoshikiModel {
    fn new(csp: Csp, cells: Square<VariableId>) -> Self {
        Self { csp, cells }
    }

    pub fn csp(&self) -> &Csp {
        &self.csp
    }

    pub fn csp_mut(&mut self) -> &mut Csp {
        &mut self.csp
    }

    /// The variable of every cell, row-major
    pub fn cells(&self) -> &Square<VariableId> {
        &self.cells
    }

    pub fn variable_at(&self, coord: Coord) -> VariableId {
        self.cells[coord]
    }

    /// Reads the grid back from the assigned values, if every cell is assigned
    pub fn solution(&self) -> Option<Solution> {
        let values = self
            .cells
            .iter()
            .map(|&id| self.csp.variable(id).assigned_value())
            .collect::<Option<Vec<_>>>()?;
        let mut solution = Square::with_width_and_value(self.cells.width(), 0);
        for (i, value) in values.into_iter().enumerate() {
            solution[Coord::from_index(i, self.cells.width())] = value;
        }
        Some(solution)
    }

    /// Lays out a full assignment (indexed by variable) as a grid
    pub fn decode(&self, assignment: &[Value]) -> Solution {
        self.cells.map(|&id| assignment[id])
    }

    pub fn into_parts(self) -> (Csp, Square<VariableId>) {
        (self.csp, self.cells)
    }
}

/// Adds a variable for every cell, assigning the given values
fn cell_variables(grid: &Grid, csp: &mut Csp) -> Result<Square<VariableId>, CspError> {
    let width = grid.width();
    let mut cells = Square::with_width_and_value(width, 0);
    for row in 0..width {
        for col in 0..width {
            let coord = Coord::new(row, col);
            let mut variable = Variable::new(format!("V({},{})", row + 1, col + 1), 1..=width as Value);
            if let Some(value) = grid.value(coord) {
                variable.assign(value)?;
            }
            cells[coord] = csp.add_variable(variable);
        }
    }
    Ok(cells)
}

/// Adds a binary constraint between two cells: unequal, and ordered by `relation` if present.
/// Tuples are taken from the current domains, so given cells only pair with their value.
fn add_pair_constraint(
    csp: &mut Csp,
    cells: &Square<VariableId>,
    a: Coord,
    b: Coord,
    relation: Option<Relation>,
) -> Result<ConstraintId, CspError> {
    let (x, y) = (cells[a], cells[b]);
    let x_domain: Vec<Value> = csp.variable(x).current_domain().collect();
    let y_domain: Vec<Value> = csp.variable(y).current_domain().collect();
    let tuples = iproduct!(x_domain, y_domain)
        .filter(|&(u, v)| u != v && relation.map_or(true, |r| r.holds(u, v)))
        .map(|(u, v)| vec![u, v])
        .collect::<Vec<_>>();
    let symbol = relation.map_or_else(|| "!=".to_string(), |r| r.symbol().to_string());
    let name = format!("{} {} {}", csp.variable(x).name(), symbol, csp.variable(y).name());
    csp.add_constraint(Constraint::new(name, vec![x, y], tuples))
}
