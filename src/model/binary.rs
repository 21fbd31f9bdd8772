use itertools::Itertools;

use crate::collections::square::Coord;
use crate::csp::{Csp, CspError};
use crate::model::{add_pair_constraint, cell_variables, FutoshikiModel};
use crate::puzzle::Grid;

/// Builds a model with a binary constraint between every pair of cells that share a row or a
/// column. A marker between two adjacent cells of a row is folded into their pair.
pub fn binary_model(grid: &Grid) -> Result<FutoshikiModel, CspError> {
    let width = grid.width();
    let mut csp = Csp::new(format!("futoshiki {}x{} binary", width, width));
    let cells = cell_variables(grid, &mut csp)?;
    for row in 0..width {
        for (i, j) in (0..width).tuple_combinations() {
            let a = Coord::new(row, i);
            // markers only sit between neighbors
            let relation = if j == i + 1 { grid.relation(a) } else { None };
            add_pair_constraint(&mut csp, &cells, a, Coord::new(row, j), relation)?;
        }
    }
    for col in 0..width {
        for (i, j) in (0..width).tuple_combinations() {
            add_pair_constraint(&mut csp, &cells, Coord::new(i, col), Coord::new(j, col), None)?;
        }
    }
    debug!(
        "binary model: {} variables, {} constraints",
        csp.variables().len(),
        csp.constraints().len()
    );
    Ok(FutoshikiModel::new(csp, cells))
}

#[cfg(test)]
mod tests {
    use crate::model::binary_model;
    use crate::puzzle::Grid;

    #[test]
    fn pair_for_every_row_and_column_pair() {
        let model = binary_model(&Grid::new(3).unwrap()).unwrap();
        let csp = model.csp();
        assert_eq!(18, csp.constraints().len());
        assert!(csp.constraints().iter().all(|c| c.arity() == 2 && c.tuples().len() == 6));
        // 2 row pairs and 2 column pairs per cell
        assert!((0..9).all(|v| csp.constraints_with(v).len() == 4));
    }

    #[test]
    fn marker_orders_adjacent_pair_only() {
        let grid: Grid = "0 > 0 . 0\n0 . 0 . 0\n0 . 0 . 0".parse().unwrap();
        let model = binary_model(&grid).unwrap();
        let csp = model.csp();
        let adjacent = &csp.constraints()[0];
        assert_eq!("V(1,1) > V(1,2)", adjacent.name());
        assert_eq!(&[vec![2, 1], vec![3, 1], vec![3, 2]], adjacent.tuples());
        let apart = &csp.constraints()[1];
        assert_eq!("V(1,1) != V(1,3)", apart.name());
        assert_eq!(6, apart.tuples().len());
    }

    #[test]
    fn given_value_narrows_tuples() {
        let grid: Grid = "2 > 0 . 0\n0 . 0 . 0\n0 . 0 . 0".parse().unwrap();
        let model = binary_model(&grid).unwrap();
        let csp = model.csp();
        assert_eq!(&[vec![2, 1]], csp.constraints()[0].tuples());
        assert_eq!(&[vec![2, 1], vec![2, 3]], csp.constraints()[1].tuples());
    }
}
