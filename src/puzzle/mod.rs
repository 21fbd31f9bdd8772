//! Futoshiki grids

pub use self::error::{GridFromFileError, InvalidGrid, ParseError, ParseGridError, ParseGridErrorType};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;

use crate::collections::square::{Coord, Square};
use crate::csp::Value;

use self::parse::parse_grid;

mod error;
mod parse;

pub type Solution = Square<Value>;

/// An ordering marker between two horizontally adjacent cells, read left to right
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `>`: the left cell is greater
    Greater,
    /// `<`: the left cell is less
    Less,
}

impl Relation {
    pub fn symbol(self) -> char {
        match self {
            Relation::Greater => '>',
            Relation::Less => '<',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '>' => Some(Relation::Greater),
            '<' => Some(Relation::Less),
            _ => None,
        }
    }

    /// Returns true if `left` and `right` are ordered as this marker says
    pub fn holds(self, left: Value, right: Value) -> bool {
        match self {
            Relation::Greater => left > right,
            Relation::Less => left < right,
        }
    }
}

/// One slot of a grid row in its interleaved form: values at even offsets, markers at odd offsets
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entry {
    /// A cell value, 0 for blank
    Value(Value),
    Relation(Option<Relation>),
}

/// An unsolved Futoshiki puzzle: an N×N grid of given values with ordering markers between
/// horizontally adjacent cells
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    // 0 is blank
    values: Square<Value>,
    // the marker between (row, col) and (row, col + 1) is at `row * (width - 1) + col`
    relations: Vec<Option<Relation>>,
}

impl Grid {
    /// Creates a blank grid
    pub fn new(width: usize) -> Result<Self, InvalidGrid> {
        if width == 0 {
            return Err(InvalidGrid::new("the grid is empty"));
        }
        Ok(Self {
            values: Square::with_width_and_value(width, 0),
            relations: vec![None; width * (width - 1)],
        })
    }

    /// Creates a grid from rows in interleaved form. A row has `2N - 1` entries, or `2N` if the
    /// last one is an empty marker.
    pub fn from_rows(rows: &[Vec<Entry>]) -> Result<Self, InvalidGrid> {
        let mut grid = Self::new(rows.len())?;
        let width = grid.width();
        for (row, entries) in rows.iter().enumerate() {
            let entries = match entries.len() {
                len if len == 2 * width - 1 => &entries[..],
                len if len == 2 * width => match entries[len - 1] {
                    Entry::Relation(None) => &entries[..len - 1],
                    _ => {
                        return Err(InvalidGrid::new(format!(
                            "row {} ends with {:?}",
                            row + 1,
                            entries[len - 1]
                        )))
                    }
                },
                len => {
                    return Err(InvalidGrid::new(format!(
                        "row {} has {} entries, expected {}",
                        row + 1,
                        len,
                        2 * width - 1
                    )))
                }
            };
            for (i, &entry) in entries.iter().enumerate() {
                let coord = Coord::new(row, i / 2);
                match (i % 2, entry) {
                    (0, Entry::Value(value)) => grid.set_value(coord, value)?,
                    (1, Entry::Relation(relation)) => grid.set_relation(coord, relation)?,
                    _ => {
                        return Err(InvalidGrid::new(format!(
                            "unexpected {:?} at row {}, offset {}",
                            entry,
                            row + 1,
                            i
                        )))
                    }
                }
            }
        }
        Ok(grid)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GridFromFileError> {
        let s = fs::read_to_string(path)?;
        let grid = s.parse()?;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.values.width()
    }

    /// The given value of a cell, or `None` if the cell is blank
    pub fn value(&self, coord: Coord) -> Option<Value> {
        match self.values[coord] {
            0 => None,
            value => Some(value),
        }
    }

    /// Sets the given value of a cell. 0 makes the cell blank.
    pub fn set_value(&mut self, coord: Coord, value: Value) -> Result<(), InvalidGrid> {
        self.check_coord(coord)?;
        if value < 0 || value as usize > self.width() {
            return Err(InvalidGrid::new(format!(
                "value {} at {:?} is out of range 1..={}",
                value,
                coord,
                self.width()
            )));
        }
        self.values[coord] = value;
        Ok(())
    }

    /// The marker between `coord` and the cell to its right
    pub fn relation(&self, coord: Coord) -> Option<Relation> {
        if coord.col() + 1 >= self.width() {
            return None;
        }
        self.relations[self.relation_index(coord)]
    }

    /// Sets the marker between `coord` and the cell to its right
    pub fn set_relation(&mut self, coord: Coord, relation: Option<Relation>) -> Result<(), InvalidGrid> {
        self.check_coord(coord)?;
        if coord.col() + 1 == self.width() {
            if relation.is_none() {
                return Ok(());
            }
            return Err(InvalidGrid::new(format!("no cell to the right of {:?}", coord)));
        }
        let i = self.relation_index(coord);
        self.relations[i] = relation;
        Ok(())
    }

    /// Every marker, keyed by the coordinate of its left cell
    pub fn relations(&self) -> impl Iterator<Item = (Coord, Relation)> + '_ {
        let gaps = self.width() - 1;
        self.relations
            .iter()
            .enumerate()
            .filter_map(move |(i, relation)| relation.map(|r| (Coord::new(i / gaps, i % gaps), r)))
    }

    /// Returns true if `solution` is a Latin square over 1..=N that keeps every given value and
    /// satisfies every marker
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        let width = self.width();
        if solution.width() != width {
            return false;
        }
        let is_permutation = |values: Vec<Value>| {
            values.iter().all(|&v| v >= 1 && v as usize <= width) && values.iter().unique().count() == width
        };
        let rows_ok = solution.rows().all(|row| is_permutation(row.to_vec()));
        let cols_ok = (0..width).all(|col| is_permutation(solution.col(col).copied().collect()));
        let givens_ok = self
            .values
            .iter_coord()
            .all(|(coord, &value)| value == 0 || solution[coord] == value);
        let relations_ok = self
            .relations()
            .all(|(coord, relation)| relation.holds(solution[coord], solution[coord.right()]));
        rows_ok && cols_ok && givens_ok && relations_ok
    }

    fn check_coord(&self, coord: Coord) -> Result<(), InvalidGrid> {
        if coord.row() >= self.width() || coord.col() >= self.width() {
            return Err(InvalidGrid::new(format!("{:?} is outside the grid", coord)));
        }
        Ok(())
    }

    fn relation_index(&self, coord: Coord) -> usize {
        coord.row() * (self.width() - 1) + coord.col()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.width();
        for row in 0..width {
            for col in 0..width {
                let coord = Coord::new(row, col);
                write!(f, "{}", self.values[coord])?;
                if col + 1 < width {
                    let symbol = self.relation(coord).map_or('.', Relation::symbol);
                    write!(f, " {} ", symbol)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders a solution with the markers of its grid
pub fn format_solution(grid: &Grid, solution: &Solution) -> String {
    solution
        .rows()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    match grid.relation(Coord::new(row, col)) {
                        Some(relation) => format!("{} {}", value, relation.symbol()),
                        None if col + 1 < values.len() => format!("{}  ", value),
                        None => value.to_string(),
                    }
                })
                .join(" ")
        })
        .join("\n")
}
