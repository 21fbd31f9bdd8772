//! Solve Futoshiki puzzles

pub use self::ordering::{InputOrder, MinimumRemainingValues, SelectVariable, VariableOrdering};
pub use self::propagate::{
    ArcConsistency, ForwardChecking, PlainCheck, Propagate, Propagation, Propagator,
};
pub use self::search::{BacktrackingSearch, SearchOutcome, SearchStats, SolutionLimit};
pub use self::trail::Trail;

use anyhow::Result;

use crate::model::ModelKind;
use crate::puzzle::{Grid, Solution};

mod ordering;
mod propagate;
mod search;
mod trail;

pub enum SolveResult {
    /// The puzzle has no solution
    Unsolvable(SearchStats),
    /// Exactly one solution was found. It is the only one if the search was complete.
    Solved(SolvedData),
    /// More than one solution was found - this is not a proper puzzle
    MultipleSolutions(SolvedData),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    /// Returns the solution if exactly one was found
    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }

    /// Every solution found
    pub fn solutions(&self) -> &[Solution] {
        match self {
            SolveResult::Unsolvable(_) => &[],
            SolveResult::Solved(data) | SolveResult::MultipleSolutions(data) => &data.solutions,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SolveResult::Unsolvable(stats) => stats,
            SolveResult::Solved(data) | SolveResult::MultipleSolutions(data) => &data.stats,
        }
    }
}

pub struct SolvedData {
    /// in the order found, never empty
    pub solutions: Vec<Solution>,
    pub stats: SearchStats,
    /// true if the search explored every branch
    pub complete: bool,
}

impl SolvedData {
    /// The first solution found
    pub fn solution(&self) -> &Solution {
        &self.solutions[0]
    }
}

pub struct PuzzleSolver<'a> {
    grid: &'a Grid,
    model: ModelKind,
    propagator: Propagator,
    ordering: VariableOrdering,
    limit: SolutionLimit,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            model: ModelKind::Nary,
            propagator: Propagator::default(),
            ordering: VariableOrdering::default(),
            limit: SolutionLimit::default(),
        }
    }

    pub fn model(&mut self, model: ModelKind) -> &mut Self {
        self.model = model;
        self
    }

    pub fn propagator(&mut self, propagator: Propagator) -> &mut Self {
        self.propagator = propagator;
        self
    }

    pub fn ordering(&mut self, ordering: VariableOrdering) -> &mut Self {
        self.ordering = ordering;
        self
    }

    pub fn limit(&mut self, limit: SolutionLimit) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn solve(&self) -> Result<SolveResult> {
        let mut model = self.model.build(self.grid)?;
        info!(
            "Solving {}x{} puzzle: {} model, {}, {}",
            self.grid.width(),
            self.grid.width(),
            self.model,
            self.propagator,
            self.ordering
        );
        let outcome = BacktrackingSearch::new(model.csp_mut(), self.propagator, self.ordering)
            .limit(self.limit)
            .run()?;
        let solutions: Vec<Solution> = outcome
            .solutions
            .iter()
            .map(|assignment| model.decode(assignment))
            .collect();
        for solution in &solutions {
            debug_assert!(self.grid.verify_solution(solution));
        }
        let data = SolvedData {
            solutions,
            stats: outcome.stats,
            complete: outcome.complete,
        };
        Ok(match data.solutions.len() {
            0 => SolveResult::Unsolvable(data.stats),
            1 => SolveResult::Solved(data),
            _ => SolveResult::MultipleSolutions(data),
        })
    }
}
