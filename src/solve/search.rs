use std::fmt;
use std::fmt::{Display, Formatter};

use crate::csp::{Csp, CspError, Value, VariableId};
use crate::solve::ordering::{SelectVariable, VariableOrdering};
use crate::solve::propagate::{Propagate, Propagation, Propagator};
use crate::solve::trail::Trail;

/// When to stop searching
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionLimit {
    First,
    AtMost(usize),
    All,
}

impl SolutionLimit {
    fn is_reached(self, found: usize) -> bool {
        match self {
            SolutionLimit::First => found >= 1,
            SolutionLimit::AtMost(n) => found >= n.max(1),
            SolutionLimit::All => false,
        }
    }
}

impl Default for SolutionLimit {
    fn default() -> Self {
        SolutionLimit::First
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// values tried on a variable
    pub decisions: u64,
    pub deadlocks: u64,
    pub prunings: u64,
    pub solutions: u64,
    pub max_depth: u32,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} decisions, {} deadlocks, {} prunings, {} solutions, max depth {}",
            self.decisions, self.deadlocks, self.prunings, self.solutions, self.max_depth
        )
    }
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// every solution found, indexed by variable
    pub solutions: Vec<Vec<Value>>,
    pub stats: SearchStats,
    /// true if the whole search space was explored
    pub complete: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Depth-first backtracking search over a CSP.
///
/// Every propagator call gets its own trail level, popped when the search backtracks past it.
/// If the search runs to completion the CSP ends up exactly as it started. If it stops at the
/// solution limit, the variables are left assigned to the last solution found.
pub struct BacktrackingSearch<'a> {
    csp: &'a mut Csp,
    propagator: Propagator,
    ordering: VariableOrdering,
    limit: SolutionLimit,
    trail: Trail,
    stats: SearchStats,
    solutions: Vec<Vec<Value>>,
}

impl<'a> BacktrackingSearch<'a> {
    pub fn new(csp: &'a mut Csp, propagator: Propagator, ordering: VariableOrdering) -> Self {
        Self {
            csp,
            propagator,
            ordering,
            limit: SolutionLimit::default(),
            trail: Trail::new(),
            stats: SearchStats::default(),
            solutions: Vec::new(),
        }
    }

    pub fn limit(mut self, limit: SolutionLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn run(mut self) -> Result<SearchOutcome, CspError> {
        debug!(
            "Searching {} with {} and {}",
            self.csp.name(),
            self.propagator,
            self.ordering
        );
        let propagation = self.propagator.propagate(self.csp, None)?;
        let flow = if self.enter(propagation) {
            self.search(1)?
        } else {
            debug!("Initial propagation failed");
            Flow::Continue
        };
        let complete = flow == Flow::Continue;
        if complete {
            self.trail.unwind(self.csp)?;
        }
        info!("Search finished: {}", self.stats);
        Ok(SearchOutcome {
            solutions: self.solutions,
            stats: self.stats,
            complete,
        })
    }

    fn search(&mut self, depth: u32) -> Result<Flow, CspError> {
        let variable = match self.ordering.select_variable(self.csp) {
            Some(variable) => variable,
            None => return Ok(self.on_complete_assignment()),
        };
        self.stats.max_depth = self.stats.max_depth.max(depth);
        let values: Vec<Value> = self.csp.variable(variable).current_domain().collect();
        debug!(
            "Branching on {} (depth={}, values={})",
            self.csp.variable(variable).name(),
            depth,
            values.len()
        );
        for value in values {
            if self.try_value(variable, value, depth)? == Flow::Stop {
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn try_value(&mut self, variable: VariableId, value: Value, depth: u32) -> Result<Flow, CspError> {
        self.stats.decisions += 1;
        trace!("Trying {} = {}", self.csp.variable(variable).name(), value);
        self.csp.assign(variable, value)?;
        let propagation = self.propagator.propagate(self.csp, Some(variable))?;
        if self.enter(propagation) && self.search(depth + 1)? == Flow::Stop {
            return Ok(Flow::Stop);
        }
        self.trail.pop_level(self.csp)?;
        self.csp.unassign(variable)?;
        Ok(Flow::Continue)
    }

    /// Puts the prunings of a propagator call on the trail. Returns false on deadlock.
    fn enter(&mut self, propagation: Propagation) -> bool {
        let consistent = propagation.is_consistent();
        if !consistent {
            self.stats.deadlocks += 1;
        }
        let pruned = propagation.into_pruned();
        self.stats.prunings += pruned.len() as u64;
        self.trail.push_level(pruned);
        consistent
    }

    fn on_complete_assignment(&mut self) -> Flow {
        let assignment = match self.csp.assignment() {
            Some(assignment) if self.csp.is_satisfied() => assignment,
            _ => {
                self.stats.deadlocks += 1;
                return Flow::Continue;
            }
        };
        self.solutions.push(assignment);
        self.stats.solutions += 1;
        debug!("Found solution #{}", self.solutions.len());
        if self.limit.is_reached(self.solutions.len()) {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}
