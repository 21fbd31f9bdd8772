use crate::csp::{Csp, CspError, Pruning};

/// The prunings made along the current search path, split into one level per propagator call.
/// Popping a level restores its prunings last first.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    prunings: Vec<Pruning>,
    // start of each level in `prunings`
    levels: Vec<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a level holding `prunings`
    pub fn push_level(&mut self, prunings: impl IntoIterator<Item = Pruning>) {
        self.levels.push(self.prunings.len());
        self.prunings.extend(prunings);
    }

    /// Adds a pruning to the top level
    pub fn record(&mut self, pruning: Pruning) {
        if self.levels.is_empty() {
            self.levels.push(0);
        }
        self.prunings.push(pruning);
    }

    /// Closes the top level and restores its prunings. Returns how many were restored.
    pub fn pop_level(&mut self, csp: &mut Csp) -> Result<usize, CspError> {
        let start = match self.levels.pop() {
            Some(start) => start,
            None => return Ok(0),
        };
        let count = self.prunings.len() - start;
        csp.restore_all(&self.prunings[start..])?;
        self.prunings.truncate(start);
        Ok(count)
    }

    /// Pops every level
    pub fn unwind(&mut self, csp: &mut Csp) -> Result<(), CspError> {
        while !self.levels.is_empty() {
            self.pop_level(csp)?;
        }
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn len(&self) -> usize {
        self.prunings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prunings.is_empty()
    }
}
