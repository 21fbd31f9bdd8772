use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::collections::RangeSet;
use crate::csp::{CspError, Value};

/// A finite-domain variable.
///
/// The original domain never changes. The current domain is the original domain minus the values
/// pruned so far. While the variable is assigned, its current domain is seen as only the assigned
/// value; the pruned set underneath is kept as-is so unassigning brings the old view back.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    domain: Vec<Value>,
    // indexed by position in `domain`
    current: RangeSet,
    assigned: Option<Value>,
}

impl Variable {
    pub fn new(name: impl Into<String>, domain: impl IntoIterator<Item = Value>) -> Self {
        let domain: Vec<Value> = domain.into_iter().sorted().dedup().collect();
        let current = RangeSet::with_all(domain.len());
        Self {
            name: name.into(),
            domain,
            current,
            assigned: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn original_domain(&self) -> &[Value] {
        &self.domain
    }

    /// Values of the current domain in ascending order
    pub fn current_domain(&self) -> impl Iterator<Item = Value> + '_ {
        let assigned = self.assigned;
        let unpruned = self
            .current
            .iter()
            .map(move |i| self.domain[i])
            .filter(move |_| assigned.is_none());
        assigned.into_iter().chain(unpruned)
    }

    pub fn domain_size(&self) -> usize {
        if self.assigned.is_some() {
            1
        } else {
            self.current.len()
        }
    }

    /// Returns true if `value` is in the current domain
    pub fn admits(&self, value: Value) -> bool {
        match self.assigned {
            Some(assigned) => assigned == value,
            None => self.is_unpruned(value),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    pub fn assigned_value(&self) -> Option<Value> {
        self.assigned
    }

    pub fn assign(&mut self, value: Value) -> Result<(), CspError> {
        if self.assigned.is_some() {
            return Err(CspError::AlreadyAssigned(self.name.clone()));
        }
        let i = self.position(value)?;
        if !self.current.contains(i) {
            return Err(CspError::AssignPruned {
                variable: self.name.clone(),
                value,
            });
        }
        self.assigned = Some(value);
        Ok(())
    }

    pub fn unassign(&mut self) -> Result<(), CspError> {
        match self.assigned.take() {
            Some(_) => Ok(()),
            None => Err(CspError::NotAssigned(self.name.clone())),
        }
    }

    /// Removes `value` from the current domain. Pruning a value twice without restoring it in
    /// between is rejected.
    pub fn prune(&mut self, value: Value) -> Result<(), CspError> {
        let i = self.position(value)?;
        if !self.current.remove(i) {
            return Err(CspError::AlreadyPruned {
                variable: self.name.clone(),
                value,
            });
        }
        Ok(())
    }

    /// Puts a pruned value back into the current domain
    pub fn restore(&mut self, value: Value) -> Result<(), CspError> {
        let i = self.position(value)?;
        if !self.current.insert(i) {
            return Err(CspError::NotPruned {
                variable: self.name.clone(),
                value,
            });
        }
        Ok(())
    }

    fn is_unpruned(&self, value: Value) -> bool {
        self.domain
            .binary_search(&value)
            .map_or(false, |i| self.current.contains(i))
    }

    fn position(&self, value: Value) -> Result<usize, CspError> {
        self.domain
            .binary_search(&value)
            .map_err(|_| CspError::NotInDomain {
                variable: self.name.clone(),
                value,
            })
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.assigned {
            Some(value) => write!(f, "{} = {}", self.name, value),
            None => write!(
                f,
                "{} in {{{}}}",
                self.name,
                self.current_domain().join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::csp::{CspError, Variable};

    fn var() -> Variable {
        Variable::new("x", 1..=4)
    }

    #[test]
    fn domain_is_sorted_and_deduplicated() {
        let v = Variable::new("x", vec![3, 1, 3, 2]);
        assert_eq!(&[1, 2, 3], v.original_domain());
        assert_eq!(vec![1, 2, 3], v.current_domain().collect::<Vec<_>>());
    }

    #[test]
    fn prune_restore() {
        let mut v = var();
        v.prune(2).unwrap();
        assert_eq!(vec![1, 3, 4], v.current_domain().collect::<Vec<_>>());
        assert_eq!(3, v.domain_size());
        assert!(!v.admits(2));
        v.restore(2).unwrap();
        assert_eq!(4, v.domain_size());
        assert!(v.admits(2));
    }

    #[test]
    fn prune_twice_is_rejected() {
        let mut v = var();
        v.prune(2).unwrap();
        assert_eq!(
            Err(CspError::AlreadyPruned {
                variable: "x".into(),
                value: 2
            }),
            v.prune(2)
        );
    }

    #[test]
    fn restore_without_prune_is_rejected() {
        let mut v = var();
        assert!(matches!(v.restore(1), Err(CspError::NotPruned { .. })));
        assert!(matches!(v.prune(9), Err(CspError::NotInDomain { .. })));
    }

    #[test]
    fn assigned_domain_is_the_value() {
        let mut v = var();
        v.prune(4).unwrap();
        v.assign(3).unwrap();
        assert_eq!(vec![3], v.current_domain().collect::<Vec<_>>());
        assert_eq!(1, v.domain_size());
        assert!(v.admits(3));
        assert!(!v.admits(1));
        v.unassign().unwrap();
        assert_eq!(vec![1, 2, 3], v.current_domain().collect::<Vec<_>>());
    }

    #[test]
    fn assign_errors() {
        let mut v = var();
        v.prune(1).unwrap();
        assert!(matches!(v.assign(1), Err(CspError::AssignPruned { .. })));
        v.assign(2).unwrap();
        assert_eq!(Err(CspError::AlreadyAssigned("x".into())), v.assign(3));
        v.unassign().unwrap();
        assert_eq!(Err(CspError::NotAssigned("x".into())), v.unassign());
    }

    #[test]
    fn display() {
        let mut v = var();
        v.prune(2).unwrap();
        assert_eq!("x in {1, 3, 4}", v.to_string());
        v.assign(4).unwrap();
        assert_eq!("x = 4", v.to_string());
    }
}
