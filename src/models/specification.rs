use std::fmt;

use crate::models::formula::Formula;
use crate::models::property::{ ConstraintProperty, OptimalityProperty };

/// Constraints plus at most one optimality objective; the unit every
/// candidate (or family of candidates) is checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    pub constraints: Vec<ConstraintProperty>,
    pub optimality: Option<OptimalityProperty>,
}

impl Specification {
    pub fn new(constraints: Vec<ConstraintProperty>, optimality: Option<OptimalityProperty>) -> Self {
        Self { constraints, optimality }
    }

    pub fn has_optimality(&self) -> bool {
        self.optimality.is_some()
    }

    pub fn num_properties(&self) -> usize {
        self.constraints.len() + usize::from(self.has_optimality())
    }

    pub fn all_constraint_indices(&self) -> Vec<usize> {
        (0..self.constraints.len()).collect()
    }

    pub fn constraint(&self, index: usize) -> Option<&ConstraintProperty> {
        self.constraints.get(index)
    }

    pub fn optimality(&self) -> Option<&OptimalityProperty> {
        self.optimality.as_ref()
    }

    /// Mutable access to the optimum tracker. The driver owns the
    /// specification for the whole search and is the only writer.
    pub fn optimality_mut(&mut self) -> Option<&mut OptimalityProperty> {
        self.optimality.as_mut()
    }

    /// Front-end formulas: constraints first, then the objective.
    pub fn properties(&self) -> Vec<&Formula> {
        self.gather(|c| &c.property, |o| &o.property)
    }

    /// Bound-free formulas for exact model checking, in batch order.
    pub fn formulae(&self) -> Vec<&Formula> {
        self.gather(|c| &c.formula, |o| &o.formula)
    }

    /// Direction-flipped formulas, in batch order.
    pub fn formulae_alt(&self) -> Vec<&Formula> {
        self.gather(|c| &c.formula_alt, |o| &o.formula_alt)
    }

    fn gather<'a>(
        &'a self,
        constraint: impl Fn(&'a ConstraintProperty) -> &'a Formula,
        optimality: impl Fn(&'a OptimalityProperty) -> &'a Formula
    ) -> Vec<&'a Formula> {
        self.constraints.iter().map(constraint).chain(self.optimality.iter().map(optimality)).collect()
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints = if self.constraints.is_empty() {
            "none".to_string()
        } else {
            self.constraints
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        let optimality = match &self.optimality {
            Some(o) => o.to_string(),
            None => "none".to_string(),
        };
        write!(f, "constraints: {}, optimality objective: {}", constraints, optimality)
    }
}
