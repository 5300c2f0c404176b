use log::debug;
use serde::Serialize;
use std::fmt;

use crate::errors::{ SpecError, SpecResult };
use crate::models::common::{ above_mc_precision, ComparisonType, MC_PRECISION };
use crate::models::formula::Formula;

/// A constraint with a fixed threshold, e.g. `P>=0.9 [F "done"]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintProperty {
    /// Formula as supplied by the front end (with its bound)
    pub property: Formula,
    /// Bound-free formula optimized in the direction of the operator
    pub formula: Formula,
    /// Same formula with the direction flipped
    pub formula_alt: Formula,
    pub op: ComparisonType,
    pub minimizing: bool,
    pub threshold: f64,
}

impl ConstraintProperty {
    pub fn new(property: Formula) -> SpecResult<Self> {
        let op = property.comparison.ok_or_else(|| SpecError::MissingComparison(property.text.clone()))?;
        let threshold = property.threshold.ok_or_else(|| SpecError::MissingComparison(property.text.clone()))?;
        if !threshold.is_finite() {
            return Err(SpecError::InvalidThreshold(threshold));
        }

        let formula = property.quantitative(op.direction());
        let formula_alt = formula.alternative();
        Ok(Self {
            property,
            formula,
            formula_alt,
            op,
            minimizing: op.is_minimizing(),
            threshold,
        })
    }

    pub fn is_reward(&self) -> bool {
        self.formula.is_reward
    }

    /// Constraints compare exactly; small differences are not smoothed over.
    pub fn meets_op(&self, a: f64, b: f64) -> bool {
        self.op.compare(a, b)
    }

    pub fn meets_threshold(&self, value: f64) -> bool {
        self.meets_op(value, self.threshold)
    }

    /// An infinite expected reward never satisfies anything.
    pub fn result_valid(&self, value: f64) -> bool {
        !self.is_reward() || value != f64::INFINITY
    }

    pub fn satisfies_threshold(&self, value: f64) -> bool {
        self.result_valid(value) && self.meets_threshold(value)
    }
}

impl fmt::Display for ConstraintProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.property)
    }
}

/// Optimality objective that remembers the best value found so far and
/// derives its admission threshold from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalityProperty {
    pub property: Formula,
    pub formula: Formula,
    pub formula_alt: Formula,
    pub op: ComparisonType,
    pub minimizing: bool,
    /// Admission bound: `optimum * (1 -/+ epsilon)`, or an infinity while no optimum is known
    pub threshold: f64,
    pub optimum: Option<f64>,
    pub epsilon: f64,
}

impl OptimalityProperty {
    pub fn new(property: Formula, epsilon: f64) -> SpecResult<Self> {
        let direction = property.direction.ok_or_else(|| SpecError::MissingDirection(property.text.clone()))?;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(SpecError::InvalidEpsilon(epsilon));
        }

        let minimizing = direction.is_minimizing();
        let (op, threshold) = if minimizing {
            (ComparisonType::Less, f64::INFINITY)
        } else {
            (ComparisonType::Greater, f64::NEG_INFINITY)
        };

        let formula = property.clone();
        let formula_alt = formula.alternative();
        Ok(Self {
            property,
            formula,
            formula_alt,
            op,
            minimizing,
            threshold,
            optimum: None,
            epsilon,
        })
    }

    pub fn is_reward(&self) -> bool {
        self.formula.is_reward
    }

    /// NaN is never a usable optimum; accepting one would freeze the tracker.
    pub fn result_valid(&self, value: f64) -> bool {
        !value.is_nan() && (!self.is_reward() || value != f64::INFINITY)
    }

    /// Accept only improvements above the model checking precision.
    /// An unknown reference value is beaten by anything.
    pub fn meets_op(&self, a: f64, b: Option<f64>) -> bool {
        match b {
            None => true,
            Some(b) => above_mc_precision(a, b) && self.op.compare(a, b),
        }
    }

    pub fn meets_threshold(&self, value: f64) -> bool {
        self.meets_op(value, Some(self.threshold))
    }

    /// Does `value` beat the admission bound?
    pub fn satisfies_threshold(&self, value: f64) -> bool {
        self.result_valid(value) && self.meets_threshold(value)
    }

    /// Does `value` beat the raw optimum?
    pub fn improves_optimum(&self, value: f64) -> bool {
        self.result_valid(value) && self.meets_op(value, self.optimum)
    }

    /// Record a new optimum and recompute the admission threshold.
    ///
    /// The value must pass [`improves_optimum`](Self::improves_optimum);
    /// otherwise nothing changes and `NotAnImprovement` is returned.
    pub fn update_optimum(&mut self, optimum: f64) -> SpecResult<()> {
        if !self.improves_optimum(optimum) {
            return Err(SpecError::NotAnImprovement { value: optimum, optimum: self.optimum });
        }
        debug!("New opt = {}.", optimum);
        self.optimum = Some(optimum);
        self.threshold = if self.minimizing {
            optimum * (1.0 - self.epsilon)
        } else {
            optimum * (1.0 + self.epsilon)
        };
        Ok(())
    }

    /// Check and update in one step; returns whether the optimum moved.
    pub fn try_update_optimum(&mut self, value: f64) -> bool {
        self.update_optimum(value).is_ok()
    }

    /// A bound marginally worse than the optimum. Families that cannot beat
    /// it by more than the model checking precision can be pruned.
    pub fn suboptimal_value(&self) -> SpecResult<f64> {
        let optimum = self.optimum.ok_or(SpecError::UnknownOptimum)?;
        Ok(if self.minimizing {
            optimum * (1.0 + MC_PRECISION)
        } else {
            optimum * (1.0 - MC_PRECISION)
        })
    }
}

impl fmt::Display for OptimalityProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epsilon > 0.0 {
            write!(f, "{} [eps = {}]", self.property, self.epsilon)
        } else {
            write!(f, "{}", self.property)
        }
    }
}

/// Either kind of property, behind one interface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Property {
    Constraint(ConstraintProperty),
    Optimality(OptimalityProperty),
}

impl Property {
    pub fn minimizing(&self) -> bool {
        match self {
            Property::Constraint(c) => c.minimizing,
            Property::Optimality(o) => o.minimizing,
        }
    }

    pub fn threshold(&self) -> f64 {
        match self {
            Property::Constraint(c) => c.threshold,
            Property::Optimality(o) => o.threshold,
        }
    }

    pub fn is_reward(&self) -> bool {
        match self {
            Property::Constraint(c) => c.is_reward(),
            Property::Optimality(o) => o.is_reward(),
        }
    }

    pub fn property(&self) -> &Formula {
        match self {
            Property::Constraint(c) => &c.property,
            Property::Optimality(o) => &o.property,
        }
    }

    pub fn formula(&self) -> &Formula {
        match self {
            Property::Constraint(c) => &c.formula,
            Property::Optimality(o) => &o.formula,
        }
    }

    pub fn formula_alt(&self) -> &Formula {
        match self {
            Property::Constraint(c) => &c.formula_alt,
            Property::Optimality(o) => &o.formula_alt,
        }
    }

    /// `a op b`, under each variant's precision policy.
    pub fn meets_op(&self, a: f64, b: f64) -> bool {
        match self {
            Property::Constraint(c) => c.meets_op(a, b),
            Property::Optimality(o) => o.meets_op(a, Some(b)),
        }
    }

    pub fn meets_threshold(&self, value: f64) -> bool {
        match self {
            Property::Constraint(c) => c.meets_threshold(value),
            Property::Optimality(o) => o.meets_threshold(value),
        }
    }

    pub fn result_valid(&self, value: f64) -> bool {
        match self {
            Property::Constraint(c) => c.result_valid(value),
            Property::Optimality(o) => o.result_valid(value),
        }
    }

    pub fn satisfies_threshold(&self, value: f64) -> bool {
        match self {
            Property::Constraint(c) => c.satisfies_threshold(value),
            Property::Optimality(o) => o.satisfies_threshold(value),
        }
    }

    /// `None` for constraints, which have no optimum to improve.
    pub fn improves_optimum(&self, value: f64) -> Option<bool> {
        match self {
            Property::Constraint(_) => None,
            Property::Optimality(o) => Some(o.improves_optimum(value)),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Constraint(c) => fmt::Display::fmt(c, f),
            Property::Optimality(o) => fmt::Display::fmt(o, f),
        }
    }
}

impl From<ConstraintProperty> for Property {
    fn from(value: ConstraintProperty) -> Self {
        Property::Constraint(value)
    }
}

impl From<OptimalityProperty> for Property {
    fn from(value: OptimalityProperty) -> Self {
        Property::Optimality(value)
    }
}
