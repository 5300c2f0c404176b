use log::debug;
use serde::Serialize;
use std::fmt;

use crate::errors::{ SpecError, SpecResult };
use crate::models::common::Feasibility;
use crate::models::property::Property;
use crate::models::specification::Specification;
use crate::traits::family::Family;
use crate::traits::outcome::{ ConstraintsOutcome, OptimalityOutcome };

/// Result of checking one property against one concrete model.
///
/// `result` is the raw payload returned by the model checker and is kept
/// opaque. `property` is a snapshot taken at evaluation time, so later
/// updates of the optimum do not change `sat` or `improves_optimum`.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResult<R = f64> {
    pub property: Property,
    pub result: R,
    pub value: f64,
    pub sat: bool,
    /// `Some(_)` only for optimality properties
    pub improves_optimum: Option<bool>,
}

impl<R> PropertyResult<R> {
    pub fn new(property: impl Into<Property>, result: R, value: f64) -> Self {
        let property = property.into();
        let sat = property.satisfies_threshold(value);
        let improves_optimum = property.improves_optimum(value);
        Self { property, result, value, sat, improves_optimum }
    }
}

impl PropertyResult<f64> {
    /// Result whose raw payload is the value itself
    pub fn from_value(property: impl Into<Property>, value: f64) -> Self {
        Self::new(property, value, value)
    }
}

impl<R> fmt::Display for PropertyResult<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An exact result does not know the model it came from; the caller holds it.
impl<A, R> OptimalityOutcome<A> for PropertyResult<R> {
    fn improving_assignment(&self) -> Option<&A> {
        None
    }

    fn improving_value(&self) -> Option<f64> {
        match self.improves_optimum {
            Some(true) => Some(self.value),
            _ => None,
        }
    }

    fn can_improve(&self) -> bool {
        false
    }
}

/// Results of all constraints for one model. Entries that were not
/// evaluated are `None` and do not count as violations.
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintsResult<R = f64> {
    pub results: Vec<Option<PropertyResult<R>>>,
    pub all_sat: bool,
}

impl<R> ConstraintsResult<R> {
    pub fn new(results: Vec<Option<PropertyResult<R>>>) -> Self {
        let all_sat = !results.iter().flatten().any(|result| !result.sat);
        Self { results, all_sat }
    }

    /// Like [`new`](Self::new), but checks there is one entry per constraint.
    pub fn for_specification(spec: &Specification, results: Vec<Option<PropertyResult<R>>>) -> SpecResult<Self> {
        if results.len() != spec.constraints.len() {
            return Err(SpecError::ResultCountMismatch {
                expected: spec.constraints.len(),
                actual: results.len(),
            });
        }
        Ok(Self::new(results))
    }
}

impl<R> ConstraintsOutcome for ConstraintsResult<R> {
    fn feasibility(&self) -> Feasibility {
        if self.all_sat { Feasibility::Satisfied } else { Feasibility::Violated }
    }

    fn undecided_constraints(&self) -> &[usize] {
        &[]
    }
}

impl<R> fmt::Display for ConstraintsResult<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_results(&self.results))
    }
}

pub(crate) fn join_results<T: fmt::Display>(results: &[Option<T>]) -> String {
    results
        .iter()
        .map(|result| match result {
            Some(result) => result.to_string(),
            None => "none".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// What the search driver should do next with a family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Improving<A> {
    /// Member to report as the new best (or as a witness)
    pub assignment: Option<A>,
    /// Its value, if known
    pub value: Option<f64>,
    /// Whether refining the family further is worthwhile
    pub can_improve: bool,
}

/// Verdict of a whole specification. Used for both exact results
/// (single model) and bounding results (family of models).
#[derive(Debug, Clone, Serialize)]
pub struct SpecificationResult<C, O> {
    pub constraints_result: C,
    pub optimality_result: Option<O>,
}

/// Exact verdict for one concrete model
pub type ExactSpecificationResult<R = f64> = SpecificationResult<ConstraintsResult<R>, PropertyResult<R>>;

impl<C, O> SpecificationResult<C, O> {
    pub fn new(constraints_result: C, optimality_result: Option<O>) -> Self {
        Self { constraints_result, optimality_result }
    }

    /// Interpret the result for the search driver:
    /// feasible constraints defer to the objective (or any member as a witness),
    /// infeasible constraints propose nothing, and undecided constraints only
    /// push the objective while it has no concrete improving value.
    pub fn improving<A, F>(&self, family: &F) -> Improving<A>
        where C: ConstraintsOutcome, O: OptimalityOutcome<A>, A: Clone, F: Family<A> + ?Sized
    {
        let opt = self.optimality_result.as_ref();

        match self.constraints_result.feasibility() {
            Feasibility::Satisfied => {
                match opt {
                    Some(opt) =>
                        Improving {
                            assignment: opt.improving_assignment().cloned(),
                            value: opt.improving_value(),
                            can_improve: opt.can_improve(),
                        },
                    None => {
                        debug!("Constraints satisfied and no objective, picking any member");
                        Improving { assignment: Some(family.pick_any()), value: None, can_improve: false }
                    }
                }
            }
            Feasibility::Violated => Improving { assignment: None, value: None, can_improve: false },
            Feasibility::Undecided => {
                match opt {
                    Some(opt) => {
                        let value = opt.improving_value();
                        Improving {
                            assignment: opt.improving_assignment().cloned(),
                            value,
                            can_improve: value.is_none() && opt.can_improve(),
                        }
                    }
                    None => Improving { assignment: None, value: None, can_improve: true },
                }
            }
        }
    }
}

impl<R> ExactSpecificationResult<R> {
    /// All constraints hold and the objective (if any) beats its admission bound.
    pub fn accepting(&self) -> bool {
        self.constraints_result.all_sat && self.optimality_result.as_ref().map_or(true, |opt| opt.sat)
    }

    /// The objective value, when constraints hold and it improves the optimum.
    pub fn improving_value(&self) -> Option<f64> {
        if !self.constraints_result.all_sat {
            return None;
        }
        self.optimality_result
            .as_ref()
            .filter(|opt| opt.improves_optimum == Some(true))
            .map(|opt| opt.value)
    }
}

impl<C: fmt::Display, O: fmt::Display> fmt::Display for SpecificationResult<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.optimality_result {
            Some(opt) => write!(f, "{} : {}", self.constraints_result, opt),
            None => write!(f, "{} : none", self.constraints_result),
        }
    }
}
