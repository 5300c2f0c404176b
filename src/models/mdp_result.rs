use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{ SpecError, SpecResult };
use crate::models::common::Feasibility;
use crate::models::property::Property;
use crate::models::result::{ join_results, SpecificationResult };
use crate::models::specification::Specification;
use crate::traits::outcome::{ ConstraintsOutcome, OptimalityOutcome };

/// Scheduler information attached to the primary bound. Not interpreted
/// here; the refinement strategy reads it to decide how to split.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrimaryDiagnostics {
    /// Options chosen by the primary scheduler, per hole
    pub selection: Vec<Vec<u64>>,
    pub choice_values: Vec<f64>,
    pub expected_visits: Vec<f64>,
    /// Splitting score per hole
    pub scores: BTreeMap<usize, f64>,
}

/// Result of checking one property over a family, as a pair of bounds.
#[derive(Debug, Clone, Serialize)]
pub struct MdpPropertyResult {
    pub property: Property,
    /// Bound in the optimizing direction of the property
    pub primary: f64,
    /// Bound in the opposite direction
    pub secondary: f64,
    pub feasibility: Feasibility,
    pub diagnostics: PrimaryDiagnostics,
}

impl MdpPropertyResult {
    pub fn new(property: impl Into<Property>, primary: f64, secondary: f64, feasibility: Feasibility) -> Self {
        Self {
            property: property.into(),
            primary,
            secondary,
            feasibility,
            diagnostics: PrimaryDiagnostics::default(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: PrimaryDiagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

impl fmt::Display for MdpPropertyResult {
    /// Lower bound first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.property.minimizing() {
            write!(f, "{} - {}", self.primary, self.secondary)
        } else {
            write!(f, "{} - {}", self.secondary, self.primary)
        }
    }
}

/// Bounding results of all constraints for one family.
#[derive(Debug, Clone, Serialize)]
pub struct MdpConstraintsResult {
    pub results: Vec<Option<MdpPropertyResult>>,
    pub undecided_constraints: Vec<usize>,
    pub feasibility: Feasibility,
}

impl MdpConstraintsResult {
    /// A violated constraint decides the family; otherwise any undecided
    /// constraint leaves it undecided. Skipped entries do not contribute.
    pub fn new(results: Vec<Option<MdpPropertyResult>>) -> Self {
        let undecided_constraints = results
            .iter()
            .enumerate()
            .filter_map(|(index, result)| {
                result
                    .as_ref()
                    .filter(|r| r.feasibility.is_undecided())
                    .map(|_| index)
            })
            .collect();

        let mut feasibility = Feasibility::Satisfied;
        for result in results.iter().flatten() {
            match result.feasibility {
                Feasibility::Violated => {
                    feasibility = Feasibility::Violated;
                    break;
                }
                Feasibility::Undecided => {
                    feasibility = Feasibility::Undecided;
                }
                Feasibility::Satisfied => {}
            }
        }

        Self { results, undecided_constraints, feasibility }
    }

    pub fn for_specification(spec: &Specification, results: Vec<Option<MdpPropertyResult>>) -> SpecResult<Self> {
        if results.len() != spec.constraints.len() {
            return Err(SpecError::ResultCountMismatch {
                expected: spec.constraints.len(),
                actual: results.len(),
            });
        }
        Ok(Self::new(results))
    }
}

impl ConstraintsOutcome for MdpConstraintsResult {
    fn feasibility(&self) -> Feasibility {
        self.feasibility
    }

    fn undecided_constraints(&self) -> &[usize] {
        &self.undecided_constraints
    }
}

impl fmt::Display for MdpConstraintsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_results(&self.results))
    }
}

/// Bounding result of the optimality objective together with the
/// improvement decision computed by the refinement logic.
#[derive(Debug, Clone, Serialize)]
pub struct MdpOptimalityResult<A> {
    pub base: MdpPropertyResult,
    pub improving_assignment: Option<A>,
    pub improving_value: Option<f64>,
    pub can_improve: bool,
}

impl<A> MdpOptimalityResult<A> {
    pub fn new(
        property: impl Into<Property>,
        primary: f64,
        secondary: f64,
        improving_assignment: Option<A>,
        improving_value: Option<f64>,
        can_improve: bool
    ) -> Self {
        Self {
            // objectives have no threshold of their own to be feasible against
            base: MdpPropertyResult::new(property, primary, secondary, Feasibility::Undecided),
            improving_assignment,
            improving_value,
            can_improve,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: PrimaryDiagnostics) -> Self {
        self.base.diagnostics = diagnostics;
        self
    }

    pub fn property_result(&self) -> &MdpPropertyResult {
        &self.base
    }
}

impl<A: Clone> OptimalityOutcome<A> for MdpOptimalityResult<A> {
    fn improving_assignment(&self) -> Option<&A> {
        self.improving_assignment.as_ref()
    }

    fn improving_value(&self) -> Option<f64> {
        self.improving_value
    }

    fn can_improve(&self) -> bool {
        self.can_improve
    }
}

impl<A> fmt::Display for MdpOptimalityResult<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

/// Bounding verdict for a family of models
pub type MdpSpecificationResult<A> = SpecificationResult<MdpConstraintsResult, MdpOptimalityResult<A>>;

impl<A> MdpSpecificationResult<A> {
    /// The property to refine next: the objective while it can still
    /// improve, otherwise the first undecided constraint.
    pub fn undecided_result(&self) -> SpecResult<&MdpPropertyResult> {
        if let Some(opt) = &self.optimality_result {
            if opt.can_improve {
                return Ok(&opt.base);
            }
        }
        self.constraints_result.undecided_constraints
            .first()
            .and_then(|&index| self.constraints_result.results[index].as_ref())
            .ok_or(SpecError::NoUndecidedResult)
    }
}
