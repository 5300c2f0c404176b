use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::errors::SpecError;
use crate::models::common::{ ComparisonType, Feasibility, OptimizationDirection };
use crate::models::family::HoleFamily;
use crate::models::formula::Formula;
use crate::models::mdp_result::{ MdpConstraintsResult, MdpOptimalityResult, MdpPropertyResult, MdpSpecificationResult };
use crate::models::property::{ ConstraintProperty, OptimalityProperty };
use crate::models::result::{ ConstraintsResult, ExactSpecificationResult, PropertyResult };
use crate::models::specification::Specification;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid specification: {0}")]
    InvalidSpecification(#[from] SpecError),
}

fn read_yaml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConstraintConfig {
    /// Property text, kept for display
    pub formula: String,

    pub comparison: ComparisonType,

    pub threshold: f64,

    /// Expected-reward property
    #[serde(default)]
    pub reward: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OptimalityConfig {
    pub formula: String,

    pub direction: OptimizationDirection,

    #[serde(default)]
    pub reward: bool,

    /// Relative margin a new optimum must beat the old one by
    #[serde(default)]
    pub epsilon: f64,
}

/// Declarative description of a specification
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpecificationConfig {
    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,

    #[serde(default)]
    pub optimality: Option<OptimalityConfig>,
}

impl SpecificationConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        read_yaml(path)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Build the specification, validating thresholds and epsilon
    pub fn build(&self) -> Result<Specification, ConfigError> {
        let constraints = self.constraints
            .iter()
            .map(|c| {
                ConstraintProperty::new(Formula::bounded(c.formula.clone(), c.comparison, c.threshold, c.reward))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let optimality = match &self.optimality {
            Some(o) => {
                let formula = Formula::objective(o.formula.clone(), o.direction, o.reward);
                Some(OptimalityProperty::new(formula, o.epsilon)?)
            }
            None => None,
        };

        Ok(Specification::new(constraints, optimality))
    }
}

/// Model checking values of one concrete candidate
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CandidateConfig {
    #[serde(default)]
    pub name: Option<String>,

    /// One entry per constraint; `null` marks a constraint that was skipped
    #[serde(default)]
    pub constraints: Vec<Option<f64>>,

    #[serde(default)]
    pub optimality: Option<f64>,
}

impl CandidateConfig {
    /// Wrap the raw values against the current state of `spec`.
    pub fn evaluate(&self, spec: &Specification) -> Result<ExactSpecificationResult, ConfigError> {
        let results: Vec<Option<PropertyResult>> = spec.constraints
            .iter()
            .zip(self.constraints.iter())
            .map(|(c, value)| value.map(|v| PropertyResult::from_value(c.clone(), v)))
            .collect();
        let constraints_result = ConstraintsResult::for_specification(
            spec,
            pad_results(results, self.constraints.len())
        )?;

        let optimality_result = match (spec.optimality(), self.optimality) {
            (Some(o), Some(v)) => Some(PropertyResult::from_value(o.clone(), v)),
            _ => None,
        };

        Ok(ExactSpecificationResult::new(constraints_result, optimality_result))
    }
}

// keep the supplied length so a count mismatch is reported, not truncated
fn pad_results<T>(mut results: Vec<Option<T>>, supplied: usize) -> Vec<Option<T>> {
    while results.len() < supplied {
        results.push(None);
    }
    results
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CandidatesConfig {
    pub candidates: Vec<CandidateConfig>,
}

impl CandidatesConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        read_yaml(path)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BoundsConfig {
    pub primary: f64,
    pub secondary: f64,
    #[serde(default = "undecided")]
    pub feasibility: Feasibility,
}

fn undecided() -> Feasibility {
    Feasibility::Undecided
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OptimalityBoundsConfig {
    pub primary: f64,
    pub secondary: f64,
    #[serde(default)]
    pub improving_assignment: Option<Vec<u64>>,
    #[serde(default)]
    pub improving_value: Option<f64>,
    #[serde(default)]
    pub can_improve: bool,
}

/// Bounding evaluation of one family of hole assignments
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FamilyConfig {
    /// Remaining options per hole
    pub holes: Vec<Vec<u64>>,

    #[serde(default)]
    pub constraints: Vec<Option<BoundsConfig>>,

    #[serde(default)]
    pub optimality: Option<OptimalityBoundsConfig>,
}

impl FamilyConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        read_yaml(path)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn family(&self) -> Result<HoleFamily, ConfigError> {
        Ok(HoleFamily::new(self.holes.clone())?)
    }

    pub fn evaluate(&self, spec: &Specification) -> Result<MdpSpecificationResult<Vec<u64>>, ConfigError> {
        let results: Vec<Option<MdpPropertyResult>> = spec.constraints
            .iter()
            .zip(self.constraints.iter())
            .map(|(c, bounds)| {
                bounds
                    .as_ref()
                    .map(|b| MdpPropertyResult::new(c.clone(), b.primary, b.secondary, b.feasibility))
            })
            .collect();
        let constraints_result = MdpConstraintsResult::for_specification(
            spec,
            pad_results(results, self.constraints.len())
        )?;

        let optimality_result = match (spec.optimality(), &self.optimality) {
            (Some(o), Some(b)) =>
                Some(
                    MdpOptimalityResult::new(
                        o.clone(),
                        b.primary,
                        b.secondary,
                        b.improving_assignment.clone(),
                        b.improving_value,
                        b.can_improve
                    )
                ),
            _ => None,
        };

        Ok(MdpSpecificationResult::new(constraints_result, optimality_result))
    }
}
