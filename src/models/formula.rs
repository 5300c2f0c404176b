use serde::{ Deserialize, Serialize };
use std::fmt;

use crate::models::common::{ ComparisonType, OptimizationDirection };

/// A property formula as handed over by the model checking front end.
///
/// Bounded formulas (constraints) carry a comparison and a threshold.
/// Quantitative formulas carry an optimization direction instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub text: String,
    pub comparison: Option<ComparisonType>,
    pub threshold: Option<f64>,
    pub direction: Option<OptimizationDirection>,
    pub is_reward: bool,
}

impl Formula {
    /// A bounded formula such as `P<=0.3 [F "bad"]`.
    pub fn bounded(
        text: impl Into<String>,
        comparison: ComparisonType,
        threshold: f64,
        is_reward: bool
    ) -> Self {
        Self {
            text: text.into(),
            comparison: Some(comparison),
            threshold: Some(threshold),
            direction: None,
            is_reward,
        }
    }

    /// A quantitative objective such as `Rmin=? [F "goal"]`.
    pub fn objective(
        text: impl Into<String>,
        direction: OptimizationDirection,
        is_reward: bool
    ) -> Self {
        Self {
            text: text.into(),
            comparison: None,
            threshold: None,
            direction: Some(direction),
            is_reward,
        }
    }

    /// Bound-free copy optimized in `direction`
    pub fn quantitative(&self, direction: OptimizationDirection) -> Self {
        Self {
            text: self.text.clone(),
            comparison: None,
            threshold: None,
            direction: Some(direction),
            is_reward: self.is_reward,
        }
    }

    /// Copy with the optimization direction negated, used to obtain the
    /// opposite bound when a whole family is evaluated at once.
    pub fn alternative(&self) -> Self {
        let mut alt = self.clone();
        alt.direction = Some(match self.direction {
            Some(direction) => direction.flipped(),
            // a formula without direction behaves as maximizing
            None => OptimizationDirection::Minimize,
        });
        alt
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
