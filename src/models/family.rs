use serde::{ Deserialize, Serialize };

use crate::errors::{ SpecError, SpecResult };
use crate::traits::family::Family;

/// A family of assignments given by the remaining options of each hole.
/// Members are all combinations of one option per hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")]
pub struct HoleFamily {
    options: Vec<Vec<u64>>,
}

impl HoleFamily {
    pub fn new(options: Vec<Vec<u64>>) -> SpecResult<Self> {
        if let Some(hole) = options.iter().position(|o| o.is_empty()) {
            return Err(SpecError::EmptyHole(hole));
        }
        Ok(Self { options })
    }

    pub fn num_holes(&self) -> usize {
        self.options.len()
    }

    pub fn hole_options(&self, hole: usize) -> Option<&[u64]> {
        self.options.get(hole).map(|o| o.as_slice())
    }

    /// Number of members, saturating on overflow
    pub fn size(&self) -> u64 {
        self.options.iter().fold(1u64, |acc, o| acc.saturating_mul(o.len() as u64))
    }
}

impl TryFrom<Vec<Vec<u64>>> for HoleFamily {
    type Error = SpecError;

    fn try_from(options: Vec<Vec<u64>>) -> SpecResult<Self> {
        Self::new(options)
    }
}

impl From<HoleFamily> for Vec<Vec<u64>> {
    fn from(family: HoleFamily) -> Self {
        family.options
    }
}

impl Family<Vec<u64>> for HoleFamily {
    fn pick_any(&self) -> Vec<u64> {
        self.options.iter().map(|o| o[0]).collect()
    }
}
