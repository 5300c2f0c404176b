use serde::{ Deserialize, Serialize };
use std::fmt;

/// Tolerance for treating two model checking results as equal
pub const MC_PRECISION: f64 = 1e-4;

/// Tolerance for comparing floats
pub const FLOAT_PRECISION: f64 = 1e-10;

/// True if `a` and `b` differ by more than the model checking precision.
pub fn above_mc_precision(a: f64, b: f64) -> bool {
    (a - b).abs() > MC_PRECISION
}

/// True if `a` and `b` differ by more than the float precision.
pub fn above_float_precision(a: f64, b: f64) -> bool {
    (a - b).abs() > FLOAT_PRECISION
}

/// Comparison kind of a bounded property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonType {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEqual,
}

impl ComparisonType {
    /// Apply the operator as `a op b`.
    pub fn compare(self, a: f64, b: f64) -> bool {
        match self {
            ComparisonType::Less => a < b,
            ComparisonType::LessEqual => a <= b,
            ComparisonType::Greater => a > b,
            ComparisonType::GreaterEqual => a >= b,
        }
    }

    pub fn is_minimizing(self) -> bool {
        matches!(self, ComparisonType::Less | ComparisonType::LessEqual)
    }

    /// Direction in which values become "better" under this operator
    pub fn direction(self) -> OptimizationDirection {
        if self.is_minimizing() {
            OptimizationDirection::Minimize
        } else {
            OptimizationDirection::Maximize
        }
    }
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ComparisonType::Less => "<",
            ComparisonType::LessEqual => "<=",
            ComparisonType::Greater => ">",
            ComparisonType::GreaterEqual => ">=",
        };
        write!(f, "{}", symbol)
    }
}

/// Optimization direction of a quantitative formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationDirection {
    #[serde(alias = "min")]
    Minimize,
    #[serde(alias = "max")]
    Maximize,
}

impl OptimizationDirection {
    pub fn flipped(self) -> Self {
        match self {
            OptimizationDirection::Minimize => OptimizationDirection::Maximize,
            OptimizationDirection::Maximize => OptimizationDirection::Minimize,
        }
    }

    pub fn is_minimizing(self) -> bool {
        self == OptimizationDirection::Minimize
    }
}

impl fmt::Display for OptimizationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationDirection::Minimize => write!(f, "min"),
            OptimizationDirection::Maximize => write!(f, "max"),
        }
    }
}

/// Outcome of checking a property against a whole family of models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    /// Every member of the family satisfies the property
    Satisfied,
    /// Every member violates the property
    Violated,
    /// Mixed or undetermined; the family needs refinement
    Undecided,
}

impl Feasibility {
    /// Map the `true` / `false` / unknown convention of bounding evaluators.
    pub fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(true) => Feasibility::Satisfied,
            Some(false) => Feasibility::Violated,
            None => Feasibility::Undecided,
        }
    }

    pub fn as_option(self) -> Option<bool> {
        match self {
            Feasibility::Satisfied => Some(true),
            Feasibility::Violated => Some(false),
            Feasibility::Undecided => None,
        }
    }

    pub fn is_undecided(self) -> bool {
        self == Feasibility::Undecided
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feasibility::Satisfied => write!(f, "satisfied"),
            Feasibility::Violated => write!(f, "violated"),
            Feasibility::Undecided => write!(f, "undecided"),
        }
    }
}
