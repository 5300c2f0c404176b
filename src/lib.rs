pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
#[cfg(test)]
mod tests;

// Re-export core components
pub use config::{ ConfigError, SpecificationConfig };
pub use errors::{ SpecError, SpecResult };
pub use models::{
    common::{
        above_float_precision,
        above_mc_precision,
        ComparisonType,
        Feasibility,
        OptimizationDirection,
        FLOAT_PRECISION,
        MC_PRECISION,
    },
    family::HoleFamily,
    formula::Formula,
    property::{
        ConstraintProperty,
        OptimalityProperty,
        Property,
    },
    specification::Specification,
    result::{
        ConstraintsResult,
        ExactSpecificationResult,
        Improving,
        PropertyResult,
        SpecificationResult,
    },
    mdp_result::{
        MdpConstraintsResult,
        MdpOptimalityResult,
        MdpPropertyResult,
        MdpSpecificationResult,
        PrimaryDiagnostics,
    },
};
pub use traits::{
    ConstraintsOutcome,
    Family,
    OptimalityOutcome,
};
