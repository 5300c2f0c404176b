pub mod common;
pub mod family;
pub mod formula;
pub mod mdp_result;
pub mod property;
pub mod result;
pub mod specification;

// Re-export common model types
pub use common::{ ComparisonType, Feasibility, OptimizationDirection, FLOAT_PRECISION, MC_PRECISION };
pub use family::HoleFamily;
pub use formula::Formula;
pub use mdp_result::{
    MdpConstraintsResult,
    MdpOptimalityResult,
    MdpPropertyResult,
    MdpSpecificationResult,
    PrimaryDiagnostics,
};
pub use property::{ ConstraintProperty, OptimalityProperty, Property };
pub use result::{ ConstraintsResult, ExactSpecificationResult, Improving, PropertyResult, SpecificationResult };
pub use specification::Specification;
