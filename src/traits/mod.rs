pub mod family;
pub mod outcome;

// Re-export traits
pub use family::Family;
pub use outcome::{ ConstraintsOutcome, OptimalityOutcome };
