mod config_tests;
mod specification_tests;

use crate::models::common::{ ComparisonType, OptimizationDirection };
use crate::models::formula::Formula;
use crate::models::property::{ ConstraintProperty, OptimalityProperty };

// Setup function to initialize logging
pub(crate) fn setup() {
    // Logger may already be initialized by another test, which is fine
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn constraint(op: ComparisonType, threshold: f64) -> ConstraintProperty {
    ConstraintProperty::new(Formula::bounded(format!("P{}{} [F \"goal\"]", op, threshold), op, threshold, false))
        .expect("valid constraint")
}

pub(crate) fn reward_constraint(op: ComparisonType, threshold: f64) -> ConstraintProperty {
    ConstraintProperty::new(Formula::bounded(format!("R{}{} [F \"goal\"]", op, threshold), op, threshold, true))
        .expect("valid constraint")
}

pub(crate) fn objective(direction: OptimizationDirection, epsilon: f64) -> OptimalityProperty {
    OptimalityProperty::new(Formula::objective(format!("R{}=? [F \"goal\"]", direction), direction, true), epsilon)
        .expect("valid objective")
}
