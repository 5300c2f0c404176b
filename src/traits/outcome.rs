use crate::models::common::Feasibility;

/// Aggregated verdict over the constraints of a specification
pub trait ConstraintsOutcome {
    fn feasibility(&self) -> Feasibility;

    /// Indices of constraints whose feasibility is undecided
    fn undecided_constraints(&self) -> &[usize];
}

/// Verdict of the optimality objective as seen by the search driver
pub trait OptimalityOutcome<A> {
    /// Member believed to improve the optimum, if one was found
    fn improving_assignment(&self) -> Option<&A>;

    /// Value of the improving member
    fn improving_value(&self) -> Option<f64>;

    /// Could further refinement still yield an improvement?
    fn can_improve(&self) -> bool;
}
