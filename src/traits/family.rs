/// A set of candidate models represented jointly.
pub trait Family<A> {
    /// Any member of the family. Used as a witness when every member is
    /// known to be acceptable.
    fn pick_any(&self) -> A;
}
