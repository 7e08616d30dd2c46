//! Slug generation and validation contract.

/// A component capable of producing and validating slugs.
///
/// Generated slugs are not guaranteed unique; uniqueness is enforced by the
/// store at insert time.
#[cfg_attr(test, mockall::automock)]
pub trait Slugger: Send + Sync {
    /// Produces a new random slug.
    fn generate(&self) -> String;

    /// Returns true if `candidate` has the shape of a slug this component
    /// would produce.
    fn is_valid(&self, candidate: &str) -> bool;
}
