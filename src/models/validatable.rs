//! Capability shared by every address value type.

/// A value that can report whether its stored form is well formed
/// and render that form as text.
pub trait Validatable {
    /// True when the stored value passes all checks for its kind.
    fn is_valid(&self) -> bool;

    /// The canonical textual form of the stored value.
    fn to_canonical_text(&self) -> String;
}
