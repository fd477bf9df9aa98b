//! Core traits shared by the repositories
//!
//! Vehicles are keyed by a string ID and customers by a numeric ID. This trait lets
//! one generic [`Repository`](crate::core::Repository) serve both.

/// An entity that can be looked up by a stable identifier
pub trait Identifiable {
    /// Identifier type (may be unsized, e.g. `str`)
    type Id: PartialEq + ?Sized;

    /// The entity's identifier, fixed for its lifetime
    fn id(&self) -> &Self::Id;
}
