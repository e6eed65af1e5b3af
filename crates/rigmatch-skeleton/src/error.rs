//! Error types for registry construction.

use thiserror::Error;

/// Errors raised while building a [`SkeletonRegistry`](crate::SkeletonRegistry).
///
/// Classification itself never fails; only construction of a registry from
/// class definitions is validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A registry must register at least one class.
    #[error("registry must contain at least one skeleton class")]
    Empty,

    /// Class names must be unique within a registry.
    #[error("duplicate skeleton class name `{name}`")]
    DuplicateClassName {
        /// The repeated class name.
        name: String,
    },

    /// A class must declare at least one joint.
    #[error("skeleton class `{class}` declares no joints")]
    NoJoints {
        /// Name of the offending class.
        class: String,
    },

    /// Contact joints must be drawn from the class's own joint table.
    #[error("contact joint `{joint}` is not in the joint table of class `{class}`")]
    UnknownContactJoint {
        /// Name of the offending class.
        class: String,
        /// The contact joint missing from the joint table.
        joint: String,
    },

    /// Contact thresholds are distances and must be positive and finite.
    #[error("skeleton class `{class}` has invalid contact threshold {got}")]
    InvalidThreshold {
        /// Name of the offending class.
        class: String,
        /// The rejected threshold value.
        got: f64,
    },
}
