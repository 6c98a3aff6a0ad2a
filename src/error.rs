//! Error types for chain topology operations.

use core::fmt;

/// Errors reported when wiring bones together.
///
/// Physics operations themselves never fail; only [`connect`](crate::connect)
/// validates its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// Bone index is out of bounds.
    BoneOutOfBounds { index: usize, count: usize },
    /// A bone cannot be its own parent.
    SelfLink { index: usize },
    /// The link would close a loop in the parent/child chain.
    CycleDetected { parent: usize, child: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::BoneOutOfBounds { index, count } => {
                write!(f, "bone index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SelfLink { index } => {
                write!(f, "bone {} cannot be connected to itself", index)
            }
            PhysicsError::CycleDetected { parent, child } => {
                write!(f, "connecting bone {} under bone {} would form a cycle", child, parent)
            }
        }
    }
}
