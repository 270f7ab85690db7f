//! Error types for dotpager core.

use thiserror::Error;

/// Errors produced by the core building blocks.
///
/// Numeric inputs such as opacities and progress values are clamped rather
/// than rejected, so the only fallible operations here are the ones that
/// build lookup tables from caller-provided ranges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Input and output ranges of an interpolation differ in length, or have
    /// fewer than two points.
    #[error("interpolation needs at least 2 points with matching lengths (input {input}, output {output})")]
    InterpolationLength {
        /// Number of input points.
        input: usize,
        /// Number of output points.
        output: usize,
    },

    /// The input range of an interpolation is not strictly increasing.
    #[error("interpolation input range must be strictly increasing (at position {position})")]
    InterpolationOrder {
        /// Index of the first point that breaks the ordering.
        position: usize,
    },

    /// An interpolation point is NaN or infinite.
    #[error("interpolation point at position {position} is not finite")]
    NonFinite {
        /// Index of the offending point.
        position: usize,
    },
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
