//! Piecewise-linear interpolation tables.
//!
//! Every animated attribute of an indicator dot is an [`Interpolation`] of
//! the shared progress value. Most of them are three-point windows centered
//! on the dot's index, built with [`Interpolation::window`].
//!
//! # Example
//!
//! ```
//! use dotpager_core::interpolation::Interpolation;
//!
//! // Opacity of dot 2: dim at pages 1 and 3, bright at page 2.
//! let opacity = Interpolation::window(2.0, [0.5, 1.0, 0.5]);
//! assert_eq!(opacity.sample(2.0), 1.0);
//! assert_eq!(opacity.sample(1.5), 0.75);
//! // Outside the window the edge value holds.
//! assert_eq!(opacity.sample(-4.0), 0.5);
//! ```

use crate::error::{CoreError, Result};

/// Behavior for inputs outside the table's input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Hold the nearest endpoint output.
    #[default]
    Clamp,
    /// Continue the slope of the edge segment.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// A piecewise-linear map from an increasing input range to an output range.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: Vec<f32>,
    output: Vec<f32>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    /// Build a table from matching input and output ranges.
    ///
    /// The input range must be strictly increasing, finite, and contain at
    /// least two points.
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self> {
        if input.len() < 2 || input.len() != output.len() {
            return Err(CoreError::InterpolationLength {
                input: input.len(),
                output: output.len(),
            });
        }
        if let Some(position) = input
            .iter()
            .chain(output.iter())
            .position(|v| !v.is_finite())
        {
            return Err(CoreError::NonFinite {
                position: position % input.len(),
            });
        }
        if let Some(position) = input.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CoreError::InterpolationOrder {
                position: position + 1,
            });
        }

        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
            extrapolate: Extrapolate::Clamp,
        })
    }

    /// The three-point window around `center`.
    ///
    /// Samples `values[0]` at `center - 1`, `values[1]` at `center` and
    /// `values[2]` at `center + 1`, holding the edge values outside.
    pub fn window(center: f32, values: [f32; 3]) -> Self {
        Self {
            input: vec![center - 1.0, center, center + 1.0],
            output: values.to_vec(),
            extrapolate: Extrapolate::Clamp,
        }
    }

    /// Change the extrapolation policy.
    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// The extrapolation policy.
    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// The input range.
    pub fn input_range(&self) -> &[f32] {
        &self.input
    }

    /// The output range.
    pub fn output_range(&self) -> &[f32] {
        &self.output
    }

    /// Map `x` through the table.
    pub fn sample(&self, x: f32) -> f32 {
        let input = &self.input;
        let output = &self.output;
        let last = input.len() - 1;

        if x <= input[0] || x >= input[last] {
            let (a, b) = if x <= input[0] { (0, 1) } else { (last - 1, last) };
            let edge = if x <= input[0] { 0 } else { last };
            return match self.extrapolate {
                Extrapolate::Clamp => output[edge],
                Extrapolate::Identity if x != input[edge] => x,
                Extrapolate::Identity => output[edge],
                Extrapolate::Extend => segment(input[a], input[b], output[a], output[b], x),
            };
        }

        // input[0] < x < input[last]: some segment contains x
        let seg = input
            .windows(2)
            .position(|w| x <= w[1])
            .unwrap_or(last - 1);
        segment(input[seg], input[seg + 1], output[seg], output[seg + 1], x)
    }
}

#[inline]
fn segment(x0: f32, x1: f32, y0: f32, y1: f32, x: f32) -> f32 {
    let t = (x - x0) / (x1 - x0);
    y0 + (y1 - y0) * t
}
