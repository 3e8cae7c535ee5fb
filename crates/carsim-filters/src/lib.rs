//! Running average filters for CarSim
//!
//! Every continuously varying signal the simulator publishes (engine speed,
//! road speed, brake pressure, accelerator pedal) is the average of a fixed
//! window of recent samples. This crate provides that window.
//!
//! # Overview
//!
//! - [`SampleBuffer`]: circular buffer of `N` slots with an incrementally
//!   maintained sum, generic over the sample type
//! - [`AverageFilter`]: real-valued variant (`f64` samples)
//! - [`IntAverageFilter`]: integer variant (`i32` samples, `i64` sum) that also
//!   exposes a truncated integer average
//!
//! # Averaging semantics
//!
//! The average is always `sum / N`, never `sum / pushed`. Until `N` samples
//! have been pushed the unused slots count as zero, so a fresh filter ramps up
//! from zero instead of jumping straight to the first sample.
//!
//! # Example
//!
//! ```
//! use carsim_filters::prelude::*;
//!
//! let mut filter = AverageFilter::new(4);
//! for value in [1.0, 1.0, 1.0, 1.0, 9.0] {
//!     filter.push(value);
//! }
//! assert!((filter.average() - 3.0).abs() < 1e-12);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod prelude;
pub mod sample_buffer;

pub use sample_buffer::{AverageFilter, IntAverageFilter, Sample, SampleBuffer};
