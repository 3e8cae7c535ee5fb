//! Prelude for the filters crate.
//!
//! ```
//! use carsim_filters::prelude::*;
//!
//! let mut brake = IntAverageFilter::new(2);
//! brake.push(10);
//! brake.push(15);
//! assert_eq!(brake.int_average(), 12);
//! ```

pub use crate::sample_buffer::{AverageFilter, IntAverageFilter, Sample, SampleBuffer};
