//! Transmission state machine for CarSim
//!
//! Gear positions form two ladders:
//!
//! - the automatic ladder `P - R - N - D - 3 - 2 - 1`, walked one step at a
//!   time by [`Transmission::shift_down`] / [`Transmission::shift_up`];
//! - the manual gate (`M1..M6`, `R`, `N`), selected directly with
//!   [`Transmission::set_manual`].
//!
//! Every position carries an external shift code (`P=0`, `R=128`, `N=64`,
//! `D=4`, `3/2/1`) and an internal position id; both come from explicit
//! lookup tables in [`types`].

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod ratio;
pub mod state;
pub mod types;

pub use ratio::*;
pub use state::*;
pub use types::*;
