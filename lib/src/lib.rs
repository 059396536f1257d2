#![deny(unused_imports)]

//! Complex numbers and axis-aligned regions of the complex plane.

pub mod math;
pub mod utils;
