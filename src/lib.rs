//! **mazegen** is a random perfect maze generation library, rasterising the
//! mazes it grows to plain text ppm images.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod maze;
pub mod pixels;
pub mod ppm;
pub mod renderers;
pub mod topology;
pub mod units;
