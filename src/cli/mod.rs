//! Command Line Interface (CLI) layer for the tempconv demo.
//!
//! `args` declares the option table, `errors` the demo's error type, and
//! `runner` walks the scanned options and prints conversions.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::run;
