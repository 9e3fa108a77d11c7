//! Console walkthrough of programming-language basics
//!
//! The crate reproduces a classic instructional walkthrough exactly:
//! variable binding and mixed-type formatting, an if/else branch on an age
//! threshold, a fixed counting loop, and a pure two-argument addition
//! helper. The walkthrough is built as data ([`tour::Transcript`]) and only
//! then rendered to text or JSON, so its exact-output guarantees can be
//! tested without a terminal.

pub mod cli;
pub mod constants;
pub mod error;
pub mod math;
pub mod output;
pub mod tour;

pub use error::TourError;
pub use tour::{Section, Tour, Transcript};
