//! Structured logging for column failures.
//!
//! Column operations never log on their own: errors carry their context and
//! callers decide whether to hand them to [`report`].

mod logging;
mod report;

pub use logging::*;
pub use report::*;
