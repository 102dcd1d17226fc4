//! The inspection job behind the `bitcolumn` binary.
//!
//! Builds a column from a request, applies the requested writes and queries,
//! and renders the result as text or JSON.

mod inspection;
pub use inspection::*;
