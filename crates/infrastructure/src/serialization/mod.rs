//! JSON form of the application objects.
//!
//! Output is pretty-printed with two-space indentation and a trailing
//! newline, in struct field order, so the same object always prints the
//! same way.

mod json;

pub use json::*;
