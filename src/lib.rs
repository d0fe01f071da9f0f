//! Exhaustiveness checking for multi-parameter overload sets.
//!
//! An interface declares, for each parameter, the set of type tags it accepts. The
//! [`completeness`] solver decides whether a list of implementations, declared the same way, covers
//! every argument tuple the interface accepts, and returns the uncovered parts otherwise.

pub mod completeness;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod program;
