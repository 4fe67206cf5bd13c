//! Core types shared by all Copybook layers.
//!
//! This crate provides:
//! - [`NodeId`] - Identity of one syntax node, assigned by the parser
//! - [`Literal`] - Literal values appearing in clause positions
//! - [`Error`] - Error types for the opt-in validation surface
//! - [`Diagnostics`] - Structured warning collection for a build pass

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod diagnostics;
mod error;
mod literal;
mod node;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, ErrorKind, Result};
pub use literal::{Figurative, Literal, parse_integer};
pub use node::{NodeId, NodeIdGen};
