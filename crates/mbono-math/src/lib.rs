//! # MBono Math
//!
//! Numerical utilities for the MBono yield engine.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root finding with a bounded iteration budget
//! - **Rounding**: Half-away-from-zero decimal rounding used for price and
//!   coupon quotes
//!
//! ## Design Philosophy
//!
//! - **Reproducible**: Iterations follow a fixed recipe so results match the
//!   reference numbers bit for bit
//! - **Total**: Solvers always return an estimate; validation is the caller's job

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rounding;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::rounding::round_to;
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
