#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod cell;
pub mod safe;
pub mod parse;
pub mod model;

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::cell::{Cell, CellKind};
pub use crate::model::SafeModel;
pub use crate::parse::{load_safe_from_file, parse_safe};
pub use crate::safe::{Safe, SafeError, VerifyCause, VerifyFailure};
pub use crate::solver::{
    hint, solution_path, solve_safe, Backtracker, Configuration, Hint, SafeConfig, SearchLimits,
    SearchStats,
};
pub use crate::types::Dir;
