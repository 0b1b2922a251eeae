use serde::Serialize;

use crate::safe::Safe;

pub mod backtrack;
pub mod config;

pub use backtrack::{Backtracker, Configuration};
pub use config::SafeConfig;

/// Optional search budget. Exceeding it fails the search as "no solution
/// found within budget" rather than aborting; the check runs once per
/// recursive call.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub max_nodes: Option<u64>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: None, // exhaustive by default; depth is bounded by the grid
        }
    }
}

/// Counters from the most recent search run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub max_depth: u32,
}

/// Next-move suggestion derived from a solution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// The grid already verifies; there is nothing to place.
    Solved,
    /// No goal is reachable from the current grid.
    NoSolution,
    /// Place a laser here next.
    Place { row: usize, col: usize },
}

/// Solve a safe from its current contents. Returns the first goal grid found,
/// or None when the search space is exhausted.
pub fn solve_safe(safe: &Safe) -> Option<Safe> {
    let mut engine = Backtracker::new();
    engine
        .solve(SafeConfig::from_safe(safe.clone()))
        .map(SafeConfig::into_safe)
}

/// Ordered placement decisions leading from `safe` to a goal: each entry adds
/// exactly one laser over its predecessor ("leave empty" steps are dropped).
/// `Some(vec![])` means the safe is already solved; `None` means no solution
/// exists. Callers must not conflate the two.
pub fn solution_path(safe: &Safe) -> Option<Vec<SafeConfig>> {
    let mut engine = Backtracker::new();
    let path = engine.solve_with_path(SafeConfig::from_safe(safe.clone()))?;
    let mut lasers = safe.laser_count();
    Some(
        path.into_iter()
            .filter(|config| {
                let n = config.safe().laser_count();
                let placed = n > lasers;
                lasers = n;
                placed
            })
            .collect(),
    )
}

/// Suggest the next laser placement from the current grid. Scans the solution
/// path for the first configuration whose laser positions differ from the
/// start, guarding against a leading entry that matches the grid as-is.
pub fn hint(safe: &Safe) -> Hint {
    let mut engine = Backtracker::new();
    let Some(path) = engine.solve_with_path(SafeConfig::from_safe(safe.clone())) else {
        return Hint::NoSolution;
    };
    let start = safe.laser_positions();
    for config in &path {
        if config.safe().laser_positions() != start {
            if let Some((row, col)) = config.cursor_coord() {
                return Hint::Place { row, col };
            }
        }
    }
    Hint::Solved
}
