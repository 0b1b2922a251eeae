use super::{SearchLimits, SearchStats};

/// Anything the backtracking engine can explore: a configuration knows its
/// successors, whether its newest decision is still consistent, and whether
/// it is a goal. The engine never sees the concrete puzzle type.
pub trait Configuration: Clone {
    fn successors(&self) -> Vec<Self>;
    fn is_valid(&self) -> bool;
    fn is_goal(&self) -> bool;
}

/// Depth-first backtracking search. Each successor owns a deep copy of its
/// parent's state, so backtracking is just dropping the rejected branch; no
/// undo bookkeeping exists anywhere.
#[derive(Debug, Default)]
pub struct Backtracker {
    limits: SearchLimits,
    stats: SearchStats,
}

impl Backtracker {
    #[inline]
    pub fn new() -> Self {
        Self::with_limits(SearchLimits::default())
    }

    #[inline]
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            limits,
            stats: SearchStats::default(),
        }
    }

    /// Counters from the most recent `solve`/`solve_with_path` run.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the first goal reachable from `config`, depth-first. Returns None
    /// when every branch is exhausted or the node budget runs out; exhaustion
    /// is an expected outcome, never an error.
    pub fn solve<C: Configuration>(&mut self, config: C) -> Option<C> {
        self.stats = SearchStats::default();
        self.solve_inner(config, 0)
    }

    fn solve_inner<C: Configuration>(&mut self, config: C, depth: u32) -> Option<C> {
        if !self.account(depth) {
            return None;
        }
        if config.is_goal() {
            return Some(config);
        }
        for child in config.successors() {
            if child.is_valid() {
                if let Some(goal) = self.solve_inner(child, depth + 1) {
                    return Some(goal);
                }
            }
        }
        // implicit backtracking: the rejected branch is simply dropped
        None
    }

    /// Like [`Backtracker::solve`], but returns the chain of successor
    /// configurations from just after `config` down to the goal, in
    /// root-to-goal order. An empty chain means `config` already was the
    /// goal, which is distinct from the `None` no-solution case.
    pub fn solve_with_path<C: Configuration>(&mut self, config: C) -> Option<Vec<C>> {
        self.stats = SearchStats::default();
        let mut path = self.path_inner(config, 0)?;
        // Built goal-to-root on the way back up
        path.reverse();
        Some(path)
    }

    fn path_inner<C: Configuration>(&mut self, config: C, depth: u32) -> Option<Vec<C>> {
        if !self.account(depth) {
            return None;
        }
        if config.is_goal() {
            return Some(Vec::new());
        }
        for child in config.successors() {
            if child.is_valid() {
                if let Some(mut path) = self.path_inner(child.clone(), depth + 1) {
                    path.push(child);
                    return Some(path);
                }
            }
        }
        None
    }

    // Per-call accounting: bump the counters and report whether the budget
    // still allows this call.
    fn account(&mut self, depth: u32) -> bool {
        if let Some(max_nodes) = self.limits.max_nodes {
            if self.stats.nodes >= max_nodes {
                return false;
            }
        }
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        true
    }
}
