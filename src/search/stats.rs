//! Search statistics
//!
//! Counts what a strategy did during one decision. Filling these in never
//! changes the move or score a strategy returns.

use std::fmt;
use std::time::{Duration, Instant};

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Nodes visited (every board a strategy looked at, root included)
    pub nodes: u64,

    /// Calls to the evaluator
    pub evaluations: u64,

    /// Sibling lists cut short by alpha-beta
    pub cutoffs: u64,

    /// Moves dropped by symmetry reduction
    pub symmetry_pruned: u64,

    /// Score backing the last decision, when the strategy computes one
    pub score: Option<i32>,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent on the last decision
    pub search_time: Duration,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
        }
    }

    #[inline]
    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    #[inline]
    pub fn inc_eval(&mut self) {
        self.evaluations += 1;
    }

    #[inline]
    pub fn inc_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    #[inline]
    pub fn add_symmetry_pruned(&mut self, before: usize, after: usize) {
        self.symmetry_pruned += before.saturating_sub(after) as u64;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} evals {} cutoffs {} mirrored-out {} time {:.4}s",
            self.nodes,
            self.evaluations,
            self.cutoffs,
            self.symmetry_pruned,
            self.search_time.as_secs_f64()
        )?;
        if let Some(score) = self.score {
            write!(f, " score {}", score)?;
        }
        Ok(())
    }
}
