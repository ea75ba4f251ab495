//! Move choosing strategies for Specchio
//!
//! Two depth-bounded minimax variants, a one-ply greedy chooser and a
//! symmetry-only chooser, all reachable through the [`Search`] facade.

pub mod greedy;
pub mod minimax;
pub mod params;
pub mod search;
pub mod stats;

pub use self::greedy::{choose_by_symmetry_only, choose_greedy, TieBreaker};
pub use self::minimax::{alpha_beta, minimax, INFINITY};
pub use self::params::{Algorithm, Preset, SearchParams};
pub use self::search::Search;
pub use self::stats::SearchStats;
pub use crate::board::Move;
