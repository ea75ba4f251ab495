//! Search parameters and configuration
//!
//! One `SearchParams` value is chosen per game session: which strategy to
//! run, which evaluator it uses, whether moves are symmetry-reduced, and how
//! deep the minimax strategies look.

use std::fmt;

use crate::eval::Heuristic;

/// Move-choosing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Full-width minimax, no pruning
    Minimax,
    /// Best one-ply evaluation, random tie-break
    Greedy,
    /// First move after symmetry reduction; ignores evaluation
    SymmetryOnly,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::AlphaBeta => "alpha-beta minimax",
            Algorithm::Minimax => "minimax",
            Algorithm::Greedy => "greedy",
            Algorithm::SymmetryOnly => "symmetry only",
        }
    }

    /// Whether the strategy looks at `depth`
    pub fn uses_depth(self) -> bool {
        matches!(self, Algorithm::AlphaBeta | Algorithm::Minimax)
    }
}

/// Search parameters for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub algorithm: Algorithm,

    /// Evaluator; ignored by [`Algorithm::SymmetryOnly`]
    pub heuristic: Heuristic,

    /// Reduce move lists by left-right mirroring
    pub use_symmetry: bool,

    /// Depth in plies for the minimax strategies
    pub depth: u8,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            heuristic: Heuristic::Material,
            use_symmetry: false,
            depth: 3,
        }
    }
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn symmetry(mut self, enable: bool) -> Self {
        self.use_symmetry = enable;
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// The eight stock configurations, numbered from 1
    pub fn presets() -> Vec<Preset> {
        use Algorithm::*;
        use Heuristic::*;

        let entries = [
            ("Minimax (no alpha-beta, material)", Minimax, Material, false),
            ("Minimax with alpha-beta (material)", AlphaBeta, Material, false),
            ("Greedy (material balance)", Greedy, Material, false),
            ("Greedy (piece-square tables)", Greedy, Pst, false),
            ("Alpha-beta (piece-square tables)", AlphaBeta, Pst, false),
            ("Alpha-beta (combined heuristics)", AlphaBeta, Combined, false),
            ("Symmetry reduction only", SymmetryOnly, Material, true),
            ("Greedy (material) + symmetry", Greedy, Material, true),
        ];

        entries
            .into_iter()
            .map(|(name, algorithm, heuristic, use_symmetry)| Preset {
                name,
                params: SearchParams::new()
                    .algorithm(algorithm)
                    .heuristic(heuristic)
                    .symmetry(use_symmetry),
            })
            .collect()
    }

    /// Preset by 1-based index
    pub fn preset(number: usize) -> Option<SearchParams> {
        let index = number.checked_sub(1)?;
        Self::presets().get(index).map(|p| p.params)
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.algorithm.label())?;
        if self.algorithm != Algorithm::SymmetryOnly {
            write!(f, ", {}", self.heuristic.label())?;
        }
        if self.algorithm.uses_depth() {
            write!(f, ", depth {}", self.depth)?;
        }
        if self.use_symmetry {
            write!(f, ", symmetry")?;
        }
        Ok(())
    }
}

/// Named configuration
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub params: SearchParams,
}
