//! Heuristic counterexample search for conjectures of the form
//! "IF invariant crosses a threshold THEN another invariant crosses a threshold".
//!
//! A conjecture is checked against random graphs which a stochastic local
//! search then pushes toward satisfying the premise while breaking the
//! conclusion. Finding nothing is not a proof.

pub mod conjecture;
pub mod engine;
pub mod error;
pub mod generator;
pub mod graph;
pub mod invariants;
pub mod operations;
pub mod random;
pub mod search;

pub use conjecture::{Atom, Conjecture, Evaluation, Operator, Variable};
pub use engine::{LocalSearch, LocalSearchConfig, LocalSearchOutcome, StepRecord};
pub use error::{FalsifierError, Result};
pub use graph::Graph;
pub use invariants::InvariantSnapshot;
pub use operations::{EdgeAction, EdgeBudget, ToggleOutcome};
pub use random::RandomSource;
pub use search::{counterexample_objective, Counterexample, CounterexampleSearch, SearchConfig};
