pub mod action;
pub mod blueprint;
pub mod bucket;
pub mod cards;
pub mod cli;
pub mod display;
pub mod engine;
pub mod error;
pub mod hand_evaluator;
pub mod math_engine;
pub mod phase;
pub mod preflop;
pub mod profile;
pub mod pruner;
pub mod river;
pub mod sampler;
pub mod simulate;
pub mod sizing;
pub mod texture;

pub use action::{Action, ActionDistribution, Decision};
pub use engine::{DecisionEngine, EngineConfig, GameState, PlayerState};
pub use error::{AgentError, AgentResult};
pub use profile::{ProfileRegistry, StrategyProfileConfig};
