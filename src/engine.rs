//! Decision engine: routes one game state through the preflop, river or
//! blueprint pipeline and returns a single action.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::action::{Action, ActionDistribution, Decision};
use crate::blueprint::{blueprint_distribution, ProfileScalars};
use crate::bucket::{bucketize, HandBucket};
use crate::cards::{cards_to_string, find_duplicate, Card};
use crate::error::{AgentError, AgentResult};
use crate::hand_evaluator::{HandCategory, HandEvaluator, HandResult, StandardEvaluator};
use crate::math_engine::pot_odds;
use crate::phase::{classify_street, Street};
use crate::preflop::{preflop_decision, PreflopSpot};
use crate::profile::StrategyProfileConfig;
use crate::pruner::{prune, EvContext, CANDIDATE_COUNT};
use crate::river::river_decision;
use crate::sampler::sample_action;
use crate::sizing::size_raise;
use crate::texture::{classify_texture, BoardTexture};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub big_blind: u32,
    /// Wall-clock budget per decision. Exceeding it is logged, never enforced.
    pub time_budget: Duration,
    /// Preflop open size, in big blinds.
    pub open_size_bb: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            big_blind: 20,
            time_budget: Duration::from_millis(300),
            open_size_bb: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Empty for opponents whose cards are unknown.
    pub hole_cards: Vec<Card>,
    pub chips: u32,
    /// Chips put in on the current street.
    pub current_bet: u32,
    /// Chips put in over the whole hand, current street included.
    pub total_committed: u32,
}

impl PlayerState {
    pub fn new(hole_cards: Vec<Card>, chips: u32, current_bet: u32, total_committed: u32) -> Self {
        PlayerState {
            hole_cards,
            chips,
            current_bet,
            total_committed,
        }
    }

    pub fn opponent(chips: u32, current_bet: u32, total_committed: u32) -> Self {
        PlayerState::new(Vec::new(), chips, current_bet, total_committed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub players: Vec<PlayerState>,
    /// Index of the player to act in `players`.
    pub acting: usize,
    pub community: Vec<Card>,
    /// Bet the acting player has to match on this street.
    pub current_min_bet: u32,
}

impl GameState {
    pub fn acting_player(&self) -> AgentResult<&PlayerState> {
        self.players.get(self.acting).ok_or_else(|| {
            AgentError::InvalidValue(format!(
                "acting player {} out of range ({} players)",
                self.acting,
                self.players.len()
            ))
        })
    }

    pub fn pot(&self) -> u32 {
        self.players
            .iter()
            .fold(0u32, |acc, p| acc.saturating_add(p.total_committed))
    }

    pub fn call_cost(&self) -> u32 {
        self.players
            .get(self.acting)
            .map(|p| self.current_min_bet.saturating_sub(p.current_bet))
            .unwrap_or(0)
    }

    pub fn street(&self) -> Street {
        classify_street(self.community.len())
    }

    pub fn validate(&self) -> AgentResult<()> {
        let hero = self.acting_player()?;
        if hero.hole_cards.len() != 2 {
            return Err(AgentError::InvalidHandSize(hero.hole_cards.len()));
        }
        if self.community.len() > 5 {
            return Err(AgentError::InvalidBoardNotation(format!(
                "{} community cards",
                self.community.len()
            )));
        }
        let known = self.players.iter().flat_map(|p| p.hole_cards.iter()).chain(&self.community);
        if let Some(dup) = find_duplicate(known) {
            return Err(AgentError::DuplicateCard(dup.to_string()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Trace
// ---------------------------------------------------------------------------

/// Everything the pipeline derived on the way to a decision.
#[derive(Debug, Clone)]
pub struct DecisionTrace {
    pub street: Street,
    pub category: Option<HandCategory>,
    pub bucket: Option<HandBucket>,
    pub texture: Option<BoardTexture>,
    pub blueprint: Option<ActionDistribution>,
    pub candidates: Vec<(Action, f64)>,
    pub pot: u32,
    pub call_cost: u32,
    pub decision: Decision,
    pub elapsed: Duration,
}

impl DecisionTrace {
    fn new(street: Street, pot: u32, call_cost: u32) -> Self {
        DecisionTrace {
            street,
            category: None,
            bucket: None,
            texture: None,
            blueprint: None,
            candidates: Vec::new(),
            pot,
            call_cost,
            decision: Decision::check(),
            elapsed: Duration::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

pub struct DecisionEngine<E: HandEvaluator = StandardEvaluator> {
    pub config: EngineConfig,
    evaluator: E,
}

impl DecisionEngine<StandardEvaluator> {
    pub fn new(config: EngineConfig) -> Self {
        DecisionEngine::with_evaluator(config, StandardEvaluator)
    }
}

impl Default for DecisionEngine<StandardEvaluator> {
    fn default() -> Self {
        DecisionEngine::new(EngineConfig::default())
    }
}

impl<E: HandEvaluator> DecisionEngine<E> {
    pub fn with_evaluator(config: EngineConfig, evaluator: E) -> Self {
        DecisionEngine { config, evaluator }
    }

    pub fn decide<R: Rng>(
        &self,
        state: &GameState,
        profile: &StrategyProfileConfig,
        rng: &mut R,
    ) -> AgentResult<Decision> {
        self.decide_traced(state, profile, rng).map(|t| t.decision)
    }

    pub fn decide_traced<R: Rng>(
        &self,
        state: &GameState,
        profile: &StrategyProfileConfig,
        rng: &mut R,
    ) -> AgentResult<DecisionTrace> {
        let start = Instant::now();
        state.validate()?;
        profile.validate()?;

        let hero = state.acting_player()?;
        let pot = state.pot();
        let call_cost = state.call_cost();
        let street = state.street();
        let mut trace = DecisionTrace::new(street, pot, call_cost);

        let decision = match street {
            Street::Preflop => {
                let spot = PreflopSpot {
                    hole_cards: [hero.hole_cards[0], hero.hole_cards[1]],
                    current_min_bet: state.current_min_bet,
                    current_bet: hero.current_bet,
                    call_cost,
                    stack: hero.chips,
                    big_blind: self.config.big_blind,
                    open_size_bb: self.config.open_size_bb,
                };
                preflop_decision(&spot, rng)
            }
            Street::River => {
                let hand = self.evaluate(hero, &state.community)?;
                trace.category = Some(hand.category);
                river_decision(&hand, pot, call_cost, hero.chips, rng)
            }
            Street::Flop | Street::Turn => {
                self.blueprint_decision(state, hero, profile, &mut trace, rng)?
            }
        };

        trace.decision = finalize(decision, call_cost);
        trace.elapsed = start.elapsed();

        if trace.elapsed > self.config.time_budget {
            log::warn!(
                "decision took {:?}, over the {:?} budget",
                trace.elapsed,
                self.config.time_budget
            );
        }
        log::info!(
            "{} {} {} -> {} ({:?})",
            street,
            cards_to_string(&hero.hole_cards),
            profile.name,
            trace.decision,
            trace.elapsed
        );
        Ok(trace)
    }

    fn evaluate(&self, hero: &PlayerState, community: &[Card]) -> AgentResult<HandResult> {
        let mut cards = Vec::with_capacity(hero.hole_cards.len() + community.len());
        cards.extend_from_slice(&hero.hole_cards);
        cards.extend_from_slice(community);
        self.evaluator.evaluate(&cards)
    }

    fn blueprint_decision<R: Rng>(
        &self,
        state: &GameState,
        hero: &PlayerState,
        profile: &StrategyProfileConfig,
        trace: &mut DecisionTrace,
        rng: &mut R,
    ) -> AgentResult<Decision> {
        let hand = self.evaluate(hero, &state.community)?;
        let bucket = bucketize(&hero.hole_cards, &state.community, &hand);
        let texture = classify_texture(&state.community);
        let odds = pot_odds(trace.pot as f64, trace.call_cost as f64);

        let dist = blueprint_distribution(profile, bucket, texture, odds, rng);
        let ctx = EvContext {
            bucket,
            pot: trace.pot as f64,
            call_cost: trace.call_cost as f64,
            committed: hero.total_committed as f64,
        };
        let candidates = prune(&dist.top(CANDIDATE_COUNT), &ctx);
        let action = sample_action(&candidates, ctx.call_cost, rng);

        trace.category = Some(hand.category);
        trace.bucket = Some(bucket);
        trace.texture = Some(texture);
        trace.blueprint = Some(dist);
        trace.candidates = candidates;

        let decision = match action {
            Action::Raise => {
                let aggression = ProfileScalars::from_profile(profile).aggression;
                Decision::raise(size_raise(trace.pot, trace.call_cost, bucket, aggression, hero.chips))
            }
            other => Decision::new(other, 0),
        };
        Ok(decision)
    }
}

/// Map a decision onto the action it amounts to at this call cost. A raise
/// that cannot put in more than the call cost is a call; with nothing owed,
/// calls and folds are checks.
pub fn finalize(decision: Decision, call_cost: u32) -> Decision {
    let passive = if call_cost > 0 {
        Decision::call()
    } else {
        Decision::check()
    };
    match decision.action {
        Action::Raise if decision.amount <= call_cost => passive,
        Action::Call | Action::Fold if call_cost == 0 => Decision::check(),
        _ => decision,
    }
}
