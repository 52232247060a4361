use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::blueprint::blueprint_distribution;
use crate::bucket::HandBucket;
use crate::cards::{hand_class, parse_board, parse_hole_cards};
use crate::display::{
    board_display, candidates_table, distribution_table, print_error, print_section,
    profiles_table, styled_decision, summary_table,
};
use crate::engine::{DecisionEngine, EngineConfig, GameState, PlayerState};
use crate::error::{AgentError, AgentResult};
use crate::math_engine::spr;
use crate::profile::{builtin, ProfileRegistry};
use crate::simulate::sample_decisions;
use crate::texture::BoardTexture;

#[derive(Parser)]
#[command(name = "gto-agent", version = "1.0.0", about = "Heads-up poker decision core: blueprint profiles, preflop ranges and river math.")]
struct Cli {
    /// Log every pipeline stage
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Load strategy profiles from a JSON file instead of the built-in set
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SpotArgs {
    /// Hole cards (e.g., AsKd)
    #[arg(long)]
    hand: String,
    /// Community cards (e.g., Ah7d2c)
    #[arg(short, long)]
    board: Option<String>,
    /// Chips in the pot, everything already committed included
    #[arg(short, long, default_value = "0")]
    pot: u32,
    /// Chips needed to call
    #[arg(long = "to-call", default_value = "0")]
    to_call: u32,
    /// Chips behind
    #[arg(short, long, default_value = "1000")]
    stack: u32,
    /// Chips already put in on this street
    #[arg(long, default_value = "0")]
    bet: u32,
    /// Chips put in over the whole hand (defaults to --bet)
    #[arg(long)]
    committed: Option<u32>,
    /// Profile index (0-9) or name
    #[arg(long, default_value = "0")]
    profile: String,
    #[arg(long = "big-blind", default_value = "20")]
    big_blind: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one full decision for a spot
    Decide {
        #[command(flatten)]
        spot: SpotArgs,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the strategy profiles
    Profiles,
    /// Show the blueprint distribution for a bucket and texture
    Blueprint {
        /// Trash, WeakDraw, StrongDraw, MarginalMade, StrongMade or Monster
        #[arg(long)]
        bucket: String,
        /// Dry, Wet, Paired or Monotone
        #[arg(long, default_value = "Dry")]
        texture: String,
        #[arg(long = "pot-odds", default_value = "0")]
        pot_odds: f64,
        #[arg(long, default_value = "0")]
        profile: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Repeat one decision many times and tally the actions
    Sample {
        #[command(flatten)]
        spot: SpotArgs,
        #[arg(short = 'n', long, default_value = "1000")]
        runs: usize,
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

pub fn run() {
    let cli = Cli::parse();
    execute(cli);
}

pub fn run_with_args(args: Vec<String>) {
    let cli = Cli::parse_from(args);
    execute(cli);
}

fn execute(cli: Cli) {
    init_logging(cli.verbose);
    if let Err(e) = dispatch(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init()
        .ok();
}

fn dispatch(cli: Cli) -> AgentResult<()> {
    let registry = load_registry(cli.profiles.as_ref())?;
    match cli.command {
        Commands::Decide { spot, seed } => cmd_decide(&registry, &spot, seed),
        Commands::Profiles => {
            println!("{}", profiles_table(registry.iter()));
            Ok(())
        }
        Commands::Blueprint {
            bucket,
            texture,
            pot_odds,
            profile,
            seed,
        } => cmd_blueprint(&registry, &bucket, &texture, pot_odds, &profile, seed),
        Commands::Sample { spot, runs, seed } => cmd_sample(&registry, &spot, runs, seed),
    }
}

fn load_registry(path: Option<&PathBuf>) -> AgentResult<ProfileRegistry> {
    match path {
        Some(p) => ProfileRegistry::from_file(p),
        None => Ok(builtin().clone()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Heads-up state with hero at seat 0 and an opponent holding the rest of the pot.
fn build_state(spot: &SpotArgs) -> AgentResult<GameState> {
    let hole = parse_hole_cards(&spot.hand)?;
    let community = match &spot.board {
        Some(b) if !b.trim().is_empty() => parse_board(b)?,
        _ => Vec::new(),
    };
    let committed = spot.committed.unwrap_or(spot.bet).max(spot.bet);
    if committed > spot.pot {
        return Err(AgentError::InvalidValue(format!(
            "committed {} exceeds pot {}",
            committed, spot.pot
        )));
    }
    let current_min_bet = spot.bet.saturating_add(spot.to_call);

    let state = GameState {
        players: vec![
            PlayerState::new(hole.to_vec(), spot.stack, spot.bet, committed),
            PlayerState::opponent(spot.stack, current_min_bet, spot.pot - committed),
        ],
        acting: 0,
        community,
        current_min_bet,
    };
    state.validate()?;
    Ok(state)
}

fn engine_for(spot: &SpotArgs) -> DecisionEngine {
    DecisionEngine::new(EngineConfig {
        big_blind: spot.big_blind,
        ..EngineConfig::default()
    })
}

fn cmd_decide(registry: &ProfileRegistry, spot: &SpotArgs, seed: Option<u64>) -> AgentResult<()> {
    let profile = registry.resolve(&spot.profile)?;
    let state = build_state(spot)?;
    let engine = engine_for(spot);
    let mut rng = make_rng(seed);
    let trace = engine.decide_traced(&state, profile, &mut rng)?;

    let hero = &state.players[0].hole_cards;
    println!();
    println!(
        "  Hand:    {} ({})",
        board_display(hero),
        hand_class(hero[0], hero[1])
    );
    println!("  Board:   {}", board_display(&state.community));
    println!(
        "  Street:  {}   Pot: {}   To call: {}   Profile: {}",
        trace.street,
        trace.pot,
        trace.call_cost,
        profile.name.bold()
    );
    if let Ok(ratio) = spr(spot.stack as f64, trace.pot as f64) {
        println!("  {}", ratio);
    }
    if let Some(category) = trace.category {
        println!("  Made:    {}", category);
    }
    if let (Some(bucket), Some(texture)) = (trace.bucket, trace.texture) {
        println!("  Bucket:  {}   Texture: {}", bucket, texture);
    }
    if let Some(dist) = &trace.blueprint {
        print_section("Blueprint", &distribution_table(dist));
    }
    if !trace.candidates.is_empty() {
        print_section("After pruning", &candidates_table(&trace.candidates));
    }
    println!();
    println!("  Decision: {}", styled_decision(&trace.decision));
    println!("  {}", format!("({:?})", trace.elapsed).dimmed());
    println!();
    Ok(())
}

fn cmd_blueprint(
    registry: &ProfileRegistry,
    bucket: &str,
    texture: &str,
    pot_odds: f64,
    profile: &str,
    seed: Option<u64>,
) -> AgentResult<()> {
    let bucket = HandBucket::from_name(bucket)
        .ok_or_else(|| AgentError::InvalidValue(format!("unknown bucket: {}", bucket)))?;
    let texture = BoardTexture::from_name(texture)
        .ok_or_else(|| AgentError::InvalidValue(format!("unknown texture: {}", texture)))?;
    if !(0.0..=1.0).contains(&pot_odds) {
        return Err(AgentError::InvalidValue(format!(
            "pot odds must be in [0, 1], got {}",
            pot_odds
        )));
    }
    let profile = registry.resolve(profile)?;
    let mut rng = make_rng(seed);
    let dist = blueprint_distribution(profile, bucket, texture, pot_odds, &mut rng);

    println!();
    println!(
        "  {} / {} / {}  pot odds {:.1}%",
        profile.name.bold(),
        bucket,
        texture,
        pot_odds * 100.0
    );
    println!("{}", distribution_table(&dist));
    Ok(())
}

fn cmd_sample(registry: &ProfileRegistry, spot: &SpotArgs, runs: usize, seed: u64) -> AgentResult<()> {
    let profile = registry.resolve(&spot.profile)?;
    let state = build_state(spot)?;
    let engine = engine_for(spot);
    let summary = sample_decisions(&engine, &state, profile, runs, seed)?;

    println!();
    println!(
        "  {} runs, {} on {}",
        summary.runs,
        profile.name.bold(),
        board_display(&state.community)
    );
    println!("{}", summary_table(&summary));
    if summary.mean_raise > 0.0 {
        println!("  Mean raise: {:.1}", summary.mean_raise);
    }
    println!();
    Ok(())
}
