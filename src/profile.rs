//! Strategy profiles: the ten named archetypes and their scalar weights.
//!
//! The built-in set is embedded from `data/profiles.json`; a replacement set
//! can be loaded from disk with [`ProfileRegistry::from_file`].

use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{AgentError, AgentResult};

static PROFILES_JSON: &str = include_str!("../data/profiles.json");

pub const PROFILE_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Balanced,
    Aggressive,
    Polarized,
    Linear,
    Trapping,
    Defensive,
    BluffHeavy,
    CBetHeavy,
    Tight,
    MaximumPressure,
}

pub const ALL_ARCHETYPES: [Archetype; PROFILE_COUNT] = [
    Archetype::Balanced,
    Archetype::Aggressive,
    Archetype::Polarized,
    Archetype::Linear,
    Archetype::Trapping,
    Archetype::Defensive,
    Archetype::BluffHeavy,
    Archetype::CBetHeavy,
    Archetype::Tight,
    Archetype::MaximumPressure,
];

impl Archetype {
    pub fn from_index(index: u8) -> AgentResult<Archetype> {
        ALL_ARCHETYPES
            .get(index as usize)
            .copied()
            .ok_or_else(|| AgentError::UnknownProfile(index.to_string()))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Balanced => "Balanced",
            Archetype::Aggressive => "Aggressive",
            Archetype::Polarized => "Polarized",
            Archetype::Linear => "Linear",
            Archetype::Trapping => "Trapping",
            Archetype::Defensive => "Defensive",
            Archetype::BluffHeavy => "BluffHeavy",
            Archetype::CBetHeavy => "CBetHeavy",
            Archetype::Tight => "Tight",
            Archetype::MaximumPressure => "MaximumPressure",
        }
    }

    /// Polarized archetypes bet strong hands and bluffs, and give up the middle.
    pub fn is_polarized(self) -> bool {
        matches!(
            self,
            Archetype::Polarized | Archetype::BluffHeavy | Archetype::MaximumPressure
        )
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named set of strategy weights. Owned by the caller, read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyProfileConfig {
    pub name: String,
    pub index: u8,
    pub hand_strength_weight: f64,
    pub potential_weight: f64,
    pub board_advantage_weight: f64,
    pub position_weight: f64,
    pub spr_weight: f64,
    pub danger_penalty_weight: f64,
    pub bluff_frequency: f64,
    pub aggression_factor: f64,
    pub search_depth: u32,
}

impl StrategyProfileConfig {
    pub fn archetype(&self) -> AgentResult<Archetype> {
        Archetype::from_index(self.index)
    }

    pub fn validate(&self) -> AgentResult<()> {
        self.archetype()?;

        let weights: [(&'static str, f64); 8] = [
            ("hand_strength_weight", self.hand_strength_weight),
            ("potential_weight", self.potential_weight),
            ("board_advantage_weight", self.board_advantage_weight),
            ("position_weight", self.position_weight),
            ("spr_weight", self.spr_weight),
            ("danger_penalty_weight", self.danger_penalty_weight),
            ("bluff_frequency", self.bluff_frequency),
            ("aggression_factor", self.aggression_factor),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(AgentError::InvalidProfileWeight { field, value });
            }
        }
        if self.bluff_frequency > 1.0 {
            return Err(AgentError::InvalidProfileWeight {
                field: "bluff_frequency",
                value: self.bluff_frequency,
            });
        }
        Ok(())
    }
}

impl Default for StrategyProfileConfig {
    fn default() -> Self {
        builtin().get(0).cloned().unwrap_or_else(|_| StrategyProfileConfig {
            name: "Balanced".to_string(),
            index: 0,
            hand_strength_weight: 1.0,
            potential_weight: 0.5,
            board_advantage_weight: 0.3,
            position_weight: 0.2,
            spr_weight: 0.2,
            danger_penalty_weight: 0.4,
            bluff_frequency: 0.1,
            aggression_factor: 1.0,
            search_depth: 2,
        })
    }
}

#[derive(Deserialize, Serialize)]
struct ProfileFile {
    profiles: Vec<StrategyProfileConfig>,
}

#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<StrategyProfileConfig>,
}

static BUILTIN: Lazy<ProfileRegistry> = Lazy::new(|| {
    ProfileRegistry::from_json(PROFILES_JSON).expect("Failed to parse built-in profiles")
});

/// The ten profiles shipped with the crate.
pub fn builtin() -> &'static ProfileRegistry {
    &BUILTIN
}

impl ProfileRegistry {
    pub fn from_json(json: &str) -> AgentResult<ProfileRegistry> {
        let file: ProfileFile = serde_json::from_str(json)?;
        ProfileRegistry::new(file.profiles)
    }

    pub fn from_file(path: &Path) -> AgentResult<ProfileRegistry> {
        let json = fs::read_to_string(path)?;
        let registry = ProfileRegistry::from_json(&json)?;
        log::info!("Loaded {} profiles from {}", registry.len(), path.display());
        Ok(registry)
    }

    pub fn new(mut profiles: Vec<StrategyProfileConfig>) -> AgentResult<ProfileRegistry> {
        for p in &profiles {
            p.validate()?;
        }
        profiles.sort_by_key(|p| p.index);
        if let Some(w) = profiles.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(AgentError::InvalidValue(format!(
                "duplicate profile index {}",
                w[0].index
            )));
        }
        Ok(ProfileRegistry { profiles })
    }

    pub fn get(&self, index: u8) -> AgentResult<&StrategyProfileConfig> {
        self.profiles
            .iter()
            .find(|p| p.index == index)
            .ok_or_else(|| AgentError::UnknownProfile(index.to_string()))
    }

    pub fn by_name(&self, name: &str) -> AgentResult<&StrategyProfileConfig> {
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AgentError::UnknownProfile(name.to_string()))
    }

    /// Accepts either an index ("4") or a name ("trapping").
    pub fn resolve(&self, key: &str) -> AgentResult<&StrategyProfileConfig> {
        match key.trim().parse::<u8>() {
            Ok(index) => self.get(index),
            Err(_) => self.by_name(key.trim()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyProfileConfig> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
