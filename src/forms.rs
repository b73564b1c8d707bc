//! Form Drafts
//!
//! Editable state behind the create forms, and validation into request
//! payloads. Inputs are kept as strings until submit, like the DOM has them.

use leptos_alerts::Severity;
use thiserror::Error;

use crate::models::{Ability, BaseStats, MapLocation, NewBattle, NewPlayer, NewPokemon, NewSave, NewThought};

pub const MAX_TEAM_SIZE: usize = 6;

const DEFAULT_LEVEL: &str = "50";
const DEFAULT_STAT: &str = "50";

/// Short stat labels in form order
pub const STAT_LABELS: [&str; 6] = ["HP", "Atk", "Def", "SpA", "SpD", "Spe"];

pub const POKEMON_TYPES: &[(&str, &str)] = &[
    ("normal", "Normal"),
    ("fire", "Fire"),
    ("water", "Water"),
    ("grass", "Grass"),
    ("electric", "Electric"),
    ("ice", "Ice"),
    ("fighting", "Fighting"),
    ("poison", "Poison"),
    ("ground", "Ground"),
    ("flying", "Flying"),
    ("psychic", "Psychic"),
    ("bug", "Bug"),
    ("rock", "Rock"),
    ("ghost", "Ghost"),
    ("dragon", "Dragon"),
    ("dark", "Dark"),
    ("steel", "Steel"),
    ("fairy", "Fairy"),
];

pub const NATURES: &[(&str, &str)] = &[
    ("hardy", "Hardy"),
    ("lonely", "Lonely"),
    ("brave", "Brave"),
    ("adamant", "Adamant"),
    ("naughty", "Naughty"),
    ("bold", "Bold"),
    ("docile", "Docile"),
    ("relaxed", "Relaxed"),
    ("impish", "Impish"),
    ("lax", "Lax"),
    ("timid", "Timid"),
    ("hasty", "Hasty"),
    ("serious", "Serious"),
    ("jolly", "Jolly"),
    ("naive", "Naive"),
    ("modest", "Modest"),
    ("mild", "Mild"),
    ("quiet", "Quiet"),
    ("bashful", "Bashful"),
    ("rash", "Rash"),
    ("calm", "Calm"),
    ("gentle", "Gentle"),
    ("sassy", "Sassy"),
    ("careful", "Careful"),
    ("quirky", "Quirky"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Player name is required")]
    MissingPlayerName,
    #[error("Location area and specific location are required")]
    MissingLocation,
    #[error("Please fill in all required fields for Pokemon #{0}")]
    IncompletePokemon(usize),
    #[error("Pokemon #{0} needs a level from 1 to 100 and stats from 1 to 255")]
    InvalidPokemonNumbers(usize),
    #[error("Maximum team size is {} Pokemon", MAX_TEAM_SIZE)]
    TeamFull,
    #[error("Thought content is required")]
    MissingThought,
    #[error("Opponent ID and name are required")]
    MissingOpponent,
    #[error("Save name is required")]
    MissingSaveName,
}

impl FormError {
    pub fn severity(&self) -> Severity {
        match self {
            FormError::TeamFull => Severity::Warning,
            _ => Severity::Danger,
        }
    }
}

// ========================
// Team Builder
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokemonField {
    Name,
    Level,
    Type1,
    Type2,
    Nature,
    HeldItem,
    Stat(usize),
}

/// One team member as typed into the form
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDraft {
    /// Stable row key for rendering
    pub key: u32,
    pub name: String,
    pub level: String,
    pub type1: String,
    pub type2: String,
    pub nature: String,
    pub held_item: String,
    pub stats: [String; 6],
}

impl PokemonDraft {
    fn new(key: u32) -> Self {
        Self {
            key,
            name: String::new(),
            level: DEFAULT_LEVEL.to_string(),
            type1: String::new(),
            type2: String::new(),
            nature: String::new(),
            held_item: String::new(),
            stats: std::array::from_fn(|_| DEFAULT_STAT.to_string()),
        }
    }

    pub fn get(&self, field: PokemonField) -> &str {
        match field {
            PokemonField::Name => &self.name,
            PokemonField::Level => &self.level,
            PokemonField::Type1 => &self.type1,
            PokemonField::Type2 => &self.type2,
            PokemonField::Nature => &self.nature,
            PokemonField::HeldItem => &self.held_item,
            PokemonField::Stat(i) => self.stats.get(i).map(String::as_str).unwrap_or(""),
        }
    }

    pub fn set(&mut self, field: PokemonField, value: String) {
        match field {
            PokemonField::Name => self.name = value,
            PokemonField::Level => self.level = value,
            PokemonField::Type1 => self.type1 = value,
            PokemonField::Type2 => self.type2 = value,
            PokemonField::Nature => self.nature = value,
            PokemonField::HeldItem => self.held_item = value,
            PokemonField::Stat(i) => {
                if let Some(stat) = self.stats.get_mut(i) {
                    *stat = value;
                }
            }
        }
    }

    /// Validate as team member `number` (1-based, used in messages)
    pub fn validate(&self, number: usize) -> Result<NewPokemon, FormError> {
        let name = self.name.trim();
        if name.is_empty() || self.type1.is_empty() || self.nature.is_empty() {
            return Err(FormError::IncompletePokemon(number));
        }

        let invalid = || FormError::InvalidPokemonNumbers(number);
        let level = self.level.trim().parse::<u8>().ok().filter(|l| (1..=100).contains(l)).ok_or_else(invalid)?;
        let mut stats = [0u16; 6];
        for (slot, raw) in stats.iter_mut().zip(&self.stats) {
            *slot = raw.trim().parse::<u16>().ok().filter(|s| (1..=255).contains(s)).ok_or_else(invalid)?;
        }

        let mut types = vec![self.type1.clone()];
        if !self.type2.is_empty() {
            types.push(self.type2.clone());
        }
        let held_item = Some(self.held_item.trim()).filter(|s| !s.is_empty()).map(str::to_string);

        Ok(NewPokemon {
            name: name.to_string(),
            level,
            types,
            // Abilities are not entered in the form yet
            abilities: vec![Ability { name: "Unknown".to_string(), is_hidden: false }],
            nature: self.nature.clone(),
            held_item,
            base_stats: BaseStats {
                hp: stats[0],
                attack: stats[1],
                defense: stats[2],
                special_attack: stats[3],
                special_defense: stats[4],
                speed: stats[5],
            },
        })
    }
}

/// Team rows; always holds at least the first member
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDraft {
    members: Vec<PokemonDraft>,
    next_key: u32,
}

impl Default for TeamDraft {
    fn default() -> Self {
        Self {
            members: vec![PokemonDraft::new(1)],
            next_key: 2,
        }
    }
}

impl TeamDraft {
    pub fn keys(&self) -> Vec<u32> {
        self.members.iter().map(|m| m.key).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn add(&mut self) -> Result<u32, FormError> {
        if self.members.len() >= MAX_TEAM_SIZE {
            return Err(FormError::TeamFull);
        }
        let key = self.next_key;
        self.next_key += 1;
        self.members.push(PokemonDraft::new(key));
        Ok(key)
    }

    /// Every row but the first can be removed
    pub fn is_removable(&self, key: u32) -> bool {
        matches!(self.position(key), Some(index) if index > 0)
    }

    pub fn remove(&mut self, key: u32) -> bool {
        match self.position(key) {
            Some(index) if index > 0 => {
                self.members.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn position(&self, key: u32) -> Option<usize> {
        self.members.iter().position(|m| m.key == key)
    }

    pub fn member(&self, key: u32) -> Option<&PokemonDraft> {
        self.members.iter().find(|m| m.key == key)
    }

    pub fn set_field(&mut self, key: u32, field: PokemonField, value: String) {
        if let Some(member) = self.members.iter_mut().find(|m| m.key == key) {
            member.set(field, value);
        }
    }

    pub fn validate(&self) -> Result<Vec<NewPokemon>, FormError> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, member)| member.validate(i + 1))
            .collect()
    }
}

// ========================
// Create Forms
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerDraft {
    pub name: String,
    pub area: String,
    pub specific: String,
    pub description: String,
    pub team: TeamDraft,
}

impl PlayerDraft {
    pub fn validate(&self) -> Result<NewPlayer, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingPlayerName);
        }
        let area = self.area.trim();
        let specific = self.specific.trim();
        if area.is_empty() || specific.is_empty() {
            return Err(FormError::MissingLocation);
        }
        let team = self.team.validate()?;
        let description = Some(self.description.trim()).filter(|s| !s.is_empty()).map(str::to_string);

        Ok(NewPlayer {
            name: name.to_string(),
            location: MapLocation {
                location_tuple: vec![area.to_string(), specific.to_string()],
                description,
                accessible_locations: Vec::new(),
            },
            team,
        })
    }
}

pub fn validate_thought(content: &str, category: &str) -> Result<NewThought, FormError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(FormError::MissingThought);
    }
    Ok(NewThought {
        content: content.to_string(),
        category: category.to_string(),
    })
}

pub fn validate_battle(opponent_id: &str, opponent_name: &str) -> Result<NewBattle, FormError> {
    let (id, name) = (opponent_id.trim(), opponent_name.trim());
    if id.is_empty() || name.is_empty() {
        return Err(FormError::MissingOpponent);
    }
    Ok(NewBattle {
        opponent_id: id.to_string(),
        opponent_name: name.to_string(),
    })
}

pub fn validate_save(name: &str, game_version: &str) -> Result<NewSave, FormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::MissingSaveName);
    }
    Ok(NewSave {
        name: name.to_string(),
        game_version: game_version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_member(team: &mut TeamDraft, key: u32, name: &str) {
        team.set_field(key, PokemonField::Name, name.to_string());
        team.set_field(key, PokemonField::Type1, "water".to_string());
        team.set_field(key, PokemonField::Nature, "modest".to_string());
    }

    fn valid_player() -> PlayerDraft {
        let mut draft = PlayerDraft {
            name: " Rosa ".to_string(),
            area: "Aspertia City".to_string(),
            specific: "Trainer School".to_string(),
            ..Default::default()
        };
        filled_member(&mut draft.team, 1, "Oshawott");
        draft
    }

    #[test]
    fn test_team_size_limit() {
        let mut team = TeamDraft::default();
        for _ in 1..MAX_TEAM_SIZE {
            team.add().unwrap();
        }
        assert_eq!(team.len(), 6);
        let err = team.add().unwrap_err();
        assert_eq!(err, FormError::TeamFull);
        assert_eq!(err.to_string(), "Maximum team size is 6 Pokemon");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_first_member_cannot_be_removed() {
        let mut team = TeamDraft::default();
        let second = team.add().unwrap();
        assert!(!team.is_removable(1));
        assert!(team.is_removable(second));
        assert!(!team.is_removable(99));
        assert!(!team.remove(1));
        assert!(team.remove(second));
        assert_eq!(team.keys(), vec![1]);
    }

    #[test]
    fn test_player_payload() {
        let mut draft = valid_player();
        draft.team.set_field(1, PokemonField::Type2, "ice".to_string());
        draft.team.set_field(1, PokemonField::Stat(5), "63".to_string());

        let player = draft.validate().unwrap();

        assert_eq!(player.name, "Rosa");
        assert_eq!(player.location.location_tuple, vec!["Aspertia City", "Trainer School"]);
        assert!(player.location.description.is_none());
        let mon = &player.team[0];
        assert_eq!(mon.types, vec!["water", "ice"]);
        assert_eq!(mon.level, 50);
        assert_eq!(mon.base_stats.speed, 63);
        assert_eq!(mon.abilities[0].name, "Unknown");
        assert!(mon.held_item.is_none());
    }

    #[test]
    fn test_validation_messages_in_order() {
        let mut draft = valid_player();
        draft.name = "  ".to_string();
        assert_eq!(draft.validate().unwrap_err().to_string(), "Player name is required");

        let mut draft = valid_player();
        draft.specific.clear();
        assert_eq!(draft.validate().unwrap_err(), FormError::MissingLocation);

        let mut draft = valid_player();
        draft.team.add().unwrap();
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Please fill in all required fields for Pokemon #2"
        );
    }

    #[test]
    fn test_out_of_range_numbers() {
        let mut draft = valid_player();
        draft.team.set_field(1, PokemonField::Level, "101".to_string());
        assert_eq!(draft.validate().unwrap_err(), FormError::InvalidPokemonNumbers(1));

        let mut draft = valid_player();
        draft.team.set_field(1, PokemonField::Stat(0), "abc".to_string());
        assert_eq!(draft.validate().unwrap_err(), FormError::InvalidPokemonNumbers(1));
    }

    #[test]
    fn test_small_forms() {
        assert_eq!(validate_thought("   ", "general").unwrap_err(), FormError::MissingThought);
        assert_eq!(validate_thought(" Train more ", "battle").unwrap().content, "Train more");

        assert_eq!(validate_battle("rival", "").unwrap_err().to_string(), "Opponent ID and name are required");
        assert_eq!(validate_battle(" rival ", "Hugh").unwrap().opponent_id, "rival");

        assert_eq!(validate_save("", "Black2White2").unwrap_err().to_string(), "Save name is required");
        assert_eq!(validate_save("Run", "Black2White2").unwrap().game_version, "Black2White2");
    }
}
