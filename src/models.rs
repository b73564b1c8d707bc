//! Frontend Models
//!
//! Data structures matching backend entities and request payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest base stat value; stat bars are drawn relative to it
pub const MAX_BASE_STAT: u16 = 255;

// ========================
// Response Envelopes
// ========================

/// Standard backend response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// Paginated list response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

pub type PlayerPage = Paginated<Player>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerCreated {
    pub player_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattleStarted {
    pub battle_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThoughtList {
    #[serde(default)]
    pub thoughts: Vec<Thought>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattleList {
    #[serde(default)]
    pub battles: Vec<Battle>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchupMap {
    #[serde(default)]
    pub matchups: BTreeMap<String, MatchupRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveList {
    #[serde(default)]
    pub saves: Vec<SaveFile>,
}

// ========================
// Entities
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    /// (label, value, bar colour) in display order
    pub fn rows(&self) -> [(&'static str, u16, &'static str); 6] {
        [
            ("HP", self.hp, "bg-success"),
            ("Attack", self.attack, "bg-danger"),
            ("Defense", self.defense, "bg-warning"),
            ("Sp. Attack", self.special_attack, "bg-info"),
            ("Sp. Defense", self.special_defense, "bg-primary"),
            ("Speed", self.speed, "bg-secondary"),
        ]
    }
}

/// Width of a stat bar in percent
pub fn stat_percent(value: u16) -> f64 {
    f64::from(value.min(MAX_BASE_STAT)) / f64::from(MAX_BASE_STAT) * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub nature: String,
    #[serde(default)]
    pub held_item: Option<String>,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub current_hp: u16,
    #[serde(default)]
    pub max_hp: u16,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub is_shiny: bool,
    #[serde(default)]
    pub form: Option<String>,
}

/// CSS class for a type badge
pub fn type_class(pokemon_type: &str) -> String {
    format!("type-badge type-{}", pokemon_type.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapLocation {
    #[serde(default)]
    pub location_tuple: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub accessible_locations: Vec<Vec<String>>,
}

impl MapLocation {
    pub fn label(&self) -> String {
        self.location_tuple.join(" - ")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team: Vec<Pokemon>,
    #[serde(default)]
    pub location: MapLocation,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thought {
    #[serde(default)]
    pub id: Option<String>,
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Thought {
    /// Badge classes, one colour per category
    pub fn category_class(&self) -> String {
        format!("badge thought-category thought-category-{}", self.category)
    }
}

fn default_category() -> String {
    "general".to_string()
}

/// Thought categories offered by the add-thought form
pub const THOUGHT_CATEGORIES: &[(&str, &str)] = &[
    ("general", "General"),
    ("battle", "Battle"),
    ("exploration", "Exploration"),
];

// ========================
// Battles
// ========================

/// Final result of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    Win,
    Loss,
    Draw,
}

impl BattleOutcome {
    pub const ALL: [BattleOutcome; 3] = [BattleOutcome::Win, BattleOutcome::Loss, BattleOutcome::Draw];

    pub fn as_str(self) -> &'static str {
        match self {
            BattleOutcome::Win => "win",
            BattleOutcome::Loss => "loss",
            BattleOutcome::Draw => "draw",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BattleOutcome::Win => "Win",
            BattleOutcome::Loss => "Loss",
            BattleOutcome::Draw => "Draw",
        }
    }

    pub fn badge_class(self) -> String {
        format!("battle-result-{}", self.as_str())
    }

    pub fn button_class(self) -> &'static str {
        match self {
            BattleOutcome::Win => "btn btn-success me-2",
            BattleOutcome::Loss => "btn btn-danger me-2",
            BattleOutcome::Draw => "btn btn-secondary",
        }
    }
}

/// One side's action within a turn
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattleAction {
    pub action_type: String,
    #[serde(default)]
    pub pokemon_index: u32,
    #[serde(default)]
    pub move_index: Option<u32>,
    #[serde(default)]
    pub target_index: Option<u32>,
    #[serde(default)]
    pub item_name: Option<String>,
}

impl BattleAction {
    /// Human readable description; indices are shown 1-based
    pub fn describe(&self) -> String {
        let pokemon = self.pokemon_index + 1;
        match self.action_type.as_str() {
            "move" => {
                let mut text = format!(
                    "Used move {} with Pokemon {}",
                    self.move_index.unwrap_or(0) + 1,
                    pokemon
                );
                if let Some(target) = self.target_index {
                    text.push_str(&format!(" targeting position {}", target + 1));
                }
                text
            }
            "switch" => format!("Switched to Pokemon {}", pokemon),
            "item" => format!(
                "Used item {} on Pokemon {}",
                self.item_name.as_deref().unwrap_or("unknown"),
                pokemon
            ),
            "run" => "Attempted to run".to_string(),
            other => format!("Unknown action: {}", other),
        }
    }
}

pub fn describe_action(action: Option<&BattleAction>) -> String {
    action.map(BattleAction::describe).unwrap_or_else(|| "No action".to_string())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Turn {
    pub turn_number: u32,
    #[serde(default)]
    pub player_action: Option<BattleAction>,
    #[serde(default)]
    pub opponent_action: Option<BattleAction>,
    #[serde(default)]
    pub effects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Battle {
    pub id: String,
    #[serde(default)]
    pub opponent_id: String,
    pub opponent_name: String,
    #[serde(default)]
    pub player_team: Vec<Pokemon>,
    /// Unknown opponents are recorded as `null`
    #[serde(default)]
    pub opponent_team: Vec<Option<Pokemon>>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub result: Option<BattleOutcome>,
    #[serde(default)]
    pub turns: Vec<Turn>,
}

impl Battle {
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}

// ========================
// Matchups
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchupRecord {
    #[serde(default)]
    pub opponent_id: String,
    pub opponent_name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub last_battle: Option<String>,
}

impl MatchupRecord {
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Percentage of all battles that `count` represents; 0 with no battles
    pub fn share(&self, count: u32) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(count) / f64::from(total) * 100.0,
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.share(self.wins)
    }

    /// Win rate with one decimal, "0" when no battles were fought
    pub fn win_rate_label(&self) -> String {
        if self.total() == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.win_rate())
        }
    }
}

// ========================
// Saves
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub game_version: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Game versions offered by the create-save form; the first is the default
pub const GAME_VERSIONS: &[(&str, &str)] = &[
    ("Black2White2", "Black 2 / White 2"),
    ("BlackWhite", "Black / White"),
];

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPokemon {
    pub name: String,
    pub level: u8,
    pub types: Vec<String>,
    pub abilities: Vec<Ability>,
    pub nature: String,
    pub held_item: Option<String>,
    pub base_stats: BaseStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub location: MapLocation,
    pub team: Vec<NewPokemon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewThought {
    pub content: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBattle {
    pub opponent_id: String,
    pub opponent_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSave {
    pub name: String,
    pub game_version: String,
}

impl NewSave {
    pub fn created_message(&self) -> String {
        format!("Save file \"{}\" created successfully", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wins: u32, losses: u32, draws: u32) -> MatchupRecord {
        MatchupRecord {
            opponent_id: "rival".to_string(),
            opponent_name: "Hugh".to_string(),
            wins,
            losses,
            draws,
            last_battle: None,
        }
    }

    fn action(action_type: &str) -> BattleAction {
        BattleAction {
            action_type: action_type.to_string(),
            pokemon_index: 0,
            move_index: None,
            target_index: None,
            item_name: None,
        }
    }

    #[test]
    fn test_matchup_statistics() {
        let m = record(3, 1, 0);
        assert_eq!(m.total(), 4);
        assert_eq!(m.win_rate_label(), "75.0");
        assert_eq!(m.share(m.losses), 25.0);

        let empty = record(0, 0, 0);
        assert_eq!(empty.win_rate_label(), "0");
        assert_eq!(empty.share(0), 0.0);
    }

    #[test]
    fn test_describe_actions() {
        let mut mv = action("move");
        mv.move_index = Some(1);
        mv.pokemon_index = 2;
        assert_eq!(mv.describe(), "Used move 2 with Pokemon 3");
        mv.target_index = Some(0);
        assert_eq!(mv.describe(), "Used move 2 with Pokemon 3 targeting position 1");

        assert_eq!(action("switch").describe(), "Switched to Pokemon 1");
        let mut item = action("item");
        item.item_name = Some("Potion".to_string());
        assert_eq!(item.describe(), "Used item Potion on Pokemon 1");
        assert_eq!(action("run").describe(), "Attempted to run");
        assert_eq!(action("dance").describe(), "Unknown action: dance");
        assert_eq!(describe_action(None), "No action");
    }

    #[test]
    fn test_battle_deserializes_in_progress() {
        let json = r#"{
            "id": "battle_1",
            "opponent_id": "rival",
            "opponent_name": "Hugh",
            "start_time": "2024-05-01T10:00:00",
            "end_time": null,
            "result": null,
            "player_team": [],
            "opponent_team": [null],
            "turns": [{"turn_number": 1, "player_action": {"action_type": "run", "pokemon_index": 0}, "effects": []}]
        }"#;
        let battle: Battle = serde_json::from_str(json).unwrap();
        assert!(!battle.is_finished());
        assert_eq!(battle.opponent_team, vec![None]);
        assert_eq!(describe_action(battle.turns[0].player_action.as_ref()), "Attempted to run");
    }

    #[test]
    fn test_battle_outcome_wire_format() {
        assert_eq!(serde_json::to_string(&BattleOutcome::Loss).unwrap(), "\"loss\"");
        let parsed: BattleOutcome = serde_json::from_str("\"draw\"").unwrap();
        assert_eq!(parsed, BattleOutcome::Draw);
        assert_eq!(BattleOutcome::Win.badge_class(), "battle-result-win");
    }

    #[test]
    fn test_envelope_data_only_on_success() {
        let ok: ApiResponse<PlayerCreated> =
            serde_json::from_str(r#"{"success": true, "message": "ok", "data": {"player_id": "player_1"}}"#).unwrap();
        assert_eq!(ok.into_data().map(|d| d.player_id), Some("player_1".to_string()));

        let failed: ApiResponse<PlayerCreated> =
            serde_json::from_str(r#"{"success": false, "message": "nope", "data": {"player_id": "player_1"}}"#).unwrap();
        assert!(failed.into_data().is_none());

        let bare: ApiResponse<PlayerCreated> = serde_json::from_str(r#"{"success": true, "message": "deleted"}"#).unwrap();
        assert!(bare.data.is_none());
    }

    #[test]
    fn test_thought_badge_and_save_message() {
        let thought: Thought = serde_json::from_str(r#"{"content": "Grind on Route 20", "category": "exploration"}"#).unwrap();
        assert_eq!(thought.category_class(), "badge thought-category thought-category-exploration");

        let save = NewSave { name: "Before Elite Four".to_string(), game_version: "Black2White2".to_string() };
        assert_eq!(save.created_message(), "Save file \"Before Elite Four\" created successfully");
    }

    #[test]
    fn test_stat_percent_and_labels() {
        assert_eq!(stat_percent(255), 100.0);
        assert_eq!(stat_percent(0), 0.0);
        assert_eq!(type_class("Water"), "type-badge type-water");

        let location = MapLocation {
            location_tuple: vec!["Aspertia City".to_string(), "Trainer School".to_string()],
            ..Default::default()
        };
        assert_eq!(location.label(), "Aspertia City - Trainer School");
    }
}
