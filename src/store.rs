//! Page State Stores
//!
//! Each page owns a reactive_stores `Store` created when the page mounts
//! and provided to its children through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Battle, Player, SaveFile};

/// Players page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PlayersState {
    /// Current list page (1-based)
    pub page: u32,
    /// Player whose details modal is open
    pub selected_player: Option<Player>,
    /// Battle shown in the battle details modal
    pub selected_battle: Option<Battle>,
    /// Bumped after thoughts change
    pub thoughts_version: u32,
    /// Bumped after battles change
    pub battles_version: u32,
}

impl PlayersState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }
}

pub type PlayersStore = Store<PlayersState>;

pub fn use_players_store() -> PlayersStore {
    expect_context::<PlayersStore>()
}

/// Saves page state
#[derive(Clone, Debug, Default, Store)]
pub struct SavesState {
    pub saves: Vec<SaveFile>,
    /// Save awaiting load confirmation
    pub pending_load: Option<SaveFile>,
    /// Save awaiting delete confirmation
    pub pending_delete: Option<SaveFile>,
    /// Bumped to refetch the list
    pub version: u32,
}

pub type SavesStore = Store<SavesState>;

pub fn use_saves_store() -> SavesStore {
    expect_context::<SavesStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn bump_thoughts(store: &PlayersStore) {
    *store.thoughts_version().write() += 1;
}

pub fn bump_battles(store: &PlayersStore) {
    *store.battles_version().write() += 1;
}

pub fn reload_saves(store: &SavesStore) {
    *store.version().write() += 1;
}

/// Look up a listed save by id
pub fn find_save(store: &SavesStore, save_id: &str) -> Option<SaveFile> {
    store.saves().with(|saves| saves.iter().find(|s| s.id == save_id).cloned())
}
