//! UI Components
//!
//! Pages, modals and their building blocks.

mod battles_tab;
mod create_player_modal;
mod matchups_tab;
mod modal;
mod pagination;
mod player_details;
mod players_page;
mod saves_page;
mod thoughts_tab;

pub use battles_tab::BattlesTab;
pub use create_player_modal::CreatePlayerModal;
pub use matchups_tab::MatchupsTab;
pub use modal::Modal;
pub use pagination::Pagination;
pub use player_details::PlayerDetails;
pub use players_page::PlayersPage;
pub use saves_page::SavesPage;
pub use thoughts_tab::ThoughtsTab;
