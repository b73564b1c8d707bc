//! Delegated Row Actions
//!
//! Tables attach one click listener to their body. Buttons carry
//! `data-action` and `data-id`; the listener resolves the clicked element
//! into a typed action.

use wasm_bindgen::JsCast;

/// `(data-action, data-id)` of the nearest action element the event came from
pub fn event_action(ev: &web_sys::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    let element = target.dyn_into::<web_sys::Element>().ok()?;
    let source = element.closest("[data-action]").ok()??;
    let action = source.get_attribute("data-action")?;
    let id = source.get_attribute("data-id").unwrap_or_default();
    Some((action, id))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    View(String),
    Delete(String),
}

impl PlayerAction {
    pub const VIEW: &'static str = "view-player";
    pub const DELETE: &'static str = "delete-player";

    pub fn parse(action: &str, id: String) -> Option<Self> {
        if id.is_empty() {
            return None;
        }
        match action {
            Self::VIEW => Some(PlayerAction::View(id)),
            Self::DELETE => Some(PlayerAction::Delete(id)),
            _ => None,
        }
    }

    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let (action, id) = event_action(ev)?;
        Self::parse(&action, id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAction {
    Load(String),
    Delete(String),
}

impl SaveAction {
    pub const LOAD: &'static str = "load-save";
    pub const DELETE: &'static str = "delete-save";

    pub fn parse(action: &str, id: String) -> Option<Self> {
        if id.is_empty() {
            return None;
        }
        match action {
            Self::LOAD => Some(SaveAction::Load(id)),
            Self::DELETE => Some(SaveAction::Delete(id)),
            _ => None,
        }
    }

    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let (action, id) = event_action(ev)?;
        Self::parse(&action, id)
    }
}

/// Battle list rows only open details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBattle(pub String);

impl ViewBattle {
    pub const ACTION: &'static str = "view-battle";

    pub fn parse(action: &str, id: String) -> Option<Self> {
        (action == Self::ACTION && !id.is_empty()).then_some(ViewBattle(id))
    }

    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let (action, id) = event_action(ev)?;
        Self::parse(&action, id)
    }
}

/// Pagination links carry the target page in `data-id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GotoPage(pub u32);

impl GotoPage {
    pub const ACTION: &'static str = "goto-page";

    pub fn parse(action: &str, id: &str) -> Option<Self> {
        if action != Self::ACTION {
            return None;
        }
        id.parse::<u32>().ok().filter(|p| *p > 0).map(GotoPage)
    }

    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let (action, id) = event_action(ev)?;
        Self::parse(&action, &id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_actions() {
        assert_eq!(
            PlayerAction::parse("view-player", "player_1".to_string()),
            Some(PlayerAction::View("player_1".to_string()))
        );
        assert_eq!(
            PlayerAction::parse("delete-player", "player_1".to_string()),
            Some(PlayerAction::Delete("player_1".to_string()))
        );
        assert_eq!(PlayerAction::parse("view-player", String::new()), None);
        assert_eq!(PlayerAction::parse("load-save", "save_1".to_string()), None);
    }

    #[test]
    fn test_save_actions() {
        assert_eq!(
            SaveAction::parse("load-save", "save_1".to_string()),
            Some(SaveAction::Load("save_1".to_string()))
        );
        assert_eq!(SaveAction::parse("delete-player", "save_1".to_string()), None);
    }

    #[test]
    fn test_battle_and_page_actions() {
        assert_eq!(ViewBattle::parse("view-battle", "b1".to_string()), Some(ViewBattle("b1".to_string())));
        assert_eq!(ViewBattle::parse("view-battle", String::new()), None);

        assert_eq!(GotoPage::parse("goto-page", "3"), Some(GotoPage(3)));
        assert_eq!(GotoPage::parse("goto-page", "0"), None);
        assert_eq!(GotoPage::parse("goto-page", "next"), None);
        assert_eq!(GotoPage::parse("view-player", "3"), None);
    }
}
