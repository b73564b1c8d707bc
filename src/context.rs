//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_alerts::{Notifier, Severity};

use crate::api::ApiClient;
use crate::config::ApiConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    notifier: StoredValue<Notifier>,
    /// Players per list page
    pub per_page: u32,
    /// Trigger to reload players from backend - read
    pub players_version: ReadSignal<u32>,
    /// Trigger to reload players from backend - write
    set_players_version: WriteSignal<u32>,
    /// Last status check result; None while checking
    pub api_online: ReadSignal<Option<bool>>,
    set_api_online: WriteSignal<Option<bool>>,
}

impl AppContext {
    pub fn new(config: &ApiConfig, notifier: Notifier) -> Self {
        let api = ApiClient::browser(config, notifier.clone());
        let (players_version, set_players_version) = signal(0u32);
        let (api_online, set_api_online) = signal(None::<bool>);
        Self {
            api: StoredValue::new(api),
            notifier: StoredValue::new(notifier),
            per_page: config.per_page,
            players_version,
            set_players_version,
            api_online,
            set_api_online,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        self.notifier.with_value(|n| n.show(message, severity));
    }

    /// Trigger a reload of the players list
    pub fn reload_players(&self) {
        self.set_players_version.update(|v| *v += 1);
    }

    pub fn set_api_online(&self, online: bool) {
        self.set_api_online.set(Some(online));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
