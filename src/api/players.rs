//! Player Endpoints
//!
//! Typed bindings for players, thoughts, battles and matchups.

use leptos_alerts::{AlertSink, Severity};
use serde_json::Value;

use super::{segment, ApiClient, ApiError, Transport};
use crate::models::{
    ApiResponse, Battle, BattleList, BattleOutcome, BattleStarted, MatchupMap, NewBattle, NewPlayer,
    NewThought, Player, PlayerCreated, PlayerPage, Thought, ThoughtList,
};

pub const OFFLINE_MESSAGE: &str = "Cannot connect to the API server. Please make sure it is running.";

fn player_path(player_id: &str) -> String {
    format!("/players/{}", segment(player_id))
}

fn battle_path(player_id: &str, battle_id: &str) -> String {
    format!("{}/battles/{}", player_path(player_id), segment(battle_id))
}

impl<T: Transport, N: AlertSink> ApiClient<T, N> {
    /// Root endpoint; answers when the backend is up
    pub async fn status(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.get("/").await
    }

    /// Startup check; an unreachable backend gets an extra offline alert
    pub async fn is_online(&self) -> bool {
        match self.status().await {
            Ok(status) => {
                log::info!("[api] Status: {:?}", status.message);
                status.success
            }
            Err(err) => {
                log::error!("[api] Status check failed: {}", err);
                self.alerts.alert(OFFLINE_MESSAGE, Severity::Danger);
                false
            }
        }
    }

    // ========================
    // Players
    // ========================

    pub async fn list_players(&self, page: u32, per_page: u32) -> Result<PlayerPage, ApiError> {
        self.get(&format!("/players/?page={}&per_page={}", page, per_page)).await
    }

    pub async fn create_player(&self, player: &NewPlayer) -> Result<ApiResponse<PlayerCreated>, ApiError> {
        self.post("/players/", player).await
    }

    pub async fn get_player(&self, player_id: &str) -> Result<ApiResponse<Player>, ApiError> {
        self.get(&player_path(player_id)).await
    }

    pub async fn delete_player(&self, player_id: &str) -> Result<ApiResponse<Value>, ApiError> {
        self.delete(&player_path(player_id)).await
    }

    // ========================
    // Thoughts
    // ========================

    pub async fn list_thoughts(&self, player_id: &str) -> Result<ApiResponse<ThoughtList>, ApiError> {
        self.get(&format!("{}/thoughts", player_path(player_id))).await
    }

    pub async fn add_thought(&self, player_id: &str, thought: &NewThought) -> Result<ApiResponse<Thought>, ApiError> {
        self.post(&format!("{}/thoughts", player_path(player_id)), thought).await
    }

    // ========================
    // Battles
    // ========================

    pub async fn list_battles(&self, player_id: &str) -> Result<ApiResponse<BattleList>, ApiError> {
        self.get(&format!("{}/battles", player_path(player_id))).await
    }

    pub async fn start_battle(&self, player_id: &str, battle: &NewBattle) -> Result<ApiResponse<BattleStarted>, ApiError> {
        self.post(&format!("{}/battles", player_path(player_id)), battle).await
    }

    pub async fn get_battle(&self, player_id: &str, battle_id: &str) -> Result<ApiResponse<Battle>, ApiError> {
        self.get(&battle_path(player_id, battle_id)).await
    }

    /// Record the outcome of a battle.
    ///
    /// The result goes in the body as a JSON string and is repeated as the
    /// `result` query parameter, which is where the backend reads it.
    pub async fn set_battle_result(
        &self,
        player_id: &str,
        battle_id: &str,
        outcome: BattleOutcome,
    ) -> Result<ApiResponse<Value>, ApiError> {
        let path = format!("{}?result={}", battle_path(player_id, battle_id), outcome.as_str());
        self.put(&path, &outcome).await
    }

    // ========================
    // Matchups
    // ========================

    pub async fn list_matchups(&self, player_id: &str) -> Result<ApiResponse<MatchupMap>, ApiError> {
        self.get(&format!("{}/matchups", player_path(player_id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::OFFLINE_MESSAGE;
    use crate::api::testing::{Harness, MockTransport};
    use crate::api::{ApiError, Method};
    use crate::models::{BattleOutcome, MapLocation, NewBattle, NewPlayer, NewThought};

    const OK_EMPTY: &str = r#"{"success": true, "message": "ok"}"#;

    #[tokio::test]
    async fn test_is_online_reads_status() {
        let h = Harness::new(MockTransport::default().respond(200, r#"{"success": true, "message": "API is running"}"#));

        assert!(h.client.is_online().await);
        assert_eq!(h.last_request().url, "http://localhost:8000/");
        assert!(h.alert_messages().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_offline() {
        let h = Harness::new(MockTransport::default().fail(ApiError::Network("Failed to fetch".to_string())));

        assert!(!h.client.is_online().await);
        assert_eq!(h.alert_messages(), vec!["Failed to fetch".to_string(), OFFLINE_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_list_players_paginated() {
        let body = r#"{
            "success": true,
            "message": "Retrieved 1 players",
            "data": [{
                "id": "player_1",
                "name": "Rosa",
                "team": [],
                "location": {"location_tuple": ["Aspertia City", "Lookout"], "accessible_locations": []},
                "last_updated": "2024-05-01T10:00:00"
            }],
            "total": 11, "page": 2, "per_page": 10, "total_pages": 2
        }"#;
        let h = Harness::new(MockTransport::default().respond(200, body));

        let page = h.client.list_players(2, 10).await.unwrap();

        assert_eq!(h.last_request().url, "http://localhost:8000/players/?page=2&per_page=10");
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data[0].location.label(), "Aspertia City - Lookout");
    }

    #[tokio::test]
    async fn test_create_player_posts_payload() {
        let h = Harness::new(
            MockTransport::default().respond(200, r#"{"success": true, "message": "created", "data": {"player_id": "player_3"}}"#),
        );
        let player = NewPlayer {
            name: "Nate".to_string(),
            location: MapLocation {
                location_tuple: vec!["Virbank City".to_string(), "Gym".to_string()],
                description: None,
                accessible_locations: Vec::new(),
            },
            team: Vec::new(),
        };

        let created = h.client.create_player(&player).await.unwrap();

        assert_eq!(created.into_data().unwrap().player_id, "player_3");
        let req = h.last_request();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://localhost:8000/players/");
        let sent: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["location"]["location_tuple"][1], "Gym");
        assert_eq!(sent["location"]["description"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_nested_paths_are_encoded() {
        let h = Harness::new(
            MockTransport::default()
                .respond(200, r#"{"success": true, "data": {"thoughts": []}}"#)
                .respond(200, OK_EMPTY),
        );

        let thoughts = h.client.list_thoughts("player 1").await.unwrap();
        assert!(thoughts.into_data().unwrap().thoughts.is_empty());
        assert_eq!(h.last_request().url, "http://localhost:8000/players/player%201/thoughts");

        let thought = NewThought { content: "Need a Water type".to_string(), category: "battle".to_string() };
        // Response carries no data; only the request shape matters here.
        let _ = h.client.add_thought("player_1", &thought).await;
        let req = h.last_request();
        assert_eq!(req.url, "http://localhost:8000/players/player_1/thoughts");
        assert_eq!(req.body.as_deref(), Some(r#"{"content":"Need a Water type","category":"battle"}"#));
    }

    #[tokio::test]
    async fn test_get_player_and_battle_paths() {
        let h = Harness::new(MockTransport::default().respond(200, OK_EMPTY).respond(200, OK_EMPTY).respond(200, OK_EMPTY));

        let _ = h.client.get_player("player_1").await;
        assert_eq!(h.last_request().url, "http://localhost:8000/players/player_1");

        let _ = h.client.list_battles("player_1").await;
        assert_eq!(h.last_request().url, "http://localhost:8000/players/player_1/battles");

        let _ = h.client.get_battle("player_1", "battle_2").await;
        let req = h.last_request();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "http://localhost:8000/players/player_1/battles/battle_2");
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_start_battle_posts_opponent() {
        let h = Harness::new(
            MockTransport::default().respond(200, r#"{"success": true, "message": "started", "data": {"battle_id": "battle_1"}}"#),
        );
        let battle = NewBattle { opponent_id: "rival".to_string(), opponent_name: "Hugh".to_string() };

        let started = h.client.start_battle("player_1", &battle).await.unwrap();

        assert_eq!(started.into_data().unwrap().battle_id, "battle_1");
        let req = h.last_request();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://localhost:8000/players/player_1/battles");
        assert_eq!(req.body.as_deref(), Some(r#"{"opponent_id":"rival","opponent_name":"Hugh"}"#));
    }

    #[tokio::test]
    async fn test_set_battle_result() {
        let h = Harness::new(MockTransport::default().respond(200, OK_EMPTY));

        h.client.set_battle_result("player_1", "battle_2", BattleOutcome::Win).await.unwrap();

        let req = h.last_request();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url, "http://localhost:8000/players/player_1/battles/battle_2?result=win");
        assert_eq!(req.body.as_deref(), Some("\"win\""));
    }

    #[tokio::test]
    async fn test_delete_player_has_no_body() {
        let h = Harness::new(MockTransport::default().respond(200, OK_EMPTY));

        h.client.delete_player("player_1").await.unwrap();

        let req = h.last_request();
        assert_eq!(req.method, Method::Delete);
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_matchups_decode() {
        let body = r#"{"success": true, "data": {"matchups": {
            "rival": {"opponent_id": "rival", "opponent_name": "Hugh", "wins": 2, "losses": 1, "draws": 1, "last_battle": null}
        }}}"#;
        let h = Harness::new(MockTransport::default().respond(200, body));

        let map = h.client.list_matchups("player_1").await.unwrap().into_data().unwrap();

        let record = &map.matchups["rival"];
        assert_eq!(record.total(), 4);
        assert_eq!(record.win_rate_label(), "50.0");
    }
}
