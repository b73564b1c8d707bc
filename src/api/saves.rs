//! Save File Endpoints

use leptos_alerts::AlertSink;
use serde_json::Value;

use super::{segment, ApiClient, ApiError, Transport};
use crate::models::{ApiResponse, NewSave, SaveFile, SaveList};

impl<T: Transport, N: AlertSink> ApiClient<T, N> {
    pub async fn list_saves(&self) -> Result<ApiResponse<SaveList>, ApiError> {
        self.get("/saves/").await
    }

    pub async fn create_save(&self, save: &NewSave) -> Result<ApiResponse<SaveFile>, ApiError> {
        self.post("/saves/", save).await
    }

    /// Replace the backend's players with the contents of a save
    pub async fn load_save(&self, save_id: &str) -> Result<ApiResponse<Value>, ApiError> {
        self.post_empty(&format!("/saves/{}/load", segment(save_id))).await
    }

    pub async fn delete_save(&self, save_id: &str) -> Result<ApiResponse<Value>, ApiError> {
        self.delete(&format!("/saves/{}", segment(save_id))).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{Harness, MockTransport};
    use crate::api::{ApiError, Method};
    use crate::models::NewSave;

    #[tokio::test]
    async fn test_list_saves() {
        let body = r#"{"success": true, "message": "Save files retrieved successfully", "data": {"saves": [
            {"id": "save_1", "name": "Before Elite Four", "game_version": "Black2White2",
             "created_at": "2024-05-01T10:00:00", "last_updated": "2024-05-02T11:00:00"}
        ]}}"#;
        let h = Harness::new(MockTransport::default().respond(200, body));

        let saves = h.client.list_saves().await.unwrap().into_data().unwrap().saves;

        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].name, "Before Elite Four");
        assert_eq!(h.last_request().url, "http://localhost:8000/saves/");
    }

    #[tokio::test]
    async fn test_create_save_body() {
        let h = Harness::new(MockTransport::default().respond(
            200,
            r#"{"success": true, "data": {"id": "save_2", "name": "Run 2", "game_version": "Black2White2"}}"#,
        ));
        let save = NewSave { name: "Run 2".to_string(), game_version: "Black2White2".to_string() };

        let created = h.client.create_save(&save).await.unwrap().into_data().unwrap();

        assert_eq!(created.id, "save_2");
        assert_eq!(
            h.last_request().body.as_deref(),
            Some(r#"{"name":"Run 2","game_version":"Black2White2"}"#)
        );
    }

    #[tokio::test]
    async fn test_load_is_bodyless_post() {
        let h = Harness::new(MockTransport::default().respond(200, r#"{"success": true, "message": "loaded"}"#));

        h.client.load_save("save_1").await.unwrap();

        let req = h.last_request();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://localhost:8000/saves/save_1/load");
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_save_surfaces_detail() {
        let h = Harness::new(
            MockTransport::default().respond(404, r#"{"detail": "Save file with ID save_9 not found"}"#),
        );

        let err = h.client.delete_save("save_9").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status { status: 404, message: Some("Save file with ID save_9 not found".to_string()) }
        );
        assert_eq!(h.alert_messages(), vec!["Save file with ID save_9 not found".to_string()]);
        assert_eq!(h.last_request().method, Method::Delete);
    }
}
