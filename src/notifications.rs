use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};
use serde_json::json;

/// Notification endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Notifications<'a> {
    pub(crate) client: &'a Client,
}

impl Notifications<'_> {
    /// Returns notifications.
    pub async fn get(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const GET: Endpoint = Endpoint::get("/v1/notification", &["startkey", "limit"]);
        self.client
            .execute_paged(&GET, Args::new().with_paging(&paging))
            .await
    }

    /// Returns the unseen notification count.
    pub async fn count(&self) -> Result<ApiResponse, Error> {
        const COUNT: Endpoint = Endpoint::get("/v1/notification/count", &[]);
        self.client.execute(&COUNT, &Args::new()).await
    }

    /// Marks a notification as seen.
    pub async fn mark_seen(&self, notification_id: &str) -> Result<ApiResponse, Error> {
        const MARK: Endpoint = Endpoint::post("/v1/notification", &[]);
        let args = Args::new().body(json!({ "id": [notification_id] }));
        self.client.execute(&MARK, &args).await
    }

    /// Deletes a notification.
    pub async fn delete(&self, notification_id: &str) -> Result<ApiResponse, Error> {
        const DELETE: Endpoint = Endpoint::post("/v1/notification/delete", &["id"]);
        self.client
            .execute(&DELETE, &Args::new().arg("id", notification_id))
            .await
    }

    /// Deletes all notifications.
    pub async fn delete_all(&self) -> Result<ApiResponse, Error> {
        const DELETE_ALL: Endpoint = Endpoint::post("/v1/notification/all/delete", &[]);
        let args = Args::new().body(json!({ "id": "" }));
        self.client.execute(&DELETE_ALL, &args).await
    }
}
