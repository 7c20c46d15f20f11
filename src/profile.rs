use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Upload};
use serde_json::Value;

/// Profile endpoints for the logged-in user.
#[derive(Clone, Copy, Debug)]
pub struct Profile<'a> {
    pub(crate) client: &'a Client,
}

impl Profile<'_> {
    /// Returns a user profile by ID or username.
    pub async fn get(
        &self,
        user_id: Option<&str>,
        username: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        const GET: Endpoint = Endpoint::get("/v1/profile", &["id", "username"]);
        let args = Args::new()
            .arg_opt("id", user_id)
            .arg_opt("username", username);
        self.client.execute(&GET, &args).await
    }

    /// Returns the logged-in user's profile settings.
    pub async fn settings(&self) -> Result<ApiResponse, Error> {
        const SETTINGS: Endpoint = Endpoint::get("/v1/profile", &[]);
        self.client.execute(&SETTINGS, &Args::new()).await
    }

    /// Updates the logged-in user's profile. Fields are forwarded to the
    /// server as given.
    pub async fn update(&self, fields: Value) -> Result<ApiResponse, Error> {
        const UPDATE: Endpoint = Endpoint::patch("/v1/profile", &[]);
        self.client.execute(&UPDATE, &Args::new().body(fields)).await
    }

    /// Uploads a profile photo.
    pub async fn upload_photo(&self, upload: Upload) -> Result<ApiResponse, Error> {
        const PHOTO: Endpoint = Endpoint::post("/v1/profile/photo", &[]);
        self.client
            .upload(&PHOTO, &Args::new(), upload.into_form()?)
            .await
    }

    /// Uploads a profile cover photo.
    pub async fn upload_cover_photo(&self, upload: Upload) -> Result<ApiResponse, Error> {
        const COVER: Endpoint = Endpoint::post("/v1/profile/cover-photo", &[]);
        self.client
            .upload(&COVER, &Args::new(), upload.into_form()?)
            .await
    }
}
