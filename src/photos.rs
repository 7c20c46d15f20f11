use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error};

/// Photo lookup.
#[derive(Clone, Copy, Debug)]
pub struct Photos<'a> {
    pub(crate) client: &'a Client,
}

impl Photos<'_> {
    /// Returns a photo.
    pub async fn get(&self, photo_id: &str) -> Result<ApiResponse, Error> {
        const GET: Endpoint = Endpoint::get("/v1/photo", &["id"]);
        self.client
            .execute(&GET, &Args::new().arg("id", photo_id))
            .await
    }
}
