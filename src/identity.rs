use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error};

/// Identity verification status.
#[derive(Clone, Copy, Debug)]
pub struct Identity<'a> {
    pub(crate) client: &'a Client,
}

impl Identity<'_> {
    /// Returns the logged-in user's verification status.
    pub async fn status(&self) -> Result<ApiResponse, Error> {
        const STATUS: Endpoint = Endpoint::get("/v1/identity/status", &[]);
        self.client.execute(&STATUS, &Args::new()).await
    }
}
