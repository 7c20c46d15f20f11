use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};

/// The logged-in user's feed.
#[derive(Clone, Copy, Debug)]
pub struct Feed<'a> {
    pub(crate) client: &'a Client,
}

impl Feed<'_> {
    /// Returns parleys from the user's feed.
    pub async fn get(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const FEED: Endpoint = Endpoint::get("/v1/feed", &["startkey", "limit"]);
        self.client
            .execute_paged(&FEED, Args::new().with_paging(&paging))
            .await
    }
}
