use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};

/// Affiliate news endpoints.
#[derive(Clone, Copy, Debug)]
pub struct News<'a> {
    pub(crate) client: &'a Client,
}

impl News<'_> {
    /// Returns the news feed.
    pub async fn get(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const NEWS: Endpoint = Endpoint::get("/v1/news", &["startkey", "limit"]);
        self.client
            .execute_paged(&NEWS, Args::new().with_paging(&paging))
            .await
    }

    /// Searches the news feed.
    pub async fn search(
        &self,
        search: Option<&str>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const SEARCH: Endpoint = Endpoint::get("/v1/news/search", &["search", "startkey", "limit"]);
        let args = Args::new().arg_opt("search", search).with_paging(&paging);
        self.client.execute_paged(&SEARCH, args).await
    }
}
