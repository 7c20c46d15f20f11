use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};

/// Hashtag search.
#[derive(Clone, Copy, Debug)]
pub struct Hashtags<'a> {
    pub(crate) client: &'a Client,
}

impl Hashtags<'_> {
    /// Searches hashtags.
    pub async fn search(
        &self,
        search: Option<&str>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const SEARCH: Endpoint = Endpoint::get("/v1/hashtag", &["search", "startkey", "limit"]);
        let args = Args::new().arg_opt("search", search).with_paging(&paging);
        self.client.execute_paged(&SEARCH, args).await
    }
}
