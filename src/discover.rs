use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};

/// Promoted-content discovery endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Discover<'a> {
    pub(crate) client: &'a Client,
}

impl Discover<'_> {
    /// Returns promoted hashtags.
    pub async fn hashtags(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const HASHTAGS: Endpoint = Endpoint::get("/v1/discover/hashtags", &["startkey"]);
        self.client
            .execute_paged(&HASHTAGS, Args::new().with_paging(&paging))
            .await
    }

    /// Returns promoted news.
    pub async fn news(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const NEWS: Endpoint = Endpoint::get("/v1/discover/news", &["startkey"]);
        self.client
            .execute_paged(&NEWS, Args::new().with_paging(&paging))
            .await
    }

    /// Returns promoted users.
    pub async fn users(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const USERS: Endpoint = Endpoint::get("/v1/discover/users", &["startkey"]);
        self.client
            .execute_paged(&USERS, Args::new().with_paging(&paging))
            .await
    }

    /// Returns promoted posts.
    pub async fn posts(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const POSTS: Endpoint = Endpoint::get("/v1/discover/posts", &["startkey"]);
        self.client
            .execute_paged(&POSTS, Args::new().with_paging(&paging))
            .await
    }
}
