use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};

/// Follower and following endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Follows<'a> {
    pub(crate) client: &'a Client,
}

impl Follows<'_> {
    /// Returns a user's followers.
    pub async fn followers(
        &self,
        user_id: &str,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const FOLLOWERS: Endpoint =
            Endpoint::get("/v1/follow/followers", &["id", "startkey", "limit"]);
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&FOLLOWERS, args).await
    }

    /// Returns the users a user follows.
    pub async fn following(
        &self,
        user_id: &str,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const FOLLOWING: Endpoint =
            Endpoint::get("/v1/follow/following", &["id", "startkey", "limit"]);
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&FOLLOWING, args).await
    }

    /// Returns followers pending approval.
    pub async fn pending_followers(
        &self,
        user_id: &str,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const PENDING: Endpoint =
            Endpoint::get("/v1/follow/followers/pending", &["id", "startkey", "limit"]);
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&PENDING, args).await
    }

    /// Returns the accounts a user is subscribed to.
    pub async fn subscribed_following(
        &self,
        user_id: &str,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const SUBSCRIBED: Endpoint = Endpoint::get(
            "/v1/follow/following/subscribed",
            &["id", "startkey", "limit"],
        );
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&SUBSCRIBED, args).await
    }

    /// Follows a user.
    pub async fn follow(&self, username: &str) -> Result<ApiResponse, Error> {
        const FOLLOW: Endpoint = Endpoint::post("/v1/follow", &["username"]);
        self.client
            .execute(&FOLLOW, &Args::new().arg("username", username))
            .await
    }

    /// Unfollows a user.
    pub async fn unfollow(&self, username: &str) -> Result<ApiResponse, Error> {
        const UNFOLLOW: Endpoint = Endpoint::post("/v1/follow/delete", &["username"]);
        self.client
            .execute(&UNFOLLOW, &Args::new().arg("username", username))
            .await
    }

    /// Approves a pending follower.
    pub async fn approve(&self, username: &str) -> Result<ApiResponse, Error> {
        const APPROVE: Endpoint =
            Endpoint::post("/v1/follow/followers/pending/approve", &["username"]);
        self.client
            .execute(&APPROVE, &Args::new().arg("username", username))
            .await
    }

    /// Denies a pending follower.
    pub async fn deny(&self, username: &str) -> Result<ApiResponse, Error> {
        const DENY: Endpoint = Endpoint::post("/v1/follow/followers/pending/deny", &["username"]);
        self.client
            .execute(&DENY, &Args::new().arg("username", username))
            .await
    }

    /// Marks a followed account as subscribed.
    pub async fn subscribe(&self, user_id: &str) -> Result<ApiResponse, Error> {
        const SUBSCRIBE: Endpoint = Endpoint::post("/v1/follow/following/subscribed", &["id"]);
        self.client
            .execute(&SUBSCRIBE, &Args::new().arg("id", user_id))
            .await
    }
}
