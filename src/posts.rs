use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};
use serde::Serialize;
use serde_json::json;

// The server expects state 4 on a freshly published parley.
const PUBLISHED_STATE: u64 = 4;

/// Post endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Posts<'a> {
    pub(crate) client: &'a Client,
}

impl Posts<'_> {
    /// Returns a post.
    pub async fn get(&self, post_id: &str) -> Result<ApiResponse, Error> {
        const GET: Endpoint = Endpoint::get("/v1/post", &["id"]);
        self.client
            .execute(&GET, &Args::new().arg("id", post_id))
            .await
    }

    /// Returns a post's comments, newest first unless `reverse` says
    /// otherwise.
    pub async fn comments(
        &self,
        post_id: &str,
        reverse: Option<bool>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const COMMENTS: Endpoint =
            Endpoint::get("/v1/comment", &["id", "startkey", "limit", "reverse"]);
        let args = Args::new()
            .arg("id", post_id)
            .arg_opt("reverse", reverse)
            .or_default("reverse", true)
            .with_paging(&paging);
        self.client.execute_paged(&COMMENTS, args).await
    }

    /// Returns the impressions on a post. Requires ownership of the
    /// target post.
    pub async fn impressions(&self, post_id: &str) -> Result<ApiResponse, Error> {
        const IMPRESSIONS: Endpoint = Endpoint::get("/v1/post/{id}/impressions", &[]);
        self.client
            .execute(&IMPRESSIONS, &Args::new().arg("id", post_id))
            .await
    }

    /// Returns posts created by a user.
    pub async fn by_user(&self, user_id: &str, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const BY_USER: Endpoint = Endpoint::get("/v1/post/creator", &["id", "startkey"]);
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&BY_USER, args).await
    }

    /// Returns posts liked by a user.
    pub async fn liked(&self, user_id: &str, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const LIKED: Endpoint = Endpoint::get("/v1/post/creator/liked", &["id", "startkey"]);
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&LIKED, args).await
    }

    /// Returns media posted by a user.
    pub async fn media(&self, user_id: &str, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const MEDIA: Endpoint = Endpoint::get("/v1/post/creator/media", &["id", "startkey"]);
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&MEDIA, args).await
    }

    /// Returns posts carrying a hashtag.
    pub async fn by_hashtag(&self, tag: &str, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const BY_HASHTAG: Endpoint = Endpoint::get("/v1/post/hashtag", &["tag", "startkey"]);
        let args = Args::new().arg("tag", tag).with_paging(&paging);
        self.client.execute_paged(&BY_HASHTAG, args).await
    }

    /// Publishes a parley.
    pub async fn create(&self, body: &str, links: &[String]) -> Result<ApiResponse, Error> {
        const CREATE: Endpoint = Endpoint::post("/v1/post", &[]);
        let body = serde_json::to_value(NewParley {
            body,
            parent: None,
            links,
            state: PUBLISHED_STATE,
        })?;
        self.client.execute(&CREATE, &Args::new().body(body)).await
    }

    /// Deletes a post. The server routes post deletion through a GET.
    pub async fn delete(&self, post_id: &str) -> Result<ApiResponse, Error> {
        const DELETE: Endpoint = Endpoint::get("/v1/post/delete", &["id"]);
        self.client
            .execute(&DELETE, &Args::new().arg("id", post_id))
            .await
    }

    /// Up-votes a post.
    pub async fn upvote(&self, post_id: &str) -> Result<ApiResponse, Error> {
        const UPVOTE: Endpoint = Endpoint::post("/v1/post/upvote", &[]);
        let args = Args::new().body(json!({ "id": post_id }));
        self.client.execute(&UPVOTE, &args).await
    }

    /// Rescinds an up-vote.
    pub async fn rescind_upvote(&self, post_id: &str) -> Result<ApiResponse, Error> {
        const RESCIND: Endpoint = Endpoint::post("/v1/post/upvote/delete", &[]);
        let args = Args::new().body(json!({ "id": post_id }));
        self.client.execute(&RESCIND, &args).await
    }
}

#[derive(Serialize)]
struct NewParley<'a> {
    body: &'a str,
    parent: Option<&'a str>,
    links: &'a [String],
    state: u64,
}
