use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Cursor, Error, Paging};
use serde::Serialize;
use serde_json::json;

/// Comment endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Comments<'a> {
    pub(crate) client: &'a Client,
}

impl Comments<'_> {
    /// Returns a comment identified by its ID.
    pub async fn get(
        &self,
        comment_id: &str,
        startkey: Option<Cursor>,
    ) -> Result<ApiResponse, Error> {
        const GET: Endpoint = Endpoint::get("/v1/comment", &["id", "startkey"]);
        let args = Args::new()
            .arg("id", comment_id)
            .arg_opt("startkey", startkey.map(String::from));
        self.client.execute(&GET, &args).await
    }

    /// Returns a user's comment history.
    pub async fn by_user(&self, user_id: &str, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const BY_USER: Endpoint = Endpoint::get("/v1/comment/creator", &["id", "startkey"]);
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&BY_USER, args).await
    }

    /// Posts a comment under a parent post or comment.
    pub async fn create(
        &self,
        parent_id: &str,
        body: &str,
        links: &[String],
    ) -> Result<ApiResponse, Error> {
        const CREATE: Endpoint = Endpoint::post("/v1/comment", &[]);
        let body = serde_json::to_value(NewComment {
            body,
            parent: parent_id,
            links,
        })?;
        self.client.execute(&CREATE, &Args::new().body(body)).await
    }

    /// Deletes a comment identified by its ID.
    pub async fn delete(&self, comment_id: &str) -> Result<ApiResponse, Error> {
        const DELETE: Endpoint = Endpoint::post("/v1/comment/delete", &["id"]);
        self.client
            .execute(&DELETE, &Args::new().arg("id", comment_id))
            .await
    }

    /// Casts a vote on a comment; `up` false is a down-vote.
    pub async fn vote(&self, comment_id: &str, up: bool) -> Result<ApiResponse, Error> {
        const VOTE: Endpoint = Endpoint::post("/v1/comment/vote", &[]);
        let args = Args::new().body(json!({ "comment_id": comment_id, "up": up }));
        self.client.execute(&VOTE, &args).await
    }
}

#[derive(Serialize)]
struct NewComment<'a> {
    body: &'a str,
    parent: &'a str,
    links: &'a [String],
}
