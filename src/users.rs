use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Reason accepted by the user report endpoint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)] // the wire names say it all
pub enum ReportReason {
    Spam,
    Terror,
    Ads,
    Slander,
    Blackmail,
    Threats,
    Crime,
    Porn,
    Nude,
    Obscenity,
    Plagiarism,
    Bribe,
    Killing,
    Illegal,
}

/// User account endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Users<'a> {
    pub(crate) client: &'a Client,
}

impl Users<'_> {
    /// Returns the accounts the logged-in user has blocked.
    pub async fn blocked(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const BLOCKED: Endpoint = Endpoint::get("/v1/user/block", &["startkey"]);
        self.client
            .execute_paged(&BLOCKED, Args::new().with_paging(&paging))
            .await
    }

    /// Returns the accounts the logged-in user has muted.
    pub async fn muted(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const MUTED: Endpoint = Endpoint::get("/v1/user/mute", &["startkey"]);
        self.client
            .execute_paged(&MUTED, Args::new().with_paging(&paging))
            .await
    }

    /// Returns whether a username is taken.
    pub async fn exists(&self, username: &str) -> Result<ApiResponse, Error> {
        const EXISTS: Endpoint = Endpoint::get("/v1/user/exists", &["username"]);
        self.client
            .execute(&EXISTS, &Args::new().arg("username", username))
            .await
    }

    /// Searches users by account name.
    pub async fn search(
        &self,
        search: Option<&str>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const SEARCH: Endpoint = Endpoint::get("/v1/users", &["search", "startkey"]);
        let args = Args::new().arg_opt("search", search).with_paging(&paging);
        self.client.execute_paged(&SEARCH, args).await
    }

    /// Returns suggested accounts to follow.
    pub async fn suggested(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const SUGGESTED: Endpoint = Endpoint::get("/v1/users/rss", &["startkey"]);
        self.client
            .execute_paged(&SUGGESTED, Args::new().with_paging(&paging))
            .await
    }

    /// Blocks a user.
    pub async fn block(&self, username: &str) -> Result<ApiResponse, Error> {
        const BLOCK: Endpoint = Endpoint::post("/v1/user/block", &[]);
        let args = Args::new().body(json!({ "username": username }));
        self.client.execute(&BLOCK, &args).await
    }

    /// Unblocks a user.
    pub async fn unblock(&self, user_id: &str) -> Result<ApiResponse, Error> {
        const UNBLOCK: Endpoint = Endpoint::post("/v1/user/block/delete", &[]);
        let args = Args::new().body(json!({ "id": user_id }));
        self.client.execute(&UNBLOCK, &args).await
    }

    /// Dislikes a user.
    pub async fn dislike(&self, user_id: &str) -> Result<ApiResponse, Error> {
        const DISLIKE: Endpoint = Endpoint::post("/v1/user/dislike", &[]);
        let args = Args::new().body(json!({ "id": user_id }));
        self.client.execute(&DISLIKE, &args).await
    }

    /// Mutes a user.
    pub async fn mute(&self, username: &str) -> Result<ApiResponse, Error> {
        const MUTE: Endpoint = Endpoint::post("/v1/user/mute", &[]);
        let args = Args::new().body(json!({ "username": username }));
        self.client.execute(&MUTE, &args).await
    }

    /// Unmutes a user.
    pub async fn unmute(&self, user_id: &str) -> Result<ApiResponse, Error> {
        const UNMUTE: Endpoint = Endpoint::post("/v1/user/mute/delete", &[]);
        let args = Args::new().body(json!({ "id": user_id }));
        self.client.execute(&UNMUTE, &args).await
    }

    /// Reports a user.
    pub async fn report(
        &self,
        user_id: &str,
        reason: ReportReason,
        message: &str,
    ) -> Result<ApiResponse, Error> {
        const REPORT: Endpoint = Endpoint::post("/v1/user/report", &[]);
        let args = Args::new().body(json!({
            "reason": reason,
            "message": message,
            "id": user_id,
        }));
        self.client.execute(&REPORT, &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::ReportReason;

    #[test]
    fn report_reasons_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(ReportReason::Slander).unwrap(),
            serde_json::Value::String("slander".to_owned())
        );
    }
}
