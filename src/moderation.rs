use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Action a word filter applies to a matching comment.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterAction {
    /// The organization's default action.
    Default,
    /// Approve the comment.
    Approve,
    /// Ban the author.
    BanUser,
    /// Ban the author and notify them.
    BanUserNotification,
    /// Deny the comment.
    Deny,
    /// Deny the comment with a detailed reason.
    DenyDetailed,
    /// Mute the comment.
    MuteComment,
    /// Mute the author.
    MuteUser,
    /// Hold the comment for review.
    Review,
    /// Temporarily ban the author.
    TemporaryBan,
}

impl FilterAction {
    /// The action's wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterAction::Default => "default",
            FilterAction::Approve => "approve",
            FilterAction::BanUser => "banUser",
            FilterAction::BanUserNotification => "banUserNotification",
            FilterAction::Deny => "deny",
            FilterAction::DenyDetailed => "denyDetailed",
            FilterAction::MuteComment => "muteComment",
            FilterAction::MuteUser => "muteUser",
            FilterAction::Review => "review",
            FilterAction::TemporaryBan => "temporaryBan",
        }
    }
}

/// Comment moderation endpoints.
///
/// The queue listings default to reverse chronological order, matching
/// the moderation UI; pass `reverse: Some(false)` to read oldest first.
#[derive(Clone, Copy, Debug)]
pub struct Moderation<'a> {
    pub(crate) client: &'a Client,
}

impl Moderation<'_> {
    /// Returns approved comments.
    pub async fn approved(
        &self,
        organization: Option<&str>,
        reverse: Option<bool>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const APPROVED: Endpoint = Endpoint::get(
            "/v1/moderation/approved",
            &["organization", "startkey", "limit", "reverse"],
        );
        let args = queue_args(organization, reverse).with_paging(&paging);
        self.client.execute_paged(&APPROVED, args).await
    }

    /// Returns denied comments.
    pub async fn denied(
        &self,
        organization: Option<&str>,
        reverse: Option<bool>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const DENIED: Endpoint = Endpoint::get(
            "/v1/moderation/denied",
            &["organization", "startkey", "limit", "reverse"],
        );
        let args = queue_args(organization, reverse).with_paging(&paging);
        self.client.execute_paged(&DENIED, args).await
    }

    /// Returns muted comments.
    pub async fn muted(
        &self,
        organization: Option<&str>,
        reverse: Option<bool>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const MUTED: Endpoint = Endpoint::get(
            "/v1/moderation/muted",
            &["organization", "startkey", "limit", "reverse"],
        );
        let args = queue_args(organization, reverse).with_paging(&paging);
        self.client.execute_paged(&MUTED, args).await
    }

    /// Returns comments pending review.
    pub async fn pending(
        &self,
        organization: Option<&str>,
        reverse: Option<bool>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const PENDING: Endpoint = Endpoint::get(
            "/v1/moderation/pending",
            &["organization", "startkey", "limit", "reverse"],
        );
        let args = queue_args(organization, reverse).with_paging(&paging);
        self.client.execute_paged(&PENDING, args).await
    }

    /// Returns comments flagged as spam.
    pub async fn spam(
        &self,
        organization: Option<&str>,
        reverse: Option<bool>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const SPAM: Endpoint = Endpoint::get(
            "/v1/moderation/spam",
            &["organization", "startkey", "limit", "reverse"],
        );
        let args = queue_args(organization, reverse).with_paging(&paging);
        self.client.execute_paged(&SPAM, args).await
    }

    /// Returns the organization's filtered words.
    pub async fn filtered_words(
        &self,
        organization: Option<&str>,
        action: Option<FilterAction>,
        reverse: Option<bool>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const WORDS: Endpoint = Endpoint::get(
            "/v1/moderation/filter/word",
            &["organization", "startkey", "limit", "action", "reverse"],
        );
        let args = queue_args(organization, reverse)
            .arg_opt("action", action.map(FilterAction::as_str))
            .with_paging(&paging);
        self.client.execute_paged(&WORDS, args).await
    }

    /// Approves a comment.
    pub async fn approve(&self, comment_id: &str) -> Result<ApiResponse, Error> {
        const APPROVE: Endpoint = Endpoint::post("/v1/moderation/accept", &[]);
        let args = Args::new().body(json!({ "comments": [comment_id] }));
        self.client.execute(&APPROVE, &args).await
    }

    /// Denies a comment.
    pub async fn deny(&self, comment_id: &str) -> Result<ApiResponse, Error> {
        const DENY: Endpoint = Endpoint::post("/v1/moderation/deny", &[]);
        let args = Args::new().body(json!({ "comments": [comment_id] }));
        self.client.execute(&DENY, &args).await
    }

    /// Mutes a comment.
    pub async fn mute(&self, comment_id: &str) -> Result<ApiResponse, Error> {
        const MUTE: Endpoint = Endpoint::post("/v1/moderation/mute", &[]);
        let args = Args::new().body(json!({ "comments": [comment_id] }));
        self.client.execute(&MUTE, &args).await
    }

    /// Marks a comment as spam.
    pub async fn report_spam(&self, comment_id: &str) -> Result<ApiResponse, Error> {
        const SPAM: Endpoint = Endpoint::post("/v1/moderation/spam", &[]);
        let args = Args::new().body(json!({ "comments": [comment_id] }));
        self.client.execute(&SPAM, &args).await
    }

    /// Adds a word filter with the action to apply on a match.
    pub async fn add_word_filter(
        &self,
        word: &str,
        action: FilterAction,
    ) -> Result<ApiResponse, Error> {
        const ADD: Endpoint = Endpoint::post("/v1/moderation/filter/word", &[]);
        let args = Args::new().body(json!({ "words": [word], "action": action }));
        self.client.execute(&ADD, &args).await
    }

    /// Deletes a word filter.
    pub async fn delete_word_filter(&self, word: &str) -> Result<ApiResponse, Error> {
        const DELETE: Endpoint = Endpoint::post("/v1/moderation/filter/word/delete", &[]);
        let args = Args::new().body(json!({ "words": [word] }));
        self.client.execute(&DELETE, &args).await
    }
}

fn queue_args(organization: Option<&str>, reverse: Option<bool>) -> Args {
    Args::new()
        .arg_opt("organization", organization)
        .arg_opt("reverse", reverse)
        .or_default("reverse", true)
}
