use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Client, Error, Paging};

/// Direct-message endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Messaging<'a> {
    pub(crate) client: &'a Client,
}

impl Messaging<'_> {
    /// Returns the user's conversations.
    pub async fn conversations(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const CONVERSATIONS: Endpoint =
            Endpoint::get("/v1/messaging/conversations", &["startkey", "limit"]);
        self.client
            .execute_paged(&CONVERSATIONS, Args::new().with_paging(&paging))
            .await
    }

    /// Searches users reachable over messaging.
    pub async fn search_users(
        &self,
        search: Option<&str>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const SEARCH: Endpoint = Endpoint::get(
            "/v1/messaging/conversations/user",
            &["search", "startkey", "limit"],
        );
        let args = Args::new().arg_opt("search", search).with_paging(&paging);
        self.client.execute_paged(&SEARCH, args).await
    }

    /// Returns conversations with a user.
    pub async fn with_user(&self, user_id: &str, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const WITH_USER: Endpoint = Endpoint::get(
            "/v1/messaging/conversations/user/{id}",
            &["id", "startkey", "limit"],
        );
        let args = Args::new().arg("id", user_id).with_paging(&paging);
        self.client.execute_paged(&WITH_USER, args).await
    }

    /// Returns the messages of a conversation.
    pub async fn messages(
        &self,
        conversation_id: &str,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const MESSAGES: Endpoint = Endpoint::get(
            "/v1/messaging/conversations/{id}/messages",
            &["id", "startkey", "limit"],
        );
        let args = Args::new().arg("id", conversation_id).with_paging(&paging);
        self.client.execute_paged(&MESSAGES, args).await
    }

    /// Returns conversation requests.
    pub async fn requests(
        &self,
        search: Option<&str>,
        paging: Paging,
    ) -> Result<Vec<ApiResponse>, Error> {
        const REQUESTS: Endpoint = Endpoint::get(
            "/v1/messaging/conversations/requests",
            &["search", "startkey", "limit"],
        );
        let args = Args::new().arg_opt("search", search).with_paging(&paging);
        self.client.execute_paged(&REQUESTS, args).await
    }

    /// Returns conversation request and unread conversation counts.
    pub async fn counts(&self, paging: Paging) -> Result<Vec<ApiResponse>, Error> {
        const COUNTS: Endpoint = Endpoint::get("/v1/messaging/counts", &["startkey", "limit"]);
        self.client
            .execute_paged(&COUNTS, Args::new().with_paging(&paging))
            .await
    }

    /// Accepts a conversation request.
    pub async fn accept(&self, conversation_id: &str) -> Result<ApiResponse, Error> {
        const ACCEPT: Endpoint =
            Endpoint::post("/v1/messaging/conversations/{id}/accept", &["id"]);
        self.client
            .execute(&ACCEPT, &Args::new().arg("id", conversation_id))
            .await
    }

    /// Denies a conversation request.
    pub async fn deny(&self, conversation_id: &str) -> Result<ApiResponse, Error> {
        const DENY: Endpoint = Endpoint::post("/v1/messaging/conversations/{id}/deny", &["id"]);
        self.client
            .execute(&DENY, &Args::new().arg("id", conversation_id))
            .await
    }

    /// Mutes a conversation request.
    pub async fn mute(&self, conversation_id: &str) -> Result<ApiResponse, Error> {
        const MUTE: Endpoint = Endpoint::post("/v1/messaging/conversations/{id}/mute", &["id"]);
        self.client
            .execute(&MUTE, &Args::new().arg("id", conversation_id))
            .await
    }

    /// Reports a conversation request as spam.
    pub async fn spam(&self, conversation_id: &str) -> Result<ApiResponse, Error> {
        const SPAM: Endpoint = Endpoint::post("/v1/messaging/conversations/{id}/spam", &["id"]);
        self.client
            .execute(&SPAM, &Args::new().arg("id", conversation_id))
            .await
    }
}
