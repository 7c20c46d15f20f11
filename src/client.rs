use crate::endpoint::{Args, Endpoint};
use crate::pagination::follow_pages;
use crate::{
    ApiResponse, Comments, Credentials, Discover, Error, Feed, Follows, Hashtags, Identity,
    Messaging, Moderation, News, Notifications, Photos, Posts, Profile, Users,
};
use reqwest::multipart::Form;
use reqwest::{header, Method, RequestBuilder};
use std::borrow::Cow;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to a set of session credentials.
///
/// One `Client` owns the connection pool and the cookies; every resource
/// group is a cheap view borrowed from it, so a single instance serves a
/// whole program.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) client: reqwest::Client,
    pub(crate) credentials: Credentials,
}

impl Client {
    /// Creates a new `Client` with the default base URL,
    /// `https://api.parler.com`. Use [`Client::with_base_url`] to change
    /// the base URL.
    #[must_use]
    pub fn new(credentials: Credentials) -> Client {
        Client::with_timeout(credentials, DEFAULT_TIMEOUT)
    }

    /// Creates a new `Client` with a custom per-request deadline. The
    /// deadline also bounds each page fetch of a followed pagination, so a
    /// hung transport call cannot stall the loop forever.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // tested to not panic
    pub fn with_timeout(credentials: Credentials, timeout: Duration) -> Client {
        const USER_AGENT: &str = concat!("parley/", env!("CARGO_PKG_VERSION"));

        Client {
            base_url: Cow::Borrowed("https://api.parler.com"),
            client: reqwest::Client::builder()
                .cookie_store(true)
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .unwrap(),
            credentials,
        }
    }

    /// Creates a new `Client` with credentials loaded from the
    /// `MST_COOKIE` and `JST_COOKIE` environment variables.
    pub fn from_env() -> Result<Client, Error> {
        Ok(Client::new(Credentials::from_env()?))
    }

    /// Creates a new `Client` with a custom base URL.
    #[must_use]
    pub fn with_base_url(mut self, mut base_url: String) -> Client {
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = Cow::Owned(base_url);
        self
    }

    /// Comment endpoints.
    #[must_use]
    pub fn comments(&self) -> Comments<'_> {
        Comments { client: self }
    }

    /// Promoted-content discovery endpoints.
    #[must_use]
    pub fn discover(&self) -> Discover<'_> {
        Discover { client: self }
    }

    /// The logged-in user's feed.
    #[must_use]
    pub fn feed(&self) -> Feed<'_> {
        Feed { client: self }
    }

    /// Follower and following endpoints.
    #[must_use]
    pub fn follows(&self) -> Follows<'_> {
        Follows { client: self }
    }

    /// Hashtag search.
    #[must_use]
    pub fn hashtags(&self) -> Hashtags<'_> {
        Hashtags { client: self }
    }

    /// Identity verification status.
    #[must_use]
    pub fn identity(&self) -> Identity<'_> {
        Identity { client: self }
    }

    /// Direct-message endpoints.
    #[must_use]
    pub fn messaging(&self) -> Messaging<'_> {
        Messaging { client: self }
    }

    /// Comment moderation endpoints.
    #[must_use]
    pub fn moderation(&self) -> Moderation<'_> {
        Moderation { client: self }
    }

    /// Affiliate news endpoints.
    #[must_use]
    pub fn news(&self) -> News<'_> {
        News { client: self }
    }

    /// Notification endpoints.
    #[must_use]
    pub fn notifications(&self) -> Notifications<'_> {
        Notifications { client: self }
    }

    /// Photo lookup.
    #[must_use]
    pub fn photos(&self) -> Photos<'_> {
        Photos { client: self }
    }

    /// Post endpoints.
    #[must_use]
    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }

    /// Profile endpoints for the logged-in user.
    #[must_use]
    pub fn profile(&self) -> Profile<'_> {
        Profile { client: self }
    }

    /// User account endpoints.
    #[must_use]
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub(crate) fn request(&self, method: Method, route: &str) -> RequestBuilder {
        tracing::debug!(%method, route, "Client::request");
        self.client
            .request(method, format!("{}{}", self.base_url, route))
            .header(header::COOKIE, self.credentials.cookie_header())
    }

    /// Builds the request declared by `endpoint` from `args` and performs
    /// a single call.
    pub(crate) async fn execute(
        &self,
        endpoint: &Endpoint,
        args: &Args,
    ) -> Result<ApiResponse, Error> {
        let request = endpoint.resolve(args)?;
        // TODO: surface the rate-limit headers and grow a retry/backoff
        // policy here before anyone points a followed pagination at a
        // large account.
        let mut builder = self
            .request(request.method, &request.route)
            .query(&request.params);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        ApiResponse::read(builder.send().await?).await
    }

    /// Single fetch by default; hands over to the pagination driver when
    /// the arguments carry the follow flag.
    pub(crate) async fn execute_paged(
        &self,
        endpoint: &Endpoint,
        args: Args,
    ) -> Result<Vec<ApiResponse>, Error> {
        if args.follow() {
            follow_pages(self, endpoint, args).await
        } else {
            Ok(vec![self.execute(endpoint, &args).await?])
        }
    }

    /// Like [`Client::execute`], but sends a multipart form instead of a
    /// JSON body.
    pub(crate) async fn upload(
        &self,
        endpoint: &Endpoint,
        args: &Args,
        form: Form,
    ) -> Result<ApiResponse, Error> {
        let request = endpoint.resolve(args)?;
        let builder = self
            .request(request.method, &request.route)
            .query(&request.params)
            .multipart(form);
        ApiResponse::read(builder.send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::Client;
    use crate::Credentials;

    #[test]
    fn client_new_doesnt_panic() {
        drop(Client::new(Credentials::new("mst", "jst")));
    }

    #[test]
    fn with_base_url_trims_trailing_slashes() {
        let client = Client::new(Credentials::new("mst", "jst"))
            .with_base_url("http://127.0.0.1:9000/".to_owned());
        assert_eq!(client.base_url, "http://127.0.0.1:9000");
    }
}
