//! parley is a client library for the Parler REST API, exposing one
//! method per endpoint and a cursor-following pagination mode shared by
//! every listing endpoint.
//!
//! Requests are declared, not hand-built: each method names its HTTP
//! verb, route template, and the parameters the endpoint recognizes, and
//! the library fills the route, drops everything the endpoint does not
//! accept, and attaches the session cookies. Passing
//! [`Paging::follow`][`Paging`] makes a listing walk the server's `next`
//! cursors until the last page.
//!
//! ```no_run
//! use parley::{Client, Paging};
//!
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! // Session cookies are read from MST_COOKIE and JST_COOKIE.
//! let client = Client::from_env()?;
//!
//! // One page of the feed.
//! let page = client.feed().get(Paging::default()).await?;
//! println!("{}", page[0].body());
//!
//! // Every page of a user's posts, oldest bounded by endkey.
//! let pages = client
//!     .posts()
//!     .by_user(
//!         "a-user-id",
//!         Paging {
//!             follow: true,
//!             endkey: Some("2021-02-20T14:53:30.429Z_322497".into()),
//!             ..Paging::default()
//!         },
//!     )
//!     .await?;
//! println!("fetched {} pages", pages.len());
//! # Ok(())
//! # }
//! ```

#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod comments;
mod discover;
mod endpoint;
mod error;
mod feed;
mod follows;
mod hashtags;
mod identity;
mod messaging;
mod moderation;
mod news;
mod notifications;
mod pagination;
mod photos;
mod posts;
mod profile;
mod response;
mod session;
mod upload;
mod users;

pub use crate::client::Client;
pub use crate::comments::Comments;
pub use crate::discover::Discover;
pub use crate::error::Error;
pub use crate::feed::Feed;
pub use crate::follows::Follows;
pub use crate::hashtags::Hashtags;
pub use crate::identity::Identity;
pub use crate::messaging::Messaging;
pub use crate::moderation::{FilterAction, Moderation};
pub use crate::news::News;
pub use crate::notifications::Notifications;
pub use crate::pagination::{Cursor, Paging};
pub use crate::photos::Photos;
pub use crate::posts::Posts;
pub use crate::profile::Profile;
pub use crate::response::ApiResponse;
pub use crate::session::Credentials;
pub use crate::upload::Upload;
pub use crate::users::{ReportReason, Users};
