use crate::client::Client;
use crate::endpoint::{Args, Endpoint};
use crate::{ApiResponse, Error};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// An opaque position in a paginated result set.
///
/// Cursors are server-defined tokens (typically derived from a timestamp)
/// and are never interpreted, only compared: the `endkey` bound relies on
/// the ordering of the token's own string form.
#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl From<&str> for Cursor {
    fn from(value: &str) -> Cursor {
        Cursor(value.to_owned())
    }
}

/// Pagination controls accepted by every cursor-driven endpoint.
///
/// Without [`follow`][`Paging::follow`], a single page is fetched and
/// returned as the only element of the result. With it, pages are fetched
/// until the server marks the last page, stops offering a `next` cursor,
/// repeats a cursor, or the `next` cursor crosses
/// [`endkey`][`Paging::endkey`].
#[derive(Clone, Debug, Default)]
pub struct Paging {
    /// Cursor to start from. Unset means the most recent page.
    pub startkey: Option<Cursor>,
    /// Bound at which to stop following. Never sent to the server.
    pub endkey: Option<Cursor>,
    /// Page size, where the endpoint supports one.
    pub limit: Option<u32>,
    /// Keep fetching pages until a stop condition fires.
    pub follow: bool,
}

/// Fetches pages until a stop condition fires, returning them in fetch
/// order.
///
/// A cursor that fails to advance stops the loop with a warning rather
/// than an error; callers see a shorter sequence than expected. Any
/// transport error aborts the whole session, accumulated pages included.
#[tracing::instrument(skip_all, fields(route = endpoint.route))]
pub(crate) async fn follow_pages(
    client: &Client,
    endpoint: &Endpoint,
    mut args: Args,
) -> Result<Vec<ApiResponse>, Error> {
    let endkey = args.endkey();
    let mut cursor = args.startkey();
    let mut pages = Vec::new();

    loop {
        if let Some(cursor) = &cursor {
            args.set_startkey(cursor);
        }
        let page = client.execute(endpoint, &args).await?;
        let last = page.is_last_page();
        let next = page.next_cursor();
        pages.push(page);

        if last {
            tracing::debug!("reached last page");
            break;
        }
        let next = match next {
            Some(next) => next,
            None => {
                tracing::debug!("no next cursor returned");
                break;
            }
        };
        // A next cursor equal to the one just used would fetch the same
        // page forever.
        if cursor.as_ref() == Some(&next) {
            tracing::warn!(cursor = %next, "cursor did not advance, stopping");
            break;
        }
        if let Some(endkey) = &endkey {
            if next < *endkey {
                tracing::debug!(%next, %endkey, "next cursor crossed endkey");
                break;
            }
        }
        cursor = Some(next);
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn cursors_order_by_string_form() {
        let earlier = Cursor::from("2020-11-01T00:00:00.000Z_100");
        let later = Cursor::from("2021-02-20T14:53:30.429Z_322497");
        assert!(earlier < later);
    }
}
