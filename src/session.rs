use crate::Error;
use std::env;
use std::fmt::{self, Debug};

/// The pair of session cookies identifying a logged-in account.
///
/// Both tokens are issued outside this library (lifting them from an
/// authenticated browser session is the usual route) and are forwarded on
/// every request as the `mst` and `jst` cookies. Their contents are never
/// inspected or logged.
#[derive(Clone)]
pub struct Credentials {
    mst: String,
    jst: String,
}

impl Credentials {
    /// Creates credentials from the two session tokens.
    pub fn new(mst: impl Into<String>, jst: impl Into<String>) -> Credentials {
        Credentials {
            mst: mst.into(),
            jst: jst.into(),
        }
    }

    /// Loads credentials from the `MST_COOKIE` and `JST_COOKIE`
    /// environment variables.
    pub fn from_env() -> Result<Credentials, Error> {
        Ok(Credentials {
            mst: env::var("MST_COOKIE").map_err(|_| Error::MissingCredential("MST_COOKIE"))?,
            jst: env::var("JST_COOKIE").map_err(|_| Error::MissingCredential("JST_COOKIE"))?,
        })
    }

    pub(crate) fn cookie_header(&self) -> String {
        format!("mst={}; jst={}", self.mst, self.jst)
    }
}

// Token contents stay out of Debug output.
impl Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}
