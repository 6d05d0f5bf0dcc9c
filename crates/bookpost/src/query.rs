//! What to search for and how to ask for it.

use std::{fmt, time::Duration};

/// Google Books volume search endpoint.
pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Languages the results are restricted to, in priority order.
pub const LANG_RESTRICT: &str = "zh-TW|zh-CN|en";

/// Upper bound on `maxResults` accepted by the Google Books API.
pub const MAX_RESULTS_LIMIT: u8 = 40;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A search for a book either by free text (usually the title) or by ISBN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Free text search.
    Title(String),
    /// ISBN search. The value is passed on as is, no checksum or format validation is done.
    Isbn(String),
}

impl Query {
    /// Builds a [`Query::Isbn`] when `isbn` is set, otherwise a [`Query::Title`].
    #[must_use]
    pub fn new(text: String, isbn: bool) -> Self {
        if isbn {
            Self::Isbn(text)
        } else {
            Self::Title(text)
        }
    }

    /// The text as entered by the user.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Title(text) | Self::Isbn(text) => text,
        }
    }

    /// The value sent as the `q` parameter.
    #[must_use]
    pub fn term(&self) -> String {
        match self {
            Self::Title(title) => title.clone(),
            Self::Isbn(isbn) => format!("isbn:{isbn}"),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => write!(f, "'{title}'"),
            Self::Isbn(isbn) => write!(f, "ISBN '{isbn}'"),
        }
    }
}

/// Settings of a search request.
///
/// The [`Default`] asks for a single result, restricted to [`LANG_RESTRICT`], with a ten second
/// timeout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Base URL of the volume search endpoint.
    pub api_url: String,
    /// Value of the `maxResults` parameter, `1..=40`.
    pub max_results: u8,
    /// Value of the `langRestrict` parameter.
    pub lang_restrict: String,
    /// How long to wait for the response before giving up.
    pub timeout: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            api_url: GOOGLE_BOOKS_URL.to_owned(),
            max_results: 1,
            lang_restrict: LANG_RESTRICT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
