#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bookpost
//!
//! bookpost looks up book metadata from the Google Books API and renders it as a page for a
//! static site generator, see [`format::Hugo`].
//!
//! ```no_run
//! use bookpost::{format::{Format, Hugo, Post}, Query, SearchOptions};
//!
//! let book = bookpost::first_book(&Query::Title("Dune".to_owned()), &SearchOptions::default())?;
//! let date = chrono::Local::now().date_naive();
//! let page = Hugo::compose(&Post::new(&book, date)).raw();
//! let file_name = format!("{}.md", bookpost::slugify(&book.title));
//! # Ok::<(), bookpost::Error>(())
//! ```

mod api;
mod book;
mod error;
pub mod format;
mod query;
mod slug;

pub use book::BookMeta;
pub use error::{Error, ErrorKind};
pub use query::{Query, SearchOptions, GOOGLE_BOOKS_URL, LANG_RESTRICT, MAX_RESULTS_LIMIT};
pub use slug::{slugify, FALLBACK_SLUG};

use log::trace;

type Client = reqwest::blocking::Client;

/// Search books matching `query` using the Google Books API.
///
/// Up to [`SearchOptions::max_results`] books are returned in the order the API ranked them. The
/// returned [`Vec`] is never empty.
///
/// # Errors
///
/// An [`Err`] of kind [`ErrorKind::InvalidInput`] is returned for an empty query or an out of range
/// [`SearchOptions::max_results`].
/// An [`Err`] of kind [`ErrorKind::Network`] is returned when the request fails or times out.
/// An [`Err`] of kind [`ErrorKind::Deserialize`] is returned when the response cannot be parsed.
/// An [`Err`] of kind [`ErrorKind::NotFound`] is returned when no book matches.
#[inline]
pub fn search(query: &Query, options: &SearchOptions) -> Result<Vec<BookMeta>, Error> {
    trace!("Search books for {query}");
    api::google_books::get_books::<Client>(query, options)
}

/// Search the single best match for `query`.
///
/// Only one result is requested regardless of [`SearchOptions::max_results`].
///
/// # Errors
///
/// Same as [`search`].
#[inline]
pub fn first_book(query: &Query, options: &SearchOptions) -> Result<BookMeta, Error> {
    first_book_with::<Client>(query, options)
}

fn first_book_with<C: api::Client>(
    query: &Query,
    options: &SearchOptions,
) -> Result<BookMeta, Error> {
    trace!("Search first book for {query}");
    let options = SearchOptions {
        max_results: 1,
        ..options.clone()
    };

    api::google_books::get_books::<C>(query, &options)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::new(ErrorKind::NotFound, format!("No books found for {query}")))
}
