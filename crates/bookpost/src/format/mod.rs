//! Contains the [`Format`] and [`Writer`] traits and the [`Post`] they render.
//!
//! A [`Format`] is composed from a [`Post`], which pairs the [`BookMeta`] of a search with the
//! page specific values (title override and date). Composing never fails: every field of
//! [`BookMeta`] has a usable empty value, and formats fall back to placeholders for those.

use chrono::NaiveDate;

mod hugo;

use crate::{BookMeta, Error};
pub use hugo::Hugo;

/// Shown in place of the title when neither an override nor the book provides one.
pub const TITLE_PLACEHOLDER: &str = "(title not found)";

/// A textual document that can be composed from a [`Post`].
///
/// Formats are promises at the type level about what a [`String`] (or similar) represents.
pub trait Format {
    /// Composes a [`Post`] to this [`Format`].
    ///
    /// This function should not fail as every [`Post`] can be represented, missing values are
    /// replaced with placeholders.
    fn compose(post: &Post<'_>) -> Self;

    /// Consume self and get the raw [`String`].
    fn raw(self) -> String;

    /// The display name of the format.
    fn name() -> &'static str;

    /// The file extension associated with this format.
    fn ext() -> &'static str;
}

/// A trait for objects which are [`Format`]-oriented sinks.
///
/// Writers are defined by implementing the [`Writer::write`] method, [`Writer::write_post`] is
/// provided on top of it.
pub trait Writer {
    /// The format associated with the writer.
    type Format: Format;

    /// Write a format into this writer.
    ///
    /// # Errors
    ///
    /// The call to write should only return an [`Err`] when writing to the writer cannot be
    /// completed.
    fn write(&mut self, format: Self::Format) -> Result<(), Error>;

    /// Compose the [`Post`] with [`Writer::Format`] and write it.
    ///
    /// # Errors
    ///
    /// See [`Writer::write`].
    fn write_post(&mut self, post: &Post<'_>) -> Result<(), Error> {
        let format = Self::Format::compose(post);
        self.write(format)
    }
}

/// Everything needed to render one page about a book.
#[derive(Clone, Debug)]
pub struct Post<'a> {
    book: &'a BookMeta,
    title: Option<&'a str>,
    date: NaiveDate,
}

impl<'a> Post<'a> {
    /// A post about `book` dated `date`, titled after the book.
    #[must_use]
    pub const fn new(book: &'a BookMeta, date: NaiveDate) -> Self {
        Self {
            book,
            title: None,
            date,
        }
    }

    /// Use `title` as the page title instead of the book title.
    ///
    /// An empty `title` is ignored.
    #[must_use]
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title).filter(|t| !t.is_empty());
        self
    }

    /// The book the post is about.
    #[must_use]
    pub const fn book(&self) -> &BookMeta {
        self.book
    }

    /// The date of the post.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The page title: the override, else the book title, else [`TITLE_PLACEHOLDER`].
    #[must_use]
    pub fn title(&self) -> &str {
        self.title
            .or_else(|| Some(self.book.title.as_str()).filter(|t| !t.is_empty()))
            .unwrap_or(TITLE_PLACEHOLDER)
    }
}
