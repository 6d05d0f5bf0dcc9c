//! The flat bibliographic record produced by a search.

/// Metadata of a single book as returned by the search API.
///
/// Every field is a plain [`String`] and is left empty when the API response did not include it,
/// so consumers never have to deal with missing values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookMeta {
    /// Title of the book.
    pub title: String,
    /// Authors of the book joined with `", "`.
    pub author: String,
    /// URL of the largest cover image available.
    pub cover: String,
    /// Free text description.
    pub description: String,
    /// ISBN-13 or ISBN-10, whichever the API listed first.
    pub isbn: String,
    /// Name of the publisher.
    pub publisher: String,
    /// Publication date exactly as the API reports it, e.g. `2005` or `2005-08-02`.
    pub published_date: String,
    /// Canonical Google Books page of the volume.
    pub google_books_url: String,
}

impl BookMeta {
    /// A short single line label used when choosing between several books.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = if self.title.is_empty() {
            "No title".to_owned()
        } else {
            self.title.clone()
        };

        if !self.author.is_empty() {
            label.push_str(" - ");
            label.push_str(&self.author);
        }

        if !self.published_date.is_empty() {
            label.push_str(&format!(" ({})", self.published_date));
        }

        label
    }
}
