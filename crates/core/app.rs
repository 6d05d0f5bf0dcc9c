use bookpost::{slugify, BookMeta};
use eyre::eyre;
use log::{info, trace};

use crate::interact::user_select;

/// Let the user choose one of the books found, a single book is taken without asking.
pub fn pick_book(mut books: Vec<BookMeta>) -> eyre::Result<BookMeta> {
    if books.len() == 1 {
        trace!("Only one book found - no need to choose");
        return Ok(books.remove(0));
    }

    let items = books.iter().map(BookMeta::label).collect::<Vec<_>>();
    let selection = user_select("Choose a book", &items)?;

    if selection < books.len() {
        Ok(books.swap_remove(selection))
    } else {
        Err(eyre!(
            "Internal error: user selection should be valid and not cause an out of index error"
        ))
    }
}

/// The slug given by the user when not blank, otherwise one derived from the book title.
pub fn resolve_slug(slug: Option<&str>, book: &BookMeta) -> String {
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            info!("Overriding slug with '{slug}'");
            slug.to_owned()
        }
        None => slugify(&book.title),
    }
}
