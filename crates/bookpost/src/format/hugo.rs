use serde_json::Value;

use super::{Format, Post};

/// Placeholder for an empty field in the body.
const NOT_FOUND: &str = "(not found)";

const FRONT_MATTER_FENCE: &str = "---";

/// A type wrapper around [`String`] to represent a Hugo Markdown page with YAML front matter.
#[derive(Debug)]
pub struct Hugo(String);

impl Format for Hugo {
    fn compose(post: &Post<'_>) -> Self {
        let mut page = compose_front_matter(post);
        page.push('\n');
        page.push_str(&compose_body(post));
        Self(page)
    }

    fn raw(self) -> String {
        self.0
    }

    fn name() -> &'static str {
        "Hugo"
    }

    fn ext() -> &'static str {
        "md"
    }
}

/// Each value is written as JSON, which YAML reads as a flow scalar or sequence. JSON escaping
/// keeps quotes, backslashes and line breaks inside the value so a field can never spill into
/// the rest of the block. The date is the exception: it is written as a bare `YYYY-MM-DD` so
/// YAML reads it as a date, and it can't contain anything needing escapes.
fn compose_front_matter(post: &Post<'_>) -> String {
    let book = post.book();
    let fields: [(&str, String); 11] = [
        ("title", json(post.title())),
        ("date", post.date().format("%Y-%m-%d").to_string()),
        ("type", json("books")),
        ("tags", json(vec!["reading"])),
        ("author", json(book.author.as_str())),
        ("isbn", json(book.isbn.as_str())),
        ("publisher", json(book.publisher.as_str())),
        ("published_date", json(book.published_date.as_str())),
        ("cover", json(book.cover.as_str())),
        ("google_books_url", json(book.google_books_url.as_str())),
        ("draft", json(true)),
    ];

    let mut block = format!("{FRONT_MATTER_FENCE}\n");
    for (key, value) in fields {
        block.push_str(&format!("{key}: {value}\n"));
    }
    block.push_str(FRONT_MATTER_FENCE);
    block.push('\n');
    block
}

fn json<V: Into<Value>>(value: V) -> String {
    value.into().to_string()
}

fn compose_body(post: &Post<'_>) -> String {
    let book = post.book();
    let details = [
        ("Title", &book.title),
        ("Author", &book.author),
        ("Publisher", &book.publisher),
        ("Published", &book.published_date),
        ("ISBN", &book.isbn),
        ("Google Books", &book.google_books_url),
    ]
    .into_iter()
    .map(|(label, value)| format!("- **{label}**: {}\n", or_not_found(value)))
    .collect::<String>();

    format!(
        "## Book Details\n\n{details}\n\
         ## Description\n\n{}\n\n\
         ## Impressions\n\n(to be written)\n\n\
         ## Notes\n\n-\n",
        or_not_found(&book.description)
    )
}

fn or_not_found(value: &str) -> &str {
    if value.is_empty() {
        NOT_FOUND
    } else {
        value
    }
}
