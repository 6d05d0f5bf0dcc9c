use log::{info, trace};
use reqwest::Url;
use serde::Deserialize;

use crate::{
    book::BookMeta,
    query::{Query, SearchOptions, MAX_RESULTS_LIMIT},
    Error, ErrorKind,
};

use super::Client;

pub(crate) fn get_books<C: Client>(
    query: &Query,
    options: &SearchOptions,
) -> Result<Vec<BookMeta>, Error> {
    let url = search_url(query, options)?;
    info!("Searching for {query} using Google Books API");
    trace!("GET {url}");

    let client = C::with_timeout(options.timeout)?;
    let VolumesModel { items } = client.get_json(url.as_str())?;

    trace!("Request was successful");

    let items = items.unwrap_or_default();
    if items.is_empty() {
        return Err(Error::new(
            ErrorKind::NotFound,
            format!("No books found for {query}"),
        ));
    }

    Ok(items.into_iter().map(BookMeta::from).collect())
}

fn search_url(query: &Query, options: &SearchOptions) -> Result<Url, Error> {
    if query.text().trim().is_empty() {
        return Err(Error::new(ErrorKind::InvalidInput, "The search query is empty"));
    }

    if !(1..=MAX_RESULTS_LIMIT).contains(&options.max_results) {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "The number of results must be between 1 and {MAX_RESULTS_LIMIT}, got {}",
                options.max_results
            ),
        ));
    }

    Url::parse_with_params(
        &options.api_url,
        &[
            ("q", query.term()),
            ("maxResults", options.max_results.to_string()),
            ("langRestrict", options.lang_restrict.clone()),
        ],
    )
    .map_err(|e| Error::wrap(ErrorKind::InvalidInput, e))
}

// Every level defaults so that a missing key in an item only leaves that field empty, only the
// absence of `items` itself is treated as "nothing found".
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct VolumesModel {
    #[serde(default)]
    items: Option<Vec<Item>>,
}

#[derive(Default, Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(default, rename_all = "camelCase")]
struct Item {
    volume_info: VolumeInfo,
}

/// Volume information from the Google Books API
#[derive(Default, Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(default, rename_all = "camelCase")]
struct VolumeInfo {
    title: String,
    authors: Vec<String>,
    image_links: ImageLinks,
    description: String,
    industry_identifiers: Vec<IndustryIdentifier>,
    publisher: String,
    published_date: String,
    canonical_volume_link: String,
}

#[derive(Default, Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(default, rename_all = "camelCase")]
struct ImageLinks {
    small_thumbnail: String,
    thumbnail: String,
    medium: String,
    large: String,
}

impl ImageLinks {
    /// The largest image available.
    fn best(self) -> String {
        [self.large, self.medium, self.thumbnail, self.small_thumbnail]
            .into_iter()
            .find(|url| !url.is_empty())
            .unwrap_or_default()
    }
}

#[derive(Default, Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(default)]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    kind: String,
    identifier: String,
}

impl From<Item> for BookMeta {
    fn from(item: Item) -> Self {
        // Deconstruct item to take ownership of fields (avoids cloning).
        let Item {
            volume_info:
                VolumeInfo {
                    title,
                    authors,
                    image_links,
                    description,
                    industry_identifiers,
                    publisher,
                    published_date,
                    canonical_volume_link,
                },
        } = item;

        // first ISBN in the order listed, an ISBN_13 after an ISBN_10 is not preferred.
        let isbn = industry_identifiers
            .into_iter()
            .find(|id| id.kind == "ISBN_13" || id.kind == "ISBN_10")
            .map(|id| id.identifier)
            .unwrap_or_default();

        Self {
            title,
            author: authors.join(", "),
            cover: image_links.best(),
            description,
            isbn,
            publisher,
            published_date,
            google_books_url: canonical_volume_link,
        }
    }
}
