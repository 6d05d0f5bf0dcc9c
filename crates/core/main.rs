#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{path::PathBuf, process};

mod app;
mod file;
mod interact;

use bookpost as lib;

use lib::{
    format::{Format, Hugo, Post, Writer},
    Query, SearchOptions,
};

use clap::Parser;
use eyre::WrapErr;
use log::{info, trace};

/// Number of books offered for selection in interact mode.
const INTERACT_RESULTS: u8 = 10;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        query,
        isbn,
        outdir,
        slug,
        title,
        interact,
        api_url,
        verbosity,
        quiet,
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    // no prompts in quiet mode
    let interact = interact && !quiet;

    let query = Query::new(query, isbn);
    let mut options = SearchOptions::default();
    if let Some(api_url) = api_url {
        trace!("Using API url '{api_url}'");
        options.api_url = api_url;
    }

    let book = if interact {
        trace!("Interact mode enabled");
        options.max_results = INTERACT_RESULTS;
        let books = lib::search(&query, &options).wrap_err("Search failed, check the query")?;
        app::pick_book(books)?
    } else {
        lib::first_book(&query, &options).wrap_err("Search failed, check the query")?
    };

    info!("Found book: {}", book.title);
    info!("Author: {}", book.author);

    let slug = app::resolve_slug(slug.as_deref(), &book);
    let title = title.as_deref().map_or("", str::trim);
    let date = chrono::Local::now().date_naive();
    let post = Post::new(&book, date).with_title(title);

    trace!("Writing {} page '{slug}'", Hugo::name());
    let mut file = file::create_post_file::<Hugo>(&outdir, &slug)?;
    file.write_post(&post)
        .wrap_err_with(|| format!("Cannot write to '{}'", file.path().display()))?;

    println!("Wrote {}", file.path().display());
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show warnings and errors
    let verbosity = if quiet { 1 } else { verbosity + 2 };

    stderrlog::new()
        .verbosity(verbosity)
        .init()
        .wrap_err("Unable to set up logging")
}

#[derive(Parser)]
#[clap(name = "bookpost")]
#[clap(about = "Search the Google Books API and write a Hugo page for the book found")]
#[clap(version, author)]
struct Cli {
    /// Title (or any search text) of the book, or its ISBN when --isbn is used
    query: String,

    /// Treat the query as an ISBN
    #[clap(long)]
    isbn: bool,

    /// Directory the page is written to, created when missing
    #[clap(short, long, parse(from_os_str), default_value = "content/books")]
    outdir: PathBuf,

    /// File name of the page without the extension, derived from the book title by default
    #[clap(short, long)]
    slug: Option<String>,

    /// Title of the page, the book title is used by default
    #[clap(short, long)]
    title: Option<String>,

    /// Choose between several search results instead of using the first one.
    #[clap(short, long)]
    interact: bool,

    /// Base URL of the volume search API
    #[clap(long, hide = true)]
    api_url: Option<String>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only print warnings and errors to stderr, the path written is still printed to stdout.
    #[clap(short, long)]
    quiet: bool,
}
