use std::{
    fs::{self, File},
    io::Write,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use bookpost::{
    format::{Format, Writer},
    Error, ErrorKind,
};

use eyre::{eyre, Context};
use log::{trace, warn};

/// A page file on disk that a [`Format`] is written to.
#[allow(clippy::module_name_repetitions)]
pub struct PostFile<F: Format> {
    file: File,
    path: PathBuf,
    _format: PhantomData<F>,
}

impl<F: Format> PostFile<F> {
    #[allow(clippy::missing_const_for_fn)] // can't be const
    fn new(file: File, path: PathBuf) -> Self {
        Self {
            file,
            path,
            _format: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F: Format> Writer for PostFile<F> {
    type Format = F;

    fn write(&mut self, format: F) -> Result<(), Error> {
        self.file
            .write_all(format.raw().as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
    }
}

/// Creates `{outdir}/{slug}.{ext}` along with any missing directories.
///
/// An existing file of the same name is truncated.
#[allow(clippy::module_name_repetitions)]
pub fn create_post_file<F: Format>(outdir: &Path, slug: &str) -> eyre::Result<PostFile<F>> {
    if slug.is_empty() {
        return Err(eyre!("Cannot create a {} page without a slug", F::name()));
    }

    fs::create_dir_all(outdir).wrap_err_with(|| {
        format!(
            "Failed to create the output directory '{}'",
            outdir.display()
        )
    })?;

    // not `with_extension`, a slug may contain dots
    let path = outdir.join(format!("{slug}.{}", F::ext()));
    if path.exists() {
        warn!("Overwriting existing file '{}'", path.display());
    } else {
        trace!("Creating {}", path.display());
    }

    File::create(&path)
        .map(|file| PostFile::new(file, path.clone()))
        .wrap_err_with(|| format!("Failed to open the '{}' file for writing.", path.display()))
}
