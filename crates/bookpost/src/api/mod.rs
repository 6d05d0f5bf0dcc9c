use std::time::Duration;

use serde::de::DeserializeOwned;

pub(crate) mod google_books;

/// Blocking HTTP transport used by the API modules.
pub trait Client
where
    Self: Sized,
{
    /// Build a client whose requests give up after `timeout`.
    fn with_timeout(timeout: Duration) -> Result<Self, Error>;

    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        Self::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::wrap(ErrorKind::Network, e))
    }

    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::Network, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};
