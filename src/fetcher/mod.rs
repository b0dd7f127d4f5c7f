mod client;

use std::fs;
use std::io;
use std::path::PathBuf;

use md5::{Digest, Md5};
use thiserror::Error;
use url::Url;

use client::UreqClient;

pub const DEFAULT_SAVE_DIR: &str = "Fetched_Images";

#[derive(Debug)]
pub enum Response {
    Ok {
        body: Vec<u8>,
        content_type: Option<String>,
    },
    Status(u16),
    Transport(String),
}

impl Response {
    pub fn ok(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self::Ok { body, content_type }
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport(reason.into())
    }
}

pub trait HttpClient {
    fn get(&self, url: &str) -> Response;
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL")]
    InvalidUrl,
    #[error("{0}")]
    Connection(String),
    #[error("response is not an image")]
    NotImage,
    #[error("file already exists: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, PartialEq)]
pub struct Saved {
    pub file_name: String,
    pub path: PathBuf,
}

pub struct Fetcher<T: HttpClient> {
    client: T,
    save_dir: PathBuf,
}

impl<T> Fetcher<T>
where
    T: HttpClient,
{
    pub fn with_client(save_dir: &str, client: T) -> Self {
        Fetcher {
            client,
            save_dir: PathBuf::from(save_dir),
        }
    }

    pub fn fetch(&self, url: &str) -> Result<Saved, FetchError> {
        // Each attempt ensures the directory itself, so one failed URL
        // never poisons the rest of the batch.
        fs::create_dir_all(&self.save_dir)?;

        let url = Url::parse(url).map_err(|_| FetchError::InvalidUrl)?;

        let response = self.client.get(url.as_str());

        match response {
            Response::Transport(reason) => Err(FetchError::Connection(reason)),

            Response::Status(code) => Err(FetchError::Connection(format!(
                "server returned status {code} for {url}"
            ))),

            Response::Ok { body, content_type } => {
                // Weak check on purpose: any declared type containing
                // "image" passes, and the bytes are never sniffed.
                let content_type = content_type.unwrap_or_default();

                if !content_type.contains("image") {
                    return Err(FetchError::NotImage);
                }

                let file_name = self.derive_file_name(&url, &body);

                let path = self.save_dir.join(&file_name);

                // Name collision alone counts as a duplicate; contents
                // are never compared.
                if path.exists() {
                    return Err(FetchError::Duplicate(file_name));
                }

                fs::write(&path, &body)?;

                Ok(Saved { file_name, path })
            }
        }
    }

    fn derive_file_name(&self, url: &Url, body: &[u8]) -> String {
        match url.path_segments().and_then(|segments| segments.last()) {
            Some(segment) if !segment.is_empty() => segment.to_string(),

            // No final path segment: fall back to the body hash, with a
            // fixed ".jpg" suffix whatever the real format is.
            _ => format!("{}.jpg", self.hash_body(body)),
        }
    }

    fn hash_body(&self, body: &[u8]) -> String {
        let mut hasher = Md5::new();
        hasher.update(body);
        hex::encode(hasher.finalize())
    }
}

impl Fetcher<UreqClient> {
    pub fn new(save_dir: &str) -> Self {
        let client = UreqClient::new();
        Fetcher::with_client(save_dir, client)
    }
}

#[cfg(test)]
use client::MockClient;
