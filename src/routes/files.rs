//! `/files/{name}` handlers backed by the serving directory.
//!
//! Names are used verbatim: there is no path canonicalisation and no locking
//! between concurrent readers and writers of the same file.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use crate::http::error::HttpError;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routes::single_segment;

/// The serving directory. Read-only configuration shared by all connections.
#[derive(Debug, Clone, Default)]
pub struct ServeDir {
    root: PathBuf,
}

impl ServeDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Looks for an entry named exactly `name` among the directory entries.
    pub async fn contains(&self, name: &str) -> io::Result<bool> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_name() == OsStr::new(name) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.root.join(name)).await
    }

    /// Creates or truncates `name` and writes `contents` to it.
    pub async fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(self.root.join(name), contents).await
    }
}

/// GET `/files/{name}`: the file's bytes, or 404 if no such entry exists.
pub async fn get(request: &Request, dir: &ServeDir) -> Result<Response, HttpError> {
    let name = single_segment(request.target(), "files", "/files/{filename}")?;

    let read_err = |source: io::Error| HttpError::FileReadError {
        name: name.to_string(),
        source,
    };

    if !dir.contains(name).await.map_err(read_err)? {
        tracing::debug!(file = name, dir = %dir.root().display(), "File not found");
        return Ok(Response::not_found());
    }

    let content = dir.read(name).await.map_err(read_err)?;

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "application/octet-stream")
        .body(content)
        .content_length()
        .build())
}

/// POST `/files/{name}`: stores the request body, overwriting any existing file.
pub async fn post(request: &Request, dir: &ServeDir) -> Result<Response, HttpError> {
    let name = single_segment(request.target(), "files", "/files/{filename}")?;

    dir.write(name, &request.body)
        .await
        .map_err(|source| HttpError::FileWriteError {
            name: name.to_string(),
            source,
        })?;

    tracing::debug!(file = name, bytes = request.body.len(), "Stored file");
    Ok(Response::created())
}
