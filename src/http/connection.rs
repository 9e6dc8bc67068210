use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::Config;
use crate::http::error::HttpError;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::routes::{self, ServeDir};

/// Per-connection settings, cloned into every connection task.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSettings {
    pub dir: ServeDir,
    /// Deadline for reading the whole request; `None` waits forever
    pub read_timeout: Option<Duration>,
}

impl From<&Config> for ConnectionSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            dir: ServeDir::new(cfg.serving_dir()),
            read_timeout: cfg.read_timeout(),
        }
    }
}

/// Drives exactly one request/response exchange over `S`.
pub struct Connection<S> {
    stream: BufReader<S>,
    settings: ConnectionSettings,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, settings: ConnectionSettings) -> Self {
        Self {
            stream: BufReader::new(stream),
            settings,
            state: ConnectionState::Reading,
        }
    }

    /// Runs the connection to completion.
    ///
    /// Any error leaves the connection in `Closed` without anything having
    /// been written; the caller drops the stream.
    pub async fn run(&mut self) -> Result<(), HttpError> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let request = self.read_request().await?;
                    ConnectionState::Processing(request)
                }

                ConnectionState::Processing(request) => {
                    let response = routes::dispatch(&request, &self.settings.dir).await?;

                    tracing::info!(
                        method = request.method().as_str(),
                        target = %request.target(),
                        status = response.status.code,
                        "Request handled"
                    );

                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream
                        .shutdown()
                        .await
                        .map_err(HttpError::ConnectionWriteError)?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    async fn read_request(&mut self) -> Result<Request, HttpError> {
        match self.settings.read_timeout {
            Some(limit) => tokio::time::timeout(limit, parse_request(&mut self.stream))
                .await
                .map_err(|_| HttpError::ReadTimeout)?,
            None => parse_request(&mut self.stream).await,
        }
    }
}
