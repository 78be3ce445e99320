//! SMTP greeting check.
//!
//! # Responsibilities
//! - Open a raw connection and exchange an EHLO greeting
//! - Treat any reply other than `250` as a failure carrying the reply line
//! - Record I/O errors at any step as failures with their message

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::broadcast;
use tokio::time;
use url::Url;

use crate::checks::pause::PauseRange;
use crate::status::{StatusRecord, StatusStore};

const SMTP_DEFAULT_PORT: u16 = 25;

/// A periodic SMTP EHLO check against one mail server.
pub struct SmtpHeloCheck {
    url: Url,
    helo: String,
    pause: PauseRange,
    store: Arc<StatusStore>,
}

impl SmtpHeloCheck {
    pub fn new(url: Url, helo: String, pause: PauseRange, store: Arc<StatusStore>) -> Self {
        Self {
            url,
            helo,
            pause,
            store,
        }
    }

    /// Run the check loop until the shutdown signal arrives.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(target = %self.url, kind = "smtp-helo", "Check started");

        self.store
            .record(StatusRecord::Smtp {
                target: self.url.clone(),
                failed: false,
                message: String::new(),
            })
            .await;

        loop {
            let pause = self.pause.sample();
            tracing::debug!(target = %self.url, pause = ?pause, "Pausing");
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = time::sleep(pause) => {}
            }

            tokio::select! {
                _ = shutdown.recv() => break,
                record = self.request() => self.store.record(record).await,
            }
        }

        tracing::info!(target = %self.url, kind = "smtp-helo", "Check stopped");
    }

    async fn request(&self) -> StatusRecord {
        tracing::debug!(target = %self.url, "Sending request");

        match self.greet().await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(target = %self.url, error = %e, "Request failed");
                self.failure(e.to_string())
            }
        }
    }

    /// Perform one greeting exchange. A non-`250` reply is an observation,
    /// not an error; only transport problems surface as `Err`.
    async fn greet(&self) -> io::Result<StatusRecord> {
        let host = self
            .url
            .host_str()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "target URL carries no host"))?;
        let port = self.url.port().unwrap_or(SMTP_DEFAULT_PORT);

        let stream = TcpStream::connect((host, port)).await?;
        let (reader, mut writer) = stream.into_split();
        let mut lines = BufReader::new(reader).lines();

        // Server banner, discarded.
        lines.next_line().await?;

        writer
            .write_all(format!("EHLO {}\n", self.helo).as_bytes())
            .await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        let reply = lines.next_line().await?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed before EHLO reply",
            )
        })?;

        if !reply.starts_with("250") {
            tracing::error!(target = %self.url, reply = %reply, "Request failed");
            return Ok(self.failure(reply));
        }

        writer.write_all(b"QUIT\n").await?;
        writer.flush().await?;

        tracing::info!(target = %self.url, "Request succeeded");
        Ok(StatusRecord::Smtp {
            target: self.url.clone(),
            failed: false,
            message: String::new(),
        })
    }

    fn failure(&self, message: String) -> StatusRecord {
        StatusRecord::Smtp {
            target: self.url.clone(),
            failed: true,
            message,
        }
    }
}
