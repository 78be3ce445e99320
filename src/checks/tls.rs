//! TLS handshake check.
//!
//! # Responsibilities
//! - Complete a TLS handshake against the target using platform trust roots
//! - Treat a completed handshake as success and close immediately
//! - Record handshake and connection errors as failures with their message

use std::io;
use std::sync::Arc;

use tokio::net::TcpStream;
use tokio::sync::broadcast;
use tokio::time;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;
use url::Url;

use crate::checks::pause::PauseRange;
use crate::status::{StatusRecord, StatusStore};

/// A periodic TLS handshake check against one `host:port` target.
///
/// The target URL must carry an explicit port. A missing port is a
/// configuration mistake, reported as an immediate failure record on every
/// iteration rather than a crash; validation also rejects it at startup.
pub struct TlsCheck {
    url: Url,
    pause: PauseRange,
    store: Arc<StatusStore>,
    connector: TlsConnector,
}

impl TlsCheck {
    pub fn new(url: Url, pause: PauseRange, store: Arc<StatusStore>) -> Self {
        Self {
            url,
            pause,
            store,
            connector: platform_connector(),
        }
    }

    /// Run the check loop until the shutdown signal arrives.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(target = %self.url, kind = "tls", "Check started");

        self.store
            .record(StatusRecord::Tls {
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

        tracing::info!(target = %self.url, kind = "tls", "Check stopped");
    }

    async fn request(&self) -> StatusRecord {
        tracing::debug!(target = %self.url, "Sending request");

        match self.handshake().await {
            Ok(()) => {
                tracing::info!(target = %self.url, "Request succeeded");
                StatusRecord::Tls {
                    target: self.url.clone(),
                    failed: false,
                    message: String::new(),
                }
            }
            Err(e) => {
                tracing::error!(target = %self.url, error = %e, "Request failed");
                StatusRecord::Tls {
                    target: self.url.clone(),
                    failed: true,
                    message: e.to_string(),
                }
            }
        }
    }

    async fn handshake(&self) -> io::Result<()> {
        let host = self
            .url
            .host_str()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "target URL carries no host"))?;
        let port = self
            .url
            .port()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "target URL carries no port"))?;

        let server_name = ServerName::try_from(host.to_string())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let stream = TcpStream::connect((host, port)).await?;
        let tls = self.connector.connect(server_name, stream).await?;

        // Handshake completed; that is the whole observation.
        drop(tls);
        Ok(())
    }
}

/// A connector trusting the platform's root certificate store.
fn platform_connector() -> TlsConnector {
    let mut roots = RootCertStore::empty();
    for cert in rustls_native_certs::load_native_certs().certs {
        // Certificates the platform store holds but rustls rejects are skipped.
        let _ = roots.add(cert);
    }

    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();
    TlsConnector::from(Arc::new(config))
}
