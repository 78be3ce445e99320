//! Most-recent-result store shared between probes and the exposition layer.
//!
//! # Data Flow
//! ```text
//! Probe loop (one writer per target)
//!     → record() replaces the target's entry
//!
//! Exposition handler (concurrent reader)
//!     → snapshot() clones an ordered view
//! ```
//!
//! # Design Decisions
//! - One entry per target, last write wins; no history is kept
//! - Entries are never deleted; the store lives for the process lifetime
//! - Ordered map so snapshots render deterministically

use std::collections::BTreeMap;

use tokio::sync::RwLock;
use url::Url;

/// The latest observed outcome for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusRecord {
    /// Result of an HTTP/HTTPS status check. The status code is exported
    /// verbatim; `failure` is set only for transport-level errors.
    Http {
        target: Url,
        code: u16,
        failure: Option<String>,
    },

    /// Result of an SMTP greeting check.
    Smtp {
        target: Url,
        failed: bool,
        message: String,
    },

    /// Result of a TLS handshake check.
    Tls {
        target: Url,
        failed: bool,
        message: String,
    },
}

impl StatusRecord {
    /// The target this record describes.
    pub fn target(&self) -> &Url {
        match self {
            StatusRecord::Http { target, .. }
            | StatusRecord::Smtp { target, .. }
            | StatusRecord::Tls { target, .. } => target,
        }
    }
}

/// Concurrency-safe mapping from target to its most recent status record.
///
/// Each target is written by exactly one probe loop; the exposition handler
/// reads concurrently. Replacement is atomic per key and snapshots are
/// ordered by target, ascending.
#[derive(Debug, Default)]
pub struct StatusStore {
    records: RwLock<BTreeMap<Url, StatusRecord>>,
}

impl StatusStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for the record's target.
    pub async fn record(&self, record: StatusRecord) {
        let target = record.target().clone();
        self.records.write().await.insert(target, record);
    }

    /// An ordered, owned view of all current entries.
    ///
    /// Writes racing with the snapshot land either before or after it; a
    /// record is never observed half-replaced.
    pub async fn snapshot(&self) -> Vec<StatusRecord> {
        self.records.read().await.values().cloned().collect()
    }

    /// Number of known targets.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when no target has reported yet.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn target(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn http(url: &str, code: u16) -> StatusRecord {
        StatusRecord::Http {
            target: target(url),
            code,
            failure: None,
        }
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = StatusStore::new();
        store.record(http("https://example.com/", 200)).await;
        store.record(http("https://example.com/", 503)).await;
        store
            .record(StatusRecord::Http {
                target: target("https://example.com/"),
                code: 0,
                failure: Some("connection refused".into()),
            })
            .await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(
            snapshot[0],
            StatusRecord::Http {
                target: target("https://example.com/"),
                code: 0,
                failure: Some("connection refused".into()),
            }
        );
    }

    #[tokio::test]
    async fn test_snapshot_ordered_by_target() {
        let store = StatusStore::new();
        store.record(http("https://c.example.com/", 200)).await;
        store.record(http("https://a.example.com/", 200)).await;
        store.record(http("https://b.example.com/", 200)).await;

        let targets: Vec<String> = store
            .snapshot()
            .await
            .iter()
            .map(|r| r.target().to_string())
            .collect();
        assert_eq!(
            targets,
            vec![
                "https://a.example.com/",
                "https://b.example.com/",
                "https://c.example.com/",
            ]
        );
    }

    #[tokio::test]
    async fn test_concurrent_writes_to_distinct_keys() {
        let store = Arc::new(StatusStore::new());

        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let url = format!("https://host-{i:02}.example.com/");
                for code in [500, 200] {
                    store.record(http(&url, code)).await;
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 32);
        for record in &snapshot {
            match record {
                StatusRecord::Http { code, .. } => assert_eq!(*code, 200),
                other => panic!("unexpected record: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_reader_during_writes() {
        let store = Arc::new(StatusStore::new());
        for i in 0..8 {
            store
                .record(http(&format!("https://host-{i}.example.com/"), 200))
                .await;
        }

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for round in 0..100u16 {
                    for i in 0..8 {
                        store
                            .record(http(&format!("https://host-{i}.example.com/"), round))
                            .await;
                    }
                }
            })
        };

        for _ in 0..100 {
            let snapshot = store.snapshot().await;
            assert_eq!(snapshot.len(), 8);
        }
        writer.await.unwrap();
    }
}
