//! Rendering of status snapshots into the text exposition format.
//!
//! # Responsibilities
//! - Serialize a store snapshot deterministically, one data line per record
//! - Emit each metric family's `# HELP` / `# TYPE` header once, before the
//!   family's first record
//!
//! Rendering is pure: no I/O, no failure modes. Line order follows the
//! snapshot's target order, so identical snapshots render to identical text.

use std::fmt::Write;

use crate::status::StatusRecord;

const HTTP_HEADER: &str = "# HELP zu_http_status The most recent result of an HTTP/HTTPS status check\n\
                           # TYPE zu_http_status gauge\n";

const SMTP_HEADER: &str = "# HELP zu_smtp_status The most recent result of an SMTP status check\n\
                           # TYPE zu_smtp_status gauge\n";

const TLS_HEADER: &str = "# HELP zu_tls_status The most recent result of a TLS status check\n\
                          # TYPE zu_tls_status gauge\n";

/// Render a snapshot into the exposition text scraped by the monitoring
/// system.
pub fn render(snapshot: &[StatusRecord]) -> String {
    let mut out = String::new();
    let mut http_header = false;
    let mut smtp_header = false;
    let mut tls_header = false;

    for record in snapshot {
        match record {
            StatusRecord::Http {
                target,
                code,
                failure,
            } => {
                if !http_header {
                    out.push_str(HTTP_HEADER);
                    http_header = true;
                }
                match failure {
                    None => {
                        let _ = writeln!(out, "zu_http_status{{url=\"{target}\"}} {code}");
                    }
                    Some(message) => {
                        let _ = writeln!(
                            out,
                            "zu_http_status{{url=\"{target}\",message=\"{message}\"}} {code}"
                        );
                    }
                }
            }
            StatusRecord::Smtp {
                target,
                failed,
                message,
            } => {
                if !smtp_header {
                    out.push_str(SMTP_HEADER);
                    smtp_header = true;
                }
                let _ = writeln!(
                    out,
                    "zu_smtp_status{{url=\"{target}\",message=\"{message}\"}} {}",
                    u8::from(*failed)
                );
            }
            StatusRecord::Tls {
                target,
                failed,
                message,
            } => {
                if !tls_header {
                    out.push_str(TLS_HEADER);
                    tls_header = true;
                }
                let _ = writeln!(
                    out,
                    "zu_tls_status{{url=\"{target}\",message=\"{message}\"}} {}",
                    u8::from(*failed)
                );
            }
        }
    }

    out
}
