//! Per-call transport options.

use std::time::Duration;

/// Options forwarded to the submitter with each proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Deadline for the call. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
    /// Request metadata (gRPC headers), sent in order.
    pub metadata: Vec<(String, String)>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// Layer `other` on top of `self`: a timeout in `other` replaces ours and
    /// its metadata is appended after ours.
    pub fn merge(mut self, other: CallOptions) -> Self {
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        self.metadata.extend(other.metadata);
        self
    }
}
