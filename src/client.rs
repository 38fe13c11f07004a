//! High-level client: `AdminClient` with nested sub-client accessors.
//!
//! The client binds one signing identity to one peer submitter so that
//! commands need no per-call options. The free functions in
//! [`crate::lifecycle`] remain available for one-off use.

use std::sync::Arc;

use crate::error::{AdminError, AdminResult};
use crate::identity::ProposalSigner;
use crate::lifecycle::client::Lifecycle;
use crate::lifecycle::options::{with_call_options, with_channel, with_submitter, CommandOption};
use crate::transport::{CallOptions, ProposalSubmitter};

// Re-export sub-client types for convenience.
pub use crate::lifecycle::client::Lifecycle as LifecycleClient;

/// The primary entry point for peer administration.
///
/// Provides nested sub-client accessors per system chaincode:
/// `client.lifecycle()`.
pub struct AdminClient<S> {
    pub(crate) submitter: Arc<dyn ProposalSubmitter>,
    pub(crate) signer: Arc<S>,
    pub(crate) channel_name: Option<String>,
    pub(crate) call_options: CallOptions,
}

impl<S: ProposalSigner> AdminClient<S> {
    pub fn builder() -> AdminClientBuilder<S> {
        AdminClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn lifecycle(&self) -> Lifecycle<'_, S> {
        Lifecycle { client: self }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Options every command issued through this client starts from.
    pub(crate) fn command_options(&self) -> Vec<CommandOption> {
        let mut options = vec![
            with_submitter(self.submitter.clone()),
            with_call_options(self.call_options.clone()),
        ];
        if let Some(channel_name) = &self.channel_name {
            options.push(with_channel(channel_name.clone()));
        }
        options
    }
}

impl<S> Clone for AdminClient<S> {
    fn clone(&self) -> Self {
        Self {
            submitter: self.submitter.clone(),
            signer: self.signer.clone(),
            channel_name: self.channel_name.clone(),
            call_options: self.call_options.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AdminClientBuilder<S> {
    submitter: Option<Arc<dyn ProposalSubmitter>>,
    signer: Option<Arc<S>>,
    channel_name: Option<String>,
    call_options: CallOptions,
}

impl<S> Default for AdminClientBuilder<S> {
    fn default() -> Self {
        Self {
            submitter: None,
            signer: None,
            channel_name: None,
            call_options: CallOptions::default(),
        }
    }
}

impl<S: ProposalSigner> AdminClientBuilder<S> {
    pub fn submitter(mut self, submitter: Arc<dyn ProposalSubmitter>) -> Self {
        self.submitter = Some(submitter);
        self
    }

    pub fn signer(mut self, signer: S) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    /// Share a signer already held elsewhere.
    pub fn shared_signer(mut self, signer: Arc<S>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn channel(mut self, channel_name: &str) -> Self {
        self.channel_name = Some(channel_name.to_string());
        self
    }

    pub fn call_options(mut self, options: CallOptions) -> Self {
        self.call_options = options;
        self
    }

    pub fn build(self) -> AdminResult<AdminClient<S>> {
        let submitter = self
            .submitter
            .ok_or_else(|| AdminError::Configuration("no proposal submitter supplied".into()))?;
        let signer = self
            .signer
            .ok_or_else(|| AdminError::Configuration("no signing identity supplied".into()))?;

        Ok(AdminClient {
            submitter,
            signer,
            channel_name: self.channel_name,
            call_options: self.call_options,
        })
    }
}
