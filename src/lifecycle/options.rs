//! Command configuration: options applied in order onto a config value.

use std::sync::Arc;

use crate::error::{AdminError, AdminResult};
use crate::lifecycle::ReadyCommand;
use crate::transport::{CallOptions, ProposalSubmitter};

/// A single configuration step. Applying an option may fail, which aborts
/// configuration of the whole command.
pub trait ConfigOption<C> {
    fn apply(self, config: C) -> AdminResult<C>;
}

/// Apply `options` left to right; later options override earlier ones.
pub fn apply_options<C, O, I>(config: C, options: I) -> AdminResult<C>
where
    O: ConfigOption<C>,
    I: IntoIterator<Item = O>,
{
    options
        .into_iter()
        .try_fold(config, |config, option| option.apply(config))
}

/// Configuration shared by every lifecycle command.
#[derive(Clone, Default)]
pub struct CommandConfig {
    pub(crate) submitter: Option<Arc<dyn ProposalSubmitter>>,
    pub(crate) call_options: CallOptions,
    pub(crate) channel_name: Option<String>,
}

impl CommandConfig {
    pub(crate) fn validate(self) -> AdminResult<ReadyCommand> {
        let submitter = self
            .submitter
            .ok_or_else(|| AdminError::Configuration("no proposal submitter supplied".into()))?;

        Ok(ReadyCommand {
            submitter,
            call_options: self.call_options,
            channel_name: self.channel_name.unwrap_or_default(),
        })
    }
}

/// Options accepted by every lifecycle command.
#[derive(Clone)]
pub enum CommandOption {
    /// Submitter bound to the target peer. Share one per peer across commands.
    Submitter(Arc<dyn ProposalSubmitter>),
    /// Transport options; merged onto any supplied earlier.
    CallOptions(CallOptions),
    /// Channel named in the proposal header.
    Channel(String),
}

impl ConfigOption<CommandConfig> for CommandOption {
    fn apply(self, mut config: CommandConfig) -> AdminResult<CommandConfig> {
        match self {
            Self::Submitter(submitter) => config.submitter = Some(submitter),
            Self::CallOptions(options) => config.call_options = config.call_options.merge(options),
            Self::Channel(name) => config.channel_name = Some(name),
        }
        Ok(config)
    }
}

impl std::fmt::Debug for CommandOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submitter(_) => f.write_str("Submitter(..)"),
            Self::CallOptions(options) => f.debug_tuple("CallOptions").field(options).finish(),
            Self::Channel(name) => f.debug_tuple("Channel").field(name).finish(),
        }
    }
}

pub fn with_submitter(submitter: Arc<dyn ProposalSubmitter>) -> CommandOption {
    CommandOption::Submitter(submitter)
}

pub fn with_call_options(options: CallOptions) -> CommandOption {
    CommandOption::CallOptions(options)
}

pub fn with_channel(channel_name: impl Into<String>) -> CommandOption {
    CommandOption::Channel(channel_name.into())
}
