//! Error and warning types for configuration loading

use thiserror::Error;

/// Failures that abort a configuration load.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but cannot be read
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// Strict mode promoted the first tolerated problem to a failure
    #[error("configuration rejected in strict mode: {0}")]
    Strict(ParseWarning),
}

/// Problems tolerated during parsing.
///
/// Each warning names the offending line where one exists. Parsing always
/// continues past them unless strict mode is active.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("line {line}: unknown section {name:?}")]
    UnknownSection { line: usize, name: String },

    #[error("line {line}: ContentPatchFind sections are no longer supported")]
    UnsupportedSection { line: usize },

    #[error("line {line}: unknown server option {name:?}")]
    UnknownServerOption { line: usize, name: String },

    #[error("line {line}: bad port number {value:?}")]
    BadPort { line: usize, value: String },

    #[error("line {line}: {option} expects a boolean alias, got {value:?}")]
    BadBoolean {
        line: usize,
        option: String,
        value: String,
    },

    #[error("line {line}: unknown codepage {value:?}, keeping previous encoding")]
    UnknownEncoding { line: usize, value: String },

    #[error("line {line}: bad security-protocol selector {value:?}")]
    BadProtocolSelector { line: usize, value: String },

    #[error("line {line}: bad status-page mode {value:?}")]
    BadStatusPageMode { line: usize, value: String },

    #[error("DefaultHostName {name:?} does not refer to this machine")]
    HostNameNotLocal { name: String },

    #[error("line {line}: legacy item {id:?} is already declared")]
    DuplicateLegacyItem { line: usize, id: String },

    #[error("line {line}: option {option:?} is already set for legacy item {id:?}")]
    DuplicateLegacyOption {
        line: usize,
        id: String,
        option: String,
    },

    #[error("unknown legacy {format} option: {option}")]
    UnknownLegacyOption {
        format: &'static str,
        option: String,
    },

    #[error("rule set rejected: {reason}")]
    RuleSetRejected { reason: String },

    #[error("line {line}: converter rejected: {reason}")]
    ConverterRejected { line: usize, reason: String },
}
