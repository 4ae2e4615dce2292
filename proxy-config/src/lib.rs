//! Configuration-and-rule-language core for the retroproxy server.
//!
//! Reads the line-oriented configuration dialect — server settings, list
//! sections, the transliteration table, traffic-editing rule sections, and
//! three deprecated legacy formats — and produces a fully resolved
//! [`ProxyConfig`] plus ordered [`RuleSet`]s for the rule-execution engine.
//! Malformed input degrades into warnings rather than failed startups; a
//! missing configuration file yields the built-in defaults.

pub mod convert;
pub mod converter;
pub mod encoding;
pub mod error;
pub mod net;
pub mod parser;
pub mod rules;
pub mod section;
pub mod settings;

mod legacy;

pub use converter::{ConverterError, ConverterSpec};
pub use encoding::OutputEncoding;
pub use error::{ConfigError, ParseWarning};
pub use net::{NetworkInfo, SystemNetworkInfo};
pub use parser::{load_config, parse_config, parse_config_with, ConfigLoad, ParseOptions};
pub use rules::{Directive, RuleSet, RuleSetError};
pub use section::{SectionKind, SpecialSection};
pub use settings::{LogFile, ProxyConfig, StatusPage};

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
