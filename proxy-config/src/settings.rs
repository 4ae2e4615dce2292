//! Configuration types and built-in defaults

use std::env;
use std::path::PathBuf;

use crate::converter::ConverterSpec;
use crate::encoding::OutputEncoding;
use crate::rules::RuleSet;

/// Fully resolved proxy configuration.
///
/// Produced once at startup and treated as read-only for the rest of the
/// process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    /// TCP port the proxy server listens on
    pub port: u16,
    /// Encoding for output content
    pub output_encoding: OutputEncoding,
    /// Credentials for proxy authentication; empty disables authentication
    pub authenticate: String,
    /// Hide client-side read/reply error messages in the log
    pub hide_client_errors: bool,
    /// Search for copies of removed sites in the web archive
    pub search_in_archive: bool,
    /// Keep web-archive error messages short, for retro browsers
    pub shorten_archive_errors: bool,
    /// Raw transport-security protocol selector, when configured
    pub security_protocols: Option<u32>,
    /// User-agent template for outgoing requests
    pub user_agent: String,
    /// Host name (or IP) the proxy advertises to clients
    pub default_host_name: String,
    /// Abort network operations on invalid remote TLS certificates
    pub validate_certificates: bool,
    /// Directory for temporary files
    pub temporary_directory: PathBuf,
    /// Log destination requested by the file, unless overridden on the
    /// command line
    pub log_file: Option<LogFile>,
    /// Allow clients to view the configuration file contents
    pub allow_config_file_display: bool,
    /// Status page display style
    pub display_status_page: StatusPage,
    /// Domains that must be reached over HTTPS only
    pub force_https: Vec<String>,
    /// Content-Type fragments describing text content
    pub text_types: Vec<String>,
    /// Domains whose content is always treated as UTF-8
    pub force_utf8: Vec<String>,
    /// Domains whose redirects are followed internally
    pub internal_redirect_on: Vec<String>,
    /// Enabled content converters
    pub converters: Vec<ConverterSpec>,
    /// Alphabet transliteration table; first match wins
    pub translit_table: Vec<(String, String)>,
    /// Traffic-editing rule sets, in evaluation order
    pub edit_rules: Vec<RuleSet>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            port: 80,
            output_encoding: OutputEncoding::default(),
            authenticate: String::new(),
            hide_client_errors: false,
            search_in_archive: false,
            shorten_archive_errors: false,
            security_protocols: None,
            user_agent: "%Original% RetroProxy/%Version%".to_string(),
            default_host_name: crate::net::machine_name(),
            validate_certificates: true,
            temporary_directory: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            log_file: None,
            allow_config_file_display: true,
            display_status_page: StatusPage::Full,
            force_https: vec!["www.phantom.sannata.org.example".to_string()],
            text_types: vec!["text/".to_string(), "javascript".to_string()],
            force_utf8: vec!["yandex.ru.example".to_string()],
            internal_redirect_on: vec![
                "flickr.com.example".to_string(),
                "www.flickr.com.example".to_string(),
            ],
            converters: Vec::new(),
            translit_table: Vec::new(),
            edit_rules: Vec::new(),
        }
    }
}

/// Log destination requested by the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub append: bool,
}

/// Status page display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPage {
    /// Status page disabled
    No,
    /// Short status page
    Short,
    /// Full status page with statistics
    #[default]
    Full,
}

impl StatusPage {
    /// Resolve the configured mode name; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("no") {
            Some(Self::No)
        } else if value.eq_ignore_ascii_case("short") {
            Some(Self::Short)
        } else if value.eq_ignore_ascii_case("full") {
            Some(Self::Full)
        } else {
            None
        }
    }
}
