//! Configuration-file parsing: section routing, accumulation, assembly
//!
//! One pass over the file, top to bottom. Section headers pick the routing
//! mode for the lines that follow; legacy sections are translated into rule
//! sets only after the whole scan, so legacy-derived rule sets always come
//! after natively-declared ones.

use std::fs;
use std::io::ErrorKind;
use std::mem;
use std::path::Path;

use tracing::{info, warn};

use crate::convert::{parse_bool, resolve_temp_dir};
use crate::converter::ConverterSpec;
use crate::encoding::OutputEncoding;
use crate::error::{ConfigError, ParseWarning};
use crate::legacy::{LegacyRegistry, CONTENT_PATCH, FIXABLE_TYPE, FIXABLE_URL};
use crate::net::{host_name_is_local, NetworkInfo, SystemNetworkInfo};
use crate::rules::RuleSet;
use crate::section::{SectionKind, SpecialSection};
use crate::settings::{LogFile, ProxyConfig, StatusPage};

/// Knobs controlling a configuration load.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Fail on the first warning instead of accumulating them
    pub strict: bool,
    /// A command-line log destination is active; `LogFile` and
    /// `AppendLogFile` lines are ignored
    pub log_file_overridden: bool,
}

/// A parsed configuration plus everything the parser tolerated on the way.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ProxyConfig,
    pub warnings: Vec<ParseWarning>,
}

/// Load a configuration file from disk.
///
/// A missing file is a supported condition: the built-in defaults are
/// returned and a notice is logged. Any other read failure is an error.
pub fn load_config(path: &Path, options: ParseOptions) -> Result<ConfigLoad, ConfigError> {
    info!("using configuration file {}", path.display());
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            info!("{}: no such config file, using defaults", path.display());
            return Ok(ConfigLoad {
                config: ProxyConfig::default(),
                warnings: Vec::new(),
            });
        }
        Err(error) => return Err(ConfigError::Io(error)),
    };
    let load = parse_config_with(&source, options, &SystemNetworkInfo)?;
    info!("{} load complete", path.display());
    Ok(load)
}

/// Parse configuration text using the system network facts.
pub fn parse_config(source: &str, options: ParseOptions) -> Result<ConfigLoad, ConfigError> {
    parse_config_with(source, options, &SystemNetworkInfo)
}

/// Parse configuration text with an injected network-information source.
pub fn parse_config_with(
    source: &str,
    options: ParseOptions,
    network: &dyn NetworkInfo,
) -> Result<ConfigLoad, ConfigError> {
    Parser::new(options, network).run(source)
}

struct Parser<'n> {
    options: ParseOptions,
    network: &'n dyn NetworkInfo,
    config: ProxyConfig,
    section: SectionKind,
    list_acc: Vec<String>,
    raw_edit_sets: Vec<Vec<String>>,
    fixable_urls: LegacyRegistry,
    fixable_types: LegacyRegistry,
    content_patches: LegacyRegistry,
    warnings: Vec<ParseWarning>,
}

impl<'n> Parser<'n> {
    fn new(options: ParseOptions, network: &'n dyn NetworkInfo) -> Self {
        Self {
            options,
            network,
            config: ProxyConfig::default(),
            section: SectionKind::Unknown(String::new()),
            list_acc: Vec::new(),
            raw_edit_sets: Vec::new(),
            fixable_urls: LegacyRegistry::default(),
            fixable_types: LegacyRegistry::default(),
            content_patches: LegacyRegistry::default(),
            warnings: Vec::new(),
        }
    }

    fn run(mut self, source: &str) -> Result<ConfigLoad, ConfigError> {
        let mut seen = 0usize;
        for (index, line) in source.lines().enumerate() {
            seen += 1;
            self.line(index + 1, line)?;
        }
        if seen == 0 {
            info!("curiously short configuration; check that line endings match this platform");
        }
        self.finish()
    }

    /// Record a tolerated problem; strict mode turns it into a failure.
    fn warn(&mut self, warning: ParseWarning) -> Result<(), ConfigError> {
        warn!("{warning}");
        if self.options.strict {
            return Err(ConfigError::Strict(warning));
        }
        self.warnings.push(warning);
        Ok(())
    }

    fn line(&mut self, number: usize, line: &str) -> Result<(), ConfigError> {
        if line.is_empty() || line.starts_with(';') {
            return Ok(());
        }
        if line.starts_with('[') && line.ends_with(']') && line.len() >= 2 {
            return self.enter_section(number, &line[1..line.len() - 1]);
        }
        if let SectionKind::Special(section) = &self.section {
            let section = *section;
            return self.special_line(number, section, line);
        }
        match line.find('=') {
            Some(position) if position >= 1 => {
                self.keyed_line(number, line, &line[..position], &line[position + 1..])
            }
            // Stray text is tolerated without comment.
            _ => Ok(()),
        }
    }

    fn enter_section(&mut self, number: usize, name: &str) -> Result<(), ConfigError> {
        self.list_acc.clear();
        let kind = SectionKind::classify(name);
        match &kind {
            SectionKind::FixableUrl(id) => {
                if !self.fixable_urls.register(id) {
                    self.warn(ParseWarning::DuplicateLegacyItem {
                        line: number,
                        id: id.clone(),
                    })?;
                }
            }
            SectionKind::FixableType(id) => {
                if !self.fixable_types.register(id) {
                    self.warn(ParseWarning::DuplicateLegacyItem {
                        line: number,
                        id: id.clone(),
                    })?;
                }
            }
            SectionKind::ContentPatch(id) => {
                if !self.content_patches.register(id) {
                    self.warn(ParseWarning::DuplicateLegacyItem {
                        line: number,
                        id: id.clone(),
                    })?;
                }
            }
            SectionKind::Rejected(_) => {
                self.warn(ParseWarning::UnsupportedSection { line: number })?;
            }
            SectionKind::Edit { on_url } => {
                let mut set = Vec::new();
                if let Some(url) = on_url {
                    set.push(format!("OnUrl={url}"));
                }
                self.raw_edit_sets.push(set);
            }
            _ => {}
        }
        self.section = kind;
        Ok(())
    }

    fn special_line(
        &mut self,
        number: usize,
        section: SpecialSection,
        line: &str,
    ) -> Result<(), ConfigError> {
        if let SpecialSection::Converters = section {
            return match ConverterSpec::parse(line) {
                Ok(converter) => {
                    self.config.converters.push(converter);
                    Ok(())
                }
                Err(error) => self.warn(ParseWarning::ConverterRejected {
                    line: number,
                    reason: error.to_string(),
                }),
            };
        }
        // The setting reflects everything accumulated so far in this
        // section run; a later run of the same section starts over.
        self.list_acc.push(line.to_string());
        let list = self.list_acc.clone();
        match section {
            SpecialSection::ForceHttps => self.config.force_https = list,
            SpecialSection::TextTypes => self.config.text_types = list,
            SpecialSection::ForceUtf8 => self.config.force_utf8 = list,
            SpecialSection::InternalRedirectOn => self.config.internal_redirect_on = list,
            SpecialSection::Converters => unreachable!("handled above"),
        }
        Ok(())
    }

    fn keyed_line(
        &mut self,
        number: usize,
        line: &str,
        name: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let section = self.section.clone();
        match section {
            SectionKind::Server => self.server_option(number, name, value),
            SectionKind::Translit => {
                self.config
                    .translit_table
                    .push((name.to_string(), value.to_string()));
                Ok(())
            }
            SectionKind::Edit { .. } => {
                if let Some(set) = self.raw_edit_sets.last_mut() {
                    set.push(line.to_string());
                }
                Ok(())
            }
            SectionKind::FixableUrl(id) => {
                if !self.fixable_urls.insert(&id, name, value) {
                    return self.warn(ParseWarning::DuplicateLegacyOption {
                        line: number,
                        id,
                        option: name.to_string(),
                    });
                }
                Ok(())
            }
            SectionKind::FixableType(id) => {
                if !self.fixable_types.insert(&id, name, value) {
                    return self.warn(ParseWarning::DuplicateLegacyOption {
                        line: number,
                        id,
                        option: name.to_string(),
                    });
                }
                Ok(())
            }
            SectionKind::ContentPatch(id) => {
                if !self.content_patches.insert(&id, name, value) {
                    return self.warn(ParseWarning::DuplicateLegacyOption {
                        line: number,
                        id,
                        option: name.to_string(),
                    });
                }
                Ok(())
            }
            SectionKind::Rejected(name) | SectionKind::Unknown(name) => {
                self.warn(ParseWarning::UnknownSection { line: number, name })
            }
            SectionKind::Special(_) => unreachable!("special sections are routed before keyed parsing"),
        }
    }

    fn server_option(&mut self, number: usize, name: &str, value: &str) -> Result<(), ConfigError> {
        match name {
            "Port" => match value.parse::<u16>() {
                Ok(port) => self.config.port = port,
                Err(_) => {
                    return self.warn(ParseWarning::BadPort {
                        line: number,
                        value: value.to_string(),
                    })
                }
            },
            "OutputEncoding" => match OutputEncoding::resolve(value) {
                Some(encoding) => self.config.output_encoding = encoding,
                None => {
                    return self.warn(ParseWarning::UnknownEncoding {
                        line: number,
                        value: value.to_string(),
                    })
                }
            },
            "Authenticate" => self.config.authenticate = value.to_string(),
            "HideClientErrors" => {
                if let Some(flag) = self.bool_option(number, name, value)? {
                    self.config.hide_client_errors = flag;
                }
            }
            "SearchInArchive" => {
                if let Some(flag) = self.bool_option(number, name, value)? {
                    self.config.search_in_archive = flag;
                }
            }
            "ShortenArchiveErrors" => {
                if let Some(flag) = self.bool_option(number, name, value)? {
                    self.config.shorten_archive_errors = flag;
                }
            }
            "SecurityProtocols" => match value.parse::<u32>() {
                Ok(mask) => self.config.security_protocols = Some(mask),
                Err(_) => {
                    return self.warn(ParseWarning::BadProtocolSelector {
                        line: number,
                        value: value.to_string(),
                    })
                }
            },
            "UserAgent" => self.config.user_agent = value.to_string(),
            "DefaultHostName" => {
                let resolved = value.replace("%HostName%", &self.network.machine_name());
                if !host_name_is_local(&resolved, self.network) {
                    self.warn(ParseWarning::HostNameNotLocal {
                        name: resolved.clone(),
                    })?;
                }
                // Accepted even when the check fails; the warning is advisory.
                self.config.default_host_name = resolved;
            }
            "ValidateCertificates" => {
                if let Some(flag) = self.bool_option(number, name, value)? {
                    self.config.validate_certificates = flag;
                }
            }
            "TemporaryDirectory" => {
                self.config.temporary_directory = resolve_temp_dir(value);
            }
            "LogFile" => {
                if !self.options.log_file_overridden {
                    self.config.log_file = Some(LogFile {
                        path: value.into(),
                        append: false,
                    });
                }
            }
            "AppendLogFile" => {
                if !self.options.log_file_overridden {
                    self.config.log_file = Some(LogFile {
                        path: value.into(),
                        append: true,
                    });
                }
            }
            "AllowConfigFileDisplay" => {
                if let Some(flag) = self.bool_option(number, name, value)? {
                    self.config.allow_config_file_display = flag;
                }
            }
            "DisplayStatusPage" => match StatusPage::parse(value) {
                Some(mode) => self.config.display_status_page = mode,
                None => {
                    return self.warn(ParseWarning::BadStatusPageMode {
                        line: number,
                        value: value.to_string(),
                    })
                }
            },
            _ => {
                return self.warn(ParseWarning::UnknownServerOption {
                    line: number,
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    fn bool_option(
        &mut self,
        number: usize,
        option: &str,
        value: &str,
    ) -> Result<Option<bool>, ConfigError> {
        match parse_bool(value) {
            Some(flag) => Ok(Some(flag)),
            None => {
                self.warn(ParseWarning::BadBoolean {
                    line: number,
                    option: option.to_string(),
                    value: value.to_string(),
                })?;
                Ok(None)
            }
        }
    }

    fn finish(mut self) -> Result<ConfigLoad, ConfigError> {
        let native = mem::take(&mut self.raw_edit_sets);
        for set in native {
            self.push_rule_set(set)?;
        }
        let fixable_urls = mem::take(&mut self.fixable_urls);
        let fixable_types = mem::take(&mut self.fixable_types);
        let content_patches = mem::take(&mut self.content_patches);
        for (registry, format) in [
            (fixable_urls, &FIXABLE_URL),
            (fixable_types, &FIXABLE_TYPE),
            (content_patches, &CONTENT_PATCH),
        ] {
            let mut tolerated = Vec::new();
            let groups = registry.translate(format, &mut tolerated);
            for warning in tolerated {
                self.warn(warning)?;
            }
            for group in groups {
                self.push_rule_set(group)?;
            }
        }
        Ok(ConfigLoad {
            config: self.config,
            warnings: self.warnings,
        })
    }

    fn push_rule_set(&mut self, lines: Vec<String>) -> Result<(), ConfigError> {
        match RuleSet::from_lines(&lines) {
            Ok(set) => {
                self.config.edit_rules.push(set);
                Ok(())
            }
            Err(error) => self.warn(ParseWarning::RuleSetRejected {
                reason: error.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;
    use std::path::PathBuf;

    struct FakeNetwork;

    impl NetworkInfo for FakeNetwork {
        fn machine_name(&self) -> String {
            "testbox".to_string()
        }

        fn local_addresses(&self) -> Vec<IpAddr> {
            Vec::new()
        }

        fn resolve(&self, _host: &str) -> Vec<IpAddr> {
            Vec::new()
        }
    }

    fn parse(source: &str) -> ConfigLoad {
        parse_config_with(source, ParseOptions::default(), &FakeNetwork).expect("parse")
    }

    fn directive_lines(set: &RuleSet) -> Vec<String> {
        set.directives()
            .iter()
            .map(|d| format!("{}={}", d.name, d.value))
            .collect()
    }

    #[test]
    fn comments_and_blanks_yield_defaults() {
        let load = parse("; just a comment\n\n;another\n");
        assert_eq!(load.config, ProxyConfig::default());
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn empty_input_yields_defaults() {
        let load = parse("");
        assert_eq!(load.config, ProxyConfig::default());
    }

    #[test]
    fn server_scalars_are_applied() {
        let load = parse(
            "[Server]\n\
             Port=8080\n\
             Authenticate=user:secret\n\
             UserAgent=Mozilla/3.0 (compatible)\n\
             HideClientErrors=yes\n\
             SearchInArchive=on\n\
             ShortenArchiveErrors=1\n\
             ValidateCertificates=off\n\
             AllowConfigFileDisplay=no\n\
             SecurityProtocols=3072\n\
             DisplayStatusPage=short\n",
        );
        let config = load.config;
        assert_eq!(config.port, 8080);
        assert_eq!(config.authenticate, "user:secret");
        assert_eq!(config.user_agent, "Mozilla/3.0 (compatible)");
        assert!(config.hide_client_errors);
        assert!(config.search_in_archive);
        assert!(config.shorten_archive_errors);
        assert!(!config.validate_certificates);
        assert!(!config.allow_config_file_display);
        assert_eq!(config.security_protocols, Some(3072));
        assert_eq!(config.display_status_page, StatusPage::Short);
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn bad_port_warns_and_keeps_going() {
        let load = parse("[Server]\nPort=eighty\nAuthenticate=a:b\n");
        assert_eq!(load.config.port, 80);
        assert_eq!(load.config.authenticate, "a:b");
        assert_eq!(
            load.warnings,
            vec![ParseWarning::BadPort {
                line: 2,
                value: "eighty".to_string(),
            }]
        );
    }

    #[test]
    fn bad_boolean_leaves_field_unchanged() {
        let load = parse("[Server]\nValidateCertificates=maybe\n");
        assert!(load.config.validate_certificates);
        assert_eq!(
            load.warnings,
            vec![ParseWarning::BadBoolean {
                line: 2,
                option: "ValidateCertificates".to_string(),
                value: "maybe".to_string(),
            }]
        );
    }

    #[test]
    fn line_without_equals_is_silently_skipped() {
        let load = parse("[Server]\nstray text with no separator\nPort=8081\n=nokey\n");
        assert_eq!(load.config.port, 8081);
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn unknown_server_option_warns() {
        let load = parse("[Server]\nFlurbleGrommit=on\n");
        assert_eq!(
            load.warnings,
            vec![ParseWarning::UnknownServerOption {
                line: 2,
                name: "FlurbleGrommit".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_section_warns_per_data_line() {
        let load = parse("[Nonsense]\nA=1\nB=2\n");
        assert_eq!(load.warnings.len(), 2);
        assert!(matches!(
            load.warnings[0],
            ParseWarning::UnknownSection { line: 2, .. }
        ));
    }

    #[test]
    fn data_before_any_section_warns_as_unknown() {
        let load = parse("Port=8080\n");
        assert_eq!(
            load.warnings,
            vec![ParseWarning::UnknownSection {
                line: 1,
                name: String::new(),
            }]
        );
        assert_eq!(load.config.port, 80);
    }

    #[test]
    fn unknown_encoding_keeps_previous_value_with_one_warning() {
        let load = parse("[Server]\nOutputEncoding=koi8-r\nOutputEncoding=klingon\n");
        assert_eq!(
            load.config.output_encoding,
            OutputEncoding::Labeled(encoding_rs::KOI8_R)
        );
        assert_eq!(
            load.warnings,
            vec![ParseWarning::UnknownEncoding {
                line: 3,
                value: "klingon".to_string(),
            }]
        );
    }

    #[test]
    fn temp_directory_alias_resolves_to_os_temp() {
        let load = parse("[Server]\nTemporaryDirectory=%TEMP%\n");
        assert_eq!(load.config.temporary_directory, std::env::temp_dir());
        let load = parse("[Server]\nTemporaryDirectory=/srv/cache\n");
        assert_eq!(load.config.temporary_directory, PathBuf::from("/srv/cache"));
    }

    #[test]
    fn log_file_variants_and_override() {
        let load = parse("[Server]\nLogFile=/var/log/proxy.log\n");
        assert_eq!(
            load.config.log_file,
            Some(LogFile {
                path: PathBuf::from("/var/log/proxy.log"),
                append: false,
            })
        );
        let load = parse("[Server]\nAppendLogFile=/var/log/proxy.log\n");
        assert_eq!(
            load.config.log_file,
            Some(LogFile {
                path: PathBuf::from("/var/log/proxy.log"),
                append: true,
            })
        );
        let options = ParseOptions {
            log_file_overridden: true,
            ..ParseOptions::default()
        };
        let load =
            parse_config_with("[Server]\nLogFile=/var/log/proxy.log\n", options, &FakeNetwork)
                .unwrap();
        assert!(load.config.log_file.is_none());
    }

    #[test]
    fn default_host_name_substitutes_machine_name() {
        let load = parse("[Server]\nDefaultHostName=%HostName%\n");
        assert_eq!(load.config.default_host_name, "testbox");
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn default_host_name_warns_but_accepts_foreign_names() {
        let load = parse("[Server]\nDefaultHostName=elsewhere.example\n");
        assert_eq!(load.config.default_host_name, "elsewhere.example");
        assert_eq!(
            load.warnings,
            vec![ParseWarning::HostNameNotLocal {
                name: "elsewhere.example".to_string(),
            }]
        );
    }

    #[test]
    fn special_lists_accumulate_in_order() {
        let load = parse("[ForceHttps]\na.example\nb.example\nc.example\n");
        assert_eq!(load.config.force_https, ["a.example", "b.example", "c.example"]);
    }

    #[test]
    fn single_list_line_replaces_the_default() {
        let load = parse("[ForceHttps]\na.example\n");
        assert_eq!(load.config.force_https, ["a.example"]);
    }

    #[test]
    fn reentering_a_list_section_starts_over() {
        let load = parse("[ForceHttps]\na.example\nb.example\n[Server]\nPort=8080\n[ForceHttps]\nc.example\n");
        assert_eq!(load.config.force_https, ["c.example"]);
    }

    #[test]
    fn list_accumulator_is_not_shared_between_sections() {
        let load = parse("[ForceHttps]\na.example\n[TextTypes]\ntext/\n[ForceUtf8]\nb.example\n[InternalRedirectOn]\nc.example\n");
        assert_eq!(load.config.force_https, ["a.example"]);
        assert_eq!(load.config.text_types, ["text/"]);
        assert_eq!(load.config.force_utf8, ["b.example"]);
        assert_eq!(load.config.internal_redirect_on, ["c.example"]);
    }

    #[test]
    fn converters_append_and_bad_lines_warn() {
        let load = parse("[Converters]\nmagick %SRC% png:%DEST%\n   \npdftohtml\n");
        assert_eq!(load.config.converters.len(), 2);
        assert_eq!(load.config.converters[0].program, "magick");
        assert_eq!(load.config.converters[1].program, "pdftohtml");
        assert_eq!(
            load.warnings,
            vec![ParseWarning::ConverterRejected {
                line: 3,
                reason: "converter specification is empty".to_string(),
            }]
        );
    }

    #[test]
    fn translit_keeps_file_order_and_duplicates() {
        let load = parse("[Translit]\nzh=j\nsch=shch\nzh=zh\n");
        assert_eq!(
            load.config.translit_table,
            vec![
                ("zh".to_string(), "j".to_string()),
                ("sch".to_string(), "shch".to_string()),
                ("zh".to_string(), "zh".to_string()),
            ]
        );
    }

    #[test]
    fn edit_sections_become_ordered_rule_sets() {
        let load = parse(
            "[Edit:http://old.example/*]\n\
             AddRedirect=http://new.example/\n\
             [Edit]\n\
             OnContentType=text/html\n\
             AddReplace=a=b\n",
        );
        assert_eq!(load.config.edit_rules.len(), 2);
        assert_eq!(
            directive_lines(&load.config.edit_rules[0]),
            ["OnUrl=http://old.example/*", "AddRedirect=http://new.example/"]
        );
        assert_eq!(
            directive_lines(&load.config.edit_rules[1]),
            ["OnContentType=text/html", "AddReplace=a=b"]
        );
    }

    #[test]
    fn bare_edit_section_may_be_empty() {
        let load = parse("[Edit]\n");
        assert_eq!(load.config.edit_rules.len(), 1);
        assert!(load.config.edit_rules[0].directives().is_empty());
    }

    #[test]
    fn legacy_fixable_url_translates_after_native_rules() {
        let load = parse(
            "[Edit]\n\
             AddRedirect=http://native.example/\n\
             [FixableURL:foo.example]\n\
             ValidMask=/safe/*\n\
             Redirect=http://new.example\n\
             Internal=yes\n",
        );
        assert_eq!(load.config.edit_rules.len(), 2);
        assert_eq!(
            directive_lines(&load.config.edit_rules[1]),
            [
                "OnUrl=foo.example",
                "IgnoreUrl=/safe/*",
                "AddRedirect=http://new.example",
                "AddInternalRedirect=http://new.example",
            ]
        );
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn legacy_families_translate_in_fixed_order() {
        let load = parse(
            "[ContentPatch:<blink>]\n\
             Replace=<b>\n\
             [FixableType:application/js]\n\
             Redirect=http://cdn.example/x.js\n\
             [FixableURL:foo.example]\n\
             Redirect=http://new.example\n\
             [Edit]\n\
             OnCode=404\n",
        );
        let kinds: Vec<_> = load
            .config
            .edit_rules
            .iter()
            .map(|set| set.directives()[0].name.clone())
            .collect();
        // Native first, then FixableURL, FixableType, ContentPatch.
        assert_eq!(kinds, ["OnCode", "OnUrl", "OnContentType", "AddFind"]);
    }

    #[test]
    fn unknown_legacy_option_warns_but_item_translates() {
        let load = parse("[FixableURL:foo.example]\nRedirect=http://new.example\nColour=red\n");
        assert_eq!(
            directive_lines(&load.config.edit_rules[0]),
            ["OnUrl=foo.example", "AddRedirect=http://new.example"]
        );
        assert_eq!(
            load.warnings,
            vec![ParseWarning::UnknownLegacyOption {
                format: "FixableURL",
                option: "Colour".to_string(),
            }]
        );
    }

    #[test]
    fn duplicate_legacy_declarations_warn() {
        let load = parse(
            "[FixableURL:foo.example]\n\
             Redirect=http://a/\n\
             [FixableURL:foo.example]\n\
             Redirect=http://b/\n",
        );
        assert_eq!(
            load.warnings,
            vec![
                ParseWarning::DuplicateLegacyItem {
                    line: 3,
                    id: "foo.example".to_string(),
                },
                ParseWarning::DuplicateLegacyOption {
                    line: 4,
                    id: "foo.example".to_string(),
                    option: "Redirect".to_string(),
                },
            ]
        );
        // One item, first value wins.
        assert_eq!(load.config.edit_rules.len(), 1);
        assert_eq!(load.config.edit_rules[0].first("AddRedirect"), Some("http://a/"));
    }

    #[test]
    fn content_patch_find_is_deprecated() {
        let load = parse("[ContentPatchFind:x]\nFind=y\n");
        assert_eq!(load.warnings.len(), 2);
        assert_eq!(
            load.warnings[0],
            ParseWarning::UnsupportedSection { line: 1 }
        );
        assert!(matches!(
            load.warnings[1],
            ParseWarning::UnknownSection { line: 2, .. }
        ));
        assert!(load.config.edit_rules.is_empty());
    }

    #[test]
    fn strict_mode_fails_on_first_warning() {
        let result = parse_config_with(
            "[Server]\nPort=eighty\n",
            ParseOptions {
                strict: true,
                ..ParseOptions::default()
            },
            &FakeNetwork,
        );
        match result {
            Err(ConfigError::Strict(ParseWarning::BadPort { line: 2, .. })) => {}
            other => panic!("expected strict failure, got {other:?}"),
        }
    }

    #[test]
    fn reparsing_is_idempotent() {
        let source = "[Server]\nPort=8080\n[ForceHttps]\na.example\n[Edit:u]\nAddRedirect=http://b/\n[FixableURL:f]\nRedirect=http://c/\n";
        let first = parse(source);
        let second = parse(source);
        assert_eq!(first.config, second.config);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn malformed_header_lines_are_tolerated() {
        let load = parse("[Server]\n[BrokenHeader\nPort=8080\n");
        // The broken header is not a section switch; Port still applies.
        assert_eq!(load.config.port, 8080);
        assert!(load.warnings.is_empty());
    }
}
