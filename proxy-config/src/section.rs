//! Section-header classification

/// The five list-accumulating sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialSection {
    ForceHttps,
    TextTypes,
    ForceUtf8,
    InternalRedirectOn,
    Converters,
}

/// Identity of the current configuration section, decided once per header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Server,
    Translit,
    /// A traffic-editing rule section, optionally scoped to a URL mask
    Edit { on_url: Option<String> },
    Special(SpecialSection),
    /// Legacy per-URL fix section
    FixableUrl(String),
    /// Legacy per-content-type fix section
    FixableType(String),
    /// Legacy content-patch section
    ContentPatch(String),
    /// A section family that is recognized but no longer supported
    Rejected(String),
    Unknown(String),
}

impl SectionKind {
    /// Classify a bracketed section name.
    pub fn classify(name: &str) -> Self {
        match name {
            "Server" => return Self::Server,
            "Translit" => return Self::Translit,
            "Edit" => return Self::Edit { on_url: None },
            "ForceHttps" => return Self::Special(SpecialSection::ForceHttps),
            "TextTypes" => return Self::Special(SpecialSection::TextTypes),
            "ForceUtf8" => return Self::Special(SpecialSection::ForceUtf8),
            "InternalRedirectOn" => return Self::Special(SpecialSection::InternalRedirectOn),
            "Converters" => return Self::Special(SpecialSection::Converters),
            _ => {}
        }
        if let Some(url) = name.strip_prefix("Edit:") {
            return Self::Edit {
                on_url: Some(url.to_string()),
            };
        }
        if let Some(id) = name.strip_prefix("FixableURL:") {
            return Self::FixableUrl(id.to_string());
        }
        if let Some(id) = name.strip_prefix("FixableType:") {
            return Self::FixableType(id.to_string());
        }
        if name.starts_with("ContentPatchFind:") {
            return Self::Rejected(name.to_string());
        }
        if let Some(id) = name.strip_prefix("ContentPatch:") {
            return Self::ContentPatch(id.to_string());
        }
        Self::Unknown(name.to_string())
    }
}
