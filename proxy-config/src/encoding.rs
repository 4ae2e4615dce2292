//! Output-encoding resolution

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// Resolved output-encoding setting.
///
/// The platform code-page families and the UTF variants without a WHATWG
/// transcoder stay symbolic; the content-converter layer maps them to
/// concrete byte tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputEncoding {
    /// Pass content through without transcoding
    AsIs,
    /// The platform ANSI code page
    Ansi,
    /// The platform OEM (DOS) code page
    Oem,
    /// The platform Macintosh code page
    Mac,
    /// The platform EBCDIC code page
    Ebcdic,
    /// UTF-7
    Utf7,
    /// UTF-32 little-endian
    Utf32,
    /// A concrete encoding resolved by name or code-page number
    Labeled(&'static Encoding),
}

impl Default for OutputEncoding {
    fn default() -> Self {
        OutputEncoding::Labeled(UTF_8)
    }
}

fn is_any(value: &str, aliases: &[&str]) -> bool {
    aliases.iter().any(|alias| value.eq_ignore_ascii_case(alias))
}

impl OutputEncoding {
    /// Resolve a configured encoding name.
    ///
    /// Alias families are checked first, then encoding labels, then numeric
    /// code-page identifiers, then the UTF fallbacks. `None` means the value
    /// is not a known encoding; callers keep the previously active value.
    pub fn resolve(value: &str) -> Option<Self> {
        if is_any(value, &["Windows", "Win", "ANSI"]) {
            return Some(Self::Ansi);
        }
        if is_any(value, &["DOS", "OEM"]) {
            return Some(Self::Oem);
        }
        if is_any(value, &["Mac", "Apple"]) {
            return Some(Self::Mac);
        }
        if is_any(value, &["EBCDIC", "IBM"]) {
            return Some(Self::Ebcdic);
        }
        if is_any(value, &["0", "AsIs"]) {
            return Some(Self::AsIs);
        }
        if let Some(encoding) = Encoding::for_label_no_replacement(value.as_bytes()) {
            return Some(Self::Labeled(encoding));
        }
        if let Ok(page) = value.parse::<u16>() {
            if let Some(encoding) = codepage::to_encoding(page) {
                return Some(Self::Labeled(encoding));
            }
        }
        match value.to_ascii_lowercase().as_str() {
            "utf-7" => Some(Self::Utf7),
            "utf-8" => Some(Self::Labeled(UTF_8)),
            "utf-16" | "utf-16le" => Some(Self::Labeled(UTF_16LE)),
            "utf-16be" => Some(Self::Labeled(UTF_16BE)),
            "utf-32" | "utf-32le" => Some(Self::Utf32),
            _ => None,
        }
    }
}
