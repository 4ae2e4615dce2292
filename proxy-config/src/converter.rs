//! Content-converter specifications

use thiserror::Error;

/// One enabled content converter: an external program and its argument
/// template. Placeholders in the arguments are expanded by the converter
/// runner at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterSpec {
    pub program: String,
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConverterError {
    #[error("converter specification is empty")]
    Empty,
}

impl ConverterSpec {
    /// Parse one `[Converters]` line.
    pub fn parse(line: &str) -> Result<Self, ConverterError> {
        let mut parts = line.split_whitespace();
        let program = parts.next().ok_or(ConverterError::Empty)?.to_string();
        Ok(Self {
            program,
            arguments: parts.map(str::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_and_argument_template() {
        let spec = ConverterSpec::parse("magick %SRC% -quality 90 png:%DEST%").unwrap();
        assert_eq!(spec.program, "magick");
        assert_eq!(spec.arguments, ["%SRC%", "-quality", "90", "png:%DEST%"]);
    }

    #[test]
    fn bare_program_is_enough() {
        let spec = ConverterSpec::parse("pdftohtml").unwrap();
        assert_eq!(spec.program, "pdftohtml");
        assert!(spec.arguments.is_empty());
    }

    #[test]
    fn blank_line_is_rejected() {
        assert_eq!(ConverterSpec::parse("   "), Err(ConverterError::Empty));
    }
}
