//! Traffic-editing rule sets built from raw directive lines

use thiserror::Error;

/// One `Key=Value` instruction inside a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub value: String,
}

/// An ordered set of traffic-editing directives.
///
/// The parser only guarantees shape and order; interpreting the directives
/// against live traffic belongs to the rule-execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    directives: Vec<Directive>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    #[error("directive line is not in Key=Value form: {0:?}")]
    MalformedDirective(String),
}

impl Directive {
    fn parse(line: &str) -> Result<Self, RuleSetError> {
        match line.find('=') {
            Some(position) if position > 0 => Ok(Self {
                name: line[..position].to_string(),
                value: line[position + 1..].to_string(),
            }),
            _ => Err(RuleSetError::MalformedDirective(line.to_string())),
        }
    }
}

impl RuleSet {
    /// Build a rule set from raw directive lines, preserving their order.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, RuleSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let directives = lines
            .into_iter()
            .map(|line| Directive::parse(line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { directives })
    }

    /// The directives in evaluation order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// The first value recorded under a directive name, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.directives
            .iter()
            .find(|directive| directive.name == name)
            .map(|directive| directive.value.as_str())
    }
}
