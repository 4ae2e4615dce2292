//! Legacy per-item fix formats and their translation to rule directives

use crate::error::ParseWarning;

/// Items declared under one legacy section prefix, in declaration order.
#[derive(Debug, Default)]
pub(crate) struct LegacyRegistry {
    items: Vec<LegacyItem>,
}

#[derive(Debug)]
struct LegacyItem {
    id: String,
    options: Vec<(String, String)>,
}

impl LegacyRegistry {
    /// Declare an item; `false` when the id is already present.
    pub(crate) fn register(&mut self, id: &str) -> bool {
        if self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.items.push(LegacyItem {
            id: id.to_string(),
            options: Vec::new(),
        });
        true
    }

    /// Record one option for an item, declaring the item on first use.
    /// `false` when the option name is already set for that item.
    pub(crate) fn insert(&mut self, id: &str, name: &str, value: &str) -> bool {
        let position = match self.items.iter().position(|item| item.id == id) {
            Some(position) => position,
            None => {
                self.items.push(LegacyItem {
                    id: id.to_string(),
                    options: Vec::new(),
                });
                self.items.len() - 1
            }
        };
        let item = &mut self.items[position];
        if item.options.iter().any(|(existing, _)| existing == name) {
            return false;
        }
        item.options.push((name.to_string(), value.to_string()));
        true
    }

    /// Translate every item into a raw directive group, in declaration
    /// order. Options no rule recognizes are reported through `tolerated`.
    pub(crate) fn translate(
        &self,
        format: &LegacyFormat,
        tolerated: &mut Vec<ParseWarning>,
    ) -> Vec<Vec<String>> {
        self.items
            .iter()
            .map(|item| translate_item(item, format, tolerated))
            .collect()
    }
}

/// How one legacy option maps into the unified directive syntax.
#[derive(Debug, Clone, Copy)]
enum LegacyRule {
    /// Emit `<directive>=<value>`
    Directive(&'static str),
    /// Emit `AddInternalRedirect=<redirect>` when the option value is "yes"
    /// and a `redirect` option coexists on the same item
    InternalRedirect,
}

/// Per-format translation table: seed directives plus the keyword map.
/// Emission follows the rule order given here, not file order.
#[derive(Debug)]
pub(crate) struct LegacyFormat {
    pub(crate) name: &'static str,
    seed_key: &'static str,
    extra_seeds: &'static [&'static str],
    rules: &'static [(&'static str, LegacyRule)],
}

pub(crate) static FIXABLE_URL: LegacyFormat = LegacyFormat {
    name: "FixableURL",
    seed_key: "OnUrl",
    extra_seeds: &[],
    rules: &[
        ("validmask", LegacyRule::Directive("IgnoreUrl")),
        ("redirect", LegacyRule::Directive("AddRedirect")),
        ("internal", LegacyRule::InternalRedirect),
    ],
};

pub(crate) static FIXABLE_TYPE: LegacyFormat = LegacyFormat {
    name: "FixableType",
    seed_key: "OnContentType",
    extra_seeds: &["OnCode=2"],
    rules: &[
        ("ifurl", LegacyRule::Directive("OnUrl")),
        ("noturl", LegacyRule::Directive("IgnoreUrl")),
        ("redirect", LegacyRule::Directive("AddRedirect")),
    ],
};

pub(crate) static CONTENT_PATCH: LegacyFormat = LegacyFormat {
    name: "ContentPatch",
    seed_key: "AddFind",
    extra_seeds: &["OnCode=2"],
    rules: &[
        ("replace", LegacyRule::Directive("AddReplace")),
        ("ifurl", LegacyRule::Directive("OnUrl")),
        ("iftype", LegacyRule::Directive("OnContentType")),
    ],
};

fn find_option<'a>(item: &'a LegacyItem, keyword: &str) -> Option<&'a str> {
    item.options
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(keyword))
        .map(|(_, value)| value.as_str())
}

fn translate_item(
    item: &LegacyItem,
    format: &LegacyFormat,
    tolerated: &mut Vec<ParseWarning>,
) -> Vec<String> {
    let mut lines = vec![format!("{}={}", format.seed_key, item.id)];
    lines.extend(format.extra_seeds.iter().map(|seed| seed.to_string()));
    for (keyword, rule) in format.rules {
        let Some(value) = find_option(item, keyword) else {
            continue;
        };
        match rule {
            LegacyRule::Directive(directive) => lines.push(format!("{directive}={value}")),
            LegacyRule::InternalRedirect => {
                if value.eq_ignore_ascii_case("yes") {
                    if let Some(redirect) = find_option(item, "redirect") {
                        lines.push(format!("AddInternalRedirect={redirect}"));
                    }
                }
            }
        }
    }
    for (name, _) in &item.options {
        let recognized = format
            .rules
            .iter()
            .any(|(keyword, _)| name.eq_ignore_ascii_case(keyword));
        if !recognized {
            tolerated.push(ParseWarning::UnknownLegacyOption {
                format: format.name,
                option: name.clone(),
            });
        }
    }
    lines
}
