//! ENML to Markdown conversion.
//!
//! This is not a parser. The body goes through a fixed, ordered list of
//! pattern substitutions ([`RULE_TABLE`]), then entity decoding, newline
//! collapsing and trimming. Malformed or nested markup produces imperfect
//! output, never a panic.

use crate::error::{ConvertError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// `(name, pattern, replacement)`, applied top to bottom.
pub const RULE_TABLE: &[(&str, &str, &str)] = &[
    ("xml-prolog", r"<\?xml[^>]+\?>", ""),
    ("doctype", r"<!DOCTYPE[^>]+>", ""),
    ("en-note-open", r"<en-note[^>]*>", ""),
    ("en-note-close", r"</en-note>", ""),
    ("h1", r"<h1[^>]*>(.*?)</h1>", "# ${1}"),
    ("h2", r"<h2[^>]*>(.*?)</h2>", "## ${1}"),
    ("h3", r"<h3[^>]*>(.*?)</h3>", "### ${1}"),
    ("b", r"<b[^>]*>(.*?)</b>", "**${1}**"),
    ("strong", r"<strong[^>]*>(.*?)</strong>", "**${1}**"),
    ("i", r"<i[^>]*>(.*?)</i>", "*${1}*"),
    ("em", r"<em[^>]*>(.*?)</em>", "*${1}*"),
    ("link", r#"<a[^>]*href="([^"]+)"[^>]*>(.*?)</a>"#, "[${2}](${1})"),
    ("ul-open", r"<ul[^>]*>", "\n"),
    ("ul-close", r"</ul>", "\n"),
    ("li", r"<li[^>]*>(.*?)</li>", "- ${1}"),
    ("br", r"<br[^>]*>", "\n"),
    ("div-open", r"<div[^>]*>", "\n"),
    ("div-close", r"</div>", ""),
    ("p-open", r"<p[^>]*>", "\n"),
    ("p-close", r"</p>", "\n"),
    ("strip-tags", r"<[^>]+>", ""),
];

/// Decoded in this order. `&amp;` must stay last: `&amp;lt;` is the text `&lt;`.
pub const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&nbsp;", " "),
    ("&amp;", "&"),
];

static EXTRA_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

static STANDARD_RULES: Lazy<std::result::Result<RuleSet, regex::Error>> =
    Lazy::new(|| RuleSet::from_table(RULE_TABLE));

/// A single substitution step.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement)
            .into_owned()
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn from_table(
        table: &[(&'static str, &str, &'static str)],
    ) -> std::result::Result<Self, regex::Error> {
        let rules = table
            .iter()
            .map(|&(name, pattern, replacement)| Rule::new(name, pattern, replacement))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The built-in ENML rules.
    pub fn standard() -> Result<&'static RuleSet> {
        STANDARD_RULES
            .as_ref()
            .map_err(|e| ConvertError::Markup(e.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, rule| rule.apply(&text))
    }
}

pub fn decode_entities(input: &str) -> String {
    ENTITIES
        .iter()
        .fold(input.to_string(), |text, (entity, ch)| text.replace(entity, ch))
}

pub fn collapse_newlines(input: &str) -> String {
    EXTRA_NEWLINES.replace_all(input, "\n\n").into_owned()
}

/// Converts an ENML body to Markdown with the built-in rules.
///
/// Errors only when the rule set itself is unusable; callers fall back to the
/// raw body in that case.
pub fn to_markdown(enml: &str) -> Result<String> {
    if enml.is_empty() {
        return Ok(String::new());
    }
    let rules = RuleSet::standard()?;
    Ok(to_markdown_with(rules, enml))
}

/// Converts an ENML body to Markdown with an explicit rule set.
pub fn to_markdown_with(rules: &RuleSet, enml: &str) -> String {
    if enml.is_empty() {
        return String::new();
    }
    finish(&rules.apply(enml))
}

fn finish(text: &str) -> String {
    collapse_newlines(&decode_entities(text)).trim().to_string()
}
