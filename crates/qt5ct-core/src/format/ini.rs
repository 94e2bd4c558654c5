//! INI reader and writer compatible with the files QSettings produces.
//!
//! Format:
//! ```text
//! ; comment
//! [ColorScheme]
//! active_colors=#ff000000, #ffefefef, ...
//! name="quoted, so the comma stays literal"
//! ```
//!
//! - Lines starting with `;` or `#` are comments; blank lines are ignored.
//! - Keys before the first `[Section]` header belong to the `General` section.
//! - A value containing an unquoted `,` is a *list*; each element is trimmed.
//! - Double quotes group text and preserve surrounding whitespace.
//! - Backslash escapes: `\\`, `\"`, `\n`, `\t`, `\r`, and `\xHH` (any number
//!   of hex digits) for other control characters.  Any other escaped
//!   character stands for itself.
//! - `@Invalid()` is an empty list (QSettings writes an empty `QStringList`
//!   that way) and a leading `@@` stands for a literal `@`.
//!
//! [`IniDocument::parse`] rejects the first malformed line.
//! [`IniDocument::parse_lenient`] behaves like QSettings instead: a line
//! without `=` is skipped, a header missing its `]` still opens a section,
//! and an unclosed quote runs to the end of the line.
//!
//! Sections and keys keep their file order so a document can be written back
//! without reshuffling a user's file.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Section that holds keys appearing before any header.
pub const GENERAL_SECTION: &str = "General";

/// Value QSettings writes for an empty list.
pub const EMPTY_LIST_VALUE: &str = "@Invalid()";

/// Errors that can occur while parsing an INI document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IniError {
    /// A `[` header was not closed on the same line.
    #[error("line {line}: unterminated section header")]
    UnterminatedSection { line: usize },

    /// A non-comment line has no `=` separator.
    #[error("line {line}: expected `key=value`")]
    MissingSeparator { line: usize },

    /// A `key=` line has an empty key.
    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    /// A double-quoted value was not closed.
    #[error("line {line}: unterminated quoted value")]
    UnterminatedQuote { line: usize },
}

/// A parsed value: either a single string or a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IniValue {
    Single(String),
    List(Vec<String>),
}

impl IniValue {
    /// Views the value as a list; a single value becomes a one-element list.
    pub fn to_string_list(&self) -> Vec<String> {
        match self {
            IniValue::Single(s) => vec![s.clone()],
            IniValue::List(items) => items.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, IniValue)>,
}

/// An ordered collection of sections and their key/value entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses INI text.
    ///
    /// # Errors
    ///
    /// Returns [`IniError`] with the 1-based line number of the first
    /// malformed line.
    pub fn parse(text: &str) -> Result<Self, IniError> {
        Self::parse_with(text, Err)
    }

    /// Parses INI text the way QSettings does, keeping every well-formed
    /// entry and skipping the rest.
    pub fn parse_lenient(text: &str) -> Self {
        let parsed = Self::parse_with(text, |e| {
            debug!("{e}; line skipped");
            Ok(())
        });
        // The handler above never returns an error.
        parsed.unwrap_or_default()
    }

    /// Shared parser.  `on_error` decides whether a malformed line aborts
    /// the parse (`Err`) or is recovered from (`Ok`).
    fn parse_with<F>(text: &str, mut on_error: F) -> Result<Self, IniError>
    where
        F: FnMut(IniError) -> Result<(), IniError>,
    {
        let mut doc = IniDocument::new();
        let mut current = GENERAL_SECTION.to_string();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = match rest.strip_suffix(']') {
                    Some(name) => name,
                    None => {
                        on_error(IniError::UnterminatedSection { line: line_no })?;
                        rest
                    }
                };
                current = name.trim().to_string();
                doc.section_mut(&current);
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                on_error(IniError::MissingSeparator { line: line_no })?;
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                on_error(IniError::EmptyKey { line: line_no })?;
                continue;
            }
            let (value, closed) = parse_value(value);
            if !closed {
                on_error(IniError::UnterminatedQuote { line: line_no })?;
            }
            doc.set(&current, key, value);
        }

        Ok(doc)
    }

    /// Returns the value stored under `section` / `key`.
    pub fn get(&self, section: &str, key: &str) -> Option<&IniValue> {
        self.section(section)?
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Reads a value as a string list; a missing key yields an empty list.
    pub fn string_list(&self, section: &str, key: &str) -> Vec<String> {
        self.get(section, key)
            .map(IniValue::to_string_list)
            .unwrap_or_default()
    }

    /// Reads a single (non-list) value.
    pub fn string(&self, section: &str, key: &str) -> Option<&str> {
        match self.get(section, key)? {
            IniValue::Single(s) => Some(s),
            IniValue::List(_) => None,
        }
    }

    /// Reads a boolean written as `true`/`false` or `1`/`0`.
    pub fn bool(&self, section: &str, key: &str) -> Option<bool> {
        match self.string(section, key)?.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// Inserts or replaces a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: IniValue) {
        let entries = &mut self.section_mut(section).entries;
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => entries.push((key.to_string(), value)),
        }
    }

    /// Names of all sections in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        let pos = match self.sections.iter().position(|s| s.name == name) {
            Some(pos) => pos,
            None => {
                self.sections.push(Section {
                    name: name.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        &mut self.sections[pos]
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for section in &self.sections {
            if !first {
                writeln!(f)?;
            }
            first = false;
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                match value {
                    IniValue::Single(s) => writeln!(f, "{key}={}", escape(s))?,
                    IniValue::List(items) if items.is_empty() => {
                        writeln!(f, "{key}={EMPTY_LIST_VALUE}")?
                    }
                    IniValue::List(items) => {
                        let joined: Vec<String> = items.iter().map(|s| escape(s)).collect();
                        writeln!(f, "{key}={}", joined.join(", "))?;
                    }
                }
            }
        }
        Ok(())
    }
}

// ── Value parsing ─────────────────────────────────────────────────────────────

/// Splits a raw value on unquoted commas, resolving quotes and escapes.
///
/// The flag is `false` when a double quote was left open; the value then
/// runs to the end of the line.
fn parse_value(raw: &str) -> (IniValue, bool) {
    if raw.trim() == EMPTY_LIST_VALUE {
        return (IniValue::List(Vec::new()), true);
    }

    let mut items = Vec::new();
    let mut current = String::new();
    // Length of `current` up to its last quoted or non-whitespace character,
    // so unquoted trailing whitespace can be dropped.
    let mut significant = 0;
    let mut in_quotes = false;
    let mut is_list = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                let escaped = match chars.next() {
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some('r') => '\r',
                    Some('x') => {
                        let mut code = None;
                        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
                            let base = code.unwrap_or(0u32).saturating_mul(16);
                            code = Some(base.saturating_add(digit));
                            chars.next();
                        }
                        match code {
                            Some(code) => char::from_u32(code).unwrap_or('\u{fffd}'),
                            None => 'x',
                        }
                    }
                    Some(other) => other,
                    None => break,
                };
                current.push(escaped);
                significant = current.len();
            }
            '"' => {
                in_quotes = !in_quotes;
                significant = current.len();
            }
            ',' if !in_quotes => {
                current.truncate(significant);
                items.push(unescape_at(std::mem::take(&mut current)));
                significant = 0;
                is_list = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                // Leading whitespace of an element is skipped outright.
                if !current.is_empty() {
                    current.push(c);
                }
            }
            c => {
                current.push(c);
                significant = current.len();
            }
        }
    }

    if !in_quotes {
        current.truncate(significant);
    }
    let current = unescape_at(current);

    let value = if is_list {
        items.push(current);
        IniValue::List(items)
    } else {
        IniValue::Single(current)
    };
    (value, !in_quotes)
}

/// `@@text` stands for `@text`.
fn unescape_at(s: String) -> String {
    match s.strip_prefix("@@") {
        Some(rest) => format!("@{rest}"),
        None => s,
    }
}

/// Escapes a string so [`parse_value`] reads it back unchanged.
fn escape(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s.starts_with(char::is_whitespace)
        || s.ends_with(char::is_whitespace)
        || s.contains([',', ';', '=']);

    let mut out = String::with_capacity(s.len() + 2);
    if needs_quotes {
        out.push('"');
    }
    if s.starts_with('@') {
        out.push('@');
    }
    // After a `\x` escape a literal hex digit would be read as part of the
    // code, so it is escaped too.
    let mut after_hex_escape = false;
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() || (after_hex_escape && c.is_ascii_hexdigit()) => {
                out.push_str(&format!("\\x{:x}", u32::from(c)));
                after_hex_escape = true;
                continue;
            }
            c => out.push(c),
        }
        after_hex_escape = false;
    }
    if needs_quotes {
        out.push('"');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_and_keys() {
        // Arrange
        let text = "[Appearance]\nstyle=Fusion\n\n[Interface]\ndouble_click_interval=400\n";

        // Act
        let doc = IniDocument::parse(text).expect("valid ini");

        // Assert
        assert_eq!(doc.string("Appearance", "style"), Some("Fusion"));
        assert_eq!(doc.string("Interface", "double_click_interval"), Some("400"));
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["Appearance", "Interface"]);
    }

    #[test]
    fn test_keys_before_header_go_to_general() {
        let doc = IniDocument::parse("version=2\n[Other]\n").expect("valid ini");
        assert_eq!(doc.string(GENERAL_SECTION, "version"), Some("2"));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let doc = IniDocument::parse("; note\n# other note\n\n[S]\nk=v\n").expect("valid ini");
        assert_eq!(doc.string("S", "k"), Some("v"));
    }

    #[test]
    fn test_value_may_start_with_hash() {
        let doc = IniDocument::parse("[S]\ncolor=#ff0000\n").expect("valid ini");
        assert_eq!(doc.string("S", "color"), Some("#ff0000"));
    }

    #[test]
    fn test_comma_makes_a_trimmed_list() {
        let doc = IniDocument::parse("[S]\nk= a ,b,  c  \n").expect("valid ini");
        assert_eq!(
            doc.get("S", "k"),
            Some(&IniValue::List(vec!["a".into(), "b".into(), "c".into()]))
        );
    }

    #[test]
    fn test_quoted_comma_is_literal() {
        let doc = IniDocument::parse("[S]\nk=\"a, b\"\n").expect("valid ini");
        assert_eq!(doc.string("S", "k"), Some("a, b"));
    }

    #[test]
    fn test_quotes_preserve_inner_whitespace() {
        let doc = IniDocument::parse("[S]\nk=\" padded \" , x\n").expect("valid ini");
        assert_eq!(doc.string_list("S", "k"), vec![" padded ".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_escapes_are_decoded() {
        let doc = IniDocument::parse(r#"[S]
k=line\nbreak \"q\" back\\slash
"#)
        .expect("valid ini");
        assert_eq!(doc.string("S", "k"), Some("line\nbreak \"q\" back\\slash"));
    }

    #[test]
    fn test_missing_key_gives_empty_list() {
        let doc = IniDocument::parse("[S]\n").expect("valid ini");
        assert!(doc.string_list("S", "absent").is_empty());
        assert!(doc.string_list("Absent", "absent").is_empty());
    }

    #[test]
    fn test_single_value_reads_as_one_element_list() {
        let doc = IniDocument::parse("[S]\nk=only\n").expect("valid ini");
        assert_eq!(doc.string_list("S", "k"), vec!["only".to_string()]);
    }

    #[test]
    fn test_bool_values() {
        let doc = IniDocument::parse("[S]\na=true\nb=0\nc=maybe\n").expect("valid ini");
        assert_eq!(doc.bool("S", "a"), Some(true));
        assert_eq!(doc.bool("S", "b"), Some(false));
        assert_eq!(doc.bool("S", "c"), None);
        assert_eq!(doc.bool("S", "d"), None);
    }

    #[test]
    fn test_later_duplicate_key_wins() {
        let doc = IniDocument::parse("[S]\nk=1\nk=2\n").expect("valid ini");
        assert_eq!(doc.string("S", "k"), Some("2"));
    }

    #[test]
    fn test_malformed_lines_report_line_number() {
        assert_eq!(
            IniDocument::parse("[S]\n[broken\n"),
            Err(IniError::UnterminatedSection { line: 2 })
        );
        assert_eq!(
            IniDocument::parse("[S]\nno separator\n"),
            Err(IniError::MissingSeparator { line: 2 })
        );
        assert_eq!(IniDocument::parse("=v\n"), Err(IniError::EmptyKey { line: 1 }));
        assert_eq!(
            IniDocument::parse("[S]\nk=\"open\n"),
            Err(IniError::UnterminatedQuote { line: 2 })
        );
    }

    #[test]
    fn test_lenient_parse_keeps_well_formed_entries() {
        // Arrange
        let text = "[S]\na=1\nstray line\n=orphan\nb=2\n[Open\nc=\"unclosed, still\n";

        // Act
        let doc = IniDocument::parse_lenient(text);

        // Assert
        assert_eq!(doc.string("S", "a"), Some("1"));
        assert_eq!(doc.string("S", "b"), Some("2"));
        // A header without `]` still names the section.
        assert_eq!(doc.string("Open", "c"), Some("unclosed, still"));
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["S", "Open"]);
    }

    #[test]
    fn test_invalid_marker_is_an_empty_list() {
        let doc = IniDocument::parse("[Interface]\nstylesheets=@Invalid()\n").expect("valid ini");

        assert_eq!(doc.get("Interface", "stylesheets"), Some(&IniValue::List(Vec::new())));
        assert!(doc.string_list("Interface", "stylesheets").is_empty());
    }

    #[test]
    fn test_empty_list_is_written_as_invalid_marker() {
        let mut doc = IniDocument::new();
        doc.set("Interface", "stylesheets", IniValue::List(Vec::new()));

        assert_eq!(doc.to_string(), "[Interface]\nstylesheets=@Invalid()\n");
    }

    #[test]
    fn test_double_at_is_a_literal_at() {
        let doc = IniDocument::parse("[S]\nk=@@Invalid()\nl=@@a, b\n").expect("valid ini");
        assert_eq!(doc.string("S", "k"), Some("@Invalid()"));
        assert_eq!(doc.string_list("S", "l"), vec!["@a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_control_characters_use_hex_escapes() {
        // Arrange
        let mut doc = IniDocument::new();
        doc.set("S", "k", IniValue::Single("a\u{1}b\u{7f}z".into()));

        // Act
        let text = doc.to_string();

        // Assert: the `b` after \x1 is a hex digit, so it is escaped as well.
        assert_eq!(text, "[S]\nk=a\\x1\\x62\\x7fz\n");
        assert_eq!(IniDocument::parse(&text).expect("valid ini"), doc);
    }

    #[test]
    fn test_written_document_parses_back() {
        // Arrange
        let mut doc = IniDocument::new();
        doc.set("S", "plain", IniValue::Single("Fusion".into()));
        doc.set("S", "tricky", IniValue::Single(" a, \"b\" ; c ".into()));
        doc.set("S", "at", IniValue::Single("@Invalid()".into()));
        doc.set(
            "T",
            "list",
            IniValue::List(vec!["#ff000000".into(), "x,y".into(), String::new()]),
        );

        // Act
        let reparsed = IniDocument::parse(&doc.to_string()).expect("own output must parse");

        // Assert
        assert_eq!(reparsed, doc);
    }
}
