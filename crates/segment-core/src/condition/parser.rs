//! Condition line parser
//!
//! Two parsing modes share the [`Condition`] result type and are picked by the caller:
//!
//! - [`ParseMode::Tolerant`] splits the line on whitespace. Field, operator and value
//!   must be separated by spaces (`price > 50`); the operator token is checked after
//!   splitting. This is the mode behind editor validation.
//! - [`ParseMode::Strict`] matches `<identifier> <operator> <rest>` with optional
//!   spaces, so `price>=50` is accepted, and skips `#` / `//` comment lines. This is
//!   the mode used when a segment is executed.
//!
//! The modes accept different inputs: `category=Jackets` parses strictly but not
//! tolerantly.

use super::types::{Condition, LineTokens};
use crate::operator::Operator;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Line pattern for strict parsing: identifier, operator, rest of line
pub const STRICT_PATTERN: &str = r"^([A-Za-z0-9_]+)\s*(>=|<=|!=|=|>|<)\s*(.+)$";

static STRICT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRICT_PATTERN).expect("valid regex"));

/// Message for a line without `field operator value` structure
pub const INVALID_FORMAT: &str = "Invalid format. Expected: field operator value";

/// Parse error
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub condition: String,
}

impl ParseError {
    fn new(message: impl Into<String>, condition: &str) -> Self {
        Self {
            message: message.into(),
            condition: condition.to_string(),
        }
    }
}

/// Parsing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Whitespace-split tokens, used for interactive validation
    #[default]
    Tolerant,
    /// Anchored pattern with optional spaces around the operator, used for execution
    Strict,
}

/// Condition parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionParser {
    mode: ParseMode,
}

impl ConditionParser {
    /// Create a parser for the given mode
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parser used by the editor pre-flight
    pub fn tolerant() -> Self {
        Self::new(ParseMode::Tolerant)
    }

    /// Parser used by segment execution
    pub fn strict() -> Self {
        Self::new(ParseMode::Strict)
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Split a line into whitespace tokens.
    ///
    /// Returns `Ok(None)` for a blank line and an error when fewer than three
    /// tokens are present.
    pub fn tokenize(line: &str) -> Result<Option<LineTokens>, ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(ParseError::new(INVALID_FORMAT, trimmed));
        }

        Ok(Some(LineTokens {
            field: parts[0].to_lowercase(),
            operator: parts[1].to_string(),
            value: parts[2..].join(" "),
        }))
    }

    /// Parse one line.
    ///
    /// `Ok(None)` means the line holds no condition (blank, or a comment in strict mode).
    pub fn parse_line(&self, line: &str) -> Result<Option<Condition>, ParseError> {
        match self.mode {
            ParseMode::Tolerant => self.parse_tolerant(line),
            ParseMode::Strict => self.parse_strict(line),
        }
    }

    /// Parse every line of a text blob, stopping at the first malformed line
    pub fn parse_text(&self, text: &str) -> Result<Vec<Condition>, ParseError> {
        let mut conditions = Vec::new();
        for line in text.split('\n') {
            if let Some(condition) = self.parse_line(line)? {
                conditions.push(condition);
            }
        }
        log::debug!("Parsed {} conditions ({:?} mode)", conditions.len(), self.mode);
        Ok(conditions)
    }

    fn parse_tolerant(&self, line: &str) -> Result<Option<Condition>, ParseError> {
        let Some(tokens) = Self::tokenize(line)? else {
            return Ok(None);
        };

        let operator: Operator = tokens.operator.parse().map_err(|_| {
            ParseError::new(
                format!(
                    "Invalid operator '{}'. Valid operators: {}",
                    tokens.operator,
                    Operator::symbol_list()
                ),
                line.trim(),
            )
        })?;

        Ok(Some(Condition::new(tokens.field, operator, tokens.value)))
    }

    fn parse_strict(&self, line: &str) -> Result<Option<Condition>, ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            return Ok(None);
        }

        let captures = STRICT_RE.captures(trimmed).ok_or_else(|| {
            ParseError::new(format!("Invalid condition format: \"{}\"", trimmed), trimmed)
        })?;

        // The pattern only matches operators that exist
        let operator: Operator = captures[2]
            .parse()
            .map_err(|e: crate::CoreError| ParseError::new(e.to_string(), trimmed))?;

        Ok(Some(Condition::new(&captures[1], operator, &captures[3])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = ConditionParser::tokenize("  Price   >   50  ").unwrap().unwrap();
        assert_eq!(tokens.field, "price");
        assert_eq!(tokens.operator, ">");
        assert_eq!(tokens.value, "50");
    }

    #[test]
    fn test_tokenize_joins_multi_word_value() {
        let tokens = ConditionParser::tokenize("title = Cool   Winter Jacket").unwrap().unwrap();
        assert_eq!(tokens.value, "Cool Winter Jacket");
    }

    #[test]
    fn test_tokenize_blank_line() {
        assert_eq!(ConditionParser::tokenize("   \t ").unwrap(), None);
    }

    #[test]
    fn test_tokenize_too_few_tokens() {
        let err = ConditionParser::tokenize("price 50").unwrap_err();
        assert_eq!(err.message, INVALID_FORMAT);
        assert_eq!(err.condition, "price 50");
    }

    #[test]
    fn test_tolerant_rejects_glued_operator() {
        let parser = ConditionParser::tolerant();
        assert!(parser.parse_line("category=Accessories").is_err());
    }

    #[test]
    fn test_tolerant_rejects_unknown_operator() {
        let parser = ConditionParser::tolerant();
        let err = parser.parse_line("price == 50").unwrap_err();
        assert!(err.message.starts_with("Invalid operator '=='"));
    }

    #[test]
    fn test_tolerant_does_not_skip_comments() {
        let parser = ConditionParser::tolerant();
        let condition = parser.parse_line("# = note").unwrap().unwrap();
        assert_eq!(condition.field, "#");
    }

    #[test]
    fn test_strict_accepts_glued_operator() {
        let parser = ConditionParser::strict();
        let condition = parser.parse_line("price>=50").unwrap().unwrap();
        assert_eq!(condition, Condition::new("price", Operator::Ge, "50"));
    }

    #[test]
    fn test_strict_prefers_two_char_operators() {
        let parser = ConditionParser::strict();
        assert_eq!(parser.parse_line("price <= 10").unwrap().unwrap().operator, Operator::Le);
        assert_eq!(parser.parse_line("price != 10").unwrap().unwrap().operator, Operator::Ne);
        assert_eq!(parser.parse_line("price < 10").unwrap().unwrap().operator, Operator::Lt);
    }

    #[test]
    fn test_strict_lowercases_field_and_trims_value() {
        let parser = ConditionParser::strict();
        let condition = parser.parse_line("  CATEGORY =   Jackets  ").unwrap().unwrap();
        assert_eq!(condition.field, "category");
        assert_eq!(condition.value, "Jackets");
    }

    #[test]
    fn test_strict_skips_comments_and_blanks() {
        let parser = ConditionParser::strict();
        assert_eq!(parser.parse_line("# only price matters").unwrap(), None);
        assert_eq!(parser.parse_line("// disabled: price > 5").unwrap(), None);
        assert_eq!(parser.parse_line("").unwrap(), None);
    }

    #[test]
    fn test_strict_rejects_missing_value() {
        let parser = ConditionParser::strict();
        let err = parser.parse_line("price >").unwrap_err();
        assert_eq!(err.to_string(), "Invalid condition format: \"price >\"");
    }

    #[test]
    fn test_strict_rejects_non_identifier_field() {
        let parser = ConditionParser::strict();
        assert!(parser.parse_line("stock-status = instock").is_err());
    }

    #[test]
    fn test_parse_text_stops_at_first_error() {
        let parser = ConditionParser::strict();
        let err = parser
            .parse_text("price > 5\nnonsense\nalso bad")
            .unwrap_err();
        assert_eq!(err.condition, "nonsense");
    }

    #[test]
    fn test_parse_text_collects_conditions() {
        let parser = ConditionParser::strict();
        let conditions = parser
            .parse_text("price > 50\n\n# note\nstock_status = instock\r\n")
            .unwrap();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[1].value, "instock");
    }
}
