//! Dotenv file parsing.
//!
//! Definitions files hold `KEY=value` lines that are layered under the
//! process environment before validation runs.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parses dotenv files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Lines without `=` are ignored.
///
/// # Example
///
/// ```
/// use groundwork::config::EnvFileParser;
///
/// let content = r#"
/// # Database config
/// export DATABASE_URL=postgres://localhost/db
/// APP_NAME="My App"
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("DATABASE_URL"), Some(&"postgres://localhost/db".to_string()));
/// assert_eq!(vars.get("APP_NAME"), Some(&"My App".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse dotenv content into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), Self::unquote(value.trim()).to_string()))
    }

    fn unquote(value: &str) -> &str {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

    /// Load and parse a dotenv file.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Load a dotenv file, returning `None` if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<Option<HashMap<String, String>>> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_lines() {
        let vars = EnvFileParser::parse("KEY1=value1\nKEY2=value2\n");

        assert_eq!(vars.get("KEY1"), Some(&"value1".to_string()));
        assert_eq!(vars.get("KEY2"), Some(&"value2".to_string()));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = r#"
# comment

KEY=value
"#;
        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn strips_export_prefix() {
        let vars = EnvFileParser::parse("export SECRET_KEY=abc");
        assert_eq!(vars.get("SECRET_KEY"), Some(&"abc".to_string()));
    }

    #[test]
    fn handles_quoted_values() {
        let content = "DOUBLE=\"double quoted\"\nSINGLE='single quoted'";
        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.get("DOUBLE"), Some(&"double quoted".to_string()));
        assert_eq!(vars.get("SINGLE"), Some(&"single quoted".to_string()));
    }

    #[test]
    fn lone_quote_is_kept() {
        let vars = EnvFileParser::parse("Q=\"");
        assert_eq!(vars.get("Q"), Some(&"\"".to_string()));
    }

    #[test]
    fn keeps_equals_inside_values() {
        let vars = EnvFileParser::parse("URL=https://example.com?foo=bar");
        assert_eq!(
            vars.get("URL"),
            Some(&"https://example.com?foo=bar".to_string())
        );
    }

    #[test]
    fn ignores_lines_without_equals_or_key() {
        let vars = EnvFileParser::parse("garbage\n=value\nOK=1");
        assert_eq!(vars.len(), 1);
        assert!(vars.contains_key("OK"));
    }

    #[test]
    fn load_optional_returns_none_for_missing_file() {
        let result = EnvFileParser::load_optional(Path::new("/nonexistent/path/.env")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "APP_NAME=demo\n").unwrap();

        let vars = EnvFileParser::load_optional(&path).unwrap().unwrap();
        assert_eq!(vars.get("APP_NAME"), Some(&"demo".to_string()));
    }
}
