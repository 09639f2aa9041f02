//! Free-form version templates
//!
//! An alternative to the fixed-order pipeline: the caller supplies the whole layout
//! and `{{ .Field }}` actions are replaced with metadata values, e.g.
//! `"{{.Origin}}+{{.GitBranch}}.{{.GitSha}}"`.

use crate::error::{MkverError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Values available to a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub origin: String,
    pub git_branch: String,
    pub git_sha: String,
}

impl Metadata {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Origin" => Some(&self.origin),
            "GitBranch" => Some(&self.git_branch),
            "GitSha" => Some(&self.git_sha),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Field(&'a str),
}

fn action_regex() -> &'static Regex {
    static ACTION: OnceLock<Regex> = OnceLock::new();
    ACTION.get_or_init(|| {
        Regex::new(r"^\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*$").expect("action pattern is valid")
    })
}

fn parse(template: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            tokens.push(Token::Text(&rest[..open]));
        }

        let after_open = &rest[open + 2..];
        let close = after_open.find("}}").ok_or_else(|| {
            MkverError::template(format!("unclosed action at offset {}", offset + open))
        })?;

        let action = &after_open[..close];
        let name = action_regex()
            .captures(action)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| {
                MkverError::template(format!(
                    "invalid action '{{{{{}}}}}' at offset {}",
                    action,
                    offset + open
                ))
            })?
            .as_str();
        tokens.push(Token::Field(name));

        let consumed = open + 2 + close + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }

    Ok(tokens)
}

/// Render `template` with values from `metadata`.
///
/// # Returns
/// * `Ok(String)` - Rendered text
/// * `Err(MkverError::Template)` - If the template cannot be parsed or references a
///   field other than `Origin`, `GitBranch` or `GitSha`
pub fn format(metadata: &Metadata, template: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len());

    for token in parse(template)? {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Field(name) => {
                let value = metadata.field(name).ok_or_else(|| {
                    MkverError::template(format!("undefined field '{}'", name))
                })?;
                out.push_str(value);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> Metadata {
        Metadata {
            origin: "1.0.0".to_string(),
            git_branch: "develop".to_string(),
            git_sha: "1a2b3c".to_string(),
        }
    }

    #[test]
    fn test_origin_only() {
        let md = Metadata {
            origin: "1.0.0".to_string(),
            ..Metadata::default()
        };
        assert_eq!(format(&md, "{{.Origin}}").unwrap(), "1.0.0");
    }

    #[test]
    fn test_all_fields_with_literal_text() {
        assert_eq!(
            format(&metadata(), "v{{.Origin}}-{{ .GitBranch }}+{{.GitSha}}").unwrap(),
            "v1.0.0-develop+1a2b3c"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(format(&metadata(), "static }} text").unwrap(), "static }} text");
        assert_eq!(format(&metadata(), "").unwrap(), "");
    }

    #[test]
    fn test_repeated_field() {
        assert_eq!(
            format(&metadata(), "{{.GitSha}}{{.GitSha}}").unwrap(),
            "1a2b3c1a2b3c"
        );
    }

    #[test]
    fn test_unclosed_action_fails() {
        let err = format(&metadata(), "{{.Origin").unwrap_err();
        assert!(matches!(err, MkverError::Template(_)));
        assert!(err.to_string().contains("unclosed action"));
    }

    #[test]
    fn test_undefined_field_fails() {
        let err = format(&metadata(), "{{.Version}}").unwrap_err();
        assert!(err.to_string().contains("undefined field 'Version'"));
    }

    #[test]
    fn test_malformed_action_fails() {
        for template in ["{{}}", "{{Origin}}", "{{.Origin | lower}}", "{{.Git.Sha}}"] {
            assert!(
                matches!(format(&metadata(), template), Err(MkverError::Template(_))),
                "template {:?} should fail",
                template
            );
        }
    }
}
