//! Minimal reader for Java-style `.properties` files such as `gradle.properties`

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse `key=value` lines.
///
/// Key is the trimmed text before the first `=`, value the trimmed text after it.
/// Lines without `=`, with an empty key, or starting with `#` or `!` are skipped.
/// A later key replaces an earlier one.
pub fn parse(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with('#') && !line.starts_with('!')
        })
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Read and parse a properties file
pub fn read<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_pairs() {
        let props = parse("version=1.0.0-SNAPSHOT\ngroup = com.example \n");
        assert_eq!(props.get("version").map(String::as_str), Some("1.0.0-SNAPSHOT"));
        assert_eq!(props.get("group").map(String::as_str), Some("com.example"));
    }

    #[test]
    fn test_parse_skips_comments_and_garbage() {
        let props = parse("# version=0.0.1\n! also a comment\nno separator\n=orphan\nversion=2.0\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("version").map(String::as_str), Some("2.0"));
    }

    #[test]
    fn test_parse_value_keeps_later_equals() {
        let props = parse("org.gradle.jvmargs=-Xmx2g -Dfile.encoding=UTF-8");
        assert_eq!(
            props.get("org.gradle.jvmargs").map(String::as_str),
            Some("-Xmx2g -Dfile.encoding=UTF-8")
        );
    }

    #[test]
    fn test_parse_last_key_wins() {
        let props = parse("version=1\nversion=2");
        assert_eq!(props.get("version").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "version=3.1.4").unwrap();
        file.flush().unwrap();

        let props = read(file.path()).unwrap();
        assert_eq!(props.get("version").map(String::as_str), Some("3.1.4"));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read("/nonexistent/gradle.properties").is_err());
    }
}
