//! Minimal INI decoder
//!
//! Sections become objects whose values are all strings; no type
//! inference is applied. `key = value` and `key : value` pairs are
//! accepted, `;` and `#` start comment lines.

use crate::value::Value;
use anyhow::{Result, bail};

/// Decode an INI document into a mapping of section objects.
///
/// # Errors
///
/// Returns an error if:
/// - A line is neither a section header, a key/value pair, a comment,
///   nor blank
/// - A key/value pair appears before the first section header
pub fn decode(text: &str) -> Result<Value> {
    let mut sections: Vec<(String, Vec<(String, Value)>)> = Vec::new();

    for (line_index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            sections.push((name.trim().to_owned(), Vec::new()));
            continue;
        }

        let Some((key, value)) = split_pair(line) else {
            bail!("invalid INI syntax at line {}: '{raw}'", line_index + 1);
        };
        let Some((_, entries)) = sections.last_mut() else {
            bail!(
                "INI key '{key}' at line {} appears before any section header",
                line_index + 1
            );
        };
        entries.push((key.to_owned(), Value::String(value.to_owned())));
    }

    Ok(Value::Mapping(
        sections
            .into_iter()
            .map(|(name, entries)| (name, Value::Mapping(entries)))
            .collect(),
    ))
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let separator = line.find(['=', ':'])?;
    let (key, rest) = line.split_at(separator);
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, rest[1..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_become_string_objects() {
        let text = "\
[server]\n\
host = localhost\n\
port = 8080\n\
\n\
; comment line\n\
[logging]\n\
level: debug\n\
";
        let value = decode(text).unwrap();
        let server = value.get("server").expect("server section");
        // No type inference: everything stays a string.
        assert_eq!(
            server.get("port"),
            Some(&Value::String("8080".to_owned()))
        );
        let logging = value.get("logging").expect("logging section");
        assert_eq!(
            logging.get("level"),
            Some(&Value::String("debug".to_owned()))
        );
    }

    #[test]
    fn test_empty_document_is_an_empty_mapping() {
        assert_eq!(decode("").unwrap(), Value::Mapping(vec![]));
        assert_eq!(decode("# only comments\n").unwrap(), Value::Mapping(vec![]));
    }

    #[test]
    fn test_key_before_section_is_rejected() {
        let err = decode("orphan = 1\n").unwrap_err();
        assert!(err.to_string().contains("before any section header"));
    }

    #[test]
    fn test_malformed_line_is_rejected() {
        let err = decode("[section]\nnot a pair\n").unwrap_err();
        assert!(err.to_string().contains("invalid INI syntax at line 2"));
    }

    #[test]
    fn test_values_may_contain_separators() {
        let value = decode("[urls]\nbase = http://example.com:8080/path\n").unwrap();
        let urls = value.get("urls").expect("urls section");
        assert_eq!(
            urls.get("base"),
            Some(&Value::String("http://example.com:8080/path".to_owned()))
        );
    }
}
