use std::fmt;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use super::InMemoryStore;
use crate::error::{DatasetDecodeError, DatasetParseError, FollowGraphError};
use crate::graph::UserSummary;

/// On-disk encoding of a network snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Toml,
}

impl DatasetFormat {
    /// `.json` files are JSON, everything else is read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DatasetFormat::Json,
            _ => DatasetFormat::Toml,
        }
    }

    fn name(self) -> &'static str {
        match self {
            DatasetFormat::Json => "JSON",
            DatasetFormat::Toml => "TOML",
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A snapshot of users and who follows whom
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<UserSummary>,
    #[serde(default)]
    pub follows: Vec<FollowRecord>,
}

/// `follower` follows `following`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FollowRecord {
    pub follower: String,
    pub following: String,
}

impl Dataset {
    pub fn parse_file(path: &Path) -> Result<Self, FollowGraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FollowGraphError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(
            &content,
            &path.display().to_string(),
            DatasetFormat::from_path(path),
        )
    }

    pub fn parse_str(
        content: &str,
        name: &str,
        format: DatasetFormat,
    ) -> Result<Self, FollowGraphError> {
        let parsed: Result<Self, (Option<SourceSpan>, DatasetDecodeError)> = match format {
            DatasetFormat::Json => serde_json::from_str(content).map_err(|e| {
                let span = line_column_offset(content, e.line(), e.column())
                    .map(|offset| SourceSpan::new(offset.into(), 1));
                (span, e.into())
            }),
            DatasetFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                (span, e.into())
            }),
        };

        parsed.map_err(|(span, source)| {
            FollowGraphError::DatasetParseError(Box::new(DatasetParseError {
                file: name.to_string(),
                format: format.name(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source,
            }))
        })
    }

    /// Index the snapshot, validating that every follow names known users
    pub fn into_store(self) -> Result<InMemoryStore, FollowGraphError> {
        let mut store = InMemoryStore::new();

        for user in self.users {
            store.add_user(user)?;
        }

        for record in &self.follows {
            store.add_follow(&record.follower, &record.following)?;
        }

        Ok(store)
    }
}

// serde_json reports 1-based line and column; 0 means unknown
fn line_column_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    let offset = line_start + column.saturating_sub(1);
    (offset < content.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use miette::{GraphicalReportHandler, GraphicalTheme};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::UserRelationshipStore;

    const JSON_DATASET: &str = r#"{
  "users": [
    { "id": "a", "username": "alice", "icon": "https://img/a.png" },
    { "id": "b", "username": "bob" }
  ],
  "follows": [
    { "follower": "a", "following": "b" },
    { "follower": "b", "following": "a" }
  ]
}"#;

    const TOML_DATASET: &str = r#"
[[users]]
id = "a"
username = "alice"

[[users]]
id = "b"
username = "bob"
icon = "https://img/b.png"

[[follows]]
follower = "b"
following = "a"
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DatasetFormat::from_path(&PathBuf::from("net.JSON")),
            DatasetFormat::Json
        );
        assert_eq!(
            DatasetFormat::from_path(&PathBuf::from("net.toml")),
            DatasetFormat::Toml
        );
        assert_eq!(
            DatasetFormat::from_path(&PathBuf::from("network")),
            DatasetFormat::Toml
        );
    }

    #[test]
    fn test_parse_json() {
        let dataset = Dataset::parse_str(JSON_DATASET, "net.json", DatasetFormat::Json).unwrap();

        assert_eq!(dataset.users.len(), 2);
        assert_eq!(dataset.users[0].icon.as_deref(), Some("https://img/a.png"));
        assert_eq!(dataset.users[1].icon, None);
        assert_eq!(
            dataset.follows[0],
            FollowRecord {
                follower: "a".to_string(),
                following: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_toml_into_store() {
        let store = Dataset::parse_str(TOML_DATASET, "net.toml", DatasetFormat::Toml)
            .unwrap()
            .into_store()
            .unwrap();

        assert_eq!(store.user_count(), 2);
        let followers = store.followers("a").unwrap();
        assert_eq!(followers.len(), 1);
        assert_eq!(followers[0].icon.as_deref(), Some("https://img/b.png"));
    }

    #[test]
    fn test_empty_document_is_empty_dataset() {
        let dataset = Dataset::parse_str("{}", "empty.json", DatasetFormat::Json).unwrap();
        assert!(dataset.users.is_empty());
        assert!(dataset.follows.is_empty());
    }

    #[test]
    fn test_json_syntax_error_has_span() {
        let content = "{\n  \"users\": [ , ]\n}";
        let err = Dataset::parse_str(content, "broken.json", DatasetFormat::Json).unwrap_err();

        match err {
            FollowGraphError::DatasetParseError(parse) => {
                assert_eq!(parse.format, "JSON");
                assert_eq!(parse.file, "broken.json");
                assert!(parse.span.is_some());
            }
            other => panic!("Expected DatasetParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_syntax_error() {
        let err = Dataset::parse_str("[[users]\nid =", "broken.toml", DatasetFormat::Toml)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid TOML dataset 'broken.toml'");
    }

    #[test]
    fn test_parse_error_reason_is_rendered() {
        let err = Dataset::parse_str(
            r#"{ "users": [ { "id": "a" } ] }"#,
            "net.json",
            DatasetFormat::Json,
        )
        .unwrap_err();

        let mut rendered = String::new();
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .with_width(200)
            .render_report(&mut rendered, &err)
            .unwrap();

        assert!(rendered.contains("Invalid JSON dataset 'net.json'"), "{rendered}");
        assert!(rendered.contains("missing field `username`"), "{rendered}");
    }

    #[test]
    fn test_toml_missing_field_keeps_reason() {
        let err = Dataset::parse_str("[[users]]\nid = \"a\"\n", "net.toml", DatasetFormat::Toml)
            .unwrap_err();

        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert!(cause.contains("missing field `username`"), "{cause}");
    }

    #[test]
    fn test_unknown_follow_target_is_rejected() {
        let dataset = Dataset {
            users: vec![UserSummary::new("a", "alice")],
            follows: vec![FollowRecord {
                follower: "a".to_string(),
                following: "ghost".to_string(),
            }],
        };

        assert!(matches!(
            dataset.into_store(),
            Err(FollowGraphError::InvalidDataset { .. })
        ));
    }

    #[test]
    fn test_line_column_offset() {
        let content = "ab\ncd\nef";
        assert_eq!(line_column_offset(content, 1, 1), Some(0));
        assert_eq!(line_column_offset(content, 2, 2), Some(4));
        assert_eq!(line_column_offset(content, 3, 1), Some(6));
        assert_eq!(line_column_offset(content, 0, 0), None);
        assert_eq!(line_column_offset(content, 3, 9), None);
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::parse_file(&PathBuf::from("/nonexistent/net.json")).unwrap_err();
        assert!(matches!(err, FollowGraphError::FileReadError { .. }));
    }
}
