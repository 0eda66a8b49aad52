// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Founder dashboard session records
//!
//! Sessions arrive in the same shape the dashboard payload uses: snake_case
//! keys, a `session_at` timestamp and tags nested under `taggings`. Fields the
//! back office does not interpret are carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tagging {
    pub tag: Tag,
}

/// A scheduled session shown on the founder dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub title: String,
    pub session_at: DateTime<Utc>,
    #[serde(default)]
    pub taggings: Vec<Tagging>,
    /// Remaining payload fields, passed through as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Session {
    pub fn new(id: i64, title: impl Into<String>, session_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            session_at,
            taggings: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.taggings.push(Tagging {
            tag: Tag { name: name.into() },
        });
        self
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.taggings.iter().map(|tagging| tagging.tag.name.as_str())
    }

    /// True when every one of `tags` is attached to this session
    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .all(|wanted| self.tag_names().any(|name| name == wanted.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_has_all_tags_requires_every_tag() {
        let session = Session::new(1, "Pitch clinic", at(10))
            .with_tag("pitching")
            .with_tag("mentors");

        assert!(session.has_all_tags(&["pitching"]));
        assert!(session.has_all_tags(&["mentors", "pitching"]));
        assert!(!session.has_all_tags(&["pitching", "legal"]));
        assert!(session.has_all_tags::<&str>(&[]));
    }

    #[test]
    fn test_unknown_payload_fields_are_preserved() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Office hours",
            "session_at": "2026-03-01T10:00:00Z",
            "taggings": [{ "tag": { "name": "mentors" } }],
            "description": "Bring your metrics",
            "target_type": "session"
        });

        let session: Session = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(session.session_at, at(10));
        assert_eq!(session.tag_names().collect::<Vec<_>>(), vec!["mentors"]);
        assert_eq!(session.extra["description"], "Bring your metrics");

        let back = serde_json::to_value(&session).unwrap();
        assert_eq!(back, json);
    }
}
