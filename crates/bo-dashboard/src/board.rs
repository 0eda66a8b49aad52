// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::collections::BTreeSet;
use std::path::Path;

use bo_domain_types::Session;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Sessions carrying every one of `tags`; an empty selection keeps all
pub fn filter_by_tags<'a, S: AsRef<str>>(sessions: &'a [Session], tags: &[S]) -> Vec<&'a Session> {
    sessions.iter().filter(|session| session.has_all_tags(tags)).collect()
}

/// Sessions strictly after `now`, latest first (reverse of input order)
pub fn upcoming<'a>(
    sessions: impl IntoIterator<Item = &'a Session>,
    now: DateTime<Utc>,
) -> Vec<&'a Session> {
    let mut selected: Vec<_> = sessions.into_iter().filter(|s| s.session_at > now).collect();
    selected.reverse();
    selected
}

/// Sessions strictly before `now`, in input order
pub fn past<'a>(
    sessions: impl IntoIterator<Item = &'a Session>,
    now: DateTime<Utc>,
) -> Vec<&'a Session> {
    sessions.into_iter().filter(|s| s.session_at < now).collect()
}

/// What the dashboard shows for one tag selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPartition {
    pub session_tags: Vec<String>,
    pub upcoming: Vec<Session>,
    pub past: Vec<Session>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionBoard {
    sessions: Vec<Session>,
}

impl SessionBoard {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Distinct tag names across all sessions, sorted
    pub fn session_tags(&self) -> Vec<String> {
        self.sessions
            .iter()
            .flat_map(|session| session.tag_names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Filter by `tags` and split around `now`
    ///
    /// A session scheduled exactly at `now` lands in neither list.
    pub fn partition<S: AsRef<str>>(&self, tags: &[S], now: DateTime<Utc>) -> SessionPartition {
        let selected = filter_by_tags(&self.sessions, tags);
        let partition = SessionPartition {
            session_tags: self.session_tags(),
            upcoming: upcoming(selected.iter().copied(), now).into_iter().cloned().collect(),
            past: past(selected.iter().copied(), now).into_iter().cloned().collect(),
        };
        debug!(
            selected = selected.len(),
            upcoming = partition.upcoming.len(),
            past = partition.past.len(),
            "Partitioned sessions"
        );
        partition
    }
}

/// Read a JSON array of sessions from `path`
pub async fn load_sessions(path: &Path) -> Result<Vec<Session>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
