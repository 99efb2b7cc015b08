use crate::error::{Result, VersionBumpError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The subset of a GitHub push event payload this tool cares about.
#[derive(Debug, Deserialize, Default)]
pub struct PushEvent {
    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

/// A single commit entry from the push event payload.
#[derive(Debug, Deserialize)]
pub struct PushCommit {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub body: String,
}

impl PushCommit {
    /// Full commit text: subject plus body, when a separate body is present.
    pub fn full_text(&self) -> String {
        if self.body.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n{}", self.message, self.body)
        }
    }
}

impl PushEvent {
    /// One text per commit, in payload order.
    pub fn commit_messages(&self) -> Vec<String> {
        self.commits.iter().map(PushCommit::full_text).collect()
    }
}

/// Parses a push event payload from JSON text.
pub fn parse_push_event(text: &str) -> Result<PushEvent> {
    serde_json::from_str(text)
        .map_err(|e| VersionBumpError::event(format!("Invalid push event payload: {}", e)))
}

/// Collects commit message texts from the event payload file, if any.
///
/// A missing path (variable unset, or file not present) yields an empty
/// batch, same as a payload without a `commits` array. A present but
/// unparsable payload is an error.
pub fn collect_commit_messages(event_path: Option<&Path>) -> Result<Vec<String>> {
    let path = match event_path {
        Some(p) if p.exists() => p,
        _ => return Ok(Vec::new()),
    };

    let text = fs::read_to_string(path)?;
    let event = parse_push_event(&text)?;
    Ok(event.commit_messages())
}
