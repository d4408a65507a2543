//! Event logging for patchview.
//!
//! Side-effecting commands (`copy`, `download`, `init`) append one NDJSON
//! record to `.patchview/events.ndjson` so a repository keeps a history of
//! which patches were exported and where.
//!
//! Each event is a JSON object with:
//! - `ts`: RFC3339 timestamp
//! - `action`: the command that ran
//! - `actor`: `user@HOST`
//! - `details`: action-specific object

use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::{PatchviewError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Default config written
    Init,
    /// Patch (or one file of it) copied to the clipboard
    Copy,
    /// Patch written to disk
    Download,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Init => write!(f, "init"),
            EventAction::Copy => write!(f, "copy"),
            EventAction::Download => write!(f, "download"),
        }
    }
}

/// An event record for the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    pub actor: String,
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PatchviewError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the events log.
///
/// Creates the state directory and file as needed; each call writes exactly
/// one line with a trailing newline.
pub fn append_event(ctx: &WorkspaceContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();
    let json_line = event.to_ndjson_line()?;

    fs::create_dir_all(&ctx.state_dir).map_err(|e| {
        PatchviewError::IoError(format!(
            "failed to create state directory '{}': {}",
            ctx.state_dir.display(),
            e
        ))
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            PatchviewError::IoError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PatchviewError::IoError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Record an event if logging applies, warning instead of failing.
///
/// Events are only kept inside git repositories with `event_log` enabled.
/// A failed write never fails the command that triggered it.
pub fn record(ctx: &WorkspaceContext, config: &Config, event: Event) {
    if !ctx.in_repo || !config.event_log {
        return;
    }

    if let Err(e) = append_event(ctx, &event) {
        eprintln!("Warning: could not record {} event: {}", event.action, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;
    use serde_json::json;
    use tempfile::TempDir;

    fn read_lines(ctx: &WorkspaceContext) -> Vec<String> {
        fs::read_to_string(ctx.events_file())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Download);

        assert_eq!(event.action, EventAction::Download);
        assert!(!event.actor.is_empty());
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_serialization() {
        let event =
            Event::new(EventAction::Copy).with_details(json!({"scope": "file", "copied": true}));
        let line = event.to_ndjson_line().unwrap();

        assert!(!line.contains('\n'));
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["action"], "copy");
        assert_eq!(value["details"]["scope"], "file");
        assert!(value["ts"].is_string());
    }

    #[test]
    fn test_event_action_display() {
        assert_eq!(EventAction::Init.to_string(), "init");
        assert_eq!(EventAction::Copy.to_string(), "copy");
        assert_eq!(EventAction::Download.to_string(), "download");
    }

    #[test]
    fn test_append_event_creates_file_and_appends() {
        let temp_dir = create_test_repo();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());

        append_event(&ctx, &Event::new(EventAction::Init)).unwrap();
        append_event(&ctx, &Event::new(EventAction::Download)).unwrap();

        let lines = read_lines(&ctx);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"action\":\"init\""));
        assert!(lines[1].contains("\"action\":\"download\""));

        let raw = fs::read_to_string(ctx.events_file()).unwrap();
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_record_skips_outside_repo() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());

        record(&ctx, &Config::default(), Event::new(EventAction::Copy));

        assert!(!ctx.events_file().exists());
    }

    #[test]
    fn test_record_respects_config() {
        let temp_dir = create_test_repo();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());
        let config = Config {
            event_log: false,
            ..Config::default()
        };

        record(&ctx, &config, Event::new(EventAction::Copy));
        assert!(!ctx.events_file().exists());

        record(&ctx, &Config::default(), Event::new(EventAction::Copy));
        assert_eq!(read_lines(&ctx).len(), 1);
    }

    #[test]
    fn test_event_round_trip() {
        let event = Event::new(EventAction::Download).with_details(json!({"bytes": 42}));
        let line = event.to_ndjson_line().unwrap();
        let parsed: Event = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed.action, EventAction::Download);
        assert_eq!(parsed.details["bytes"], 42);
        assert_eq!(parsed.actor, event.actor);
    }
}
