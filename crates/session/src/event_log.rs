//! Event log - line-delimited JSON record of a play session
//!
//! Every record carries `type`, `seq` (per-log sequence number) and `ts`
//! (wall clock, milliseconds since the Unix epoch), followed by the fields of
//! the event itself:
//!
//! ```text
//! {"seq":1,"ts":1718000000000,"type":"session_start","seed":42,"episode_id":0}
//! {"seq":2,"ts":1718000001200,"type":"click","row":9,"col":0,"kind":"clear",...}
//! ```
//!
//! The log is optional. When a write fails the log switches itself off and the
//! game carries on.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{LevelUp, MoveKind, MoveResult};

/// One loggable event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    SessionStart {
        seed: u64,
        episode_id: u32,
    },
    Click {
        row: u8,
        col: u8,
        kind: &'static str,
        score_delta: i64,
        cleared: usize,
        unlocked: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        collected: Option<&'static str>,
        score: u32,
        moves_left: u32,
    },
    LevelUp {
        level: u32,
        threshold: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        new_color: Option<&'static str>,
        power_up: &'static str,
    },
    Restart {
        episode_id: u32,
    },
    GameOver {
        episode_id: u32,
        score: u32,
        level: u32,
        new_high_score: bool,
    },
}

impl LogEvent {
    /// Summarise a click. `score`/`moves_left` are the values after the click.
    pub fn click(result: &MoveResult, score: u32, moves_left: u32) -> Self {
        LogEvent::Click {
            row: result.coord.row,
            col: result.coord.col,
            kind: move_kind_str(result.kind),
            score_delta: result.score_delta,
            cleared: result.cleared.len(),
            unlocked: result.unlocked.len(),
            collected: result.collected.map(|k| k.as_str()),
            score,
            moves_left,
        }
    }

    pub fn level_up(up: &LevelUp) -> Self {
        LogEvent::LevelUp {
            level: up.level,
            threshold: up.threshold,
            new_color: up.new_color.map(|c| c.as_str()),
            power_up: up.power_up.as_str(),
        }
    }
}

pub fn move_kind_str(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Ignored => "ignored",
        MoveKind::SwapSelected => "swap_selected",
        MoveKind::Swapped => "swapped",
        MoveKind::Miss => "miss",
        MoveKind::Clear => "clear",
    }
}

#[derive(Serialize)]
struct LogRecord<'a> {
    seq: u64,
    ts: u64,
    #[serde(flatten)]
    event: &'a LogEvent,
}

/// Append-only JSONL sink.
pub struct EventLog {
    writer: Option<BufWriter<File>>,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog {
    /// A log that drops everything.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            seq: 0,
            buf: Vec::with_capacity(512),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn write(&mut self, event: &LogEvent) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.seq += 1;
        let record = LogRecord {
            seq: self.seq,
            ts: now_ms(),
            event,
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = writer.write_all(&self.buf) {
            eprintln!("[Session] event log write failed, disabling: {}", e);
            self.writer = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                eprintln!("[Session] event log flush failed, disabling: {}", e);
                self.writer = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
