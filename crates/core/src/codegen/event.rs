//! Streaming protocol events and their SSE wire form.
//!
//! Every unit sent to a client is either a ping comment (`: ping - <ts>`)
//! or a data line carrying a JSON object with `code` and `file` keys. Status
//! messages travel as data lines addressed to the pseudo file `status.log`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Pseudo file name used for status messages.
pub const STATUS_FILE: &str = "status.log";

pub const START_MESSAGE: &str = "Starting code generation...";
pub const COMPLETE_MESSAGE: &str = "Code generation complete!";
pub const NO_RESPONSE_MESSAGE: &str = "Error: No response received from the agent";
pub const PARSE_FAILURE_MESSAGE: &str = "Error: Failed to parse generated code";

/// JSON body of a data event.
///
/// Field order is part of the wire format: `code` is serialized before `file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    pub code: String,
    pub file: String,
}

impl FilePayload {
    pub fn is_status(&self) -> bool {
        self.file == STATUS_FILE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// A message for `status.log`
    Status(String),
    /// A generated file
    File { path: String, content: String },
    /// Heartbeat comment, ignored by payload consumers
    Ping(DateTime<Utc>),
}

impl SseEvent {
    pub fn started() -> Self {
        Self::Status(START_MESSAGE.to_string())
    }

    pub fn complete() -> Self {
        Self::Status(COMPLETE_MESSAGE.to_string())
    }

    pub fn no_response() -> Self {
        Self::Status(NO_RESPONSE_MESSAGE.to_string())
    }

    pub fn parse_failure() -> Self {
        Self::Status(PARSE_FAILURE_MESSAGE.to_string())
    }

    /// Generic terminal failure carrying the error message.
    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self::Status(format!("Error: {message}"))
    }

    pub fn file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Data payload for this event, `None` for pings.
    pub fn payload(&self) -> Option<FilePayload> {
        match self {
            Self::Status(message) => Some(FilePayload {
                code: message.clone(),
                file: STATUS_FILE.to_string(),
            }),
            Self::File { path, content } => Some(FilePayload {
                code: content.clone(),
                file: path.clone(),
            }),
            Self::Ping(_) => None,
        }
    }

    /// Text of the ping comment, without the leading `: `.
    pub fn comment(&self) -> Option<String> {
        match self {
            Self::Ping(at) => Some(format!("ping - {}", format_timestamp(at))),
            _ => None,
        }
    }

    /// Render the event as a complete, blank-line terminated SSE block.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        match self.payload() {
            Some(payload) => Ok(format!("data: {}\n\n", serde_json::to_string(&payload)?)),
            None => Ok(format!(": {}\n\n", self.comment().unwrap_or_default())),
        }
    }
}

/// ISO-8601 timestamp with microseconds and an explicit `+00:00` offset.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// A block read back off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A comment line, text after the `: ` prefix
    Comment(String),
    /// A decoded data event
    Data(FilePayload),
    /// A data event whose JSON could not be decoded
    Malformed(String),
}

/// Split complete blocks off the front of `buffer`.
///
/// Blocks are terminated by a blank line. Any trailing partial block is left
/// in the buffer for the next call. Expects `\n` line endings.
pub fn drain_blocks(buffer: &mut String) -> Vec<String> {
    let mut blocks = Vec::new();

    while let Some(end) = buffer.find("\n\n") {
        let block: String = buffer.drain(..end + 2).collect();
        let block = block.trim_end_matches('\n');
        if !block.is_empty() {
            blocks.push(block.to_string());
        }
    }

    blocks
}

/// Classify one SSE block.
///
/// Multiple `data:` lines are joined with newlines before decoding, as SSE
/// requires. Blocks with neither data nor comment lines yield `None`.
pub fn parse_frame(block: &str) -> Option<Frame> {
    let mut data: Vec<&str> = Vec::new();
    let mut comment = None;

    for line in block.lines() {
        if let Some(rest) = line.strip_prefix("data:") {
            data.push(rest.strip_prefix(' ').unwrap_or(rest));
        } else if let Some(rest) = line.strip_prefix(':') {
            if comment.is_none() {
                comment = Some(rest.strip_prefix(' ').unwrap_or(rest).to_string());
            }
        }
    }

    if !data.is_empty() {
        let joined = data.join("\n");
        return Some(match serde_json::from_str::<FilePayload>(&joined) {
            Ok(payload) => Frame::Data(payload),
            Err(_) => Frame::Malformed(joined),
        });
    }

    comment.map(Frame::Comment)
}

/// Incremental decoder for an SSE byte stream.
///
/// Chunks may split lines and multi-byte characters anywhere; bytes are held
/// back until they form complete UTF-8 and complete blocks.
#[derive(Debug, Default)]
pub struct FrameReader {
    pending: Vec<u8>,
    text: String,
}

impl FrameReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every frame it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Frame> {
        self.pending.extend_from_slice(chunk);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(text) => text.len(),
            Err(e) => e.valid_up_to(),
        };
        let decoded: Vec<u8> = self.pending.drain(..valid).collect();
        self.text
            .push_str(&String::from_utf8_lossy(&decoded).replace('\r', ""));

        drain_blocks(&mut self.text)
            .iter()
            .filter_map(|block| parse_frame(block))
            .collect()
    }
}
