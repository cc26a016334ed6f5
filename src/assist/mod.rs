// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary to the note-generation collaborator.
//!
//! The collaborator is opaque: structured intake in, conventionally
//! formatted text out. Implementations may block on whatever transport they
//! like; the worker runs them off the UI thread and delivers results as
//! events on a channel the event loop drains. No session state changes
//! until a full result has arrived.

pub mod scripted;

use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::model::{GeneratedOutput, IntakePatch, IntakeRecord, LineId};

/// Upper bound on suggestions per placeholder; longer results are cut.
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    /// The collaborator could not be reached.
    Unavailable,
    /// The collaborator answered but refused the request.
    Rejected { message: String },
    /// The collaborator answered with something that could not be decoded.
    Malformed { message: String },
}

impl fmt::Display for AssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("assistant unavailable"),
            Self::Rejected { message } => write!(f, "assistant rejected the request: {message}"),
            Self::Malformed { message } => write!(f, "assistant response malformed: {message}"),
        }
    }
}

impl std::error::Error for AssistError {}

/// The opaque note-generation collaborator.
pub trait NoteAssistant: Send + Sync {
    /// Produces the nine output blobs for an intake record.
    fn generate_note(&self, intake: &IntakeRecord) -> Result<GeneratedOutput, AssistError>;

    /// Best-effort field extraction from free text. Absent fields were not
    /// found; nothing is fabricated.
    fn autofill(&self, text: &str) -> Result<IntakePatch, AssistError>;

    /// Short candidate values for one placeholder, given the full intake
    /// context. At most [`MAX_SUGGESTIONS`] survive the boundary.
    fn field_suggestions(
        &self,
        context: &IntakeRecord,
        placeholder: &str,
    ) -> Result<Vec<String>, AssistError>;
}

/// A collaborator result delivered back to the event loop.
#[derive(Debug)]
pub enum AssistEvent {
    Generated {
        request: u64,
        result: Result<GeneratedOutput, AssistError>,
    },
    Autofilled {
        request: u64,
        result: Result<IntakePatch, AssistError>,
    },
    Suggested {
        line_id: LineId,
        result: Result<Vec<String>, AssistError>,
    },
}

/// Dispatches collaborator calls onto the blocking pool, fire-and-forget.
///
/// Callers keep handling input while a request is in flight; each result
/// arrives as one event. Overlapping generation requests are not cancelled;
/// whichever result arrives last is the one that sticks.
pub struct AssistWorker {
    assistant: Arc<dyn NoteAssistant>,
    runtime: Handle,
    tx: UnboundedSender<AssistEvent>,
    next_request: u64,
}

impl AssistWorker {
    pub fn new(
        assistant: Arc<dyn NoteAssistant>,
        runtime: Handle,
    ) -> (Self, UnboundedReceiver<AssistEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { assistant, runtime, tx, next_request: 1 }, rx)
    }

    fn next_request(&mut self) -> u64 {
        let request = self.next_request;
        self.next_request += 1;
        request
    }

    pub fn request_generate(&mut self, intake: IntakeRecord) -> u64 {
        let request = self.next_request();
        let assistant = Arc::clone(&self.assistant);
        let tx = self.tx.clone();
        debug!(request, "generation requested");
        self.runtime.spawn_blocking(move || {
            let result = assistant.generate_note(&intake);
            if let Err(error) = &result {
                warn!(request, %error, "generation failed");
            }
            let _ = tx.send(AssistEvent::Generated { request, result });
        });
        request
    }

    pub fn request_autofill(&mut self, text: String) -> u64 {
        let request = self.next_request();
        let assistant = Arc::clone(&self.assistant);
        let tx = self.tx.clone();
        debug!(request, "autofill requested");
        self.runtime.spawn_blocking(move || {
            let result = assistant.autofill(&text);
            if let Err(error) = &result {
                warn!(request, %error, "autofill failed");
            }
            let _ = tx.send(AssistEvent::Autofilled { request, result });
        });
        request
    }

    /// Resolves suggestions for one placeholder line. The result is keyed
    /// by line id; if the line is gone by the time it arrives, applying it
    /// is the caller's safe no-op.
    pub fn request_suggestions(
        &mut self,
        line_id: LineId,
        context: IntakeRecord,
        placeholder: String,
    ) {
        let assistant = Arc::clone(&self.assistant);
        let tx = self.tx.clone();
        debug!(%line_id, "suggestions requested");
        self.runtime.spawn_blocking(move || {
            let result = assistant
                .field_suggestions(&context, &placeholder)
                .map(|mut suggestions| {
                    suggestions.truncate(MAX_SUGGESTIONS);
                    suggestions
                });
            if let Err(error) = &result {
                warn!(%line_id, %error, "suggestion lookup failed");
            }
            let _ = tx.send(AssistEvent::Suggested { line_id, result });
        });
    }
}
