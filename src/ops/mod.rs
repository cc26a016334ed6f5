// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations over the report.
//!
//! This is the report's only mutation surface; UI handlers never touch
//! lines directly. Operations targeting a line id that no longer exists are
//! silent no-ops — an async result landing after a concurrent removal is
//! tolerated, not an error. Each apply produces a minimal delta the UI can
//! use to refresh derived state.

use std::collections::HashSet;

use crate::format::{parse_section, serialize_section};
use crate::model::{CheckState, Line, LineId, SectionKind, Session};

/// Default text of a manually appended line.
pub const NEW_ITEM_TEXT: &str = "[PLACEHOLDER: New item]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Replace a line's text. Placeholder lines take the new value as the
    /// marker content, keeping the surrounding envelope; plain lines take
    /// it verbatim as the whole text.
    ReplaceLine {
        section: SectionKind,
        line_id: LineId,
        text: String,
    },
    RemoveLine {
        section: SectionKind,
        line_id: LineId,
    },
    /// Append a fresh placeholder line at the end of the section.
    AddLine { section: SectionKind },
    /// Set the boolean state of a line that already has checkbox semantics.
    /// Lines without a checkbox never gain one here.
    SetCheck {
        section: SectionKind,
        line_id: LineId,
        checked: bool,
    },
    /// Discard the section's lines and re-parse from raw text. The only
    /// operation that can change checkbox-capability or add/remove
    /// placeholders en masse.
    ReplaceSectionRaw {
        section: SectionKind,
        raw: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineRef {
    pub section: SectionKind,
    pub line_id: LineId,
}

/// Coarse description of which lines an apply touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<LineRef>,
    pub removed: Vec<LineRef>,
    pub updated: Vec<LineRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    /// Ops that changed the report.
    pub applied: usize,
    /// Ops dropped on a stale line id or an uncheckable line.
    pub skipped: usize,
    pub delta: Delta,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<LineRef>,
    removed: HashSet<LineRef>,
    updated: HashSet<LineRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, line_ref: LineRef) {
        self.removed.remove(&line_ref);
        self.updated.remove(&line_ref);
        self.added.insert(line_ref);
    }

    fn record_removed(&mut self, line_ref: LineRef) {
        self.added.remove(&line_ref);
        self.updated.remove(&line_ref);
        self.removed.insert(line_ref);
    }

    fn record_updated(&mut self, line_ref: LineRef) {
        if self.added.contains(&line_ref) || self.removed.contains(&line_ref) {
            return;
        }
        self.updated.insert(line_ref);
    }

    fn finish(self) -> Delta {
        let mut added: Vec<_> = self.added.into_iter().collect();
        let mut removed: Vec<_> = self.removed.into_iter().collect();
        let mut updated: Vec<_> = self.updated.into_iter().collect();
        added.sort();
        removed.sort();
        updated.sort();
        Delta { added, removed, updated }
    }
}

/// Applies ops in order. Never fails; stale targets are counted as skipped.
pub fn apply(session: &mut Session, ops: &[Op]) -> ApplyResult {
    let mut delta = DeltaBuilder::default();
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for op in ops {
        let changed = apply_one(session, op, &mut delta);
        if changed {
            applied += 1;
        } else {
            skipped += 1;
        }
    }

    ApplyResult { applied, skipped, delta: delta.finish() }
}

fn apply_one(session: &mut Session, op: &Op, delta: &mut DeltaBuilder) -> bool {
    match op {
        Op::ReplaceLine { section, line_id, text } => {
            let Some(line) = session.report_mut().section_mut(*section).line_mut(*line_id)
            else {
                return false;
            };
            let new_text = crate::format::replace_placeholder_content(line.text(), text)
                .unwrap_or_else(|| text.clone());
            line.set_text(new_text);
            delta.record_updated(LineRef { section: *section, line_id: *line_id });
            true
        }
        Op::RemoveLine { section, line_id } => {
            let lines = session.report_mut().section_mut(*section).lines_mut();
            let Some(position) = lines.iter().position(|line| line.id() == *line_id) else {
                return false;
            };
            lines.remove(position);
            delta.record_removed(LineRef { section: *section, line_id: *line_id });
            true
        }
        Op::AddLine { section } => {
            let line_id = session.ids_mut().next_id();
            let line = Line::new(line_id, NEW_ITEM_TEXT.to_owned(), CheckState::None);
            session.report_mut().section_mut(*section).lines_mut().push(line);
            delta.record_added(LineRef { section: *section, line_id });
            true
        }
        Op::SetCheck { section, line_id, checked } => {
            let Some(line) = session.report_mut().section_mut(*section).line_mut(*line_id)
            else {
                return false;
            };
            if !line.check().is_checkable() {
                return false;
            }
            line.set_check(CheckState::from_checked(*checked));
            delta.record_updated(LineRef { section: *section, line_id: *line_id });
            true
        }
        Op::ReplaceSectionRaw { section, raw } => {
            replace_section_raw(session, *section, raw, delta);
            true
        }
    }
}

fn replace_section_raw(
    session: &mut Session,
    section: SectionKind,
    raw: &str,
    delta: &mut DeltaBuilder,
) {
    let old_ids: Vec<LineId> = session
        .report()
        .section(section)
        .lines()
        .iter()
        .map(Line::id)
        .collect();
    for line_id in old_ids {
        delta.record_removed(LineRef { section, line_id });
    }

    let parsed = {
        let ids = session.ids_mut();
        parse_section(raw, ids)
    };
    for line in &parsed {
        delta.record_added(LineRef { section, line_id: line.id() });
    }
    *session.report_mut().section_mut(section).lines_mut() = parsed;
}

/// Enters raw-edit mode, seeding the buffer with the section's serialized
/// form. Re-entering keeps the buffer already being edited.
pub fn enter_raw_edit(session: &mut Session, section: SectionKind) {
    if session.is_raw_editing(section) {
        return;
    }
    let raw = serialize_section(session.report().section(section).lines());
    session.seed_edit_buffer(section, raw);
}

/// Leaves raw-edit mode, re-parsing the buffer into the section. Returns
/// `None` when the section was not being edited.
pub fn commit_raw_edit(session: &mut Session, section: SectionKind) -> Option<ApplyResult> {
    let raw = session.take_edit_buffer(section)?;
    Some(apply(session, &[Op::ReplaceSectionRaw { section, raw }]))
}

/// Leaves raw-edit mode discarding the buffer. Returns whether a buffer
/// existed.
pub fn cancel_raw_edit(session: &mut Session, section: SectionKind) -> bool {
    session.take_edit_buffer(section).is_some()
}
