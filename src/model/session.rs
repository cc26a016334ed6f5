// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, HashMap};

use super::ids::{LineId, LineIdAllocator};
use super::intake::{GeneratedOutput, IntakeRecord};
use super::report::Report;
use super::section::SectionKind;

/// The top-level container the UI runs against.
///
/// One session per process: the intake record, the current report, the
/// line-id source, per-section raw-edit buffers, and the per-line
/// suggestion cache. All report mutation goes through `ops`; nothing here
/// is persisted — export is the only durable artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    intake: IntakeRecord,
    report: Report,
    ids: LineIdAllocator,
    edit_buffers: BTreeMap<SectionKind, String>,
    suggestion_cache: HashMap<LineId, Vec<String>>,
    last_applied_request: Option<u64>,
}

impl Session {
    pub fn new(intake: IntakeRecord) -> Self {
        Self {
            intake,
            report: Report::new(),
            ids: LineIdAllocator::new(),
            edit_buffers: BTreeMap::new(),
            suggestion_cache: HashMap::new(),
            last_applied_request: None,
        }
    }

    pub fn intake(&self) -> &IntakeRecord {
        &self.intake
    }

    pub fn intake_mut(&mut self) -> &mut IntakeRecord {
        &mut self.intake
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub(crate) fn report_mut(&mut self) -> &mut Report {
        &mut self.report
    }

    pub(crate) fn ids_mut(&mut self) -> &mut LineIdAllocator {
        &mut self.ids
    }

    /// Replaces the whole report with freshly parsed generation output.
    ///
    /// The replacement is atomic from the caller's perspective: prior edits,
    /// raw-edit buffers, and cached suggestions are discarded together.
    /// Results are applied in arrival order; with overlapping requests the
    /// last arrival wins.
    pub fn apply_generated(&mut self, request: u64, output: &GeneratedOutput) {
        self.report = Report::from_generated(output, &mut self.ids);
        self.edit_buffers.clear();
        self.suggestion_cache.clear();
        self.last_applied_request = Some(request);
    }

    pub fn last_applied_request(&self) -> Option<u64> {
        self.last_applied_request
    }

    pub fn is_raw_editing(&self, kind: SectionKind) -> bool {
        self.edit_buffers.contains_key(&kind)
    }

    pub fn raw_edit_buffer(&self, kind: SectionKind) -> Option<&str> {
        self.edit_buffers.get(&kind).map(String::as_str)
    }

    pub fn raw_edit_buffer_mut(&mut self, kind: SectionKind) -> Option<&mut String> {
        self.edit_buffers.get_mut(&kind)
    }

    pub(crate) fn seed_edit_buffer(&mut self, kind: SectionKind, raw: String) {
        self.edit_buffers.insert(kind, raw);
    }

    pub(crate) fn take_edit_buffer(&mut self, kind: SectionKind) -> Option<String> {
        self.edit_buffers.remove(&kind)
    }

    /// Cached suggestions for a line, if a non-empty result was stored.
    pub fn cached_suggestions(&self, line: LineId) -> Option<&[String]> {
        self.suggestion_cache.get(&line).map(Vec::as_slice)
    }

    /// Stores a suggestion result for the line's lifetime. Empty results
    /// are not cached, so a later focus may fetch again.
    pub fn cache_suggestions(&mut self, line: LineId, suggestions: Vec<String>) {
        if !suggestions.is_empty() {
            self.suggestion_cache.insert(line, suggestions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::model::{GeneratedOutput, IntakeRecord, SectionKind};

    fn output_with(precautions: &str) -> GeneratedOutput {
        GeneratedOutput {
            precautions: precautions.to_owned(),
            ..GeneratedOutput::default()
        }
    }

    #[test]
    fn apply_generated_discards_edit_state() {
        let mut session = Session::new(IntakeRecord::default());
        session.apply_generated(1, &output_with("[ ] Aspiration precautions"));
        session.seed_edit_buffer(SectionKind::Precautions, "[ ] edited".to_owned());

        let first_line = session
            .report()
            .section(SectionKind::Precautions)
            .lines()[0]
            .id();
        session.cache_suggestions(first_line, vec!["one".to_owned()]);

        session.apply_generated(2, &output_with("[ ] Fall precautions"));

        assert!(!session.is_raw_editing(SectionKind::Precautions));
        assert_eq!(session.cached_suggestions(first_line), None);
        assert_eq!(session.last_applied_request(), Some(2));
    }

    #[test]
    fn later_result_wins_regardless_of_request_order() {
        let mut session = Session::new(IntakeRecord::default());
        session.apply_generated(2, &output_with("[ ] from request two"));
        session.apply_generated(1, &output_with("[ ] from request one"));

        let section = session.report().section(SectionKind::Precautions);
        assert_eq!(section.lines()[0].text(), "from request one");
        assert_eq!(session.last_applied_request(), Some(1));
    }

    #[test]
    fn empty_suggestion_results_are_not_cached() {
        let mut session = Session::new(IntakeRecord::default());
        session.apply_generated(1, &output_with("[ ] item"));
        let line = session.report().section(SectionKind::Precautions).lines()[0].id();

        session.cache_suggestions(line, Vec::new());
        assert_eq!(session.cached_suggestions(line), None);

        session.cache_suggestions(line, vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(session.cached_suggestions(line).map(<[String]>::len), Some(2));
    }

    #[test]
    fn line_ids_do_not_collide_across_regenerations() {
        let mut session = Session::new(IntakeRecord::default());
        session.apply_generated(1, &output_with("[ ] one\n[ ] two"));
        let old_ids: Vec<_> = session
            .report()
            .section(SectionKind::Precautions)
            .lines()
            .iter()
            .map(|line| line.id())
            .collect();

        session.apply_generated(2, &output_with("[ ] three\n[ ] four"));
        for line in session.report().section(SectionKind::Precautions).lines() {
            assert!(!old_ids.contains(&line.id()));
        }
    }
}
