// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::LineIdAllocator;
use super::intake::GeneratedOutput;
use super::section::{Section, SectionKind};
use crate::format::parse_section;

/// The full editable output: one section per kind, always present.
///
/// A report is rebuilt wholesale whenever new generation output arrives;
/// user edits never survive a regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: BTreeMap<SectionKind, Section>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    /// An empty report; every section exists with zero lines.
    pub fn new() -> Self {
        let sections = SectionKind::ALL
            .into_iter()
            .map(|kind| (kind, Section::default()))
            .collect();
        Self { sections }
    }

    /// Parses every output blob into its section. An empty blob yields an
    /// empty section, not a section with one empty line.
    pub fn from_generated(output: &GeneratedOutput, ids: &mut LineIdAllocator) -> Self {
        let sections = SectionKind::ALL
            .into_iter()
            .map(|kind| (kind, Section::new(parse_section(output.section_text(kind), ids))))
            .collect();
        Self { sections }
    }

    pub fn section(&self, kind: SectionKind) -> &Section {
        // All nine kinds are inserted at construction.
        self.sections.get(&kind).expect("section present for every kind")
    }

    pub(crate) fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        self.sections.get_mut(&kind).expect("section present for every kind")
    }

    /// Sections in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &Section)> {
        self.sections.iter().map(|(kind, section)| (*kind, section))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(Section::is_empty)
    }

    pub fn line_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::Report;
    use crate::model::{GeneratedOutput, LineIdAllocator, SectionKind};

    #[test]
    fn empty_report_has_all_sections() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.iter().count(), SectionKind::ALL.len());
    }

    #[test]
    fn from_generated_skips_empty_blobs() {
        let output = GeneratedOutput {
            precautions: "[ ] Fall precautions".to_owned(),
            ..GeneratedOutput::default()
        };
        let mut ids = LineIdAllocator::new();
        let report = Report::from_generated(&output, &mut ids);

        assert!(report.section(SectionKind::ClinicalNote).is_empty());
        assert_eq!(report.section(SectionKind::Precautions).len(), 1);
        assert_eq!(report.line_count(), 1);
    }

    #[test]
    fn iteration_is_in_canonical_order() {
        let report = Report::new();
        let kinds: Vec<_> = report.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }
}
