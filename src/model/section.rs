// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::LineId;
use super::line::Line;

/// The fixed set of report sections, in display and export order.
///
/// Wire names match the generation output record field names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    ClinicalNote,
    Icd10Codes,
    CptCodes,
    UspstfRecommendations,
    MipsQualityMeasures,
    CdiSuggestions,
    AuditChecklist,
    Precautions,
    Recommendations,
}

impl SectionKind {
    pub const ALL: [Self; 9] = [
        Self::ClinicalNote,
        Self::Icd10Codes,
        Self::CptCodes,
        Self::UspstfRecommendations,
        Self::MipsQualityMeasures,
        Self::CdiSuggestions,
        Self::AuditChecklist,
        Self::Precautions,
        Self::Recommendations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::ClinicalNote => "Clinical Note",
            Self::Icd10Codes => "ICD-10 Codes",
            Self::CptCodes => "CPT/E/M Codes",
            Self::UspstfRecommendations => "USPSTF Preventive Services",
            Self::MipsQualityMeasures => "Quality Measures (MIPS)",
            Self::CdiSuggestions => "Documentation & Coding Suggestions (CDI)",
            Self::AuditChecklist => "Audit-Readiness Checklist",
            Self::Precautions => "Precautions & Preventive Measures",
            Self::Recommendations => "Recommendations",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClinicalNote => "clinicalNote",
            Self::Icd10Codes => "icd10Codes",
            Self::CptCodes => "cptCodes",
            Self::UspstfRecommendations => "uspstfRecommendations",
            Self::MipsQualityMeasures => "mipsQualityMeasures",
            Self::CdiSuggestions => "cdiSuggestions",
            Self::AuditChecklist => "auditChecklist",
            Self::Precautions => "precautions",
            Self::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionKindError {
    name: String,
}

impl fmt::Display for ParseSectionKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section kind: {}", self.name)
    }
}

impl std::error::Error for ParseSectionKindError {}

impl FromStr for SectionKind {
    type Err = ParseSectionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseSectionKindError { name: s.to_owned() })
    }
}

/// An ordered sequence of lines within one report section.
///
/// Ordering is display and export order; every mutation except explicit
/// add/remove preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    lines: Vec<Line>,
}

impl Section {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<Line> {
        &mut self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub(crate) fn line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    pub fn position(&self, id: LineId) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SectionKind;

    #[test]
    fn wire_names_round_trip() {
        for kind in SectionKind::ALL {
            let parsed: SectionKind = kind.as_str().parse().expect("parse");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        let err = "soapNote".parse::<SectionKind>().unwrap_err();
        assert!(err.to_string().contains("soapNote"));
    }

    #[test]
    fn canonical_order_matches_enum_order() {
        let mut sorted = SectionKind::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionKind::ALL);
    }
}
