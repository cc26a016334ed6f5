// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::model::{LineId, Report, SectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Substring,
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub section: SectionKind,
    pub line_id: LineId,
}

/// Searches every report line in display order.
///
/// Substring search is case-insensitive; regex search compiles the
/// user-supplied pattern and reports compile errors to the caller.
pub fn line_search(
    report: &Report,
    needle: &str,
    mode: SearchMode,
) -> Result<Vec<SearchHit>, regex::Error> {
    let hits = match mode {
        SearchMode::Substring => {
            let needle_lower = needle.to_lowercase();
            collect_hits(report, |text| text.to_lowercase().contains(&needle_lower))
        }
        SearchMode::Regex => {
            let regex = RegexBuilder::new(needle).case_insensitive(true).build()?;
            collect_hits(report, |text| regex.is_match(text))
        }
    };
    Ok(hits)
}

fn collect_hits(report: &Report, matches: impl Fn(&str) -> bool) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    for (section, lines) in report.iter() {
        for line in lines.lines() {
            if matches(line.text()) {
                hits.push(SearchHit { section, line_id: line.id() });
            }
        }
    }
    hits
}
