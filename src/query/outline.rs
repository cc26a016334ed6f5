// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use crate::format::{note_heading, NoteHeading};
use crate::model::{Line, Section};

/// One display row of the clinical-note outline.
///
/// A heading line with trailing body text contributes a synthetic
/// continuation row carrying the trimmed remainder; the row still points at
/// the source line, so edits land on the real flat sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow<'a> {
    pub line: &'a Line,
    pub text: Cow<'a, str>,
    pub continuation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSubsection<'a> {
    pub heading: NoteHeading,
    pub rows: Vec<OutlineRow<'a>>,
}

/// Derived grouping of the clinical-note section into its subsections.
///
/// Recomputed on every read; never a second source of truth. Lines before
/// the first heading are dropped from the grouped view. When the section
/// has no heading at all the grouping is empty and callers fall back to the
/// flat line sequence.
pub fn note_outline(section: &Section) -> Vec<NoteSubsection<'_>> {
    let mut subsections: Vec<NoteSubsection<'_>> = Vec::new();

    for line in section.lines() {
        if let Some((heading, rest)) = note_heading(line.text()) {
            let mut rows = Vec::new();
            let body = rest.trim();
            if !body.is_empty() {
                rows.push(OutlineRow {
                    line,
                    text: Cow::Owned(body.to_owned()),
                    continuation: true,
                });
            }
            subsections.push(NoteSubsection { heading, rows });
        } else if let Some(current) = subsections.last_mut() {
            current.rows.push(OutlineRow {
                line,
                text: Cow::Borrowed(line.text()),
                continuation: false,
            });
        }
    }

    subsections
}
