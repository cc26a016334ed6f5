// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::format::{find_placeholder, PLACEHOLDER_OPEN};

pub const CHECKED_GLYPH: char = '☑';
pub const UNCHECKED_GLYPH: char = '☐';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    Normal,
    Bold,
    Placeholder,
    Checkbox { checked: bool },
}

/// A contiguous span of a rendered line sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub style: RunStyle,
    pub text: String,
}

impl StyledRun {
    pub fn normal(text: impl Into<String>) -> Self {
        Self { style: RunStyle::Normal, text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { style: RunStyle::Bold, text: text.into() }
    }
}

/// Most lines carry a handful of runs; keep them inline.
pub type RunVec = SmallVec<[StyledRun; 4]>;

/// Tokenizes a serialized (raw-with-checkbox) line into styled runs.
///
/// Token classes, tried in priority order at each position: checkbox token
/// (rendered as a glyph), bold span (delimiters stripped), placeholder
/// marker (only the captured content survives, in placeholder style).
/// Everything else is a normal run. Matching is left to right and
/// non-overlapping.
pub fn tokenize_line(raw: &str) -> RunVec {
    let mut runs = RunVec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < raw.len() {
        let rest = &raw[pos..];
        let Some((run, consumed)) = match_token(rest) else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        };

        if plain_start < pos {
            runs.push(StyledRun::normal(&raw[plain_start..pos]));
        }
        runs.push(run);
        pos += consumed;
        plain_start = pos;
    }

    if plain_start < raw.len() {
        runs.push(StyledRun::normal(&raw[plain_start..]));
    }
    runs
}

fn match_token(rest: &str) -> Option<(StyledRun, usize)> {
    if rest.starts_with("[x]") {
        let run = StyledRun {
            style: RunStyle::Checkbox { checked: true },
            text: CHECKED_GLYPH.to_string(),
        };
        return Some((run, 3));
    }
    if rest.starts_with("[ ]") {
        let run = StyledRun {
            style: RunStyle::Checkbox { checked: false },
            text: UNCHECKED_GLYPH.to_string(),
        };
        return Some((run, 3));
    }
    if let Some(after) = rest.strip_prefix("**") {
        if let Some(close) = after.find("**") {
            return Some((StyledRun::bold(&after[..close]), close + 4));
        }
    }
    if rest.starts_with(PLACEHOLDER_OPEN) {
        if let Some(span) = find_placeholder(rest) {
            if span.start == 0 {
                let run = StyledRun {
                    style: RunStyle::Placeholder,
                    text: span.content(rest).to_owned(),
                };
                return Some((run, span.end));
            }
        }
    }
    None
}
