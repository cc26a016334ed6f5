// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{CheckState, Line, LineIdAllocator};

pub const CHECKED_TOKEN: &str = "[x]";
pub const UNCHECKED_TOKEN: &str = "[ ]";

/// Parses one section blob into its editable lines.
///
/// Total over arbitrary input: every newline-delimited piece becomes
/// exactly one line, empty pieces included. A zero-length blob
/// short-circuits to an empty sequence. A leading checkbox token fixes the
/// line's checkbox semantics and is stripped together with the whitespace
/// after it; everything else, placeholder markers included, stays literal
/// in the stored text.
pub fn parse_section(raw: &str, ids: &mut LineIdAllocator) -> Vec<Line> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split('\n')
        .map(|piece| {
            let (check, text) = strip_check_token(piece);
            Line::new(ids.next_id(), text.to_owned(), check)
        })
        .collect()
}

fn strip_check_token(piece: &str) -> (CheckState, &str) {
    let (state, rest) = if let Some(rest) = piece.strip_prefix(CHECKED_TOKEN) {
        (CheckState::Checked, rest)
    } else if let Some(rest) = piece.strip_prefix(UNCHECKED_TOKEN) {
        (CheckState::Unchecked, rest)
    } else {
        return (CheckState::None, piece);
    };
    (state, rest.trim_start())
}

/// Serializes a line back to its raw form, checkbox token included.
pub fn serialize_line(line: &Line) -> String {
    match line.check() {
        CheckState::None => line.text().to_owned(),
        CheckState::Unchecked => format!("{UNCHECKED_TOKEN} {}", line.text()),
        CheckState::Checked => format!("{CHECKED_TOKEN} {}", line.text()),
    }
}

/// Inverse of [`parse_section`]: the raw text seeded into edit buffers and
/// consumed by export.
pub fn serialize_section(lines: &[Line]) -> String {
    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&serialize_line(line));
    }
    out
}
