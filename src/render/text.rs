// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{ExportDocument, Page};

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

fn page_to_text(page: &Page) -> String {
    let mut lines = Vec::with_capacity(page.rows.len());
    for row in &page.rows {
        let mut line = String::new();
        for run in &row.runs {
            line.push_str(&run.text);
        }
        lines.push(line);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Plain-text projection of an export document; pages are separated by a
/// form feed.
pub fn document_to_text(doc: &ExportDocument) -> String {
    let mut out = String::new();
    for (index, page) in doc.pages.iter().enumerate() {
        if index > 0 {
            out.push('\u{000C}');
            out.push('\n');
        }
        out.push_str(&page_to_text(page));
        out.push('\n');
    }
    out
}
