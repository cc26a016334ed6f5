// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Paginated styled rendering of the report.
//!
//! The renderer is the export path: it serializes each line back to its
//! raw form, tokenizes the markers into styled runs, and lays the runs out
//! against a fixed page geometry. The TUI reuses the same tokenizer for
//! on-screen styling.

pub mod inline;
pub mod paginate;
pub mod text;

pub use inline::{tokenize_line, RunStyle, RunVec, StyledRun, CHECKED_GLYPH, UNCHECKED_GLYPH};
pub use paginate::render_report;
pub use text::document_to_text;

/// Page geometry in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub content_width: usize,
    pub page_rows: usize,
    /// Minimum rows that must remain before a section title is emitted on
    /// the current page.
    pub section_start_rows: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { content_width: 80, page_rows: 54, section_start_rows: 4 }
    }
}

/// One wrapped output row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub runs: RunVec,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub rows: Vec<StyledLine>,
}

/// The exportable multi-page document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportDocument {
    pub pages: Vec<Page>,
}

impl ExportDocument {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
