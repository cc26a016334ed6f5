// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::format::serialize_line;
use crate::model::Report;

use super::inline::{tokenize_line, RunVec, StyledRun};
use super::text::text_len;
use super::{ExportDocument, Page, PageOptions, StyledLine};

struct DocumentBuilder {
    page_rows: usize,
    pages: Vec<Page>,
    current: Vec<StyledLine>,
}

impl DocumentBuilder {
    fn new(options: &PageOptions) -> Self {
        Self {
            page_rows: options.page_rows.max(1),
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    fn rows_left(&self) -> usize {
        self.page_rows - self.current.len()
    }

    fn break_page(&mut self) {
        if !self.current.is_empty() {
            self.pages.push(Page { rows: std::mem::take(&mut self.current) });
        }
    }

    /// Starts a new page unless at least `rows` rows remain (or the current
    /// page is still empty, in which case breaking would not help).
    fn ensure_rows(&mut self, rows: usize) {
        if self.rows_left() < rows && !self.current.is_empty() {
            self.break_page();
        }
    }

    fn push_row(&mut self, row: StyledLine) {
        if self.rows_left() == 0 {
            self.break_page();
        }
        self.current.push(row);
    }

    fn push_gap(&mut self) {
        if !self.current.is_empty() && self.rows_left() > 0 {
            self.current.push(StyledLine { runs: RunVec::new() });
        }
    }

    fn finish(mut self) -> ExportDocument {
        self.break_page();
        ExportDocument { pages: self.pages }
    }
}

/// Renders the report into a paginated styled document.
///
/// Sections are emitted in canonical order, empty sections skipped, each
/// under a bold title. The clinical note exports its flat line sequence;
/// the subsection outline is a display-only view. Rendering is pure: the
/// same report and options always produce the same document.
pub fn render_report(report: &Report, options: &PageOptions) -> ExportDocument {
    let width = options.content_width.max(1);
    let mut builder = DocumentBuilder::new(options);

    for (kind, section) in report.iter() {
        if section.is_empty() {
            continue;
        }

        builder.push_gap();
        builder.ensure_rows(options.section_start_rows.max(2));

        let mut title = RunVec::new();
        title.push(StyledRun::bold(kind.title()));
        builder.push_row(StyledLine { runs: title });
        builder.push_row(StyledLine { runs: RunVec::new() });

        for line in section.lines() {
            let raw = serialize_line(line);
            for runs in wrap_runs(&tokenize_line(&raw), width) {
                builder.ensure_rows(1);
                builder.push_row(StyledLine { runs });
            }
        }
    }

    builder.finish()
}

/// Wraps styled runs to the content width.
///
/// Whole runs move between rows; a run is split only when it is longer than
/// the content width itself, and then preferably at a space.
pub(crate) fn wrap_runs(runs: &[StyledRun], width: usize) -> Vec<RunVec> {
    let width = width.max(1);
    let mut rows: Vec<RunVec> = Vec::new();
    let mut current = RunVec::new();
    let mut col = 0usize;

    for run in runs {
        let len = text_len(&run.text);
        if len == 0 {
            continue;
        }

        if col + len <= width {
            current.push(run.clone());
            col += len;
            continue;
        }

        if len <= width {
            rows.push(std::mem::take(&mut current));
            current.push(run.clone());
            col = len;
            continue;
        }

        // Oversize run: restart at a row boundary and split to full width.
        if col > 0 {
            rows.push(std::mem::take(&mut current));
            col = 0;
        }
        let mut rest = run.text.as_str();
        loop {
            if text_len(rest) <= width {
                if !rest.is_empty() {
                    current.push(StyledRun { style: run.style, text: rest.to_owned() });
                    col = text_len(rest);
                }
                break;
            }
            let (head, tail) = split_at_width(rest, width);
            current.push(StyledRun { style: run.style, text: head.to_owned() });
            rows.push(std::mem::take(&mut current));
            rest = tail;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn split_at_width(text: &str, max_chars: usize) -> (&str, &str) {
    let mut limit = text.len();
    for (count, (idx, _)) in text.char_indices().enumerate() {
        if count == max_chars {
            limit = idx;
            break;
        }
    }

    let window = &text[..limit];
    match window.rfind(' ') {
        Some(0) | None => (window, &text[limit..]),
        Some(space_idx) => (&text[..space_idx], &text[space_idx + 1..]),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_report, wrap_runs};
    use crate::model::{GeneratedOutput, IntakeRecord, SectionKind, Session};
    use crate::render::inline::{tokenize_line, RunStyle, StyledRun};
    use crate::render::text::text_len;
    use crate::render::PageOptions;

    fn report_with(build: impl FnOnce(&mut GeneratedOutput)) -> Session {
        let mut output = GeneratedOutput::default();
        build(&mut output);
        let mut session = Session::new(IntakeRecord::default());
        session.apply_generated(1, &output);
        session
    }

    fn options(width: usize, rows: usize) -> PageOptions {
        PageOptions { content_width: width, page_rows: rows, section_start_rows: 4 }
    }

    #[test]
    fn empty_sections_are_skipped() {
        let session = report_with(|output| {
            output.precautions = "[ ] Fall precautions".to_owned();
        });
        let doc = render_report(session.report(), &PageOptions::default());

        assert_eq!(doc.pages.len(), 1);
        let titles: Vec<_> = doc.pages[0]
            .rows
            .iter()
            .flat_map(|row| &row.runs)
            .filter(|run| run.style == RunStyle::Bold)
            .map(|run| run.text.clone())
            .collect();
        assert_eq!(titles, vec![SectionKind::Precautions.title().to_owned()]);
    }

    #[test]
    fn rows_never_exceed_the_content_width() {
        let session = report_with(|output| {
            output.clinical_note =
                "**Subjective:** resident reports a persistent productive cough with exertional dyspnea over the last four days"
                    .to_owned();
        });
        let doc = render_report(session.report(), &options(32, 40));

        for page in &doc.pages {
            for row in &page.rows {
                let total: usize = row.runs.iter().map(|run| text_len(&run.text)).sum();
                assert!(total <= 32, "row too wide: {total}");
            }
        }
    }

    #[test]
    fn pages_respect_the_row_limit() {
        let many_lines = (0..40).map(|n| format!("[ ] item {n}")).collect::<Vec<_>>().join("\n");
        let session = report_with(|output| output.audit_checklist = many_lines);
        let doc = render_report(session.report(), &options(60, 8));

        assert!(doc.pages.len() > 1);
        for page in &doc.pages {
            assert!(page.rows.len() <= 8);
        }
    }

    #[test]
    fn section_title_is_not_orphaned_at_the_page_bottom() {
        // First section fills the page to one free row; the next title must
        // open the following page.
        let filler = (0..5).map(|n| format!("code {n}")).collect::<Vec<_>>().join("\n");
        let session = report_with(|output| {
            output.icd10_codes = filler;
            output.precautions = "[ ] Fall precautions".to_owned();
        });
        let doc = render_report(session.report(), &options(60, 8));

        assert_eq!(doc.pages.len(), 2);
        let first_run = &doc.pages[1].rows[0].runs[0];
        assert_eq!(first_run.style, RunStyle::Bold);
        assert_eq!(first_run.text, SectionKind::Precautions.title());
    }

    #[test]
    fn short_styled_runs_are_never_split_across_rows() {
        let session = report_with(|output| {
            output.clinical_note =
                "several leading words here then BP: [PLACEHOLDER: one twenty over eighty] trailing"
                    .to_owned();
        });
        let doc = render_report(session.report(), &options(40, 40));

        let placeholder_runs: Vec<_> = doc
            .pages
            .iter()
            .flat_map(|page| &page.rows)
            .flat_map(|row| &row.runs)
            .filter(|run| run.style == RunStyle::Placeholder)
            .collect();
        assert_eq!(placeholder_runs.len(), 1);
        assert_eq!(placeholder_runs[0].text, "one twenty over eighty");
    }

    #[test]
    fn rendering_is_pure() {
        let session = report_with(|output| {
            output.clinical_note = "**Plan:**\nfollow up in 2 weeks".to_owned();
            output.recommendations = "[ ] cardiology consult".to_owned();
        });
        let opts = PageOptions::default();
        assert_eq!(
            render_report(session.report(), &opts),
            render_report(session.report(), &opts)
        );
    }

    #[test]
    fn empty_report_renders_no_pages() {
        let session = Session::new(IntakeRecord::default());
        let doc = render_report(session.report(), &PageOptions::default());
        assert!(doc.pages.is_empty());
    }

    #[test]
    fn wrap_packs_whole_runs_first() {
        let runs = tokenize_line("[ ] BP today [PLACEHOLDER: value]");
        let rows = wrap_runs(&runs, 80);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn wrap_splits_oversize_runs_at_spaces() {
        let runs = vec![StyledRun::normal("alpha beta gamma delta")];
        let rows = wrap_runs(&runs, 12);

        let texts: Vec<_> = rows
            .iter()
            .map(|row| row.iter().map(|run| run.text.clone()).collect::<String>())
            .collect();
        assert_eq!(texts, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn wrap_hard_splits_unbroken_oversize_runs() {
        let runs = vec![StyledRun::normal("0123456789ABCDEF")];
        let rows = wrap_runs(&runs, 10);

        let texts: Vec<_> = rows
            .iter()
            .map(|row| row.iter().map(|run| run.text.clone()).collect::<String>())
            .collect();
        assert_eq!(texts, vec!["0123456789", "ABCDEF"]);
    }

    #[test]
    fn wrap_of_an_empty_line_yields_one_blank_row() {
        let rows = wrap_runs(&[], 40);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_empty());
    }
}
