// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end flow: generate, edit, serialize, paginate, export text.

use chartmate::assist::scripted::{demo_intake, ScriptedAssistant};
use chartmate::assist::NoteAssistant;
use chartmate::format::{parse_section, serialize_section};
use chartmate::model::{LineIdAllocator, SectionKind, Session};
use chartmate::ops::{self, Op};
use chartmate::query::{note_outline, SearchMode};
use chartmate::render::{document_to_text, render_report, PageOptions};

fn generated_session() -> Session {
    let intake = demo_intake();
    let output = ScriptedAssistant::new().generate_note(&intake).expect("generate");
    let mut session = Session::new(intake);
    session.apply_generated(1, &output);
    session
}

#[test]
fn generation_populates_every_convention() {
    let session = generated_session();

    let note = session.report().section(SectionKind::ClinicalNote);
    assert!(!note.is_empty());
    let outline = note_outline(note);
    assert_eq!(outline.len(), 4);

    let audit = session.report().section(SectionKind::AuditChecklist);
    assert!(audit.lines().iter().all(|line| line.check().is_checkable()));
    assert!(audit.lines().iter().any(|line| line.check().is_checked()));

    assert!(note.lines().iter().any(|line| line.is_placeholder()));
}

#[test]
fn edited_report_round_trips_through_the_raw_form() {
    let mut session = generated_session();
    let kind = SectionKind::Precautions;

    let first = session.report().section(kind).lines()[0].id();
    ops::apply(
        &mut session,
        &[
            Op::SetCheck { section: kind, line_id: first, checked: true },
            Op::AddLine { section: kind },
        ],
    );

    let lines = session.report().section(kind).lines().to_vec();
    let raw = serialize_section(&lines);
    let reparsed = parse_section(&raw, &mut LineIdAllocator::new());

    assert_eq!(lines.len(), reparsed.len());
    for (a, b) in lines.iter().zip(&reparsed) {
        assert_eq!(a.text(), b.text());
        assert_eq!(a.check(), b.check());
        assert_eq!(a.placeholder_content(), b.placeholder_content());
    }
}

#[test]
fn placeholder_resolution_feeds_the_export() {
    let mut session = generated_session();
    let kind = SectionKind::ClinicalNote;

    let vitals_line = session
        .report()
        .section(kind)
        .lines()
        .iter()
        .find(|line| line.placeholder_content().starts_with("Vitals"))
        .expect("vitals placeholder")
        .id();

    let suggestions = ScriptedAssistant::new()
        .field_suggestions(session.intake(), "Vitals — T(°F), HR, BP, RR, SpO2(%), Weight(lb)")
        .expect("suggestions");
    assert!(!suggestions.is_empty() && suggestions.len() <= 5);

    ops::apply(
        &mut session,
        &[Op::ReplaceLine {
            section: kind,
            line_id: vitals_line,
            text: suggestions[0].clone(),
        }],
    );

    let doc = render_report(session.report(), &PageOptions::default());
    let text = document_to_text(&doc);
    assert!(text.contains(&suggestions[0]));
    assert!(!text.contains("PLACEHOLDER: Vitals"));
}

#[test]
fn export_text_lists_sections_in_canonical_order() {
    let session = generated_session();
    let doc = render_report(session.report(), &PageOptions::default());
    let text = document_to_text(&doc);

    let mut last = 0;
    for kind in SectionKind::ALL {
        if session.report().section(kind).is_empty() {
            continue;
        }
        let position = text.find(kind.title()).unwrap_or_else(|| {
            panic!("missing section title in export: {}", kind.title())
        });
        assert!(position >= last, "section out of order: {}", kind.title());
        last = position;
    }

    assert!(text.contains('☐'));
    assert!(text.contains('☑'));
    // Bold and placeholder delimiters never leak into the styled export.
    assert!(!text.contains("**"));
    assert!(!text.contains("[PLACEHOLDER:"));
}

#[test]
fn narrow_pages_stay_within_their_geometry() {
    let session = generated_session();
    let options = PageOptions { content_width: 36, page_rows: 16, section_start_rows: 4 };
    let doc = render_report(session.report(), &options);

    assert!(doc.pages.len() > 1);
    for page in &doc.pages {
        assert!(page.rows.len() <= 16);
        for row in &page.rows {
            let width: usize = row.runs.iter().map(|run| run.text.chars().count()).sum();
            assert!(width <= 36, "row exceeds width: {width}");
        }
    }
}

#[test]
fn raw_edit_mode_commits_arbitrary_text_without_errors() {
    let mut session = generated_session();
    let kind = SectionKind::CdiSuggestions;

    ops::enter_raw_edit(&mut session, kind);
    *session.raw_edit_buffer_mut(kind).expect("editing") =
        "]]] stray brackets [PLACEHOLDER: kept]\n\n[x]done".to_owned();
    ops::commit_raw_edit(&mut session, kind).expect("was editing");

    let lines = session.report().section(kind).lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].is_placeholder());
    assert_eq!(lines[1].text(), "");
    assert!(lines[2].check().is_checked());

    let hits = chartmate::query::line_search(session.report(), "stray", SearchMode::Substring)
        .expect("search");
    assert_eq!(hits.len(), 1);
}
