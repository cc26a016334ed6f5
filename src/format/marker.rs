// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inline marker scanning for the generation text convention.
//!
//! A placeholder is the literal `[PLACEHOLDER:` prefix, the convention's
//! single space, free-text content, and the first following `]`. Content
//! cannot itself contain `]` — the scan stops at the first closing bracket.
//! Anything that does not match is plain text; there is no reject path.

use std::fmt;

pub const PLACEHOLDER_OPEN: &str = "[PLACEHOLDER:";

/// Byte offsets of the first placeholder marker within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpan {
    /// Start of `[PLACEHOLDER:`.
    pub start: usize,
    /// One past the closing `]`.
    pub end: usize,
    content_start: usize,
    content_end: usize,
}

impl PlaceholderSpan {
    pub fn content<'a>(&self, text: &'a str) -> &'a str {
        &text[self.content_start..self.content_end]
    }
}

/// Finds the first placeholder marker, if any.
pub fn find_placeholder(text: &str) -> Option<PlaceholderSpan> {
    let start = text.find(PLACEHOLDER_OPEN)?;
    let after_open = start + PLACEHOLDER_OPEN.len();
    let rest = &text[after_open..];

    // The convention always writes one space after the colon; further
    // whitespace belongs to the content.
    let content_start = after_open + usize::from(rest.starts_with(' '));
    let close_rel = text[content_start..].find(']')?;
    let content_end = content_start + close_rel;

    Some(PlaceholderSpan {
        start,
        end: content_end + 1,
        content_start,
        content_end,
    })
}

/// Content of the first placeholder marker, if any.
pub fn placeholder_content(text: &str) -> Option<&str> {
    find_placeholder(text).map(|span| span.content(text))
}

/// Rewrites only the first marker's content, normalizing the envelope to
/// `[PLACEHOLDER: <content>]`. Returns `None` when the text has no marker.
pub fn replace_placeholder_content(text: &str, new_content: &str) -> Option<String> {
    let span = find_placeholder(text)?;
    let mut out = String::with_capacity(
        text.len() - (span.end - span.start) + PLACEHOLDER_OPEN.len() + new_content.len() + 2,
    );
    out.push_str(&text[..span.start]);
    out.push_str(PLACEHOLDER_OPEN);
    out.push(' ');
    out.push_str(new_content);
    out.push(']');
    out.push_str(&text[span.end..]);
    Some(out)
}

/// Subsection headings recognized in the clinical note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteHeading {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl NoteHeading {
    pub const ALL: [Self; 4] = [Self::Subjective, Self::Objective, Self::Assessment, Self::Plan];

    pub fn label(self) -> &'static str {
        match self {
            Self::Subjective => "Subjective",
            Self::Objective => "Objective",
            Self::Assessment => "Assessment",
            Self::Plan => "Plan",
        }
    }
}

impl fmt::Display for NoteHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Matches a `**<Heading>:**` marker at the start of a line and returns the
/// heading plus the untrimmed remainder of the line.
pub fn note_heading(text: &str) -> Option<(NoteHeading, &str)> {
    let rest = text.strip_prefix("**")?;
    for heading in NoteHeading::ALL {
        if let Some(tail) = rest.strip_prefix(heading.label()) {
            if let Some(body) = tail.strip_prefix(":**") {
                return Some((heading, body));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{find_placeholder, note_heading, placeholder_content, replace_placeholder_content};
    use super::NoteHeading;

    #[test]
    fn finds_first_marker_only() {
        let text = "Dx: [PLACEHOLDER: Pneumonia] (ICD-10: [PLACEHOLDER: J18.9])";
        assert_eq!(placeholder_content(text), Some("Pneumonia"));
    }

    #[test]
    fn content_is_not_trimmed_beyond_the_conventional_space() {
        assert_eq!(placeholder_content("[PLACEHOLDER:  padded]"), Some(" padded"));
        assert_eq!(placeholder_content("[PLACEHOLDER: x ]"), Some("x "));
        assert_eq!(placeholder_content("[PLACEHOLDER:]"), Some(""));
    }

    #[test]
    fn unterminated_marker_is_plain_text() {
        assert_eq!(find_placeholder("[PLACEHOLDER: never closed"), None);
        assert_eq!(find_placeholder("see [ref 3] for details"), None);
    }

    #[test]
    fn content_stops_at_the_first_closing_bracket() {
        // Known format constraint: content must not contain ']'.
        assert_eq!(placeholder_content("[PLACEHOLDER: a]b]"), Some("a"));
    }

    #[test]
    fn replace_preserves_the_envelope() {
        let text = "BP: [PLACEHOLDER: value] mmHg";
        assert_eq!(
            replace_placeholder_content(text, "NewVal").as_deref(),
            Some("BP: [PLACEHOLDER: NewVal] mmHg")
        );
        assert_eq!(
            replace_placeholder_content("[PLACEHOLDER: value]", "NewVal").as_deref(),
            Some("[PLACEHOLDER: NewVal]")
        );
    }

    #[test]
    fn replace_touches_only_the_first_marker() {
        let text = "[PLACEHOLDER: a] then [PLACEHOLDER: b]";
        assert_eq!(
            replace_placeholder_content(text, "z").as_deref(),
            Some("[PLACEHOLDER: z] then [PLACEHOLDER: b]")
        );
    }

    #[test]
    fn replace_on_plain_text_returns_none() {
        assert_eq!(replace_placeholder_content("no marker here", "x"), None);
    }

    #[test]
    fn note_heading_requires_start_of_line() {
        let (heading, rest) = note_heading("**Subjective:** pt reports cough").expect("heading");
        assert_eq!(heading, NoteHeading::Subjective);
        assert_eq!(rest, " pt reports cough");

        assert_eq!(note_heading("intro **Objective:** text"), None);
        assert_eq!(note_heading("**History:** text"), None);
        assert_eq!(note_heading("**Plan:**"), Some((NoteHeading::Plan, "")));
    }
}
