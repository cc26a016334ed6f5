// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::LineId;
use crate::format::marker;

/// Tri-state checkbox semantics of a line.
///
/// A line either never had a checkbox token (`None`) or carries a boolean
/// state. The distinction is fixed at parse time; no mutation grants
/// checkbox semantics to a `None` line short of a whole-section re-parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    None,
    Unchecked,
    Checked,
}

impl CheckState {
    pub fn is_checkable(self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

/// The atomic editable unit of a report section.
///
/// `text` holds the display text with any checkbox token stripped and any
/// placeholder marker left literal. Placeholder status is derived from
/// `text` on demand, so it can never drift from the marker actually
/// present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    text: String,
    check: CheckState,
}

impl Line {
    pub(crate) fn new(id: LineId, text: String, check: CheckState) -> Self {
        Self { id, text, check }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn check(&self) -> CheckState {
        self.check
    }

    pub fn is_placeholder(&self) -> bool {
        marker::find_placeholder(&self.text).is_some()
    }

    /// Content of the first placeholder marker, empty if the line has none.
    pub fn placeholder_content(&self) -> &str {
        marker::placeholder_content(&self.text).unwrap_or("")
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_check(&mut self, check: CheckState) {
        self.check = check;
    }
}
