// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chartmate — terminal-first clinical documentation assistant.
//!
//! Structured intake goes to an opaque note-generation collaborator; the
//! returned text is parsed into an editable line model, edited in place
//! (checkboxes, placeholder resolution, raw-text mode), and exported as a
//! paginated styled document.

pub mod assist;
pub mod export;
pub mod format;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
