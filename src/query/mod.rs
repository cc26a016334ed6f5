// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-side views over the report: derived groupings and search.

pub mod outline;
pub mod search;

pub use outline::{note_outline, NoteSubsection, OutlineRow};
pub use search::{line_search, SearchHit, SearchMode};
