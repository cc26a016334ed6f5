// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing and serialization of the generation text convention.

pub mod lines;
pub mod marker;

pub use lines::{parse_section, serialize_line, serialize_section, CHECKED_TOKEN, UNCHECKED_TOKEN};
pub use marker::{
    find_placeholder, note_heading, placeholder_content, replace_placeholder_content, NoteHeading,
    PlaceholderSpan, PLACEHOLDER_OPEN,
};
