// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session holds the intake record plus the editable report: nine
//! sections of ordered lines, each line carrying tri-state checkbox
//! semantics and (derived) placeholder status.

pub mod ids;
pub mod intake;
pub mod line;
pub mod report;
pub mod section;
pub mod session;

pub use ids::{LineId, LineIdAllocator};
pub use intake::{GeneratedOutput, IntakePatch, IntakeRecord};
pub use line::{CheckState, Line};
pub use report::Report;
pub use section::{ParseSectionKindError, Section, SectionKind};
pub use session::Session;
