// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use chartmate::model::{GeneratedOutput, IntakeRecord, Session};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumChecklists,
    LargeLongLines,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumChecklists => "medium_checklists",
            Self::LargeLongLines => "large_long_lines",
        }
    }

    fn line_count(self) -> usize {
        match self {
            Self::Small => 12,
            Self::MediumChecklists => 120,
            Self::LargeLongLines => 400,
        }
    }

    fn line(self, index: usize) -> String {
        match self {
            Self::Small => match index % 3 {
                0 => format!("[ ] checklist item {index}"),
                1 => format!("plain narrative line {index}"),
                _ => format!("Dx {index}: [PLACEHOLDER: diagnosis {index}]"),
            },
            Self::MediumChecklists => {
                let mark = if index % 2 == 0 { "[x]" } else { "[ ]" };
                format!("{mark} audit item {index}. Fix -> [PLACEHOLDER: action {index}]")
            }
            Self::LargeLongLines => format!(
                "**Assessment:** case {index} — {} (ICD-10: [PLACEHOLDER: code {index}]) with extended narrative content repeated for width {}",
                "[PLACEHOLDER: working diagnosis]",
                "lorem ipsum dolor sit amet ".repeat(4).trim_end()
            ),
        }
    }
}

/// One section blob for the parse benchmarks.
pub fn section_blob(case: Case) -> String {
    (0..case.line_count())
        .map(|index| case.line(index))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A fully populated session for the render benchmarks.
pub fn session(case: Case) -> Session {
    let blob = section_blob(case);
    let output = GeneratedOutput {
        clinical_note: blob.clone(),
        icd10_codes: blob.clone(),
        audit_checklist: blob.clone(),
        precautions: blob.clone(),
        recommendations: blob,
        ..GeneratedOutput::default()
    };
    let mut session = Session::new(IntakeRecord::default());
    session.apply_generated(1, &output);
    session
}

/// Cheap stable digest so benchmark bodies cannot be optimized away.
pub fn checksum(text: &str) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for byte in text.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
