// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in deterministic collaborator.
//!
//! Used by demo mode, headless export, and tests. Output is canned but
//! follows the full text convention: SOAP headers, checkbox prefixes, and
//! a `[PLACEHOLDER: …]` marker for every fact the intake does not supply.
//! Nothing is fabricated from thin air; missing data stays a placeholder.

use crate::model::{GeneratedOutput, IntakePatch, IntakeRecord};

use super::{AssistError, NoteAssistant};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedAssistant;

impl ScriptedAssistant {
    pub fn new() -> Self {
        Self
    }
}

fn or_placeholder(value: &str, hint: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        format!("[PLACEHOLDER: {hint}]")
    } else {
        trimmed.to_owned()
    }
}

fn audit_item(present: bool, label: &str, fix_hint: &str) -> String {
    if present {
        format!("[x] {label}")
    } else {
        format!("[ ] {label} Fix -> [PLACEHOLDER: {fix_hint}]")
    }
}

fn clinical_note(intake: &IntakeRecord) -> String {
    let name = or_placeholder(&intake.patient_name, "Patient name");
    let age = if intake.patient_age == 0 {
        "[PLACEHOLDER: age]".to_owned()
    } else {
        intake.patient_age.to_string()
    };
    let sex = or_placeholder(&intake.patient_sex, "sex");
    let complaint = or_placeholder(&intake.visit_chief_complaint, "chief complaint");
    let hpi = or_placeholder(&intake.history_hpi, "HPI details");

    let mut note = String::new();
    note.push_str(&format!(
        "**Subjective:** {name} is a {age}-year-old {sex} presenting with {complaint}. {hpi}\n"
    ));
    note.push_str("**Objective:**\n");
    note.push_str(&format!(
        "Vitals: {}\n",
        or_placeholder(
            &intake.clinical_vitals,
            "Vitals — T(°F), HR, BP, RR, SpO2(%), Weight(lb)"
        )
    ));
    note.push_str(&format!(
        "Exam: {}\n",
        or_placeholder(&intake.clinical_ros_pe_clues, "ROS/PE findings")
    ));
    note.push_str(&format!(
        "Labs/Imaging: {}\n",
        or_placeholder(&intake.clinical_labs_imaging, "salient labs/imaging")
    ));
    note.push_str("**Assessment:**\n");
    note.push_str("[PLACEHOLDER: Primary diagnosis] (ICD-10: [PLACEHOLDER: code]) —\n");
    note.push_str("Status/Severity: [PLACEHOLDER: stable/worsening; stage/class];\n");
    note.push_str("Key Data informing decision: [PLACEHOLDER: salient labs/imaging/exam];\n");
    note.push_str("MEAT: M[ ] E[ ] A[ ] T[ ]\n");
    note.push_str("**Plan:**\n");
    note.push_str(&format!(
        "Medications: {}\n",
        or_placeholder(&intake.medications, "dose/route/freq")
    ));
    note.push_str("Follow-up: [PLACEHOLDER: interval]");
    note
}

fn cpt_codes(intake: &IntakeRecord) -> String {
    match intake.visit_setting.as_str() {
        "SNF" => "99308: Subsequent Nursing Facility Care - Basis: Moderate MDM".to_owned(),
        "Clinic" => "99213: Established Patient Office Visit - Basis: Low MDM".to_owned(),
        "ED" => "99284: Emergency Department Visit - Basis: Moderate MDM".to_owned(),
        _ => "[PLACEHOLDER: E/M code] - Basis: [PLACEHOLDER: MDM level]".to_owned(),
    }
}

fn uspstf(intake: &IntakeRecord) -> String {
    if intake.patient_age >= 45 {
        "Colorectal Cancer Screening: Eligible due to age. Action: [PLACEHOLDER: Discuss FIT vs. colonoscopy options].".to_owned()
    } else if intake.patient_age > 0 {
        "No age/sex/condition-based preventive services detected".to_owned()
    } else {
        "[PLACEHOLDER: Preventive services pending demographics]".to_owned()
    }
}

impl NoteAssistant for ScriptedAssistant {
    fn generate_note(&self, intake: &IntakeRecord) -> Result<GeneratedOutput, AssistError> {
        let audit = [
            audit_item(
                !intake.visit_chief_complaint.trim().is_empty(),
                "Chief Complaint present and HPI specific.",
                "Expand HPI",
            ),
            audit_item(
                !intake.clinical_vitals.trim().is_empty(),
                "Vitals documented.",
                "Record T, HR, BP, RR, SpO2",
            ),
            audit_item(
                !intake.medications.trim().is_empty(),
                "Medication list reconciled.",
                "Reconcile medication list",
            ),
            audit_item(
                !intake.time_mentioned.trim().is_empty(),
                "Time documented for time-based billing.",
                "Add total time",
            ),
        ]
        .join("\n");

        let precautions = if intake.risk_scores.to_lowercase().contains("morse") {
            "[ ] Fall precautions due to positive Morse score.\n[ ] Bed in lowest position, call light in reach."
        } else {
            "[ ] Fall precautions [PLACEHOLDER: indication].\n[ ] Skin integrity checks [PLACEHOLDER: interval]."
        };

        Ok(GeneratedOutput {
            clinical_note: clinical_note(intake),
            icd10_codes: "[PLACEHOLDER: Primary ICD-10]: [PLACEHOLDER: description]\nZ71.89: Other specified counseling".to_owned(),
            cpt_codes: cpt_codes(intake),
            uspstf_recommendations: uspstf(intake),
            mips_quality_measures: "Documentation of Current Medications (MIPS #130): Macro: meds reviewed [PLACEHOLDER: date].".to_owned(),
            cdi_suggestions: "CDI: Specify acuity and laterality for [PLACEHOLDER: condition].\nCDI: Link findings to the diagnosis they support.".to_owned(),
            audit_checklist: audit,
            precautions: precautions.to_owned(),
            recommendations: "[ ] Recommend follow-up with [PLACEHOLDER: specialty] for ongoing management.\n[ ] Reassess in [PLACEHOLDER: interval].".to_owned(),
        })
    }

    fn autofill(&self, text: &str) -> Result<IntakePatch, AssistError> {
        let mut patch = IntakePatch::default();
        for line in text.split('\n') {
            let Some((label, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match label.trim().to_lowercase().as_str() {
                "name" | "patient" | "patient name" => {
                    patch.patient_name = Some(value.to_owned());
                }
                "age" => patch.patient_age = value.parse().ok(),
                "sex" => patch.patient_sex = Some(value.to_owned()),
                "cc" | "chief complaint" => {
                    patch.visit_chief_complaint = Some(value.to_owned());
                }
                "setting" => patch.visit_setting = Some(value.to_owned()),
                "specialty" => patch.visit_specialty = Some(value.to_owned()),
                "hpi" => patch.history_hpi = Some(value.to_owned()),
                "meds" | "medications" => patch.medications = Some(value.to_owned()),
                "allergies" => patch.allergies = Some(value.to_owned()),
                "vitals" => patch.clinical_vitals = Some(value.to_owned()),
                _ => {}
            }
        }
        Ok(patch)
    }

    fn field_suggestions(
        &self,
        context: &IntakeRecord,
        placeholder: &str,
    ) -> Result<Vec<String>, AssistError> {
        let needle = placeholder.to_lowercase();
        let mut suggestions = Vec::new();

        if needle.contains("vitals") {
            if !context.clinical_vitals.trim().is_empty() {
                suggestions.push(context.clinical_vitals.trim().to_owned());
            }
            suggestions.push("T 98.6°F, HR 72, BP 128/76, RR 16, SpO2 97% RA".to_owned());
        } else if needle.contains("diagnosis") || needle.contains("condition") {
            if !context.visit_chief_complaint.trim().is_empty() {
                suggestions
                    .push(format!("Evaluation of {}", context.visit_chief_complaint.trim()));
            }
        } else if needle.contains("icd") || needle.contains("code") {
            suggestions.push("J18.9".to_owned());
            suggestions.push("I10".to_owned());
            suggestions.push("E11.9".to_owned());
        } else if needle.contains("interval") || needle.contains("follow") {
            suggestions.push("1-2 weeks".to_owned());
            suggestions.push("2-4 weeks".to_owned());
            suggestions.push("3 months".to_owned());
        } else if needle.contains("bp") || needle.contains("blood pressure") {
            suggestions.push("128/76 mmHg".to_owned());
            suggestions.push("118/70 mmHg".to_owned());
        }

        Ok(suggestions)
    }
}

/// Intake used by `--demo` and the demo TUI session.
pub fn demo_intake() -> IntakeRecord {
    IntakeRecord {
        patient_name: "Doe, J".to_owned(),
        patient_age: 72,
        patient_sex: "F".to_owned(),
        visit_chief_complaint: "productive cough".to_owned(),
        visit_setting: "SNF".to_owned(),
        visit_specialty: "Internal Medicine".to_owned(),
        note_style: "Progress".to_owned(),
        history_hpi: "Four days of productive cough with exertional dyspnea.".to_owned(),
        medications: "Lisinopril 10 mg PO daily".to_owned(),
        risk_scores: "Morse 55".to_owned(),
        provider_role: "MD/DO".to_owned(),
        ..IntakeRecord::default()
    }
}
