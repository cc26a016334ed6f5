// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire types shared with the note-generation collaborator.
//!
//! The intake record is a flat catalogue of free-text and enumerated fields;
//! the generated output is nine text blobs following the line conventions in
//! `format` (checkbox prefixes, `[PLACEHOLDER: …]` markers, `**Header:**`
//! subsection markers in the clinical note).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::section::SectionKind;

pub const NOTE_STYLE_OPTIONS: [&str; 4] = ["Progress", "SOAP", "H&P", "DAP"];
pub const SETTING_OPTIONS: [&str; 9] =
    ["SNF", "ALF", "ED", "IP", "Clinic", "Tele", "UC", "ASC", "Rehab"];
pub const SPECIALTY_OPTIONS: [&str; 12] = [
    "Internal Medicine",
    "Cardiology",
    "Infectious Disease",
    "Endocrinology",
    "Neurology",
    "Psychiatry",
    "Pulmonology",
    "OB/GYN",
    "Orthopedics",
    "Heme/Onc",
    "Dermatology",
    "PM&R",
];
pub const VISIT_TYPE_OPTIONS: [&str; 2] = ["Initial", "Subsequent"];
pub const PROVIDER_ROLE_OPTIONS: [&str; 2] = ["MD/DO", "NP/PA"];

/// Structured intake for one visit, the full generation context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeRecord {
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_sex: String,
    pub patient_weight_bmi: String,
    pub patient_code_status: String,
    pub patient_decision_maker: String,
    pub visit_chief_complaint: String,
    pub visit_onset_date: String,
    pub visit_duration: String,
    pub visit_initial_vs_subsequent: String,
    pub visit_setting: String,
    pub visit_specialty: String,
    pub note_style: String,
    pub history_hpi: String,
    pub history_pmh: String,
    pub history_psh: String,
    pub history_fh: String,
    pub history_sh: String,
    pub allergies: String,
    pub medications: String,
    pub immunizations: String,
    pub clinical_vitals: String,
    pub clinical_ros_pe_clues: String,
    pub clinical_labs_imaging: String,
    pub risk_scores: String,
    pub mental_status: String,
    pub pain_score: String,
    pub admin_payer_hints: String,
    pub procedures_performed: String,
    pub provider_role: String,
    pub time_mentioned: String,
}

/// Best-effort extraction result; absent fields were not found in the text
/// and are never fabricated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakePatch {
    pub patient_name: Option<String>,
    pub patient_age: Option<u32>,
    pub patient_sex: Option<String>,
    pub patient_weight_bmi: Option<String>,
    pub patient_code_status: Option<String>,
    pub patient_decision_maker: Option<String>,
    pub visit_chief_complaint: Option<String>,
    pub visit_onset_date: Option<String>,
    pub visit_duration: Option<String>,
    pub visit_initial_vs_subsequent: Option<String>,
    pub visit_setting: Option<String>,
    pub visit_specialty: Option<String>,
    pub note_style: Option<String>,
    pub history_hpi: Option<String>,
    pub history_pmh: Option<String>,
    pub history_psh: Option<String>,
    pub history_fh: Option<String>,
    pub history_sh: Option<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub immunizations: Option<String>,
    pub clinical_vitals: Option<String>,
    pub clinical_ros_pe_clues: Option<String>,
    pub clinical_labs_imaging: Option<String>,
    pub risk_scores: Option<String>,
    pub mental_status: Option<String>,
    pub pain_score: Option<String>,
    pub admin_payer_hints: Option<String>,
    pub procedures_performed: Option<String>,
    pub provider_role: Option<String>,
    pub time_mentioned: Option<String>,
}

macro_rules! merge_fields {
    ($patch:expr, $record:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if let Some(value) = $patch.$field.take() {
                $record.$field = value;
            }
        )+
    };
}

impl IntakePatch {
    /// Merges every present field into `record`, leaving absent fields
    /// untouched.
    pub fn apply_to(mut self, record: &mut IntakeRecord) {
        merge_fields!(
            self,
            record,
            [
                patient_name,
                patient_age,
                patient_sex,
                patient_weight_bmi,
                patient_code_status,
                patient_decision_maker,
                visit_chief_complaint,
                visit_onset_date,
                visit_duration,
                visit_initial_vs_subsequent,
                visit_setting,
                visit_specialty,
                note_style,
                history_hpi,
                history_pmh,
                history_psh,
                history_fh,
                history_sh,
                allergies,
                medications,
                immunizations,
                clinical_vitals,
                clinical_ros_pe_clues,
                clinical_labs_imaging,
                risk_scores,
                mental_status,
                pain_score,
                admin_payer_hints,
                procedures_performed,
                provider_role,
                time_mentioned,
            ]
        );
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Raw generation output: one newline-delimited text blob per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedOutput {
    pub clinical_note: String,
    pub icd10_codes: String,
    pub cpt_codes: String,
    pub uspstf_recommendations: String,
    pub mips_quality_measures: String,
    pub cdi_suggestions: String,
    pub audit_checklist: String,
    pub precautions: String,
    pub recommendations: String,
}

impl GeneratedOutput {
    pub fn section_text(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::ClinicalNote => &self.clinical_note,
            SectionKind::Icd10Codes => &self.icd10_codes,
            SectionKind::CptCodes => &self.cpt_codes,
            SectionKind::UspstfRecommendations => &self.uspstf_recommendations,
            SectionKind::MipsQualityMeasures => &self.mips_quality_measures,
            SectionKind::CdiSuggestions => &self.cdi_suggestions,
            SectionKind::AuditChecklist => &self.audit_checklist,
            SectionKind::Precautions => &self.precautions,
            SectionKind::Recommendations => &self.recommendations,
        }
    }

    pub fn section_text_mut(&mut self, kind: SectionKind) -> &mut String {
        match kind {
            SectionKind::ClinicalNote => &mut self.clinical_note,
            SectionKind::Icd10Codes => &mut self.icd10_codes,
            SectionKind::CptCodes => &mut self.cpt_codes,
            SectionKind::UspstfRecommendations => &mut self.uspstf_recommendations,
            SectionKind::MipsQualityMeasures => &mut self.mips_quality_measures,
            SectionKind::CdiSuggestions => &mut self.cdi_suggestions,
            SectionKind::AuditChecklist => &mut self.audit_checklist,
            SectionKind::Precautions => &mut self.precautions,
            SectionKind::Recommendations => &mut self.recommendations,
        }
    }
}
