use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::normalize::fold_for_matching;

/// Patterns run on folded text (no accents, lower-case).
static RE_CODE_JAUNE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"code\s+jaune|^cj\b").expect("Invalid Code Jaune regex"));
static RE_SIGNES_CLINIQUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"signes\s+cliniques\s*:").expect("Invalid clinical signs regex"));
static RE_ONSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"debut\s+(?:des\s+symptomes)?|heure\s+de\s+debut").expect("Invalid onset regex")
});
static RE_ONSET_UNKNOWN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"pas\s+de\s+renseignement\s+pour\s+l['’]heure|heure\s+inconnue")
        .expect("Invalid unknown-onset regex")
});
static RE_NIHSS_FLAGGED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nihss\s+(?:manquant|non\s+renseigne)").expect("Invalid NIHSS regex")
});

/// A mandatory Code Jaune field found missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    SignesCliniques,
    HeureDebut,
    Nihss,
    /// NIHSS mentioned but explicitly marked as missing.
    NihssMarkedMissing,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignesCliniques => "Signes cliniques",
            Self::HeureDebut => "Heure de début des symptômes",
            Self::Nihss => "Score NIHSS",
            Self::NihssMarkedMissing => "Score NIHSS (marqué comme manquant)",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeJauneValidation {
    pub is_code_jaune: bool,
    pub is_valid: bool,
    pub missing_fields: Vec<MissingField>,
}

impl CodeJauneValidation {
    fn not_code_jaune() -> Self {
        Self {
            is_code_jaune: false,
            is_valid: true,
            missing_fields: Vec::new(),
        }
    }

    /// Code Jaune report with at least one mandatory field missing.
    pub fn blocks_export(&self) -> bool {
        self.is_code_jaune && !self.is_valid
    }

    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing_fields.iter().map(MissingField::label).collect()
    }
}

/// Check a reformulated indication for the mandatory Code Jaune fields.
///
/// Text that is not a Code Jaune report is always valid. An explicit
/// "time unknown" statement still counts as a missing onset time.
pub fn validate_code_jaune(indication: &str) -> CodeJauneValidation {
    if indication.is_empty() {
        return CodeJauneValidation::not_code_jaune();
    }

    let folded = fold_for_matching(indication);
    if !RE_CODE_JAUNE.is_match(&folded) {
        return CodeJauneValidation::not_code_jaune();
    }

    let mut missing_fields = Vec::new();

    if !RE_SIGNES_CLINIQUES.is_match(&folded) {
        missing_fields.push(MissingField::SignesCliniques);
    }

    let has_onset = RE_ONSET.is_match(&folded) && !RE_ONSET_UNKNOWN.is_match(&folded);
    if !has_onset {
        missing_fields.push(MissingField::HeureDebut);
    }

    if !folded.contains("nihss") {
        missing_fields.push(MissingField::Nihss);
    } else if RE_NIHSS_FLAGGED.is_match(&folded) {
        missing_fields.push(MissingField::NihssMarkedMissing);
    }

    tracing::debug!(missing = missing_fields.len(), "Code Jaune report checked");

    CodeJauneValidation {
        is_code_jaune: true,
        is_valid: missing_fields.is_empty(),
        missing_fields,
    }
}

/// Operator-facing message listing the missing fields. Empty when none.
pub fn code_jaune_error_message(missing_fields: &[MissingField]) -> String {
    if missing_fields.is_empty() {
        return String::new();
    }

    let bullets: Vec<String> = missing_fields
        .iter()
        .map(|field| format!("  • {}", field.label()))
        .collect();

    format!(
        "⚠️ PROTOCOLE CODE JAUNE INCOMPLET\n\n\
         Champs manquants obligatoires:\n\
         {}\n\n\
         Le protocole Code Jaune (AVC) nécessite ces informations critiques pour une prise en charge optimale.\n\n\
         Veuillez compléter l'indication avant d'exporter.",
        bullets.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = "CODE JAUNE -
Signes cliniques : Hémiparésie droite, dysarthrie
Début des symptômes à 14h30
NIHSS 8 sur table
Antécédents : HTA, diabète
Contexte : Patient retrouvé à domicile
AVC ?";

    // ── Non Code Jaune ─────────────────────────────────────

    #[test]
    fn empty_indication_is_valid() {
        let result = validate_code_jaune("");
        assert!(result.is_valid);
        assert!(!result.is_code_jaune);
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn regular_indication_passes_through() {
        let result = validate_code_jaune("Suspicion appendicite");
        assert_eq!(
            result,
            CodeJauneValidation {
                is_code_jaune: false,
                is_valid: true,
                missing_fields: vec![],
            }
        );
    }

    #[test]
    fn cj_inside_a_word_is_not_detected() {
        let result = validate_code_jaune("H 45 ans, douleur abdominale. CJD ?");
        assert!(!result.is_code_jaune);
    }

    // ── Detection ──────────────────────────────────────────

    #[test]
    fn detects_code_jaune_text() {
        assert!(validate_code_jaune("CODE JAUNE - Signes cliniques: hémiparésie").is_code_jaune);
        assert!(validate_code_jaune("Patient en code   jaune").is_code_jaune);
    }

    #[test]
    fn detects_cj_abbreviation_at_start() {
        assert!(validate_code_jaune("CJ signes cliniques: aphasie").is_code_jaune);
        assert!(!validate_code_jaune("Bilan CJ").is_code_jaune);
    }

    // ── Complete ───────────────────────────────────────────

    #[test]
    fn complete_code_jaune_is_valid() {
        let result = validate_code_jaune(COMPLETE);
        assert!(result.is_code_jaune);
        assert!(result.is_valid);
        assert!(result.missing_fields.is_empty());
        assert!(!result.blocks_export());
    }

    #[test]
    fn heure_de_debut_counts_as_onset() {
        let text = "Code Jaune\nSignes cliniques : aphasie\nHeure de début 9h\nNIHSS 4";
        assert!(validate_code_jaune(text).is_valid);
    }

    // ── Incomplete ─────────────────────────────────────────

    #[test]
    fn missing_clinical_signs() {
        let result = validate_code_jaune("CODE JAUNE\nDébut des symptômes à 14h\nNIHSS 8");
        assert!(!result.is_valid);
        assert_eq!(result.missing_fields, vec![MissingField::SignesCliniques]);
    }

    #[test]
    fn clinical_signs_require_colon() {
        let result = validate_code_jaune("CJ signes cliniques aphasie\nDébut des symptômes à 14h\nNIHSS 8");
        assert_eq!(result.missing_fields, vec![MissingField::SignesCliniques]);
    }

    #[test]
    fn missing_onset_time() {
        let result = validate_code_jaune("CODE JAUNE\nSignes cliniques : Hémiparésie\nNIHSS 8");
        assert_eq!(result.missing_fields, vec![MissingField::HeureDebut]);
    }

    #[test]
    fn missing_nihss() {
        let result =
            validate_code_jaune("CODE JAUNE\nSignes cliniques : Hémiparésie\nDébut des symptômes à 14h");
        assert_eq!(result.missing_fields, vec![MissingField::Nihss]);
        assert_eq!(result.missing_labels(), vec!["Score NIHSS"]);
    }

    #[test]
    fn nihss_marked_missing() {
        let result = validate_code_jaune(
            "CODE JAUNE\nSignes cliniques : Hémiparésie\nDébut des symptômes à 14h\nNIHSS manquant",
        );
        assert!(result.is_code_jaune);
        assert!(!result.is_valid);
        assert_eq!(result.missing_labels(), vec!["Score NIHSS (marqué comme manquant)"]);
    }

    #[test]
    fn nihss_non_renseigne_with_accent() {
        let result = validate_code_jaune(
            "CODE JAUNE\nSignes cliniques : aphasie\nDébut des symptômes à 8h\nNIHSS non renseigné",
        );
        assert_eq!(result.missing_fields, vec![MissingField::NihssMarkedMissing]);
    }

    #[test]
    fn onset_marked_unknown_is_missing() {
        let result = validate_code_jaune(
            "CODE JAUNE\nSignes cliniques : Hémiparésie\nPas de renseignement pour l'heure de début\nNIHSS 8",
        );
        assert!(result.is_code_jaune);
        assert!(!result.is_valid);
        assert_eq!(result.missing_labels(), vec!["Heure de début des symptômes"]);
    }

    #[test]
    fn unknown_onset_wins_over_stated_time() {
        let result = validate_code_jaune(
            "CODE JAUNE\nSignes cliniques : aphasie\nDébut des symptômes à 10h ? heure inconnue\nNIHSS 3",
        );
        assert_eq!(result.missing_fields, vec![MissingField::HeureDebut]);
    }

    #[test]
    fn everything_missing_in_fixed_order() {
        let result = validate_code_jaune("Code jaune");
        assert_eq!(
            result.missing_fields,
            vec![MissingField::SignesCliniques, MissingField::HeureDebut, MissingField::Nihss]
        );
        assert!(result.blocks_export());
    }

    // ── Error message ──────────────────────────────────────

    #[test]
    fn message_empty_without_missing_fields() {
        assert_eq!(code_jaune_error_message(&[]), "");
    }

    #[test]
    fn message_lists_every_missing_field() {
        let message = code_jaune_error_message(&[
            MissingField::SignesCliniques,
            MissingField::HeureDebut,
            MissingField::Nihss,
        ]);
        assert!(message.starts_with("⚠️ PROTOCOLE CODE JAUNE INCOMPLET"));
        assert!(message.contains("  • Signes cliniques\n  • Heure de début des symptômes\n  • Score NIHSS\n"));
        assert!(message.ends_with("Veuillez compléter l'indication avant d'exporter."));
    }

    #[test]
    fn validation_and_message_are_stable() {
        let text = "CJ\nNIHSS manquant";
        let first = code_jaune_error_message(&validate_code_jaune(text).missing_fields);
        let second = code_jaune_error_message(&validate_code_jaune(text).missing_fields);
        assert_eq!(first, second);
        assert!(first.contains("Score NIHSS (marqué comme manquant)"));
    }
}
