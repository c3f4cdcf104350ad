//! Report session: one radiology request being prepared.
//!
//! Owns the selection state and keeps the protocol text in step with it.
//! Every mutation goes through the session so the derived protocol is
//! recomputed before the call returns. The generative service and the
//! history store are injected.

use thiserror::Error;
use uuid::Uuid;

use crate::assistant::{
    clinical_analysis_prompt, patient_explanation_prompt, reformulate_indication, AssistantError,
    LanguageModel,
};
use crate::history::{HistoryEntry, HistoryError, HistoryStore};
use crate::models::{
    AorteSub, ContrastAgent, HeadRegion, JointSide, JointType, MainRegion, Phase, SelectionState,
};
use crate::protocol::derive_protocol;
use crate::suggestion::{apply_suggestion, ExternalSuggestion};
use crate::validation::{code_jaune_error_message, validate_code_jaune, MissingField};

pub const EXPORT_DISCLAIMER: &str =
    "⚠️ AVERTISSEMENT: Contenu généré par IA - Vérification médicale requise";
const MISSING_INDICATION: &str = "(Indication manquante)";
const MISSING_PROTOCOL: &str = "(Protocole manquant)";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{message}")]
    CodeJauneIncomplete {
        missing: Vec<MissingField>,
        message: String,
    },

    #[error("Nothing to analyze: no indication or protocol yet")]
    NothingToAnalyze,

    #[error("History entry not found: {0}")]
    HistoryEntryNotFound(Uuid),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

pub struct ReportSession<H: HistoryStore> {
    state: SelectionState,
    protocol: String,
    indication_input: String,
    indication_output: String,
    clinical_analysis: Option<String>,
    patient_explanation: Option<String>,
    history: H,
}

impl<H: HistoryStore> ReportSession<H> {
    pub fn new(contrast_agent: ContrastAgent, history: H) -> Self {
        let state = SelectionState::new(contrast_agent);
        let protocol = derive_protocol(&state);
        Self {
            state,
            protocol,
            indication_input: String::new(),
            indication_output: String::new(),
            clinical_analysis: None,
            patient_explanation: None,
            history,
        }
    }

    // ── Accessors ────────────────────────────────────────

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Current protocol text; empty when nothing is selected.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn indication_input(&self) -> &str {
        &self.indication_input
    }

    pub fn indication_output(&self) -> &str {
        &self.indication_output
    }

    pub fn clinical_analysis_text(&self) -> Option<&str> {
        self.clinical_analysis.as_deref()
    }

    pub fn patient_explanation_text(&self) -> Option<&str> {
        self.patient_explanation.as_deref()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    // ── Selection ────────────────────────────────────────

    fn update(&mut self, change: impl FnOnce(&mut SelectionState)) {
        change(&mut self.state);
        self.protocol = derive_protocol(&self.state);
    }

    pub fn toggle_main_region(&mut self, region: MainRegion) {
        self.update(|s| s.toggle_main_region(region));
    }

    pub fn toggle_head_region(&mut self, region: HeadRegion) {
        self.update(|s| s.toggle_head_region(region));
    }

    pub fn toggle_aorte_sub(&mut self, sub: AorteSub) {
        self.update(|s| s.toggle_aorte_sub(sub));
    }

    pub fn toggle_joint_type(&mut self, joint: JointType) {
        self.update(|s| s.toggle_joint_type(joint));
    }

    pub fn toggle_joint_side(&mut self, side: JointSide) {
        self.update(|s| s.toggle_joint_side(side));
    }

    pub fn toggle_phase(&mut self, phase: Phase) {
        self.update(|s| s.toggle_phase(phase));
    }

    pub fn set_tardif_delay(&mut self, delay: &str) {
        self.update(|s| s.set_tardif_delay(delay));
    }

    pub fn set_contrast_agent(&mut self, agent: ContrastAgent) {
        self.update(|s| s.set_contrast_agent(agent));
    }

    /// Clear every selection; the contrast agent stays.
    pub fn reset_selection(&mut self) {
        self.update(SelectionState::reset);
    }

    pub fn apply_suggestion(&mut self, suggestion: &ExternalSuggestion) {
        self.update(|s| apply_suggestion(s, suggestion));
    }

    // ── Indication ───────────────────────────────────────

    pub fn set_indication_input(&mut self, text: &str) {
        self.indication_input = text.to_string();
    }

    /// Reformulate the raw indication and apply the suggested protocol.
    ///
    /// Returns whether a protocol suggestion was applied. A failure to
    /// record the history entry is logged and does not fail the call.
    pub fn reformulate<M: LanguageModel + ?Sized>(
        &mut self,
        model: &M,
    ) -> Result<bool, SessionError> {
        if self.indication_input.trim().is_empty() {
            return Err(AssistantError::EmptyInput.into());
        }

        self.indication_output.clear();
        self.clinical_analysis = None;

        let result = reformulate_indication(model, &self.indication_input)?;
        self.indication_output = result.reformulation;

        let applied = match &result.protocol {
            Some(suggestion) => {
                self.apply_suggestion(suggestion);
                true
            }
            None => false,
        };

        let entry = HistoryEntry::new(
            &self.indication_input,
            &self.indication_output,
            result.protocol,
        );
        if let Err(e) = self.history.save(entry) {
            tracing::warn!(error = %e, "Failed to record history entry");
        }

        tracing::info!(protocol_applied = applied, "Reformulation complete");
        Ok(applied)
    }

    /// Bring back a past input/output pair and its protocol suggestion.
    pub fn restore_history(&mut self, id: &Uuid) -> Result<(), SessionError> {
        let entry = self
            .history
            .get(id)?
            .ok_or(SessionError::HistoryEntryNotFound(*id))?;

        self.indication_input = entry.input;
        self.indication_output = entry.output;
        if let Some(suggestion) = &entry.protocol {
            self.apply_suggestion(suggestion);
        }
        tracing::info!(%id, "History entry restored");
        Ok(())
    }

    pub fn delete_history_entry(&mut self, id: &Uuid) -> Result<bool, SessionError> {
        Ok(self.history.delete(id)?)
    }

    pub fn clear_history(&mut self) -> Result<(), SessionError> {
        self.history.clear()?;
        tracing::info!("History cleared");
        Ok(())
    }

    // ── Auxiliary analysis ───────────────────────────────

    /// Vigilance points for the reformulated indication.
    pub fn clinical_analysis<M: LanguageModel + ?Sized>(
        &mut self,
        model: &M,
    ) -> Result<&str, SessionError> {
        if self.indication_output.trim().is_empty() {
            return Err(SessionError::NothingToAnalyze);
        }
        let prompt = clinical_analysis_prompt(&self.indication_output);
        let text = model.generate("", &prompt)?;
        let stored = self.clinical_analysis.insert(text.trim().to_string());
        Ok(stored.as_str())
    }

    /// Plain-language explanation of the exam for the patient.
    ///
    /// Uses the reformulated indication, or the raw one before reformulation.
    pub fn patient_explanation<M: LanguageModel + ?Sized>(
        &mut self,
        model: &M,
    ) -> Result<&str, SessionError> {
        if self.protocol.is_empty() && self.indication_output.trim().is_empty() {
            return Err(SessionError::NothingToAnalyze);
        }
        let indication = if self.indication_output.trim().is_empty() {
            &self.indication_input
        } else {
            &self.indication_output
        };
        let prompt = patient_explanation_prompt(&self.protocol, indication);
        let text = model.generate("", &prompt)?;
        let stored = self.patient_explanation.insert(text.trim().to_string());
        Ok(stored.as_str())
    }

    // ── Export ───────────────────────────────────────────

    /// Final report text, blocked while a Code Jaune indication is incomplete.
    pub fn export(&self) -> Result<String, SessionError> {
        let validation = validate_code_jaune(&self.indication_output);
        if validation.blocks_export() {
            tracing::warn!(
                missing = validation.missing_fields.len(),
                "Export blocked: incomplete Code Jaune"
            );
            let message = code_jaune_error_message(&validation.missing_fields);
            return Err(SessionError::CodeJauneIncomplete {
                missing: validation.missing_fields,
                message,
            });
        }

        let indication = if self.indication_output.is_empty() {
            MISSING_INDICATION
        } else {
            &self.indication_output
        };
        let protocol = if self.protocol.is_empty() {
            MISSING_PROTOCOL
        } else {
            &self.protocol
        };
        Ok(format!(
            "{EXPORT_DISCLAIMER}\n\nIndication:\n{indication}\n\nTechnique:\n{protocol}"
        ))
    }
}
