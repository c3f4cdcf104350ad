use super::types::ExternalSuggestion;
use crate::models::SelectionState;

/// Overlay a suggestion onto the current selection.
///
/// Overwrites the region and phase flags the suggestion vocabulary covers.
/// The aorta flag and extent, joint types and sides and the contrast agent
/// are left as they are, and so is the delay value. A suggested delay is
/// taken only alongside a suggested delayed phase.
pub fn apply_suggestion(state: &mut SelectionState, suggestion: &ExternalSuggestion) {
    let regions = &suggestion.regions;
    let main = &mut state.main_regions;
    main.total_body = regions.total_body;
    main.ctap = regions.ctap;
    main.tap = regions.tap;
    main.ap = regions.ap;
    main.pelvis = regions.pelvis;
    main.thorax = regions.thorax;
    main.articulations = regions.articulations;

    let head = &mut state.head_regions;
    head.crane = regions.crane;
    head.massif_facial = regions.massif_facial;
    head.sinus = regions.sinus;
    head.rochers = regions.rochers;
    head.orbites = regions.orbites;
    head.angio_tsa = regions.angio_tsa;

    let phases = &suggestion.phases;
    state.phases.natif = phases.natif;
    state.phases.arteriel = phases.arteriel;
    state.phases.portal = phases.portal;
    state.phases.mixte = phases.mixte;
    state.phases.tardif = phases.tardif;

    if let (true, Some(delay)) = (phases.tardif, phases.tardif_delay.as_deref()) {
        state.set_tardif_delay(delay);
    }

    tracing::debug!(
        regions = state.main_regions.selected().count() + state.head_regions.selected().count(),
        phases = state.phases.selected().count(),
        "Protocol suggestion applied"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AorteSub, ContrastAgent, JointSide, JointType, Phase};
    use crate::protocol::derive_protocol;

    fn suggestion(json: &str) -> ExternalSuggestion {
        ExternalSuggestion::from_json(json).unwrap()
    }

    #[test]
    fn appendicitis_suggestion_selects_ap_portal() {
        let mut state = SelectionState::new(ContrastAgent::Xenetix);
        apply_suggestion(
            &mut state,
            &suggestion(r#"{"regions": {"ap": true}, "phases": {"portal": true}}"#),
        );
        assert!(state.main_regions.ap);
        assert!(state.phases.portal);
        assert!(derive_protocol(&state).starts_with(
            "Acquisition volumique spiralée en collimation millimétrique de l'abdomen et du pelvis avec injection"
        ));
    }

    #[test]
    fn suggested_flags_replace_previous_ones() {
        let mut state = SelectionState::default();
        state.main_regions.thorax = true;
        state.head_regions.crane = true;
        state.phases.natif = true;

        apply_suggestion(
            &mut state,
            &suggestion(r#"{"regions": {"tap": true}, "phases": {"portal": true}}"#),
        );

        assert!(state.main_regions.tap);
        assert!(!state.main_regions.thorax);
        assert!(!state.head_regions.crane);
        assert!(!state.phases.natif);
    }

    #[test]
    fn selections_outside_the_vocabulary_are_kept() {
        let mut state = SelectionState::new(ContrastAgent::Iomeron);
        state.main_regions.aorte = true;
        state.toggle_aorte_sub(AorteSub::ApMi);
        state.toggle_joint_type(JointType::Genou);
        state.toggle_joint_side(JointSide::Gauche);

        apply_suggestion(&mut state, &ExternalSuggestion::default());

        assert!(state.main_regions.aorte);
        assert!(state.aorte_sub.ap_mi);
        assert!(state.joint_type.genou);
        assert!(state.joint_side.gauche);
        assert_eq!(state.contrast_agent, ContrastAgent::Iomeron);
    }

    #[test]
    fn delay_taken_only_with_tardif() {
        let mut state = SelectionState::default();
        apply_suggestion(
            &mut state,
            &suggestion(r#"{"phases": {"tardif": true, "tardifDelay": "5"}}"#),
        );
        assert!(state.phases.tardif);
        assert_eq!(state.tardif_delay, "5");

        apply_suggestion(
            &mut state,
            &suggestion(r#"{"phases": {"portal": true, "tardifDelay": "8"}}"#),
        );
        assert!(!state.phases.tardif);
        assert_eq!(state.tardif_delay, "5");
    }

    #[test]
    fn entered_delay_survives_suggestion_without_tardif() {
        let mut state = SelectionState::default();
        state.toggle_phase(Phase::Tardif);
        state.set_tardif_delay("7");

        apply_suggestion(
            &mut state,
            &suggestion(r#"{"regions": {"ap": true}, "phases": {"portal": true}}"#),
        );
        assert!(!state.phases.tardif);
        assert_eq!(state.tardif_delay, "7");

        state.toggle_phase(Phase::Tardif);
        assert!(derive_protocol(&state).ends_with(" Phase tardive prévue (7 min)."));
    }

    #[test]
    fn tardif_without_delay_keeps_existing_delay() {
        let mut state = SelectionState::default();
        state.phases.tardif = true;
        state.set_tardif_delay("15");
        apply_suggestion(&mut state, &suggestion(r#"{"phases": {"tardif": true}}"#));
        assert_eq!(state.tardif_delay, "15");
    }
}
