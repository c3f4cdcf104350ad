//! Sentence synthesis when no canned template applies.
//!
//! Unlike template key selection, every selected region contributes a
//! phrase here, in a fixed order: body regions, head regions, aorta,
//! then joints.

use std::borrow::Cow;

use super::joints::{JointPhrase, Laterality};
use crate::models::{AorteSub, HeadRegion, MainRegion, SelectionState};

const SENTENCE_PREFIX: &str = "Acquisition tomodensitométrique";

static MAIN_REGION_PHRASES: &[(MainRegion, &str)] = &[
    (MainRegion::TotalBody, "corps entier"),
    (MainRegion::Ctap, "cervico-thoraco-abdomino-pelvienne"),
    (MainRegion::Tap, "thoraco-abdomino-pelvienne"),
    (MainRegion::Ap, "abdomino-pelvienne"),
    (MainRegion::Pelvis, "pelvienne"),
    (MainRegion::Thorax, "thoracique"),
];

static HEAD_REGION_PHRASES: &[(HeadRegion, &str)] = &[
    (HeadRegion::Crane, "encéphalique"),
    (HeadRegion::MassifFacial, "du massif facial"),
    (HeadRegion::Sinus, "des sinus"),
    (HeadRegion::Rochers, "des rochers"),
    (HeadRegion::Orbites, "des orbites"),
    (HeadRegion::AngioTsa, "des axes carotido-vertébraux"),
];

static AORTE_EXTENTS: &[(AorteSub, &str)] = &[
    (AorteSub::Thoracique, "de l'aorte thoracique"),
    (AorteSub::Tap, "de l'aorte thoraco-abdomino-pelvienne"),
    (AorteSub::Ap, "de l'aorte abdomino-pelvienne"),
    (AorteSub::ApMi, "de l'aorte abdomino-pelvienne et des membres inférieurs"),
];

const AORTE_BARE: &str = "de l'aorte";

/// Anatomical noun phrases for every selected region.
pub fn region_parts(state: &SelectionState) -> Vec<Cow<'static, str>> {
    let mut parts: Vec<Cow<'static, str>> = Vec::new();

    for (region, phrase) in MAIN_REGION_PHRASES {
        if state.main_regions.get(*region) {
            parts.push(Cow::Borrowed(*phrase));
        }
    }
    for (region, phrase) in HEAD_REGION_PHRASES {
        if state.head_regions.get(*region) {
            parts.push(Cow::Borrowed(*phrase));
        }
    }

    if state.main_regions.aorte {
        let phrase = state
            .aorte_sub
            .active()
            .and_then(|sub| AORTE_EXTENTS.iter().find(|(s, _)| *s == sub))
            .map_or(AORTE_BARE, |(_, phrase)| *phrase);
        parts.push(Cow::Borrowed(phrase));
    }

    if state.main_regions.articulations {
        let laterality = Laterality::from_sides(&state.joint_side);
        for joint in state.joint_type.selected() {
            parts.push(Cow::Owned(JointPhrase::lookup(joint).render(laterality)));
        }
    }

    parts
}

/// Injection clauses in fixed order: native, injected, biphasic, delayed.
pub fn phase_clauses(state: &SelectionState) -> Vec<String> {
    let phases = &state.phases;
    let contrast = state.contrast_agent.display_name();
    let mut clauses = Vec::new();

    if phases.natif {
        clauses.push("sans injection".to_string());
    }
    if phases.arteriel || phases.portal {
        clauses.push(format!("avec injection de {contrast}"));
    }
    if phases.mixte {
        clauses.push(format!("injection biphasique de {contrast}"));
    }
    if phases.tardif {
        if state.tardif_delay.is_empty() {
            clauses.push("phase tardive (délai à préciser)".to_string());
        } else {
            clauses.push(format!("phase tardive ({} min)", state.tardif_delay));
        }
    }

    clauses
}

/// "a", "a et b", "a, b et c".
fn join_french(parts: &[Cow<'static, str>]) -> String {
    match parts.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, init)) => {
            let head: Vec<&str> = init.iter().map(|p| p.as_ref()).collect();
            format!("{} et {}", head.join(", "), last)
        }
    }
}

/// Build the descriptive sentence. Empty when nothing at all is selected.
pub fn synthesize(state: &SelectionState) -> String {
    let parts = region_parts(state);
    if parts.is_empty() && !state.phases.any() {
        return String::new();
    }

    let mut sentence = String::from(SENTENCE_PREFIX);
    if !parts.is_empty() {
        sentence.push(' ');
        sentence.push_str(&join_french(&parts));
    }

    let clauses = phase_clauses(state);
    if !clauses.is_empty() {
        sentence.push(' ');
        sentence.push_str(&clauses.join(" et "));
    }

    sentence.push('.');
    sentence
}
