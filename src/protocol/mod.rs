//! Protocol derivation: selection state → French acquisition sentence.
//!
//! Two paths. A canned template when the first matching region rule and
//! the phase signature name an existing catalog key, otherwise a sentence
//! synthesized from every selected region and phase. The engine is a pure
//! function of [`SelectionState`]: no I/O, no errors, no hidden state.

pub mod fallback;
pub mod joints;
pub mod templates;

pub use fallback::synthesize;
pub use templates::{template_catalog, template_for, template_keys};

use crate::models::{AorteSub, Phases, SelectionState};

/// Phase part of a template key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSuffix {
    None,
    Natif,
    Injecte,
    Mixte,
    NatifInjecte,
}

impl PhaseSuffix {
    /// First match wins: native+injected, injected, mixed, native, none.
    /// The delayed phase never takes part.
    pub fn from_phases(phases: &Phases) -> Self {
        let natif = phases.natif;
        let injecte = phases.arteriel || phases.portal;

        if natif && injecte {
            Self::NatifInjecte
        } else if injecte {
            Self::Injecte
        } else if phases.mixte {
            Self::Mixte
        } else if natif {
            Self::Natif
        } else {
            Self::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Natif => "_natif",
            Self::Injecte => "_injecte",
            Self::Mixte => "_mixte",
            Self::NatifInjecte => "_natif_injecte",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RegionKey {
    /// Used as-is, phase signature ignored.
    Fixed(&'static str),
    /// Completed with the phase suffix.
    Suffixed(&'static str),
}

struct RegionRule {
    applies: fn(&SelectionState) -> bool,
    key: RegionKey,
}

/// Template key rules, highest priority first. Head before body.
static REGION_RULES: &[RegionRule] = &[
    RegionRule {
        applies: |s| s.head_regions.crane && s.head_regions.angio_tsa,
        key: RegionKey::Fixed("crane_angioTSA_injecte"),
    },
    RegionRule {
        applies: |s| s.head_regions.crane,
        key: RegionKey::Suffixed("crane"),
    },
    RegionRule {
        applies: |s| s.head_regions.sinus,
        key: RegionKey::Suffixed("sinus"),
    },
    RegionRule {
        applies: |s| s.head_regions.massif_facial,
        key: RegionKey::Suffixed("massifFacial"),
    },
    RegionRule {
        applies: |s| s.head_regions.orbites,
        key: RegionKey::Suffixed("orbites"),
    },
    RegionRule {
        applies: |s| s.head_regions.rochers,
        key: RegionKey::Suffixed("rochers"),
    },
    RegionRule {
        applies: |s| s.main_regions.tap,
        key: RegionKey::Suffixed("tap"),
    },
    RegionRule {
        applies: |s| s.main_regions.ap,
        key: RegionKey::Suffixed("ap"),
    },
    RegionRule {
        applies: |s| s.main_regions.thorax,
        key: RegionKey::Suffixed("thorax"),
    },
    RegionRule {
        applies: |s| s.main_regions.aorte && s.aorte_sub.active() == Some(AorteSub::ApMi),
        key: RegionKey::Suffixed("aorte_ap_mi"),
    },
];

/// Catalog key for the state, from the first applicable region rule.
/// `None` when no rule applies. The key may still be absent from the catalog.
pub fn template_key(state: &SelectionState) -> Option<String> {
    let rule = REGION_RULES.iter().find(|rule| (rule.applies)(state))?;
    Some(match rule.key {
        RegionKey::Fixed(key) => key.to_string(),
        RegionKey::Suffixed(region) => {
            format!("{region}{}", PhaseSuffix::from_phases(&state.phases).as_str())
        }
    })
}

/// Trailing sentence appended to a template when the delayed phase is set.
fn tardif_sentence(state: &SelectionState) -> Option<String> {
    if !state.phases.tardif {
        return None;
    }
    Some(if state.tardif_delay.is_empty() {
        " Phase tardive prévue (délai tardif à préciser).".to_string()
    } else {
        format!(" Phase tardive prévue ({} min).", state.tardif_delay)
    })
}

/// Derive the acquisition sentence. Empty string when nothing is selected.
pub fn derive_protocol(state: &SelectionState) -> String {
    let contrast = state.contrast_agent.display_name();

    if let Some(mut text) = template_key(state).and_then(|key| template_for(&key, contrast)) {
        if let Some(tardif) = tardif_sentence(state) {
            text.push_str(&tardif);
        }
        return text;
    }

    synthesize(state)
}
