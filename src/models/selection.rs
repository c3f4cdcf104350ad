//! Structured selection state driving protocol derivation.
//!
//! Every flag always has a value (`Default` is all-false), so the engine
//! never sees an undefined selection. Mutations that carry invariants
//! (exclusive aorta extent, delayed-phase delay) go through the methods on
//! [`SelectionState`] rather than through the public fields.

use serde::{Deserialize, Serialize};

use super::enums::{AorteSub, ContrastAgent, HeadRegion, JointSide, JointType, MainRegion, Phase};

/// Generates a group of boolean flags addressable by an identifier enum.
macro_rules! flag_group {
    ($(#[$meta:meta])* $name:ident over $id:ident {
        $($(#[$fmeta:meta])* $field:ident => $variant:ident),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: bool),+
        }

        impl $name {
            pub fn get(&self, id: $id) -> bool {
                match id {
                    $($id::$variant => self.$field),+
                }
            }

            pub fn set(&mut self, id: $id, value: bool) {
                match id {
                    $($id::$variant => self.$field = value),+
                }
            }

            pub fn toggle(&mut self, id: $id) {
                let current = self.get(id);
                self.set(id, !current);
            }

            pub fn any(&self) -> bool {
                false $(|| self.$field)+
            }

            /// Set flags, in declaration order.
            pub fn selected(&self) -> impl Iterator<Item = $id> + '_ {
                $id::ALL.iter().copied().filter(move |id| self.get(*id))
            }
        }
    };
}

flag_group!(
    /// Body regions. Not mutually exclusive.
    MainRegions over MainRegion {
        #[serde(rename = "totalBody")]
        total_body => TotalBody,
        ctap => Ctap,
        tap => Tap,
        ap => Ap,
        pelvis => Pelvis,
        thorax => Thorax,
        aorte => Aorte,
        articulations => Articulations,
    }
);

flag_group!(
    /// Head and neck regions.
    HeadRegions over HeadRegion {
        crane => Crane,
        #[serde(rename = "massifFacial")]
        massif_facial => MassifFacial,
        sinus => Sinus,
        rochers => Rochers,
        orbites => Orbites,
        #[serde(rename = "angioTSA")]
        angio_tsa => AngioTsa,
    }
);

flag_group!(
    /// Aorta extent. At most one is set when mutated through
    /// [`SelectionState::toggle_aorte_sub`].
    AorteSubOptions over AorteSub {
        thoracique => Thoracique,
        tap => Tap,
        ap => Ap,
        ap_mi => ApMi,
    }
);

flag_group!(
    JointTypes over JointType {
        main => Main,
        coude => Coude,
        epaule => Epaule,
        pied => Pied,
        genou => Genou,
        hanche => Hanche,
    }
);

flag_group!(
    /// Both set means bilateral.
    JointSides over JointSide {
        droite => Droite,
        gauche => Gauche,
    }
);

flag_group!(
    /// Injection phases. Any subset.
    Phases over Phase {
        natif => Natif,
        arteriel => Arteriel,
        portal => Portal,
        mixte => Mixte,
        tardif => Tardif,
    }
);

impl AorteSubOptions {
    /// The effective extent: first set flag in declaration order.
    ///
    /// Callers mutating through `SelectionState` keep at most one flag set;
    /// this still resolves a hand-built state with several.
    pub fn active(&self) -> Option<AorteSub> {
        self.selected().next()
    }
}

/// Complete input of the protocol derivation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    pub main_regions: MainRegions,
    pub head_regions: HeadRegions,
    pub aorte_sub: AorteSubOptions,
    pub joint_type: JointTypes,
    pub joint_side: JointSides,
    pub phases: Phases,
    /// Delay in minutes for the delayed phase; empty means unspecified.
    pub tardif_delay: String,
    pub contrast_agent: ContrastAgent,
}

impl SelectionState {
    pub fn new(contrast_agent: ContrastAgent) -> Self {
        Self {
            contrast_agent,
            ..Self::default()
        }
    }

    pub fn toggle_main_region(&mut self, region: MainRegion) {
        self.main_regions.toggle(region);
    }

    pub fn toggle_head_region(&mut self, region: HeadRegion) {
        self.head_regions.toggle(region);
    }

    /// Select or deselect an aorta extent; selecting one clears the others.
    pub fn toggle_aorte_sub(&mut self, sub: AorteSub) {
        let next = !self.aorte_sub.get(sub);
        self.aorte_sub = AorteSubOptions::default();
        self.aorte_sub.set(sub, next);
    }

    pub fn toggle_joint_type(&mut self, joint: JointType) {
        self.joint_type.toggle(joint);
    }

    pub fn toggle_joint_side(&mut self, side: JointSide) {
        self.joint_side.toggle(side);
    }

    /// Flip a phase. Turning the delayed phase off forgets its delay.
    pub fn toggle_phase(&mut self, phase: Phase) {
        self.phases.toggle(phase);
        if phase == Phase::Tardif && !self.phases.tardif {
            self.tardif_delay.clear();
        }
    }

    pub fn set_tardif_delay(&mut self, delay: &str) {
        self.tardif_delay = delay.trim().to_string();
    }

    pub fn set_contrast_agent(&mut self, agent: ContrastAgent) {
        self.contrast_agent = agent;
    }

    /// Clear every selection, keeping the contrast agent.
    pub fn reset(&mut self) {
        *self = Self::new(self.contrast_agent);
    }
}
