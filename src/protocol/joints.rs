//! French noun phrases for joint acquisitions.
//!
//! Gender and plural irregularities live in [`JointPhrase::lookup`], one
//! arm per joint, so a new `JointType` does not compile until it has a phrase.

use crate::models::{JointSides, JointType};

/// Laterality derived from the side flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Laterality {
    Bilateral,
    Right,
    Left,
}

impl Laterality {
    /// Both sides → bilateral, one side → that side, none → `None`.
    pub fn from_sides(sides: &JointSides) -> Option<Self> {
        match (sides.droite, sides.gauche) {
            (true, true) => Some(Self::Bilateral),
            (true, false) => Some(Self::Right),
            (false, true) => Some(Self::Left),
            (false, false) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JointPhrase {
    pub joint: JointType,
    /// Singular phrase, e.g. "du genou".
    pub singular: &'static str,
    /// Irregular bilateral plural. `None` uses the regular "du X" → "des Xs bilatéraux".
    pub bilateral: Option<&'static str>,
    /// Grammatically feminine: the side adjective agrees.
    pub feminine: bool,
}

impl JointPhrase {
    /// Phrase record for a joint; every `JointType` has exactly one.
    pub fn lookup(joint: JointType) -> &'static JointPhrase {
        match joint {
            JointType::Main => &JointPhrase {
                joint: JointType::Main,
                singular: "de la main",
                bilateral: Some("des mains bilatérales"),
                feminine: true,
            },
            JointType::Coude => &JointPhrase {
                joint: JointType::Coude,
                singular: "du coude",
                bilateral: None,
                feminine: false,
            },
            JointType::Epaule => &JointPhrase {
                joint: JointType::Epaule,
                singular: "de l'épaule",
                bilateral: Some("des épaules bilatérales"),
                feminine: true,
            },
            JointType::Pied => &JointPhrase {
                joint: JointType::Pied,
                singular: "du pied",
                bilateral: None,
                feminine: false,
            },
            JointType::Genou => &JointPhrase {
                joint: JointType::Genou,
                singular: "du genou",
                bilateral: Some("des genoux bilatéraux"),
                feminine: false,
            },
            JointType::Hanche => &JointPhrase {
                joint: JointType::Hanche,
                singular: "de la hanche",
                bilateral: Some("des hanches bilatérales"),
                feminine: true,
            },
        }
    }

    pub fn render(&self, laterality: Option<Laterality>) -> String {
        match laterality {
            None => self.singular.to_string(),
            Some(Laterality::Bilateral) => match self.bilateral {
                Some(plural) => plural.to_string(),
                None => format!("{}s bilatéraux", self.singular.replacen("du ", "des ", 1)),
            },
            Some(Laterality::Right) => {
                let adjective = if self.feminine { "droite" } else { "droit" };
                format!("{} {}", self.singular, adjective)
            }
            Some(Laterality::Left) => format!("{} gauche", self.singular),
        }
    }
}
