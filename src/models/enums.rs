use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {value}")]
pub struct InvalidIdentifier {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// `ALL` lists the variants in declaration order, which is also the
/// order the protocol engine walks them in.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidIdentifier;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidIdentifier {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(ContrastAgent {
    Xenetix => "xenetix",
    Iomeron => "iomeron",
});

impl ContrastAgent {
    /// Product name as it appears in the acquisition sentence.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Xenetix => "Xenetix 350",
            Self::Iomeron => "Iomeron 350",
        }
    }
}

impl Default for ContrastAgent {
    fn default() -> Self {
        Self::Xenetix
    }
}

str_enum!(MainRegion {
    TotalBody => "totalBody",
    Ctap => "ctap",
    Tap => "tap",
    Ap => "ap",
    Pelvis => "pelvis",
    Thorax => "thorax",
    Aorte => "aorte",
    Articulations => "articulations",
});

str_enum!(HeadRegion {
    Crane => "crane",
    MassifFacial => "massifFacial",
    Sinus => "sinus",
    Rochers => "rochers",
    Orbites => "orbites",
    AngioTsa => "angioTSA",
});

str_enum!(AorteSub {
    Thoracique => "thoracique",
    Tap => "tap",
    Ap => "ap",
    ApMi => "ap_mi",
});

str_enum!(JointType {
    Main => "main",
    Coude => "coude",
    Epaule => "epaule",
    Pied => "pied",
    Genou => "genou",
    Hanche => "hanche",
});

str_enum!(JointSide {
    Droite => "droite",
    Gauche => "gauche",
});

str_enum!(Phase {
    Natif => "natif",
    Arteriel => "arteriel",
    Portal => "portal",
    Mixte => "mixte",
    Tardif => "tardif",
});
