//! Enum-like values written as fixed string tokens.
//!
//! Tokens come from a closed vocabulary; parsing anything else is an
//! `InvalidArgument` error and never reaches the output.

use std::fmt;
use std::str::FromStr;

use super::{CzmlValue, Plain, ValueKind};
use crate::output::CzmlOutputStream;
use crate::util::{Error, Result};

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Wire token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $token => Ok(Self::$variant), )+
                    other => Err(Error::invalid_argument(format!(
                        "unknown {} token '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

macro_rules! token_value {
    ($name:ident => $key:literal) => {
        impl CzmlValue for $name {
            type Encoding = Plain;
            const KIND: ValueKind = ValueKind::Enum;
            const ARITY: usize = 1;
            const BARE: bool = true;

            fn key(_: Plain) -> &'static str {
                $key
            }

            fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
                out.write_value(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Position of a height relative to terrain.
    pub enum HeightReference {
        /// Absolute height.
        None => "NONE",
        /// Clamped to the terrain.
        ClampToGround => "CLAMP_TO_GROUND",
        /// Height above the terrain.
        RelativeToGround => "RELATIVE_TO_GROUND",
    }
}
token_value!(HeightReference => "heightReference");

token_enum! {
    /// Whether an object casts or receives shadows.
    pub enum ShadowMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        CastOnly => "CAST_ONLY",
        ReceiveOnly => "RECEIVE_ONLY",
    }
}
token_value!(ShadowMode => "shadowMode");

token_enum! {
    /// What a ground primitive classifies.
    pub enum ClassificationType {
        Terrain => "TERRAIN",
        Cesium3dTile => "CESIUM_3D_TILE",
        Both => "BOTH",
    }
}
token_value!(ClassificationType => "classificationType");

token_enum! {
    /// Interpolation between samples of a time-tagged value.
    pub enum InterpolationAlgorithm {
        Linear => "LINEAR",
        Lagrange => "LAGRANGE",
        Hermite => "HERMITE",
    }
}

impl Default for HeightReference {
    fn default() -> Self {
        Self::None
    }
}

impl Default for ShadowMode {
    fn default() -> Self {
        Self::Disabled
    }
}

impl Default for ClassificationType {
    fn default() -> Self {
        Self::Both
    }
}

impl Default for InterpolationAlgorithm {
    fn default() -> Self {
        Self::Linear
    }
}
