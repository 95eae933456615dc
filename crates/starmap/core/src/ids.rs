//! Identifier newtypes for the celestial hierarchy.
//!
//! Source databases use plain integers for every primary key. Wrapping them
//! keeps a planet id from being passed where a system id is expected.
use std::fmt;

/// Primary key of a star system in the source dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SystemId(pub i64);

/// Primary key of a planet in the source dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlanetId(pub i64);

/// Primary key of a moon in the source dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoonId(pub i64);

macro_rules! impl_id {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                /// Returns the raw integer key.
                #[inline]
                pub const fn get(self) -> i64 {
                    self.0
                }
            }

            impl From<i64> for $ty {
                fn from(raw: i64) -> Self {
                    Self(raw)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

impl_id!(SystemId, PlanetId, MoonId);
