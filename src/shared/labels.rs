//! Enumerations whose stored codes carry a fixed human-readable label.
//!
//! Every code/label pair lives in the enum definition itself, so API
//! payloads, GeoJSON properties and templates all read the same table.

use thiserror::Error;

/// A query or payload value that is not one of an enum's codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{code}' is not a valid {kind}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

/// Declares an enum together with its code and display label tables.
///
/// Generates `ALL`, `as_str()`, `label()`, `Display` (the code) and
/// `FromStr` (exact code match). The enum must be `Copy`, and serde/sqlx
/// renames on it must produce the same codes.
///
/// Usage:
/// ```ignore
/// labeled_enum! {
///     #[derive(Debug, Clone, Copy)]
///     pub enum RoadType {
///         Highway = ("highway", "Highway"),
///         MainRoad = ("main_road", "Main Road"),
///     }
/// }
/// ```
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident = ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Code stored in the database and used in query parameters
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::shared::labels::UnknownCode;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| $crate::shared::labels::UnknownCode {
                        kind: stringify!($name),
                        code: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use labeled_enum;
