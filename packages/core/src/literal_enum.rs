//! Closed string enumerations declared from a single literal list.

use thiserror::Error;

/// A string that is not one of an enumeration's literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} literal: {value:?}")]
pub struct UnknownLiteral {
    /// Name of the enumeration that rejected the value.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Declares a closed enumeration whose wire literals are written exactly once.
///
/// The serde names, `ALL`, `as_str`, `parse`, `is_member`, `Display` and
/// `FromStr` are all generated from the same `Variant => "literal"` list.
/// Outer and variant attributes pass through, so `#[derive(Default)]` with a
/// `#[default]` variant works as on a plain enum.
macro_rules! literal_enum {
    (
        $(#[$attr:meta])*
        pub enum $name:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident => $lit:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vattr])*
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire literal for this member.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }

            /// Look up a member by its exact wire literal.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($lit => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Check whether `s` is one of the literals.
            pub fn is_member(s: &str) -> bool {
                Self::parse(s).is_some()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| $crate::UnknownLiteral {
                    kind: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    literal_enum! {
        /// Fixture enumeration.
        #[derive(Default)]
        pub enum Shade {
            #[default]
            Light => "light",
            DarkGrey => "dark-grey",
        }
    }

    #[test]
    fn test_literals_agree_with_serde() {
        for shade in Shade::ALL {
            let json = serde_json::to_value(shade).unwrap();
            assert_eq!(json, serde_json::Value::String(shade.as_str().to_string()));
            assert_eq!(Shade::parse(shade.as_str()), Some(*shade));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "Light".parse::<Shade>().unwrap_err();
        assert_eq!(err.kind, "Shade");
        assert_eq!(err.value, "Light");
        assert!(Shade::is_member("dark-grey"));
        assert!(!Shade::is_member("dark_grey"));
    }

    #[test]
    fn test_default_variant_passes_through() {
        assert_eq!(Shade::default(), Shade::Light);
    }
}
