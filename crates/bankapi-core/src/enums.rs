//! String-valued API enumerations.
//!
//! The API exchanges status codes and kinds as fixed upper-case literals.
//! [`wire_enum!`](crate::wire_enum) declares a Rust enum for such a set and
//! keeps the literal attached to each variant, for JSON payloads and for
//! query parameters alike.

/// Declare an enumeration backed by fixed wire literals.
///
/// Generates the enum with `serde` renames, an `ALL` constant, `as_str()`,
/// `Display`, `FromStr` and a [`QueryValue`](crate::query::QueryValue) impl
/// emitting the literal. The calling crate must depend on `serde`.
///
/// ```
/// bankapi_core::wire_enum! {
///     /// Traffic light colour.
///     pub enum Light {
///         /// Stop.
///         Red => "RED",
///         /// Go.
///         Green => "GREEN",
///     }
/// }
///
/// assert_eq!(Light::Green.as_str(), "GREEN");
/// assert_eq!("RED".parse::<Light>().unwrap(), Light::Red);
/// assert!("red".parse::<Light>().is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire literal for this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                match s {
                    $($wire => ::core::result::Result::Ok(Self::$variant),)+
                    _ => ::core::result::Result::Err($crate::Error::InvalidEnumValue {
                        kind: ::core::stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }

        impl $crate::query::QueryValue for $name {
            fn to_query_value(&self) -> ::std::string::String {
                self.as_str().to_owned()
            }
        }
    };
}
