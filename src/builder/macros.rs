//! Macros for declaring status enums.

/// Declare a status enum and implement [`State`](crate::core::State) for it.
///
/// Besides the trait, the macro generates a `Display` impl printing the
/// variant name and an `ALL` constant listing every variant in order.
///
/// # Example
///
/// ```
/// use recall::core::State;
/// use recall::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum LampStatus {
///         Dark,
///         Lit,
///         Burnt,
///     }
///     final: [Burnt]
///     interactive: [Lit]
/// }
///
/// assert_eq!(LampStatus::ALL.len(), 3);
/// assert!(LampStatus::Lit.is_interactive());
/// assert_eq!(LampStatus::Burnt.to_string(), "Burnt");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(interactive: [$($interactive:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_interactive(&self) -> bool {
                match self {
                    $($(Self::$interactive => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
