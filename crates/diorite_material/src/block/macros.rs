/// Declares one block and all of its registered sub-types.
///
/// ```rust,ignore
/// generate_block_states! {
///     variant: Tnt,
///     id: 46,
///     identifier: "tnt",
///     name: TNT,
///     states: {
///         TNT = "TNT" => 0,
///         TNT_UNSTABLE = "UNSTABLE" => 1,
///     },
///     default: TNT,
///     block_properties: Properties::new().instant_break()
/// }
/// // Generates: the `Tnt` variant type, one constant per state,
/// // ALL_BLOCK_STATES, DEFAULT_STATE, PROPERTIES, BLOCK
/// ```
///
/// Duplicate data values, values above 15 and an unregistered default are
/// rejected at compile time.
#[macro_export]
macro_rules! generate_block_states {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        states: {
            $($state:ident = $state_name:expr => $data:expr),+ $(,)?
        },
        default: $default:ident
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $variant(u8);

        $(
            pub const $state: $variant = $variant($data);
        )+

        pub const ALL_BLOCK_STATES: &[$crate::block::BlockState] = &[
            $($crate::block::BlockState::new($id, $data, $state_name)),+
        ];

        pub const DEFAULT_STATE: &$crate::block::BlockState =
            $crate::block::find_state(ALL_BLOCK_STATES, $default.0);

        pub const PROPERTIES: $crate::block::behaviour::Properties =
            $crate::generate_block_states!(@get_props $($properties)?);

        pub const BLOCK: $crate::block::Block = $crate::block::Block {
            id: $crate::block::BlockId($id),
            identifier: $crate::ident!($identifier),
            name: stringify!($name),
            properties: &PROPERTIES,
            default_state: DEFAULT_STATE,
            states: ALL_BLOCK_STATES,
        };

        const _: () = assert!(
            $crate::block::has_unique_data(ALL_BLOCK_STATES),
            concat!("conflicting data values in ", stringify!($name))
        );

        impl $crate::block::BlockVariant for $variant {
            const BLOCK: &'static $crate::block::Block = &BLOCK;
            const DEFAULT: Self = $default;
            const ALL: &'static [Self] = &[$($state),+];

            #[inline]
            fn data(self) -> u8 {
                self.0
            }
        }
    };

    (@get_props) => { $crate::block::behaviour::Properties::new() };
    (@get_props $props:expr) => { $props };
}

/// Implements [`Kinded`](crate::capability::Kinded) for a variant whose data
/// value, masked with `$mask`, is the kind's own data value.
#[macro_export]
macro_rules! impl_kinded {
    ($variant:ty, $kind:ty, mask: $mask:expr, from: $from:expr, to: $to:expr) => {
        impl $crate::capability::Kinded for $variant {
            type Kind = $kind;

            #[inline]
            fn kind(self) -> $kind {
                ($from)(<Self as $crate::block::BlockVariant>::data(self) & $mask)
            }

            fn with_kind(self, kind: $kind) -> Self {
                let data = <Self as $crate::block::BlockVariant>::data(self);
                <Self as $crate::block::BlockVariant>::resolve((data & !$mask) | ($to)(kind))
            }
        }
    };
}
