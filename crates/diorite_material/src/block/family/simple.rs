//! Blocks without orientation: a single state, a fixed list of kinds, a
//! counter or one of the sixteen dye colors.

#[macro_export]
macro_rules! simple_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        $crate::generate_block_states! {
            variant: $variant,
            id: $id,
            identifier: $identifier,
            name: $name,
            states: {
                $name = stringify!($name) => 0,
            },
            default: $name
            $(, block_properties: $properties)?
        }
    };
}

/// The first kind is the default state. Kinds may skip data values.
#[macro_export]
macro_rules! kinds_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        kinds: {
            $first:ident => $first_data:expr
            $(, $kind:ident => $data:expr)* $(,)?
        }
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: {
                    [<$name _ $first>] = stringify!($first) => $first_data,
                    $([<$name _ $kind>] = stringify!($kind) => $data,)*
                },
                default: [<$name _ $first>]
                $(, block_properties: $properties)?
            }
        }
    };
}

/// Data value `n` is level `n`, starting at zero without gaps.
#[macro_export]
macro_rules! leveled_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        level: $level:ident,
        levels: [$first:literal $(, $n:literal)* $(,)?]
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: {
                    [<$name _ $level _ $first>] = concat!(stringify!($level), "_", $first) => $first,
                    $([<$name _ $level _ $n>] = concat!(stringify!($level), "_", $n) => $n,)*
                },
                default: [<$name _ $level _ $first>]
                $(, block_properties: $properties)?
            }

            impl $crate::capability::Leveled for $variant {
                const MAX_LEVEL: u8 = (ALL_BLOCK_STATES.len() - 1) as u8;
            }

            impl $variant {
                pub fn [<get_ $name:lower>]([<$level:lower>]: u8) -> Self {
                    <Self as $crate::capability::Leveled>::with_level(
                        <Self as $crate::block::BlockVariant>::DEFAULT,
                        [<$level:lower>],
                    )
                }
            }
        }
    };
}

/// One state per dye color, data value equal to the wool data value.
#[macro_export]
macro_rules! colored_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: {
                    [<$name _WHITE>] = "WHITE" => 0,
                    [<$name _ORANGE>] = "ORANGE" => 1,
                    [<$name _MAGENTA>] = "MAGENTA" => 2,
                    [<$name _LIGHT_BLUE>] = "LIGHT_BLUE" => 3,
                    [<$name _YELLOW>] = "YELLOW" => 4,
                    [<$name _LIME>] = "LIME" => 5,
                    [<$name _PINK>] = "PINK" => 6,
                    [<$name _GRAY>] = "GRAY" => 7,
                    [<$name _LIGHT_GRAY>] = "LIGHT_GRAY" => 8,
                    [<$name _CYAN>] = "CYAN" => 9,
                    [<$name _PURPLE>] = "PURPLE" => 10,
                    [<$name _BLUE>] = "BLUE" => 11,
                    [<$name _BROWN>] = "BROWN" => 12,
                    [<$name _GREEN>] = "GREEN" => 13,
                    [<$name _RED>] = "RED" => 14,
                    [<$name _BLACK>] = "BLACK" => 15,
                },
                default: [<$name _WHITE>]
                $(, block_properties: $properties)?
            }

            impl $crate::capability::Colorable for $variant {
                #[inline]
                fn color(self) -> $crate::color::DyeColor {
                    $crate::color::DyeColor::from_wool_data(self.0)
                }

                fn with_color(self, color: $crate::color::DyeColor) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(color.wool_data())
                }
            }

            $crate::impl_kinded!(
                $variant,
                $crate::color::DyeColor,
                mask: 0xF,
                from: $crate::color::DyeColor::from_wool_data,
                to: $crate::color::DyeColor::wool_data
            );

            impl $variant {
                pub fn [<get_ $name:lower>](color: $crate::color::DyeColor) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(color.wool_data())
                }
            }
        }
    };
}

/// Two states, the second one with the given flag set at `0x1`.
#[macro_export]
macro_rules! powerable_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        flag: $flag:ident
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: {
                    $name = stringify!($name) => 0,
                    [<$name _ $flag>] = stringify!($flag) => 1,
                },
                default: $name
                $(, block_properties: $properties)?
            }

            $crate::impl_powerable_flag!($variant, 0x1);
        }
    };
}

/// Implements [`Powerable`](crate::capability::Powerable) for a single flag
/// bit of the data value.
#[macro_export]
macro_rules! impl_powerable_flag {
    ($variant:ty, $flag:expr) => {
        impl $crate::capability::Powerable for $variant {
            #[inline]
            fn is_powered(self) -> bool {
                <Self as $crate::block::BlockVariant>::data(self) & $flag != 0
            }

            fn with_powered(self, powered: bool) -> Self {
                let data = <Self as $crate::block::BlockVariant>::data(self);
                <Self as $crate::block::BlockVariant>::resolve(if powered {
                    data | $flag
                } else {
                    data & !$flag
                })
            }
        }
    };
}

/// Implements [`Wooden`](crate::capability::Wooden) for blocks made of a
/// single wood type.
#[macro_export]
macro_rules! impl_wooden {
    ($variant:ty, $wood:ident) => {
        impl $crate::capability::Wooden for $variant {
            #[inline]
            fn wood_type(self) -> $crate::wood::WoodType {
                $crate::wood::WoodType::$wood
            }
        }
    };
}

/// Wood-typed blocks whose data value (masked) counts wood types starting
/// at `$offset`.
#[macro_export]
macro_rules! impl_wood_kinds {
    ($variant:ty, mask: $mask:expr, offset: $offset:expr) => {
        impl $crate::capability::Wooden for $variant {
            fn wood_type(self) -> $crate::wood::WoodType {
                let index = (<Self as $crate::block::BlockVariant>::data(self) & $mask) + $offset;
                $crate::wood::WoodType::from_data(index).unwrap_or($crate::wood::WoodType::Oak)
            }
        }

        impl $crate::capability::Kinded for $variant {
            type Kind = $crate::wood::WoodType;

            #[inline]
            fn kind(self) -> Self::Kind {
                <Self as $crate::capability::Wooden>::wood_type(self)
            }

            /// Wood types this block cannot hold give the default state.
            fn with_kind(self, kind: Self::Kind) -> Self {
                let Some(index) = kind.data().checked_sub($offset) else {
                    return <Self as $crate::block::BlockVariant>::DEFAULT;
                };
                if index > $mask {
                    return <Self as $crate::block::BlockVariant>::DEFAULT;
                }
                let data = <Self as $crate::block::BlockVariant>::data(self);
                <Self as $crate::block::BlockVariant>::resolve((data & !$mask) | index)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::block::BlockVariant;
    use crate::block::minecraft::stone::{STONE_GRANITE, STONE_STONE, Stone};
    use crate::block::minecraft::wheat::{WHEAT_AGE_0, WHEAT_AGE_7, Wheat};
    use crate::block::minecraft::wool::{WOOL_BLACK, WOOL_WHITE, Wool};
    use crate::capability::{Colorable, Kinded, Leveled};
    use crate::color::DyeColor;

    #[test]
    fn black_wool_is_fifteen() {
        assert_eq!(Wool::get_wool(DyeColor::Black).data(), 15);
        assert_eq!(Wool::get_wool(DyeColor::Black), WOOL_BLACK);
        assert_eq!(WOOL_WHITE.with_color(DyeColor::Black), WOOL_BLACK);
        assert_eq!(WOOL_BLACK.color(), DyeColor::Black);
        assert_eq!(WOOL_BLACK.kind(), DyeColor::Black);
        assert_eq!(Wool::used_data_values(), 16);
    }

    #[test]
    fn kinds_lookup() {
        assert_eq!(Stone::by_id(1), Some(STONE_GRANITE));
        assert_eq!(Stone::by_name("granite"), Some(STONE_GRANITE));
        assert_eq!(Stone::by_id(7), None);
        assert_eq!(Stone::DEFAULT, STONE_STONE);
    }

    #[test]
    fn levels_clamp() {
        assert_eq!(Wheat::MAX_LEVEL, 7);
        assert_eq!(Wheat::get_wheat(3).level(), 3);
        assert_eq!(WHEAT_AGE_0.with_level(200), WHEAT_AGE_7);
        assert_eq!(WHEAT_AGE_7.type_name(), "AGE_7");
    }
}
