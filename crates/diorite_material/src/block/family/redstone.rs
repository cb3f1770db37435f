//! Repeaters and comparators. Both store a horizontal facing in the low two
//! bits: north 0, east 1, south 2, west 3. Other faces are stored as north.

use crate::direction::BlockFace;

pub const fn facing_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::East => 1,
        BlockFace::South => 2,
        BlockFace::West => 3,
        _ => 0,
    }
}

pub const fn facing(data: u8) -> BlockFace {
    match data & 0x3 {
        0 => BlockFace::North,
        1 => BlockFace::East,
        2 => BlockFace::South,
        _ => BlockFace::West,
    }
}

pub const MIN_DELAY: u8 = 1;
pub const MAX_DELAY: u8 = 4;

/// Delays outside `1..=4` are clamped.
pub const fn repeater_combine(face: BlockFace, delay: u8) -> u8 {
    let delay = if delay < MIN_DELAY {
        MIN_DELAY
    } else if delay > MAX_DELAY {
        MAX_DELAY
    } else {
        delay
    };
    facing_data(face) | (delay - 1) << 2
}

pub const fn repeater_delay(data: u8) -> u8 {
    ((data >> 2) & 0x3) + 1
}

pub const SUBTRACT: u8 = 0x4;
pub const POWERED: u8 = 0x8;

pub const fn comparator_combine(face: BlockFace, subtract: bool, powered: bool) -> u8 {
    facing_data(face) | if subtract { SUBTRACT } else { 0 } | if powered { POWERED } else { 0 }
}

#[macro_export]
macro_rules! repeater_block {
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
                    [<$name _NORTH_DELAY_1>] = "NORTH_DELAY_1" => 0x0,
                    [<$name _EAST_DELAY_1>] = "EAST_DELAY_1" => 0x1,
                    [<$name _SOUTH_DELAY_1>] = "SOUTH_DELAY_1" => 0x2,
                    [<$name _WEST_DELAY_1>] = "WEST_DELAY_1" => 0x3,
                    [<$name _NORTH_DELAY_2>] = "NORTH_DELAY_2" => 0x4,
                    [<$name _EAST_DELAY_2>] = "EAST_DELAY_2" => 0x5,
                    [<$name _SOUTH_DELAY_2>] = "SOUTH_DELAY_2" => 0x6,
                    [<$name _WEST_DELAY_2>] = "WEST_DELAY_2" => 0x7,
                    [<$name _NORTH_DELAY_3>] = "NORTH_DELAY_3" => 0x8,
                    [<$name _EAST_DELAY_3>] = "EAST_DELAY_3" => 0x9,
                    [<$name _SOUTH_DELAY_3>] = "SOUTH_DELAY_3" => 0xA,
                    [<$name _WEST_DELAY_3>] = "WEST_DELAY_3" => 0xB,
                    [<$name _NORTH_DELAY_4>] = "NORTH_DELAY_4" => 0xC,
                    [<$name _EAST_DELAY_4>] = "EAST_DELAY_4" => 0xD,
                    [<$name _SOUTH_DELAY_4>] = "SOUTH_DELAY_4" => 0xE,
                    [<$name _WEST_DELAY_4>] = "WEST_DELAY_4" => 0xF,
                },
                default: [<$name _NORTH_DELAY_1>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0x3,
                data: $crate::block::family::redstone::facing_data,
                face: $crate::block::family::redstone::facing
            );

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace, delay: u8) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::redstone::repeater_combine(face, delay),
                    )
                }

                /// Delay in redstone ticks, `1..=4`.
                #[inline]
                pub fn delay(self) -> u8 {
                    $crate::block::family::redstone::repeater_delay(self.0)
                }

                pub fn with_delay(self, delay: u8) -> Self {
                    Self::[<get_ $name:lower>](
                        <Self as $crate::capability::Directional>::facing(self),
                        delay,
                    )
                }
            }
        }
    };
}

#[macro_export]
macro_rules! comparator_block {
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
                    [<$name _NORTH>] = "NORTH" => 0x0,
                    [<$name _EAST>] = "EAST" => 0x1,
                    [<$name _SOUTH>] = "SOUTH" => 0x2,
                    [<$name _WEST>] = "WEST" => 0x3,
                    [<$name _SUBTRACT_NORTH>] = "SUBTRACT_NORTH" => 0x4,
                    [<$name _SUBTRACT_EAST>] = "SUBTRACT_EAST" => 0x5,
                    [<$name _SUBTRACT_SOUTH>] = "SUBTRACT_SOUTH" => 0x6,
                    [<$name _SUBTRACT_WEST>] = "SUBTRACT_WEST" => 0x7,
                    [<$name _POWERED_NORTH>] = "POWERED_NORTH" => 0x8,
                    [<$name _POWERED_EAST>] = "POWERED_EAST" => 0x9,
                    [<$name _POWERED_SOUTH>] = "POWERED_SOUTH" => 0xA,
                    [<$name _POWERED_WEST>] = "POWERED_WEST" => 0xB,
                    [<$name _POWERED_SUBTRACT_NORTH>] = "POWERED_SUBTRACT_NORTH" => 0xC,
                    [<$name _POWERED_SUBTRACT_EAST>] = "POWERED_SUBTRACT_EAST" => 0xD,
                    [<$name _POWERED_SUBTRACT_SOUTH>] = "POWERED_SUBTRACT_SOUTH" => 0xE,
                    [<$name _POWERED_SUBTRACT_WEST>] = "POWERED_SUBTRACT_WEST" => 0xF,
                },
                default: [<$name _NORTH>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0x3,
                data: $crate::block::family::redstone::facing_data,
                face: $crate::block::family::redstone::facing
            );

            $crate::impl_powerable_flag!($variant, $crate::block::family::redstone::POWERED);

            impl $variant {
                pub fn [<get_ $name:lower>](
                    face: $crate::direction::BlockFace,
                    subtract: bool,
                    powered: bool,
                ) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::redstone::comparator_combine(face, subtract, powered),
                    )
                }

                #[inline]
                pub fn is_subtract(self) -> bool {
                    self.0 & $crate::block::family::redstone::SUBTRACT != 0
                }

                pub fn with_subtract(self, subtract: bool) -> Self {
                    let flag = $crate::block::family::redstone::SUBTRACT;
                    <Self as $crate::block::BlockVariant>::resolve(if subtract {
                        self.0 | flag
                    } else {
                        self.0 & !flag
                    })
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::powered_comparator::*;
    use crate::block::minecraft::unpowered_repeater::*;
    use crate::capability::{Directional, Powerable};

    #[test]
    fn repeater_delay_bits() {
        let repeater = UnpoweredRepeater::get_unpowered_repeater(BlockFace::West, 3);
        assert_eq!(repeater, UNPOWERED_REPEATER_WEST_DELAY_3);
        assert_eq!(repeater.data(), 0xB);
        assert_eq!(repeater.delay(), 3);
        assert_eq!(repeater.with_delay(9), UNPOWERED_REPEATER_WEST_DELAY_4);
        assert_eq!(repeater.with_delay(0), UNPOWERED_REPEATER_WEST_DELAY_1);
        assert_eq!(repeater.with_facing(BlockFace::East), UNPOWERED_REPEATER_EAST_DELAY_3);
    }

    #[test]
    fn comparator_flags() {
        let comparator = PoweredComparator::get_powered_comparator(BlockFace::South, true, false);
        assert_eq!(comparator, POWERED_COMPARATOR_SUBTRACT_SOUTH);
        assert!(comparator.is_subtract());
        assert!(!comparator.is_powered());
        assert_eq!(comparator.with_powered(true), POWERED_COMPARATOR_POWERED_SUBTRACT_SOUTH);
        assert_eq!(comparator.with_subtract(false), POWERED_COMPARATOR_SOUTH);
        assert_eq!(comparator.facing(), BlockFace::South);
    }
}
