//! Blocks whose data value is mostly a facing: torches, wall-mounted blocks,
//! horizontally rotated blocks, six-way blocks with one flag bit, buttons,
//! levers and mushroom caps.

use crate::block::family::{cartesian_data, cartesian_face};
use crate::direction::BlockFace;

/// Torches: east 1, west 2, south 3, north 4, standing 5. Faces a torch
/// cannot attach towards give a standing torch.
pub const fn torch_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::East => 1,
        BlockFace::West => 2,
        BlockFace::South => 3,
        BlockFace::North => 4,
        _ => 5,
    }
}

pub const fn torch_face(data: u8) -> BlockFace {
    match data {
        1 => BlockFace::East,
        2 => BlockFace::West,
        3 => BlockFace::South,
        4 => BlockFace::North,
        _ => BlockFace::Up,
    }
}

/// Wall-mounted blocks: north 2, south 3, west 4, east 5. Other faces are
/// stored as north.
pub const fn wall_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::South => 3,
        BlockFace::West => 4,
        BlockFace::East => 5,
        _ => 2,
    }
}

pub const fn wall_face(data: u8) -> BlockFace {
    match data {
        3 => BlockFace::South,
        4 => BlockFace::West,
        5 => BlockFace::East,
        _ => BlockFace::North,
    }
}

/// Six-way blocks carrying one extra flag at `0x8`.
pub const SIX_WAY_FLAG: u8 = 0x8;

pub const fn six_way_combine(face: BlockFace, flag: bool) -> u8 {
    cartesian_data(face) | if flag { SIX_WAY_FLAG } else { 0 }
}

pub const fn six_way_face(data: u8) -> BlockFace {
    cartesian_face(data)
}

/// Hoppers cannot face up; up is stored as down like every other
/// unsupported face.
pub const fn hopper_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::Up => 0,
        face => cartesian_data(face),
    }
}

/// Buttons: ceiling 0, east 1, west 2, south 3, north 4, floor 5, with
/// powered at `0x8`. Other faces are stored as the ceiling.
pub const fn button_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::East => 1,
        BlockFace::West => 2,
        BlockFace::South => 3,
        BlockFace::North => 4,
        BlockFace::Up => 5,
        _ => 0,
    }
}

pub const fn button_face(data: u8) -> BlockFace {
    match data & 0x7 {
        1 => BlockFace::East,
        2 => BlockFace::West,
        3 => BlockFace::South,
        4 => BlockFace::North,
        5 => BlockFace::Up,
        _ => BlockFace::Down,
    }
}

pub const LEVER_POWERED: u8 = 0x8;

/// Lever orientation. Floor and ceiling levers additionally store the axis
/// their handle swings along.
pub const fn lever_data(face: BlockFace, along_x: bool) -> u8 {
    match face {
        BlockFace::East => 1,
        BlockFace::West => 2,
        BlockFace::South => 3,
        BlockFace::North => 4,
        BlockFace::Up if along_x => 6,
        BlockFace::Up => 5,
        _ if along_x => 0,
        _ => 7,
    }
}

pub const fn lever_face(data: u8) -> BlockFace {
    match data & 0x7 {
        1 => BlockFace::East,
        2 => BlockFace::West,
        3 => BlockFace::South,
        4 => BlockFace::North,
        5 | 6 => BlockFace::Up,
        _ => BlockFace::Down,
    }
}

/// Floor and ceiling levers swinging along the x axis. Wall levers report
/// `true` for east and west.
pub const fn lever_along_x(data: u8) -> bool {
    matches!(data & 0x7, 0 | 1 | 2 | 6)
}

/// Mushroom caps: the cap piece is named after the side of the mushroom it
/// covers, data 5 is the top center piece.
pub const fn mushroom_data(face: BlockFace) -> Option<u8> {
    match face {
        BlockFace::NorthWest => Some(1),
        BlockFace::North => Some(2),
        BlockFace::NorthEast => Some(3),
        BlockFace::West => Some(4),
        BlockFace::Up => Some(5),
        BlockFace::East => Some(6),
        BlockFace::SouthWest => Some(7),
        BlockFace::South => Some(8),
        BlockFace::SouthEast => Some(9),
        _ => None,
    }
}

pub const fn mushroom_face(data: u8) -> BlockFace {
    match data {
        1 => BlockFace::NorthWest,
        2 => BlockFace::North,
        3 => BlockFace::NorthEast,
        4 => BlockFace::West,
        5 => BlockFace::Up,
        6 => BlockFace::East,
        7 => BlockFace::SouthWest,
        8 => BlockFace::South,
        9 => BlockFace::SouthEast,
        _ => BlockFace::SelfFace,
    }
}

/// Implements [`Directional`](crate::capability::Directional) from a pair of
/// const layout functions. Bits outside `$mask` are kept by `with_facing`.
#[macro_export]
macro_rules! impl_directional {
    ($variant:ty, mask: $mask:expr, data: $to:path, face: $from:path) => {
        impl $crate::capability::Directional for $variant {
            #[inline]
            fn facing(self) -> $crate::direction::BlockFace {
                $from(<Self as $crate::block::BlockVariant>::data(self) & $mask)
            }

            fn with_facing(self, face: $crate::direction::BlockFace) -> Self {
                let data = <Self as $crate::block::BlockVariant>::data(self);
                <Self as $crate::block::BlockVariant>::resolve((data & !$mask) | $to(face))
            }
        }
    };
}

#[macro_export]
macro_rules! torch_block {
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
                    [<$name _EAST>] = "EAST" => 1,
                    [<$name _WEST>] = "WEST" => 2,
                    [<$name _SOUTH>] = "SOUTH" => 3,
                    [<$name _NORTH>] = "NORTH" => 4,
                    [<$name _UP>] = "UP" => 5,
                },
                default: [<$name _UP>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0x7,
                data: $crate::block::family::facing::torch_data,
                face: $crate::block::family::facing::torch_face
            );

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::facing::torch_data(face),
                    )
                }
            }
        }
    };
}

/// Ladders, wall signs, furnaces, chests and wall banners.
#[macro_export]
macro_rules! wall_block {
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
                    [<$name _NORTH>] = "NORTH" => 2,
                    [<$name _SOUTH>] = "SOUTH" => 3,
                    [<$name _WEST>] = "WEST" => 4,
                    [<$name _EAST>] = "EAST" => 5,
                },
                default: [<$name _NORTH>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0x7,
                data: $crate::block::family::facing::wall_data,
                face: $crate::block::family::facing::wall_face
            );

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::facing::wall_data(face),
                    )
                }
            }
        }
    };
}

/// Pumpkins and jack o'lanterns: the horizontal index alone.
#[macro_export]
macro_rules! horizontal_block {
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
                    [<$name _SOUTH>] = "SOUTH" => 0,
                    [<$name _WEST>] = "WEST" => 1,
                    [<$name _NORTH>] = "NORTH" => 2,
                    [<$name _EAST>] = "EAST" => 3,
                },
                default: [<$name _SOUTH>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0x3,
                data: $crate::block::family::horizontal_data,
                face: $crate::block::family::horizontal_face
            );

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::horizontal_data(face),
                    )
                }
            }
        }
    };
}

/// Six cartesian facings plus one flag at `0x8`, named by `$flag`
/// (`TRIGGERED` for dispensers, `EXTENDED` for pistons, `STICKY` for
/// piston heads).
#[macro_export]
macro_rules! six_way_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        flag: $flag:ident,
        default: $default:ident
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
                    [<$name _DOWN>] = "DOWN" => 0x0,
                    [<$name _UP>] = "UP" => 0x1,
                    [<$name _NORTH>] = "NORTH" => 0x2,
                    [<$name _SOUTH>] = "SOUTH" => 0x3,
                    [<$name _WEST>] = "WEST" => 0x4,
                    [<$name _EAST>] = "EAST" => 0x5,
                    [<$name _ $flag _DOWN>] = concat!(stringify!($flag), "_DOWN") => 0x8,
                    [<$name _ $flag _UP>] = concat!(stringify!($flag), "_UP") => 0x9,
                    [<$name _ $flag _NORTH>] = concat!(stringify!($flag), "_NORTH") => 0xA,
                    [<$name _ $flag _SOUTH>] = concat!(stringify!($flag), "_SOUTH") => 0xB,
                    [<$name _ $flag _WEST>] = concat!(stringify!($flag), "_WEST") => 0xC,
                    [<$name _ $flag _EAST>] = concat!(stringify!($flag), "_EAST") => 0xD,
                },
                default: [<$name _ $default>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0x7,
                data: $crate::block::family::cartesian_data,
                face: $crate::block::family::cartesian_face
            );

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace, [<$flag:lower>]: bool) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::facing::six_way_combine(face, [<$flag:lower>]),
                    )
                }
            }
        }
    };
}

#[macro_export]
macro_rules! button_block {
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
                    [<$name _DOWN>] = "DOWN" => 0x0,
                    [<$name _EAST>] = "EAST" => 0x1,
                    [<$name _WEST>] = "WEST" => 0x2,
                    [<$name _SOUTH>] = "SOUTH" => 0x3,
                    [<$name _NORTH>] = "NORTH" => 0x4,
                    [<$name _UP>] = "UP" => 0x5,
                    [<$name _POWERED_DOWN>] = "POWERED_DOWN" => 0x8,
                    [<$name _POWERED_EAST>] = "POWERED_EAST" => 0x9,
                    [<$name _POWERED_WEST>] = "POWERED_WEST" => 0xA,
                    [<$name _POWERED_SOUTH>] = "POWERED_SOUTH" => 0xB,
                    [<$name _POWERED_NORTH>] = "POWERED_NORTH" => 0xC,
                    [<$name _POWERED_UP>] = "POWERED_UP" => 0xD,
                },
                default: [<$name _UP>]
                $(, block_properties: $properties)?
            }

            $crate::impl_directional!(
                $variant,
                mask: 0x7,
                data: $crate::block::family::facing::button_data,
                face: $crate::block::family::facing::button_face
            );

            $crate::impl_powerable_flag!($variant, 0x8);

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace, powered: bool) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::facing::button_data(face) | if powered { 0x8 } else { 0 },
                    )
                }
            }
        }
    };
}

/// Huge mushroom blocks: cap pieces, the stem and the all-sided variants.
#[macro_export]
macro_rules! mushroom_block {
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
                    [<$name _PORES>] = "PORES" => 0,
                    [<$name _NORTH_WEST>] = "NORTH_WEST" => 1,
                    [<$name _NORTH>] = "NORTH" => 2,
                    [<$name _NORTH_EAST>] = "NORTH_EAST" => 3,
                    [<$name _WEST>] = "WEST" => 4,
                    [<$name _CENTER>] = "CENTER" => 5,
                    [<$name _EAST>] = "EAST" => 6,
                    [<$name _SOUTH_WEST>] = "SOUTH_WEST" => 7,
                    [<$name _SOUTH>] = "SOUTH" => 8,
                    [<$name _SOUTH_EAST>] = "SOUTH_EAST" => 9,
                    [<$name _STEM>] = "STEM" => 10,
                    [<$name _ALL_CAP>] = "ALL_CAP" => 14,
                    [<$name _ALL_STEM>] = "ALL_STEM" => 15,
                },
                default: [<$name _ALL_CAP>]
                $(, block_properties: $properties)?
            }

            impl $crate::capability::Directional for $variant {
                /// `SelfFace` for pieces that are not part of the cap rim.
                fn facing(self) -> $crate::direction::BlockFace {
                    $crate::block::family::facing::mushroom_face(self.0)
                }

                /// Faces without a cap piece keep the current piece.
                fn with_facing(self, face: $crate::direction::BlockFace) -> Self {
                    match $crate::block::family::facing::mushroom_data(face) {
                        Some(data) => <Self as $crate::block::BlockVariant>::resolve(data),
                        None => self,
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::brown_mushroom_block::*;
    use crate::block::minecraft::dispenser::{DISPENSER_TRIGGERED_WEST, Dispenser};
    use crate::block::minecraft::ladder::{LADDER_EAST, LADDER_NORTH, Ladder};
    use crate::block::minecraft::lit_pumpkin::{JACK_O_LANTERN_EAST, JACK_O_LANTERN_SOUTH};
    use crate::block::minecraft::stone_button::*;
    use crate::block::minecraft::torch::{TORCH_NORTH, TORCH_UP, Torch};
    use crate::capability::{Directional, Powerable};

    #[test]
    fn torch_falls_back_to_standing() {
        assert_eq!(Torch::get_torch(BlockFace::North), TORCH_NORTH);
        assert_eq!(Torch::get_torch(BlockFace::Down), TORCH_UP);
        assert_eq!(Torch::by_id(0), None);
        assert_eq!(Torch::used_data_values(), 5);
        assert_eq!(TORCH_NORTH.with_facing(BlockFace::SouthEast), TORCH_UP);
    }

    #[test]
    fn wall_and_horizontal() {
        assert_eq!(Ladder::get_ladder(BlockFace::East), LADDER_EAST);
        assert_eq!(LADDER_EAST.with_facing(BlockFace::Up), LADDER_NORTH);
        assert_eq!(LADDER_EAST.data(), 5);
        assert_eq!(JACK_O_LANTERN_SOUTH.with_facing(BlockFace::East), JACK_O_LANTERN_EAST);
        assert_eq!(JACK_O_LANTERN_EAST.data(), 3);
    }

    #[test]
    fn six_way_flag() {
        let dispenser = Dispenser::get_dispenser(BlockFace::West, true);
        assert_eq!(dispenser, DISPENSER_TRIGGERED_WEST);
        assert_eq!(dispenser.data(), 0xC);
        assert!(dispenser.is_powered());
        assert_eq!(dispenser.with_facing(BlockFace::Up).data(), 0x9);
        assert_eq!(dispenser.with_powered(false).facing(), BlockFace::West);
    }

    #[test]
    fn buttons() {
        assert_eq!(
            StoneButton::get_stone_button(BlockFace::North, true),
            STONE_BUTTON_POWERED_NORTH
        );
        assert_eq!(STONE_BUTTON_POWERED_NORTH.with_powered(false), STONE_BUTTON_NORTH);
        assert_eq!(STONE_BUTTON_UP.with_facing(BlockFace::Down), STONE_BUTTON_DOWN);
    }

    #[test]
    fn levers() {
        for face in BlockFace::CARTESIAN {
            for along_x in [false, true] {
                assert_eq!(lever_face(lever_data(face, along_x)), face);
            }
        }
        assert_eq!(lever_data(BlockFace::Up, false), 5);
        assert_eq!(lever_data(BlockFace::Down, true), 0);
        assert!(lever_along_x(6));
        assert!(!lever_along_x(7));
    }

    #[test]
    fn mushroom_caps() {
        assert_eq!(BROWN_MUSHROOM_BLOCK_CENTER.facing(), BlockFace::Up);
        assert_eq!(
            BROWN_MUSHROOM_BLOCK_CENTER.with_facing(BlockFace::SouthEast),
            BROWN_MUSHROOM_BLOCK_SOUTH_EAST
        );
        assert_eq!(BROWN_MUSHROOM_BLOCK_STEM.facing(), BlockFace::SelfFace);
        assert_eq!(
            BROWN_MUSHROOM_BLOCK_STEM.with_facing(BlockFace::Down),
            BROWN_MUSHROOM_BLOCK_STEM
        );
        assert_eq!(BrownMushroomBlock::used_data_values(), 13);
    }
}
