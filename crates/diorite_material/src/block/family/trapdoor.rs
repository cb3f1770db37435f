use crate::capability::{Directional, Openable};
use crate::direction::BlockFace;

pub const OPEN: u8 = 0x4;
pub const TOP: u8 = 0x8;

/// Non-horizontal faces are stored as north.
pub const fn facing_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::South => 1,
        BlockFace::West => 2,
        BlockFace::East => 3,
        _ => 0,
    }
}

pub const fn facing(data: u8) -> BlockFace {
    match data & 0x3 {
        0 => BlockFace::North,
        1 => BlockFace::South,
        2 => BlockFace::West,
        _ => BlockFace::East,
    }
}

pub const fn combine(face: BlockFace, open: bool, top: bool) -> u8 {
    facing_data(face) | if open { OPEN } else { 0 } | if top { TOP } else { 0 }
}

pub trait Trapdoor: Directional + Openable {
    fn of(face: BlockFace, open: bool, top: bool) -> Self {
        Self::resolve(combine(face, open, top))
    }

    /// Placed against the upper half of a block.
    #[inline]
    fn is_top(self) -> bool {
        self.data() & TOP != 0
    }

    fn with_top(self, top: bool) -> Self {
        Self::of(self.facing(), self.is_open(), top)
    }
}

#[macro_export]
macro_rules! trapdoor_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, wood: $wood:ident)?
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
                    [<$name _SOUTH>] = "SOUTH" => 0x1,
                    [<$name _WEST>] = "WEST" => 0x2,
                    [<$name _EAST>] = "EAST" => 0x3,
                    [<$name _OPEN_NORTH>] = "OPEN_NORTH" => 0x4,
                    [<$name _OPEN_SOUTH>] = "OPEN_SOUTH" => 0x5,
                    [<$name _OPEN_WEST>] = "OPEN_WEST" => 0x6,
                    [<$name _OPEN_EAST>] = "OPEN_EAST" => 0x7,
                    [<$name _TOP_NORTH>] = "TOP_NORTH" => 0x8,
                    [<$name _TOP_SOUTH>] = "TOP_SOUTH" => 0x9,
                    [<$name _TOP_WEST>] = "TOP_WEST" => 0xA,
                    [<$name _TOP_EAST>] = "TOP_EAST" => 0xB,
                    [<$name _TOP_OPEN_NORTH>] = "TOP_OPEN_NORTH" => 0xC,
                    [<$name _TOP_OPEN_SOUTH>] = "TOP_OPEN_SOUTH" => 0xD,
                    [<$name _TOP_OPEN_WEST>] = "TOP_OPEN_WEST" => 0xE,
                    [<$name _TOP_OPEN_EAST>] = "TOP_OPEN_EAST" => 0xF,
                },
                default: [<$name _NORTH>]
                $(, block_properties: $properties)?
            }

            impl $crate::capability::Directional for $variant {
                #[inline]
                fn facing(self) -> $crate::direction::BlockFace {
                    $crate::block::family::trapdoor::facing(self.0)
                }

                fn with_facing(self, face: $crate::direction::BlockFace) -> Self {
                    <Self as $crate::block::BlockVariant>::resolve(
                        $crate::block::family::trapdoor::facing_data(face) | (self.0 & 0xC),
                    )
                }
            }

            impl $crate::capability::Openable for $variant {
                #[inline]
                fn is_open(self) -> bool {
                    self.0 & $crate::block::family::trapdoor::OPEN != 0
                }

                fn with_open(self, open: bool) -> Self {
                    <Self as $crate::block::family::trapdoor::Trapdoor>::of(
                        <Self as $crate::capability::Directional>::facing(self),
                        open,
                        <Self as $crate::block::family::trapdoor::Trapdoor>::is_top(self),
                    )
                }
            }

            impl $crate::block::family::trapdoor::Trapdoor for $variant {}

            $($crate::impl_wooden!($variant, $wood);)?

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace, open: bool, top: bool) -> Self {
                    <Self as $crate::block::family::trapdoor::Trapdoor>::of(face, open, top)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::iron_trapdoor::{IRON_TRAPDOOR_TOP_OPEN_EAST, IronTrapdoor};
    use crate::block::minecraft::trapdoor::*;

    #[test]
    fn all_sixteen_combinations() {
        for face in BlockFace::HORIZONTAL {
            for open in [false, true] {
                for top in [false, true] {
                    let trapdoor = WoodenTrapdoor::get_trapdoor(face, open, top);
                    assert_eq!(trapdoor.facing(), face);
                    assert_eq!(trapdoor.is_open(), open);
                    assert_eq!(trapdoor.is_top(), top);
                }
            }
        }
        assert_eq!(
            IronTrapdoor::get_iron_trapdoor(BlockFace::East, true, true),
            IRON_TRAPDOOR_TOP_OPEN_EAST
        );
        assert_eq!(IRON_TRAPDOOR_TOP_OPEN_EAST.data(), 0xF);
    }

    #[test]
    fn mutators() {
        assert_eq!(TRAPDOOR_NORTH.with_open(true), TRAPDOOR_OPEN_NORTH);
        assert_eq!(TRAPDOOR_OPEN_NORTH.with_top(true), TRAPDOOR_TOP_OPEN_NORTH);
        assert_eq!(TRAPDOOR_TOP_OPEN_NORTH.with_facing(BlockFace::West), TRAPDOOR_TOP_OPEN_WEST);
        assert_eq!(TRAPDOOR_SOUTH.with_facing(BlockFace::Up), TRAPDOOR_NORTH);
    }
}
