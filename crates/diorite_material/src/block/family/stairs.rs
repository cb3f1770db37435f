use crate::capability::Directional;
use crate::direction::BlockFace;

pub const UPSIDE_DOWN: u8 = 0x4;

/// Non-horizontal faces are stored as east.
pub const fn facing_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::West => 1,
        BlockFace::South => 2,
        BlockFace::North => 3,
        _ => 0,
    }
}

pub const fn facing(data: u8) -> BlockFace {
    match data & 0x3 {
        0 => BlockFace::East,
        1 => BlockFace::West,
        2 => BlockFace::South,
        _ => BlockFace::North,
    }
}

pub const fn combine(face: BlockFace, upside_down: bool) -> u8 {
    facing_data(face) | if upside_down { UPSIDE_DOWN } else { 0 }
}

pub trait Stairs: Directional {
    fn of(face: BlockFace, upside_down: bool) -> Self {
        Self::resolve(combine(face, upside_down))
    }

    #[inline]
    fn is_upside_down(self) -> bool {
        self.data() & UPSIDE_DOWN != 0
    }

    fn with_upside_down(self, upside_down: bool) -> Self {
        Self::of(self.facing(), upside_down)
    }
}

#[macro_export]
macro_rules! stairs_block {
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
                    [<$name _EAST>] = "EAST" => 0x0,
                    [<$name _WEST>] = "WEST" => 0x1,
                    [<$name _SOUTH>] = "SOUTH" => 0x2,
                    [<$name _NORTH>] = "NORTH" => 0x3,
                    [<$name _UPSIDE_DOWN_EAST>] = "UPSIDE_DOWN_EAST" => 0x4,
                    [<$name _UPSIDE_DOWN_WEST>] = "UPSIDE_DOWN_WEST" => 0x5,
                    [<$name _UPSIDE_DOWN_SOUTH>] = "UPSIDE_DOWN_SOUTH" => 0x6,
                    [<$name _UPSIDE_DOWN_NORTH>] = "UPSIDE_DOWN_NORTH" => 0x7,
                },
                default: [<$name _EAST>]
                $(, block_properties: $properties)?
            }

            impl $crate::capability::Directional for $variant {
                #[inline]
                fn facing(self) -> $crate::direction::BlockFace {
                    $crate::block::family::stairs::facing(self.0)
                }

                fn with_facing(self, face: $crate::direction::BlockFace) -> Self {
                    <Self as $crate::block::family::stairs::Stairs>::of(
                        face,
                        <Self as $crate::block::family::stairs::Stairs>::is_upside_down(self),
                    )
                }
            }

            impl $crate::block::family::stairs::Stairs for $variant {}

            $($crate::impl_wooden!($variant, $wood);)?

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace, upside_down: bool) -> Self {
                    <Self as $crate::block::family::stairs::Stairs>::of(face, upside_down)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::oak_stairs::*;
    use crate::block::minecraft::quartz_stairs::{QUARTZ_STAIRS_UPSIDE_DOWN_SOUTH, QuartzStairs};

    #[test]
    fn layout() {
        assert_eq!(OakStairs::get_oak_stairs(BlockFace::East, false).data(), 0);
        assert_eq!(OakStairs::get_oak_stairs(BlockFace::North, true).data(), 7);
        assert_eq!(
            QuartzStairs::get_quartz_stairs(BlockFace::South, true),
            QUARTZ_STAIRS_UPSIDE_DOWN_SOUTH
        );
    }

    #[test]
    fn mutators_keep_other_attribute() {
        let stairs = OAK_STAIRS_UPSIDE_DOWN_WEST;
        assert_eq!(stairs.facing(), BlockFace::West);
        assert_eq!(stairs.with_facing(BlockFace::South), OAK_STAIRS_UPSIDE_DOWN_SOUTH);
        assert_eq!(stairs.with_upside_down(false), OAK_STAIRS_WEST);
        assert_eq!(OAK_STAIRS_NORTH.with_facing(BlockFace::Down), OAK_STAIRS_EAST);
    }
}
