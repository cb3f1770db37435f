use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::capability::Directional;
use crate::direction::BlockFace;

/// Set when the skull was broken in creative mode and must not drop.
pub const NO_DROP: u8 = 0x8;

crate::generate_block_states! {
    variant: Skull,
    id: 144,
    identifier: "skull",
    name: SKULL,
    states: {
        SKULL_FLOOR = "FLOOR" => 0x1,
        SKULL_NORTH = "NORTH" => 0x2,
        SKULL_SOUTH = "SOUTH" => 0x3,
        SKULL_WEST = "WEST" => 0x4,
        SKULL_EAST = "EAST" => 0x5,
        SKULL_NO_DROP_FLOOR = "NO_DROP_FLOOR" => 0x9,
        SKULL_NO_DROP_NORTH = "NO_DROP_NORTH" => 0xA,
        SKULL_NO_DROP_SOUTH = "NO_DROP_SOUTH" => 0xB,
        SKULL_NO_DROP_WEST = "NO_DROP_WEST" => 0xC,
        SKULL_NO_DROP_EAST = "NO_DROP_EAST" => 0xD,
    },
    default: SKULL_FLOOR,
    block_properties: Properties::new().with_strength(1.0, 5.0)
}

/// Floor skulls face up; other non-horizontal faces put the skull on the
/// floor.
const fn skull_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::North => 2,
        BlockFace::South => 3,
        BlockFace::West => 4,
        BlockFace::East => 5,
        _ => 1,
    }
}

const fn skull_face(data: u8) -> BlockFace {
    match data & 0x7 {
        2 => BlockFace::North,
        3 => BlockFace::South,
        4 => BlockFace::West,
        5 => BlockFace::East,
        _ => BlockFace::Up,
    }
}

impl Directional for Skull {
    #[inline]
    fn facing(self) -> BlockFace {
        skull_face(self.0)
    }

    fn with_facing(self, face: BlockFace) -> Self {
        Self::resolve((self.0 & NO_DROP) | skull_data(face))
    }
}

impl Skull {
    pub fn get_skull(face: BlockFace) -> Self {
        Self::resolve(skull_data(face))
    }

    #[inline]
    pub fn is_no_drop(self) -> bool {
        self.0 & NO_DROP != 0
    }

    pub fn with_no_drop(self, no_drop: bool) -> Self {
        Self::resolve(if no_drop {
            self.0 | NO_DROP
        } else {
            self.0 & !NO_DROP
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement() {
        assert_eq!(Skull::get_skull(BlockFace::Up), SKULL_FLOOR);
        assert_eq!(Skull::get_skull(BlockFace::Down), SKULL_FLOOR);
        assert_eq!(Skull::get_skull(BlockFace::West), SKULL_WEST);
        assert_eq!(SKULL_WEST.with_no_drop(true), SKULL_NO_DROP_WEST);
        assert_eq!(SKULL_NO_DROP_WEST.with_facing(BlockFace::East), SKULL_NO_DROP_EAST);
        assert_eq!(SKULL_NO_DROP_FLOOR.facing(), BlockFace::Up);
        assert_eq!(Skull::by_id(0), None);
    }
}
