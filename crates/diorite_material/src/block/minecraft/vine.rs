use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::direction::BlockFace;
use bitflags::bitflags;

bitflags! {
    /// Sides a vine is attached to. An empty set hangs from the block above.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VineFaces: u8 {
        const SOUTH = 0x1;
        const WEST = 0x2;
        const NORTH = 0x4;
        const EAST = 0x8;
    }
}

impl VineFaces {
    pub const fn from_face(face: BlockFace) -> Self {
        match face {
            BlockFace::South => Self::SOUTH,
            BlockFace::West => Self::WEST,
            BlockFace::North => Self::NORTH,
            BlockFace::East => Self::EAST,
            _ => Self::empty(),
        }
    }
}

crate::generate_block_states! {
    variant: Vine,
    id: 106,
    identifier: "vine",
    name: VINE,
    states: {
        VINE_TOP = "TOP" => 0x0,
        VINE_SOUTH = "SOUTH" => 0x1,
        VINE_WEST = "WEST" => 0x2,
        VINE_SOUTH_WEST = "SOUTH_WEST" => 0x3,
        VINE_NORTH = "NORTH" => 0x4,
        VINE_NORTH_SOUTH = "NORTH_SOUTH" => 0x5,
        VINE_NORTH_WEST = "NORTH_WEST" => 0x6,
        VINE_NORTH_SOUTH_WEST = "NORTH_SOUTH_WEST" => 0x7,
        VINE_EAST = "EAST" => 0x8,
        VINE_SOUTH_EAST = "SOUTH_EAST" => 0x9,
        VINE_EAST_WEST = "EAST_WEST" => 0xA,
        VINE_SOUTH_EAST_WEST = "SOUTH_EAST_WEST" => 0xB,
        VINE_NORTH_EAST = "NORTH_EAST" => 0xC,
        VINE_NORTH_SOUTH_EAST = "NORTH_SOUTH_EAST" => 0xD,
        VINE_NORTH_EAST_WEST = "NORTH_EAST_WEST" => 0xE,
        VINE_ALL = "ALL" => 0xF,
    },
    default: VINE_TOP,
    block_properties: Properties::new().with_strength(0.2, 1.0).no_collision().replaceable().flammable()
}

impl Vine {
    pub fn get_vine(faces: VineFaces) -> Self {
        Self::resolve(faces.bits())
    }

    #[inline]
    pub fn faces(self) -> VineFaces {
        VineFaces::from_bits_truncate(self.0)
    }

    pub fn is_attached(self, face: BlockFace) -> bool {
        let flag = VineFaces::from_face(face);
        !flag.is_empty() && self.faces().contains(flag)
    }

    /// Non-horizontal faces leave the vine unchanged.
    pub fn with_attached(self, face: BlockFace, attached: bool) -> Self {
        let mut faces = self.faces();
        faces.set(VineFaces::from_face(face), attached);
        Self::get_vine(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attached_faces() {
        let vine = Vine::get_vine(VineFaces::NORTH | VineFaces::EAST);
        assert_eq!(vine, VINE_NORTH_EAST);
        assert!(vine.is_attached(BlockFace::North));
        assert!(!vine.is_attached(BlockFace::South));
        assert!(!vine.is_attached(BlockFace::Up));
        assert_eq!(vine.with_attached(BlockFace::West, true), VINE_NORTH_EAST_WEST);
        assert_eq!(vine.with_attached(BlockFace::Down, true), vine);
        assert_eq!(VINE_SOUTH.with_attached(BlockFace::South, false), VINE_TOP);
        assert_eq!(Vine::used_data_values(), 16);
    }
}
