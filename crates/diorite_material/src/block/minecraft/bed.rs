use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::block::family::{horizontal_data, horizontal_face};
use crate::direction::BlockFace;
use crate::error::MaterialError;

pub const HEAD: u8 = 0x8;
/// Only stored on the head part.
pub const OCCUPIED: u8 = 0x4;

crate::generate_block_states! {
    variant: Bed,
    id: 26,
    identifier: "bed",
    name: BED,
    states: {
        BED_FOOT_SOUTH = "FOOT_SOUTH" => 0x0,
        BED_FOOT_WEST = "FOOT_WEST" => 0x1,
        BED_FOOT_NORTH = "FOOT_NORTH" => 0x2,
        BED_FOOT_EAST = "FOOT_EAST" => 0x3,
        BED_HEAD_SOUTH = "HEAD_SOUTH" => 0x8,
        BED_HEAD_WEST = "HEAD_WEST" => 0x9,
        BED_HEAD_NORTH = "HEAD_NORTH" => 0xA,
        BED_HEAD_EAST = "HEAD_EAST" => 0xB,
        BED_HEAD_OCCUPIED_SOUTH = "HEAD_OCCUPIED_SOUTH" => 0xC,
        BED_HEAD_OCCUPIED_WEST = "HEAD_OCCUPIED_WEST" => 0xD,
        BED_HEAD_OCCUPIED_NORTH = "HEAD_OCCUPIED_NORTH" => 0xE,
        BED_HEAD_OCCUPIED_EAST = "HEAD_OCCUPIED_EAST" => 0xF,
    },
    default: BED_FOOT_SOUTH,
    block_properties: Properties::new().with_strength(0.2, 1.0).flammable()
}

crate::impl_directional!(Bed, mask: 0x3, data: horizontal_data, face: horizontal_face);

impl Bed {
    pub fn get_bed(face: BlockFace, head: bool) -> Self {
        Self::resolve(horizontal_data(face) | if head { HEAD } else { 0 })
    }

    #[inline]
    pub fn is_head(self) -> bool {
        self.0 & HEAD != 0
    }

    pub fn is_occupied(self) -> Result<bool, MaterialError> {
        if !self.is_head() {
            return self.undefined("occupied");
        }
        Ok(self.0 & OCCUPIED != 0)
    }

    pub fn with_occupied(self, occupied: bool) -> Result<Self, MaterialError> {
        if !self.is_head() {
            return self.undefined("occupied");
        }
        Ok(Self::resolve(if occupied {
            self.0 | OCCUPIED
        } else {
            self.0 & !OCCUPIED
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Directional;

    #[test]
    fn head_and_foot() {
        let foot = Bed::get_bed(BlockFace::North, false);
        assert_eq!(foot, BED_FOOT_NORTH);
        assert!(foot.is_occupied().is_err());
        assert!(foot.with_occupied(true).is_err());

        assert_eq!(foot.with_facing(BlockFace::East), BED_FOOT_EAST);
        let head = Bed::get_bed(BlockFace::East, true);
        assert_eq!(head.is_occupied(), Ok(false));
        assert_eq!(head.with_occupied(true), Ok(BED_HEAD_OCCUPIED_EAST));
        assert_eq!(BED_HEAD_OCCUPIED_EAST.with_facing(BlockFace::West), BED_HEAD_OCCUPIED_WEST);
        assert_eq!(Bed::used_data_values(), 12);
    }
}
