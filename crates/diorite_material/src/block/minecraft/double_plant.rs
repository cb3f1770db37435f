use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::block::family::{horizontal_data, horizontal_face};
use crate::direction::BlockFace;
use crate::error::MaterialError;
use serde::{Deserialize, Serialize};

pub const UPPER: u8 = 0x8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoublePlantKind {
    Sunflower = 0,
    Lilac = 1,
    DoubleTallgrass = 2,
    LargeFern = 3,
    RoseBush = 4,
    Peony = 5,
}

impl DoublePlantKind {
    pub const ALL: [DoublePlantKind; 6] = [
        DoublePlantKind::Sunflower,
        DoublePlantKind::Lilac,
        DoublePlantKind::DoubleTallgrass,
        DoublePlantKind::LargeFern,
        DoublePlantKind::RoseBush,
        DoublePlantKind::Peony,
    ];

    #[inline]
    pub const fn data(self) -> u8 {
        self as u8
    }

    pub const fn from_data(data: u8) -> Option<Self> {
        match data {
            0 => Some(DoublePlantKind::Sunflower),
            1 => Some(DoublePlantKind::Lilac),
            2 => Some(DoublePlantKind::DoubleTallgrass),
            3 => Some(DoublePlantKind::LargeFern),
            4 => Some(DoublePlantKind::RoseBush),
            5 => Some(DoublePlantKind::Peony),
            _ => None,
        }
    }
}

// The lower half stores the plant kind. The upper half only stores the
// facing of the lower half's sunflower head.
crate::generate_block_states! {
    variant: DoublePlant,
    id: 175,
    identifier: "double_plant",
    name: DOUBLE_PLANT,
    states: {
        DOUBLE_PLANT_SUNFLOWER = "SUNFLOWER" => 0x0,
        DOUBLE_PLANT_LILAC = "LILAC" => 0x1,
        DOUBLE_PLANT_DOUBLE_TALLGRASS = "DOUBLE_TALLGRASS" => 0x2,
        DOUBLE_PLANT_LARGE_FERN = "LARGE_FERN" => 0x3,
        DOUBLE_PLANT_ROSE_BUSH = "ROSE_BUSH" => 0x4,
        DOUBLE_PLANT_PEONY = "PEONY" => 0x5,
        DOUBLE_PLANT_UPPER_SOUTH = "UPPER_SOUTH" => 0x8,
        DOUBLE_PLANT_UPPER_WEST = "UPPER_WEST" => 0x9,
        DOUBLE_PLANT_UPPER_NORTH = "UPPER_NORTH" => 0xA,
        DOUBLE_PLANT_UPPER_EAST = "UPPER_EAST" => 0xB,
    },
    default: DOUBLE_PLANT_SUNFLOWER,
    block_properties: Properties::new().instant_break().no_collision().replaceable().flammable()
}

impl DoublePlant {
    pub fn get_double_plant(kind: DoublePlantKind) -> Self {
        Self::resolve(kind.data())
    }

    pub fn get_double_plant_top(face: BlockFace) -> Self {
        Self::resolve(UPPER | horizontal_data(face))
    }

    #[inline]
    pub fn is_upper(self) -> bool {
        self.0 & UPPER != 0
    }

    pub fn kind(self) -> Result<DoublePlantKind, MaterialError> {
        match DoublePlantKind::from_data(self.0) {
            Some(kind) if !self.is_upper() => Ok(kind),
            _ => self.undefined("kind"),
        }
    }

    pub fn with_kind(self, kind: DoublePlantKind) -> Result<Self, MaterialError> {
        if self.is_upper() {
            return self.undefined("kind");
        }
        Ok(Self::get_double_plant(kind))
    }

    pub fn facing(self) -> Result<BlockFace, MaterialError> {
        if !self.is_upper() {
            return self.undefined("facing");
        }
        Ok(horizontal_face(self.0 & 0x3))
    }

    pub fn with_facing(self, face: BlockFace) -> Result<Self, MaterialError> {
        if !self.is_upper() {
            return self.undefined("facing");
        }
        Ok(Self::get_double_plant_top(face))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves() {
        let lower = DoublePlant::get_double_plant(DoublePlantKind::RoseBush);
        assert_eq!(lower, DOUBLE_PLANT_ROSE_BUSH);
        assert_eq!(lower.kind(), Ok(DoublePlantKind::RoseBush));
        assert!(lower.facing().is_err());
        assert_eq!(lower.with_kind(DoublePlantKind::Peony), Ok(DOUBLE_PLANT_PEONY));

        let upper = DoublePlant::get_double_plant_top(BlockFace::North);
        assert_eq!(upper, DOUBLE_PLANT_UPPER_NORTH);
        assert_eq!(upper.facing(), Ok(BlockFace::North));
        assert_eq!(upper.with_facing(BlockFace::East), Ok(DOUBLE_PLANT_UPPER_EAST));
        assert!(matches!(
            upper.kind(),
            Err(MaterialError::UndefinedAttribute { attribute: "kind", .. })
        ));
    }
}
