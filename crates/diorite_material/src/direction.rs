use bevy_math::IVec3;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Direction a block faces or is attached towards. Besides the six cartesian
/// faces it carries the ordinal and secondary-intercardinal points used by
/// sixteen-way rotations (signs, banners).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockFace {
    North,
    East,
    South,
    West,
    Up,
    #[serde(alias = "bottom")]
    Down,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    WestNorthWest,
    NorthNorthWest,
    NorthNorthEast,
    EastNorthEast,
    EastSouthEast,
    SouthSouthEast,
    SouthSouthWest,
    WestSouthWest,
    #[serde(rename = "self")]
    SelfFace,
}

/// Sixteen-point compass in legacy rotation order, starting at south and
/// turning clockwise when seen from above.
const ROTATIONS: [BlockFace; 16] = [
    BlockFace::South,
    BlockFace::SouthSouthWest,
    BlockFace::SouthWest,
    BlockFace::WestSouthWest,
    BlockFace::West,
    BlockFace::WestNorthWest,
    BlockFace::NorthWest,
    BlockFace::NorthNorthWest,
    BlockFace::North,
    BlockFace::NorthNorthEast,
    BlockFace::NorthEast,
    BlockFace::EastNorthEast,
    BlockFace::East,
    BlockFace::EastSouthEast,
    BlockFace::SouthEast,
    BlockFace::SouthSouthEast,
];

impl BlockFace {
    pub const CARTESIAN: [BlockFace; 6] = [
        BlockFace::North,
        BlockFace::East,
        BlockFace::South,
        BlockFace::West,
        BlockFace::Up,
        BlockFace::Down,
    ];

    pub const HORIZONTAL: [BlockFace; 4] = [
        BlockFace::North,
        BlockFace::East,
        BlockFace::South,
        BlockFace::West,
    ];

    pub const ALL: [BlockFace; 19] = [
        BlockFace::North,
        BlockFace::East,
        BlockFace::South,
        BlockFace::West,
        BlockFace::Up,
        BlockFace::Down,
        BlockFace::NorthEast,
        BlockFace::NorthWest,
        BlockFace::SouthEast,
        BlockFace::SouthWest,
        BlockFace::WestNorthWest,
        BlockFace::NorthNorthWest,
        BlockFace::NorthNorthEast,
        BlockFace::EastNorthEast,
        BlockFace::EastSouthEast,
        BlockFace::SouthSouthEast,
        BlockFace::SouthSouthWest,
        BlockFace::WestSouthWest,
        BlockFace::SelfFace,
    ];

    pub const fn offset(self) -> IVec3 {
        let (x, y, z) = match self {
            BlockFace::North => (0, 0, -1),
            BlockFace::East => (1, 0, 0),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::Down => (0, -1, 0),
            BlockFace::NorthEast => (1, 0, -1),
            BlockFace::NorthWest => (-1, 0, -1),
            BlockFace::SouthEast => (1, 0, 1),
            BlockFace::SouthWest => (-1, 0, 1),
            BlockFace::WestNorthWest => (-2, 0, -1),
            BlockFace::NorthNorthWest => (-1, 0, -2),
            BlockFace::NorthNorthEast => (1, 0, -2),
            BlockFace::EastNorthEast => (2, 0, -1),
            BlockFace::EastSouthEast => (2, 0, 1),
            BlockFace::SouthSouthEast => (1, 0, 2),
            BlockFace::SouthSouthWest => (-1, 0, 2),
            BlockFace::WestSouthWest => (-2, 0, 1),
            BlockFace::SelfFace => (0, 0, 0),
        };
        IVec3::new(x, y, z)
    }

    pub const fn opposite(self) -> BlockFace {
        match self {
            BlockFace::North => BlockFace::South,
            BlockFace::East => BlockFace::West,
            BlockFace::South => BlockFace::North,
            BlockFace::West => BlockFace::East,
            BlockFace::Up => BlockFace::Down,
            BlockFace::Down => BlockFace::Up,
            BlockFace::NorthEast => BlockFace::SouthWest,
            BlockFace::NorthWest => BlockFace::SouthEast,
            BlockFace::SouthEast => BlockFace::NorthWest,
            BlockFace::SouthWest => BlockFace::NorthEast,
            BlockFace::WestNorthWest => BlockFace::EastSouthEast,
            BlockFace::NorthNorthWest => BlockFace::SouthSouthEast,
            BlockFace::NorthNorthEast => BlockFace::SouthSouthWest,
            BlockFace::EastNorthEast => BlockFace::WestSouthWest,
            BlockFace::EastSouthEast => BlockFace::WestNorthWest,
            BlockFace::SouthSouthEast => BlockFace::NorthNorthWest,
            BlockFace::SouthSouthWest => BlockFace::NorthNorthEast,
            BlockFace::WestSouthWest => BlockFace::EastNorthEast,
            BlockFace::SelfFace => BlockFace::SelfFace,
        }
    }

    pub const fn is_cartesian(self) -> bool {
        matches!(
            self,
            BlockFace::North
                | BlockFace::East
                | BlockFace::South
                | BlockFace::West
                | BlockFace::Up
                | BlockFace::Down
        )
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(
            self,
            BlockFace::North | BlockFace::East | BlockFace::South | BlockFace::West
        )
    }

    /// Position on the sixteen-point compass, `None` for `Up`, `Down` and
    /// `SelfFace`.
    pub const fn rotation(self) -> Option<u8> {
        let mut i = 0;
        while i < ROTATIONS.len() {
            if ROTATIONS[i] as u8 == self as u8 {
                return Some(i as u8);
            }
            i += 1;
        }
        None
    }

    /// Inverse of [`BlockFace::rotation`]; only the low four bits are used.
    pub const fn from_rotation(rotation: u8) -> BlockFace {
        ROTATIONS[(rotation & 0xF) as usize]
    }

    /// Axis of a cartesian face, `None` for every other face.
    pub const fn axis(self) -> Option<Axis> {
        match self {
            BlockFace::North | BlockFace::South => Some(Axis::Z),
            BlockFace::East | BlockFace::West => Some(Axis::X),
            BlockFace::Up | BlockFace::Down => Some(Axis::Y),
            _ => None,
        }
    }
}

impl From<BlockFace> for IVec3 {
    #[inline]
    fn from(face: BlockFace) -> Self {
        face.offset()
    }
}

impl TryFrom<IVec3> for BlockFace {
    type Error = IVec3;

    fn try_from(vec: IVec3) -> Result<Self, Self::Error> {
        BlockFace::ALL
            .into_iter()
            .find(|face| face.offset() == vec)
            .ok_or(vec)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for face in BlockFace::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.offset() + face.opposite().offset(), IVec3::ZERO);
        }
    }

    #[test]
    fn rotation_round_trip() {
        for rotation in 0..16u8 {
            let face = BlockFace::from_rotation(rotation);
            assert_eq!(face.rotation(), Some(rotation));
        }
        assert_eq!(BlockFace::South.rotation(), Some(0));
        assert_eq!(BlockFace::West.rotation(), Some(4));
        assert_eq!(BlockFace::North.rotation(), Some(8));
        assert_eq!(BlockFace::East.rotation(), Some(12));
        assert_eq!(BlockFace::Up.rotation(), None);
        assert_eq!(BlockFace::SelfFace.rotation(), None);
    }

    #[test]
    fn offsets_are_unique() {
        for face in BlockFace::ALL {
            assert_eq!(BlockFace::try_from(face.offset()), Ok(face));
        }
        assert_eq!(
            BlockFace::try_from(IVec3::new(5, 0, 0)),
            Err(IVec3::new(5, 0, 0))
        );
    }

    #[test]
    fn cartesian_axes() {
        assert_eq!(BlockFace::North.axis(), Some(Axis::Z));
        assert_eq!(BlockFace::West.axis(), Some(Axis::X));
        assert_eq!(BlockFace::Down.axis(), Some(Axis::Y));
        assert_eq!(BlockFace::NorthEast.axis(), None);
        assert!(BlockFace::CARTESIAN.iter().all(|f| f.is_cartesian()));
        assert!(BlockFace::HORIZONTAL.iter().all(|f| f.is_horizontal()));
    }
}
