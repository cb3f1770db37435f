//! Data value layouts shared by groups of blocks, and the macros that declare
//! blocks using them.

use crate::direction::BlockFace;

pub mod door;
pub mod facing;
pub mod fence_gate;
pub mod liquid;
pub mod piston;
pub mod rail;
pub mod redstone;
pub mod rotation;
pub mod simple;
pub mod slab;
pub mod stairs;
pub mod trapdoor;
pub mod tree;

/// Two-bit horizontal index: south 0, west 1, north 2, east 3. Other faces
/// are stored as south.
pub const fn horizontal_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::West => 1,
        BlockFace::North => 2,
        BlockFace::East => 3,
        _ => 0,
    }
}

pub const fn horizontal_face(data: u8) -> BlockFace {
    match data & 0x3 {
        0 => BlockFace::South,
        1 => BlockFace::West,
        2 => BlockFace::North,
        _ => BlockFace::East,
    }
}

/// Three-bit cartesian index: down 0, up 1, north 2, south 3, west 4, east 5.
/// Other faces are stored as down.
pub const fn cartesian_data(face: BlockFace) -> u8 {
    match face {
        BlockFace::Up => 1,
        BlockFace::North => 2,
        BlockFace::South => 3,
        BlockFace::West => 4,
        BlockFace::East => 5,
        _ => 0,
    }
}

/// Indices 6 and 7 are unused and read as down.
pub const fn cartesian_face(data: u8) -> BlockFace {
    match data & 0x7 {
        1 => BlockFace::Up,
        2 => BlockFace::North,
        3 => BlockFace::South,
        4 => BlockFace::West,
        5 => BlockFace::East,
        _ => BlockFace::Down,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_round_trip() {
        for face in BlockFace::HORIZONTAL {
            assert_eq!(horizontal_face(horizontal_data(face)), face);
        }
        assert_eq!(horizontal_data(BlockFace::Up), 0);
        assert_eq!(horizontal_data(BlockFace::NorthEast), 0);
    }

    #[test]
    fn cartesian_round_trip() {
        for face in BlockFace::CARTESIAN {
            assert_eq!(cartesian_face(cartesian_data(face)), face);
        }
        assert_eq!(cartesian_data(BlockFace::SelfFace), 0);
        assert_eq!(cartesian_face(0x8 | 3), BlockFace::South);
    }
}
