use crate::block::family::facing::{SIX_WAY_FLAG, six_way_combine};
use crate::capability::Directional;
use crate::direction::BlockFace;

/// Piston bases. The head and moving piece store stickiness in the same bit
/// instead and do not implement this trait.
pub trait Piston: Directional {
    fn of(face: BlockFace, extended: bool) -> Self {
        Self::resolve(six_way_combine(face, extended))
    }

    #[inline]
    fn is_extended(self) -> bool {
        self.data() & SIX_WAY_FLAG != 0
    }

    fn with_extended(self, extended: bool) -> Self {
        Self::of(self.facing(), extended)
    }
}

/// Piston heads and moving pistons.
pub trait PistonPart: Directional {
    #[inline]
    fn is_sticky(self) -> bool {
        self.data() & SIX_WAY_FLAG != 0
    }

    fn with_sticky(self, sticky: bool) -> Self {
        Self::resolve(six_way_combine(self.facing(), sticky))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::piston::{NormalPiston, PISTON_EXTENDED_UP, PISTON_UP};
    use crate::block::minecraft::piston_head::{PISTON_HEAD_NORTH, PISTON_HEAD_STICKY_NORTH};
    use crate::block::minecraft::sticky_piston::{STICKY_PISTON_EXTENDED_EAST, StickyPiston};

    #[test]
    fn extension_flag() {
        assert_eq!(NormalPiston::of(BlockFace::Up, true), PISTON_EXTENDED_UP);
        assert!(PISTON_EXTENDED_UP.is_extended());
        assert_eq!(PISTON_EXTENDED_UP.with_extended(false), PISTON_UP);
        assert_eq!(PISTON_UP.data(), 1);
        assert_eq!(
            StickyPiston::get_sticky_piston(BlockFace::East, true),
            STICKY_PISTON_EXTENDED_EAST
        );
        assert_eq!(STICKY_PISTON_EXTENDED_EAST.data(), 0xD);
    }

    #[test]
    fn head_stickiness() {
        assert!(!PISTON_HEAD_NORTH.is_sticky());
        assert_eq!(PISTON_HEAD_NORTH.with_sticky(true), PISTON_HEAD_STICKY_NORTH);
        assert_eq!(PISTON_HEAD_STICKY_NORTH.facing(), BlockFace::North);
    }
}
