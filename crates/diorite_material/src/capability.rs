//! Attributes shared by many unrelated block families.
//!
//! Mutators never change the block type. When the requested combination has
//! no registered state they return the block's default state.

use crate::block::BlockVariant;
use crate::color::DyeColor;
use crate::direction::{Axis, BlockFace};
use crate::wood::WoodType;

pub trait Directional: BlockVariant {
    fn facing(self) -> BlockFace;

    fn with_facing(self, face: BlockFace) -> Self;
}

pub trait Powerable: BlockVariant {
    fn is_powered(self) -> bool;

    fn with_powered(self, powered: bool) -> Self;
}

pub trait Openable: BlockVariant {
    fn is_open(self) -> bool;

    fn with_open(self, open: bool) -> Self;
}

pub trait Colorable: BlockVariant {
    fn color(self) -> DyeColor;

    fn with_color(self, color: DyeColor) -> Self;
}

/// A single small counter: growth age, signal power, moisture, snow layers,
/// cake bites and the like.
pub trait Leveled: BlockVariant {
    const MAX_LEVEL: u8;

    #[inline]
    fn level(self) -> u8 {
        self.data()
    }

    /// Levels above [`Leveled::MAX_LEVEL`] are clamped.
    fn with_level(self, level: u8) -> Self {
        Self::resolve(level.min(Self::MAX_LEVEL))
    }
}

pub trait Axial: BlockVariant {
    fn axis(self) -> Axis;

    fn with_axis(self, axis: Axis) -> Self;
}

pub trait Wooden: BlockVariant {
    fn wood_type(self) -> WoodType;
}

/// Blocks whose data value selects one of several kinds (stone types, flower
/// types, wood types).
pub trait Kinded: BlockVariant {
    type Kind: Copy;

    fn kind(self) -> Self::Kind;

    fn with_kind(self, kind: Self::Kind) -> Self;
}
