//! Logs, leaves and saplings. Each of them packs a wood type index in the low
//! bits and the remaining attributes above it.

use serde::{Deserialize, Serialize};

use crate::block::BlockVariant;
use crate::direction::Axis;

pub const LOG_AXIS_MASK: u8 = 0xC;

/// Axis bits shared by logs and hay bales: vertical 0, east-west 4,
/// north-south 8.
pub const fn log_axis_data(axis: Axis) -> u8 {
    match axis {
        Axis::Y => 0x0,
        Axis::X => 0x4,
        Axis::Z => 0x8,
    }
}

/// Bark reads as the vertical axis.
pub const fn log_axis(data: u8) -> Axis {
    match data & LOG_AXIS_MASK {
        0x4 => Axis::X,
        0x8 => Axis::Z,
        _ => Axis::Y,
    }
}

/// Orientation of a log. `None` is a bark-only log with no grain direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogAxis {
    Y,
    X,
    Z,
    None,
}

impl LogAxis {
    pub const fn from_data(data: u8) -> Self {
        match data & LOG_AXIS_MASK {
            0x0 => LogAxis::Y,
            0x4 => LogAxis::X,
            0x8 => LogAxis::Z,
            _ => LogAxis::None,
        }
    }

    pub const fn data(self) -> u8 {
        match self {
            LogAxis::Y => 0x0,
            LogAxis::X => 0x4,
            LogAxis::Z => 0x8,
            LogAxis::None => 0xC,
        }
    }

    pub const fn axis(self) -> Option<Axis> {
        match self {
            LogAxis::Y => Some(Axis::Y),
            LogAxis::X => Some(Axis::X),
            LogAxis::Z => Some(Axis::Z),
            LogAxis::None => None,
        }
    }
}

impl From<Axis> for LogAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Y => LogAxis::Y,
            Axis::X => LogAxis::X,
            Axis::Z => LogAxis::Z,
        }
    }
}

pub trait Log: BlockVariant {
    #[inline]
    fn axis(self) -> LogAxis {
        LogAxis::from_data(self.data())
    }

    fn with_axis(self, axis: impl Into<LogAxis>) -> Self {
        Self::resolve((self.data() & !LOG_AXIS_MASK) | axis.into().data())
    }

    #[inline]
    fn is_bark(self) -> bool {
        self.axis() == LogAxis::None
    }

    fn with_bark(self) -> Self {
        self.with_axis(LogAxis::None)
    }
}

pub const NO_DECAY: u8 = 0x4;
pub const CHECK_DECAY: u8 = 0x8;

pub trait Leaves: BlockVariant {
    /// Leaves placed by a player never decay.
    #[inline]
    fn is_decayable(self) -> bool {
        self.data() & NO_DECAY == 0
    }

    fn with_decayable(self, decayable: bool) -> Self {
        let data = self.data();
        Self::resolve(if decayable { data & !NO_DECAY } else { data | NO_DECAY })
    }

    #[inline]
    fn is_check_decay(self) -> bool {
        self.data() & CHECK_DECAY != 0
    }

    fn with_check_decay(self, check: bool) -> Self {
        let data = self.data();
        Self::resolve(if check { data | CHECK_DECAY } else { data & !CHECK_DECAY })
    }
}

pub const SAPLING_GROWN: u8 = 0x8;

#[macro_export]
macro_rules! log_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        wood_offset: $offset:expr,
        kinds: { $($kind:ident => $data:expr),+ $(,)? }
        $(, block_properties: $properties:expr)?
        $(,)?
    ) => {
        paste::paste! {
            $crate::log_block!(@states
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                first: [$($kind),+],
                states: [
                    $(
                        [<$name _ $kind _VERTICAL>] = concat!(stringify!($kind), "_VERTICAL") => $data,
                        [<$name _ $kind _EAST_WEST>] = concat!(stringify!($kind), "_EAST_WEST") => $data | 0x4,
                        [<$name _ $kind _NORTH_SOUTH>] = concat!(stringify!($kind), "_NORTH_SOUTH") => $data | 0x8,
                        [<$name _ $kind _BARK>] = concat!(stringify!($kind), "_BARK") => $data | 0xC,
                    )+
                ]
                $(, block_properties: $properties)?
            );

            impl $crate::block::family::tree::Log for $variant {}

            $crate::impl_wood_kinds!($variant, mask: 0x3, offset: $offset);

            impl $variant {
                pub fn [<get_ $name:lower>](
                    wood: $crate::wood::WoodType,
                    axis: impl Into<$crate::block::family::tree::LogAxis>,
                ) -> Self {
                    let log = <Self as $crate::capability::Kinded>::with_kind(
                        <Self as $crate::block::BlockVariant>::DEFAULT,
                        wood,
                    );
                    <Self as $crate::block::family::tree::Log>::with_axis(log, axis)
                }
            }
        }
    };

    (@states
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        first: [$first:ident $(, $rest:ident)*],
        states: [$($states:tt)+]
        $(, block_properties: $properties:expr)?
    ) => {
        paste::paste! {
            $crate::generate_block_states! {
                variant: $variant,
                id: $id,
                identifier: $identifier,
                name: $name,
                states: { $($states)+ },
                default: [<$name _ $first _VERTICAL>]
                $(, block_properties: $properties)?
            }
        }
    };
}

#[macro_export]
macro_rules! leaves_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
        wood_offset: $offset:expr,
        kinds: { $first:ident => $first_data:expr $(, $kind:ident => $data:expr)* $(,)? }
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
                    [<$name _ $first>] = stringify!($first) => $first_data,
                    [<$name _ $first _NO_DECAY>] = concat!(stringify!($first), "_NO_DECAY") => $first_data | 0x4,
                    [<$name _ $first _CHECK_DECAY>] = concat!(stringify!($first), "_CHECK_DECAY") => $first_data | 0x8,
                    [<$name _ $first _NO_DECAY_CHECK_DECAY>] = concat!(stringify!($first), "_NO_DECAY_CHECK_DECAY") => $first_data | 0xC,
                    $(
                        [<$name _ $kind>] = stringify!($kind) => $data,
                        [<$name _ $kind _NO_DECAY>] = concat!(stringify!($kind), "_NO_DECAY") => $data | 0x4,
                        [<$name _ $kind _CHECK_DECAY>] = concat!(stringify!($kind), "_CHECK_DECAY") => $data | 0x8,
                        [<$name _ $kind _NO_DECAY_CHECK_DECAY>] = concat!(stringify!($kind), "_NO_DECAY_CHECK_DECAY") => $data | 0xC,
                    )*
                },
                default: [<$name _ $first>]
                $(, block_properties: $properties)?
            }

            impl $crate::block::family::tree::Leaves for $variant {}

            $crate::impl_wood_kinds!($variant, mask: 0x3, offset: $offset);

            impl $variant {
                pub fn [<get_ $name:lower>](wood: $crate::wood::WoodType, decayable: bool) -> Self {
                    let leaves = <Self as $crate::capability::Kinded>::with_kind(
                        <Self as $crate::block::BlockVariant>::DEFAULT,
                        wood,
                    );
                    <Self as $crate::block::family::tree::Leaves>::with_decayable(leaves, decayable)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::minecraft::leaves::*;
    use crate::block::minecraft::log::*;
    use crate::block::minecraft::log2::{LOG_2_DARK_OAK_NORTH_SOUTH, Log2};
    use crate::block::minecraft::sapling::{SAPLING_BIRCH_GROWN, Sapling};
    use crate::capability::{Kinded, Wooden};
    use crate::wood::WoodType;

    #[test]
    fn log_axis_and_wood() {
        let log = Log1::get_log(WoodType::Birch, Axis::X);
        assert_eq!(log, LOG_BIRCH_EAST_WEST);
        assert_eq!(log.data(), 2 | 0x4);
        assert_eq!(log.wood_type(), WoodType::Birch);
        assert_eq!(log.axis(), LogAxis::X);
        assert_eq!(log.with_axis(Axis::Z), LOG_BIRCH_NORTH_SOUTH);
        assert_eq!(log.with_bark(), LOG_BIRCH_BARK);
        assert!(LOG_BIRCH_BARK.is_bark());
        assert_eq!(LOG_BIRCH_BARK.axis(), LogAxis::None);
        assert_eq!(LOG_BIRCH_BARK.axis().axis(), None);
        assert_eq!(LOG_BIRCH_BARK.with_axis(Axis::Y), LOG_BIRCH_VERTICAL);
        assert_eq!(log.with_kind(WoodType::Jungle), LOG_JUNGLE_EAST_WEST);
        assert_eq!(log.with_kind(WoodType::Acacia), LOG_OAK_VERTICAL);
    }

    #[test]
    fn current_axis_keeps_state() {
        for log in Log1::ALL.iter().copied() {
            assert_eq!(log.with_axis(log.axis()), log);
            assert_eq!(log.with_kind(log.kind()), log);
        }
        for log in Log2::ALL.iter().copied() {
            assert_eq!(log.with_axis(log.axis()), log);
        }
        assert_eq!(LOG_OAK_BARK.with_axis(LOG_OAK_BARK.axis()), LOG_OAK_BARK);
    }

    #[test]
    fn second_log_block_offsets_wood() {
        let log = Log2::get_log_2(WoodType::DarkOak, Axis::Z);
        assert_eq!(log, LOG_2_DARK_OAK_NORTH_SOUTH);
        assert_eq!(log.data(), 1 | 0x8);
        assert_eq!(log.wood_type(), WoodType::DarkOak);
        assert_eq!(Log2::used_data_values(), 8);
    }

    #[test]
    fn leaves_flags() {
        let leaves = Leaves1::get_leaves(WoodType::Spruce, false);
        assert_eq!(leaves, LEAVES_SPRUCE_NO_DECAY);
        assert!(!leaves.is_decayable());
        assert_eq!(leaves.with_check_decay(true), LEAVES_SPRUCE_NO_DECAY_CHECK_DECAY);
        assert_eq!(leaves.with_decayable(true), LEAVES_SPRUCE);
        assert_eq!(leaves.kind(), WoodType::Spruce);
    }

    #[test]
    fn sapling_stage() {
        let sapling = Sapling::get_sapling(WoodType::Birch, true);
        assert_eq!(sapling, SAPLING_BIRCH_GROWN);
        assert_eq!(sapling.data(), 0xA);
        assert!(sapling.is_grown());
        assert_eq!(sapling.wood_type(), WoodType::Birch);
        assert_eq!(sapling.with_kind(WoodType::DarkOak).data(), 0xD);
        assert_eq!(Sapling::used_data_values(), 12);
    }
}
