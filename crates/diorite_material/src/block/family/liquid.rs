use crate::capability::Leveled;

pub const FALLING: u8 = 0x8;
pub const LEVEL_MASK: u8 = 0x7;

/// Water and lava, still or flowing. Level 0 is a source block; higher
/// levels are further from the source.
pub trait Liquid: Leveled {
    fn of(level: u8, falling: bool) -> Self {
        Self::resolve(level.min(LEVEL_MASK) | if falling { FALLING } else { 0 })
    }

    #[inline]
    fn is_source(self) -> bool {
        self.data() == 0
    }

    #[inline]
    fn is_falling(self) -> bool {
        self.data() & FALLING != 0
    }

    fn with_falling(self, falling: bool) -> Self {
        Self::of(self.level(), falling)
    }
}

#[macro_export]
macro_rules! liquid_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
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
                    [<$name _LEVEL_0>] = "LEVEL_0" => 0x0,
                    [<$name _LEVEL_1>] = "LEVEL_1" => 0x1,
                    [<$name _LEVEL_2>] = "LEVEL_2" => 0x2,
                    [<$name _LEVEL_3>] = "LEVEL_3" => 0x3,
                    [<$name _LEVEL_4>] = "LEVEL_4" => 0x4,
                    [<$name _LEVEL_5>] = "LEVEL_5" => 0x5,
                    [<$name _LEVEL_6>] = "LEVEL_6" => 0x6,
                    [<$name _LEVEL_7>] = "LEVEL_7" => 0x7,
                    [<$name _FALLING_LEVEL_0>] = "FALLING_LEVEL_0" => 0x8,
                    [<$name _FALLING_LEVEL_1>] = "FALLING_LEVEL_1" => 0x9,
                    [<$name _FALLING_LEVEL_2>] = "FALLING_LEVEL_2" => 0xA,
                    [<$name _FALLING_LEVEL_3>] = "FALLING_LEVEL_3" => 0xB,
                    [<$name _FALLING_LEVEL_4>] = "FALLING_LEVEL_4" => 0xC,
                    [<$name _FALLING_LEVEL_5>] = "FALLING_LEVEL_5" => 0xD,
                    [<$name _FALLING_LEVEL_6>] = "FALLING_LEVEL_6" => 0xE,
                    [<$name _FALLING_LEVEL_7>] = "FALLING_LEVEL_7" => 0xF,
                },
                default: [<$name _LEVEL_0>]
                $(, block_properties: $properties)?
            }

            impl $crate::capability::Leveled for $variant {
                const MAX_LEVEL: u8 = $crate::block::family::liquid::LEVEL_MASK;

                #[inline]
                fn level(self) -> u8 {
                    self.0 & $crate::block::family::liquid::LEVEL_MASK
                }

                fn with_level(self, level: u8) -> Self {
                    <Self as $crate::block::family::liquid::Liquid>::of(
                        level,
                        <Self as $crate::block::family::liquid::Liquid>::is_falling(self),
                    )
                }
            }

            impl $crate::block::family::liquid::Liquid for $variant {}

            impl $variant {
                pub fn [<get_ $name:lower>](level: u8, falling: bool) -> Self {
                    <Self as $crate::block::family::liquid::Liquid>::of(level, falling)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::flowing_lava::{FLOWING_LAVA_FALLING_LEVEL_7, FlowingLava};
    use crate::block::minecraft::water::*;

    #[test]
    fn level_and_falling_bits() {
        let water = StillWater::get_still_water(3, true);
        assert_eq!(water, STILL_WATER_FALLING_LEVEL_3);
        assert_eq!(water.data(), 0xB);
        assert_eq!(water.level(), 3);
        assert!(water.is_falling());
        assert!(!water.is_source());
        assert_eq!(water.with_falling(false), STILL_WATER_LEVEL_3);
        assert_eq!(water.with_level(12), STILL_WATER_FALLING_LEVEL_7);
        assert!(STILL_WATER_LEVEL_0.is_source());
        assert_eq!(
            FlowingLava::get_flowing_lava(7, true),
            FLOWING_LAVA_FALLING_LEVEL_7
        );
    }
}
