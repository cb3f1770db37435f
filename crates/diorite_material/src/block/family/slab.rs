use crate::block::BlockVariant;

pub const UPPER: u8 = 0x8;

/// Half slabs: a kind in the low three bits, upper half at `0x8`.
pub trait Slab: BlockVariant {
    #[inline]
    fn is_upper(self) -> bool {
        self.data() & UPPER != 0
    }

    fn with_upper(self, upper: bool) -> Self {
        let data = self.data();
        Self::resolve(if upper { data | UPPER } else { data & !UPPER })
    }
}

#[macro_export]
macro_rules! slab_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident,
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
                    $([<$name _ $kind>] = stringify!($kind) => $data,)*
                    [<$name _UPPER_ $first>] = concat!("UPPER_", stringify!($first)) => $first_data | 0x8,
                    $([<$name _UPPER_ $kind>] = concat!("UPPER_", stringify!($kind)) => $data | 0x8,)*
                },
                default: [<$name _ $first>]
                $(, block_properties: $properties)?
            }

            impl $crate::block::family::slab::Slab for $variant {}
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::minecraft::stone_slab::*;
    use crate::block::minecraft::stone_slab2::{STONE_SLAB_2_UPPER_RED_SANDSTONE, StoneSlab2};
    use crate::block::minecraft::wooden_slab::{WOODEN_SLAB_UPPER_JUNGLE, WoodenSlab};
    use crate::capability::{Kinded, Wooden};
    use crate::wood::WoodType;

    #[test]
    fn upper_flag() {
        assert_eq!(STONE_SLAB_QUARTZ.data(), 7);
        assert_eq!(STONE_SLAB_QUARTZ.with_upper(true), STONE_SLAB_UPPER_QUARTZ);
        assert_eq!(STONE_SLAB_UPPER_QUARTZ.data(), 0xF);
        assert!(STONE_SLAB_UPPER_BRICK.is_upper());
        assert_eq!(StoneSlab::used_data_values(), 16);
        assert_eq!(StoneSlab2::by_id(8), Some(STONE_SLAB_2_UPPER_RED_SANDSTONE));
    }

    #[test]
    fn wooden_slab_kinds() {
        let slab = WoodenSlab::get_wooden_slab(WoodType::Jungle, true);
        assert_eq!(slab, WOODEN_SLAB_UPPER_JUNGLE);
        assert_eq!(slab.data(), 0xB);
        assert_eq!(slab.wood_type(), WoodType::Jungle);
        assert_eq!(slab.with_kind(WoodType::Oak).data(), 0x8);
        assert_eq!(WoodenSlab::by_name("upper_dark_oak").map(|s| s.data()), Some(0xD));
    }
}
