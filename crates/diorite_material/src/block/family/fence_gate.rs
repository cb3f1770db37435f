use crate::block::family::{horizontal_data, horizontal_face};
use crate::capability::{Directional, Openable};
use crate::direction::BlockFace;

pub const OPEN: u8 = 0x4;

pub const fn combine(face: BlockFace, open: bool) -> u8 {
    horizontal_data(face) | if open { OPEN } else { 0 }
}

pub const fn facing(data: u8) -> BlockFace {
    horizontal_face(data)
}

pub trait FenceGate: Directional + Openable {
    fn of(face: BlockFace, open: bool) -> Self {
        Self::resolve(combine(face, open))
    }
}

#[macro_export]
macro_rules! fence_gate_block {
    (
        variant: $variant:ident,
        id: $id:expr,
        identifier: $identifier:literal,
        name: $name:ident
        $(, wood: $wood:ident)?
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
                    [<$name _SOUTH>] = "SOUTH" => 0x0,
                    [<$name _WEST>] = "WEST" => 0x1,
                    [<$name _NORTH>] = "NORTH" => 0x2,
                    [<$name _EAST>] = "EAST" => 0x3,
                    [<$name _OPEN_SOUTH>] = "OPEN_SOUTH" => 0x4,
                    [<$name _OPEN_WEST>] = "OPEN_WEST" => 0x5,
                    [<$name _OPEN_NORTH>] = "OPEN_NORTH" => 0x6,
                    [<$name _OPEN_EAST>] = "OPEN_EAST" => 0x7,
                },
                default: [<$name _SOUTH>]
                $(, block_properties: $properties)?
            }

            impl $crate::capability::Directional for $variant {
                #[inline]
                fn facing(self) -> $crate::direction::BlockFace {
                    $crate::block::family::fence_gate::facing(self.0)
                }

                fn with_facing(self, face: $crate::direction::BlockFace) -> Self {
                    <Self as $crate::block::family::fence_gate::FenceGate>::of(
                        face,
                        <Self as $crate::capability::Openable>::is_open(self),
                    )
                }
            }

            impl $crate::capability::Openable for $variant {
                #[inline]
                fn is_open(self) -> bool {
                    self.0 & $crate::block::family::fence_gate::OPEN != 0
                }

                fn with_open(self, open: bool) -> Self {
                    <Self as $crate::block::family::fence_gate::FenceGate>::of(
                        <Self as $crate::capability::Directional>::facing(self),
                        open,
                    )
                }
            }

            impl $crate::block::family::fence_gate::FenceGate for $variant {}

            $($crate::impl_wooden!($variant, $wood);)?

            impl $variant {
                pub fn [<get_ $name:lower>](face: $crate::direction::BlockFace, open: bool) -> Self {
                    <Self as $crate::block::family::fence_gate::FenceGate>::of(face, open)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use crate::block::minecraft::acacia_fence_gate::{ACACIA_FENCE_GATE_OPEN_EAST, AcaciaFenceGate};
    use crate::block::minecraft::fence_gate::*;
    use crate::capability::Wooden;
    use crate::wood::WoodType;

    #[test]
    fn layout() {
        assert_eq!(OakFenceGate::get_fence_gate(BlockFace::South, false).data(), 0);
        assert_eq!(OakFenceGate::get_fence_gate(BlockFace::East, true).data(), 7);
        let gate = AcaciaFenceGate::get_acacia_fence_gate(BlockFace::East, true);
        assert_eq!(gate, ACACIA_FENCE_GATE_OPEN_EAST);
        assert_eq!(gate.wood_type(), WoodType::Acacia);
    }

    #[test]
    fn mutators() {
        assert_eq!(FENCE_GATE_WEST.with_open(true), FENCE_GATE_OPEN_WEST);
        assert_eq!(FENCE_GATE_OPEN_WEST.with_facing(BlockFace::North), FENCE_GATE_OPEN_NORTH);
        assert!(FENCE_GATE_OPEN_NORTH.is_open());
        assert_eq!(FENCE_GATE_NORTH.with_facing(BlockFace::Down), FENCE_GATE_SOUTH);
    }
}
