use crate::block::BlockVariant;
use crate::block::behaviour::Properties;
use crate::capability::Axial;
use crate::direction::Axis;

crate::generate_block_states! {
    variant: HayBlock,
    id: 170,
    identifier: "hay_block",
    name: HAY_BLOCK,
    states: {
        HAY_BLOCK_VERTICAL = "VERTICAL" => 0x0,
        HAY_BLOCK_EAST_WEST = "EAST_WEST" => 0x4,
        HAY_BLOCK_NORTH_SOUTH = "NORTH_SOUTH" => 0x8,
    },
    default: HAY_BLOCK_VERTICAL,
    block_properties: Properties::new().with_strength(0.5, 2.5).flammable()
}

impl Axial for HayBlock {
    #[inline]
    fn axis(self) -> Axis {
        crate::block::family::tree::log_axis(self.0)
    }

    fn with_axis(self, axis: Axis) -> Self {
        Self::resolve(crate::block::family::tree::log_axis_data(axis))
    }
}
