use crate::block::behaviour::Properties;

crate::torch_block! {
    variant: RedstoneTorchOff,
    id: 75,
    identifier: "unlit_redstone_torch",
    name: REDSTONE_TORCH_OFF,
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
}
