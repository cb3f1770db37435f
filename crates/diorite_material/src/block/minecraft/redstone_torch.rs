use crate::block::behaviour::Properties;

crate::torch_block! {
    variant: RedstoneTorchOn,
    id: 76,
    identifier: "redstone_torch",
    name: REDSTONE_TORCH_ON,
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
        .with_light(7)
}
