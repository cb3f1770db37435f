use crate::block::behaviour::Properties;

crate::torch_block! {
    variant: Torch,
    id: 50,
    identifier: "torch",
    name: TORCH,
    block_properties: Properties::new()
        .instant_break()
        .no_collision()
        .with_light(14)
}
