use crate::block::behaviour::Properties;

crate::fence_gate_block! {
    variant: DarkOakFenceGate,
    id: 186,
    identifier: "dark_oak_fence_gate",
    name: DARK_OAK_FENCE_GATE,
    wood: DarkOak,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
