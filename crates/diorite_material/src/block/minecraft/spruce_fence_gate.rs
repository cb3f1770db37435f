use crate::block::behaviour::Properties;

crate::fence_gate_block! {
    variant: SpruceFenceGate,
    id: 183,
    identifier: "spruce_fence_gate",
    name: SPRUCE_FENCE_GATE,
    wood: Spruce,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
