use crate::block::behaviour::Properties;

crate::fence_gate_block! {
    variant: OakFenceGate,
    id: 107,
    identifier: "fence_gate",
    name: FENCE_GATE,
    wood: Oak,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
