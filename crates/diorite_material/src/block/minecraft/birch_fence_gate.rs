use crate::block::behaviour::Properties;

crate::fence_gate_block! {
    variant: BirchFenceGate,
    id: 184,
    identifier: "birch_fence_gate",
    name: BIRCH_FENCE_GATE,
    wood: Birch,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
