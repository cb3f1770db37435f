use crate::block::behaviour::Properties;

crate::fence_gate_block! {
    variant: JungleFenceGate,
    id: 185,
    identifier: "jungle_fence_gate",
    name: JUNGLE_FENCE_GATE,
    wood: Jungle,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
