use crate::block::behaviour::Properties;

crate::fence_gate_block! {
    variant: AcaciaFenceGate,
    id: 187,
    identifier: "acacia_fence_gate",
    name: ACACIA_FENCE_GATE,
    wood: Acacia,
    block_properties: Properties::new()
        .with_strength(2.0, 15.0)
        .flammable()
}
