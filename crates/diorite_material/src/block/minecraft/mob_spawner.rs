use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: MobSpawner,
    id: 52,
    identifier: "mob_spawner",
    name: MOB_SPAWNER,
    block_properties: Properties::new()
        .with_strength(5.0, 25.0)
        .requires_correct_tool_for_drops()
}
