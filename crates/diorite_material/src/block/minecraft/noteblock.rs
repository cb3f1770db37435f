use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: NoteBlock,
    id: 25,
    identifier: "noteblock",
    name: NOTE_BLOCK,
    block_properties: Properties::new()
        .with_strength(0.8, 4.0)
        .flammable()
}
