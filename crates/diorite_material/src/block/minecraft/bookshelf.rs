use crate::block::behaviour::Properties;

crate::simple_block! {
    variant: Bookshelf,
    id: 47,
    identifier: "bookshelf",
    name: BOOKSHELF,
    block_properties: Properties::new()
        .with_strength(1.5, 7.5)
        .flammable()
}
