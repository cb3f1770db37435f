use crate::block::{Block, BlockId, BlockMaterial, LegacyBlockState};
use crate::error::MaterialError;
use bevy_app::{App, Plugin};
use diorite_registry::Registry;

/// Legacy block ids are twelve bits wide.
pub const ID_TABLE_LEN: usize = 1 << 12;

macro_rules! declare_blocks {
    (
        $(
            $module:ident => $const_name:ident: $variant:ident
        ),* $(,)?
    ) => {
        $(
            pub mod $module;
        )*

        $(
            pub use self::$module::{BLOCK as $const_name, $variant};
        )*

        /// Every block type, in id order.
        pub static ALL_BLOCKS: &[&Block] = &[$(&$const_name),*];

        static ID_TO_BLOCK: [Option<&'static Block>; ID_TABLE_LEN] = {
            let mut t: [Option<&'static Block>; ID_TABLE_LEN] = [None; ID_TABLE_LEN];
            $(
                {
                    let block: &'static Block = &$const_name;
                    let id = block.id.0 as usize;
                    assert!(
                        t[id].is_none(),
                        concat!("duplicate block id: ", stringify!($const_name))
                    );
                    t[id] = Some(block);
                }
            )*
            t
        };

        /// Builds the registry of every block, keyed by identifier and by
        /// enum name.
        pub fn block_registry() -> Registry<&'static Block> {
            let mut registry = Registry::<&'static Block>::default();
            $(
                registry.insert_named($const_name.identifier, $const_name.name, &$const_name);
            )*
            registry
        }

        #[cfg(test)]
        fn check_all_variants() {
            $(
                tests::check_variant::<$variant>();
            )*
        }
    };
}

pub struct MaterialPlugin;

impl Plugin for MaterialPlugin {
    fn build(&self, app: &mut App) {
        let registry = block_registry();
        tracing::info!(blocks = registry.len(), "registered legacy blocks");
        app.insert_resource(registry);
    }
}

#[inline]
pub fn block_by_id(id: BlockId) -> Option<&'static Block> {
    ID_TO_BLOCK.get(id.0 as usize).copied().flatten()
}

impl TryFrom<BlockId> for &'static Block {
    type Error = MaterialError;

    fn try_from(id: BlockId) -> Result<Self, Self::Error> {
        block_by_id(id).ok_or(MaterialError::UnknownBlock(id))
    }
}

impl TryFrom<LegacyBlockState> for BlockMaterial {
    type Error = MaterialError;

    fn try_from(state: LegacyBlockState) -> Result<Self, Self::Error> {
        let block = <&'static Block>::try_from(state.block_id())?;
        block
            .material(state.data())
            .ok_or(MaterialError::UnknownData {
                block: block.name,
                data: state.data(),
            })
    }
}

declare_blocks! {
    air => AIR: Air,
    stone => STONE: Stone,
    grass => GRASS: Grass,
    dirt => DIRT: Dirt,
    cobblestone => COBBLESTONE: Cobblestone,
    planks => PLANKS: Planks,
    sapling => SAPLING: Sapling,
    bedrock => BEDROCK: Bedrock,
    flowing_water => FLOWING_WATER: FlowingWater,
    water => STILL_WATER: StillWater,
    flowing_lava => FLOWING_LAVA: FlowingLava,
    lava => STILL_LAVA: StillLava,
    sand => SAND: Sand,
    gravel => GRAVEL: Gravel,
    gold_ore => GOLD_ORE: GoldOre,
    iron_ore => IRON_ORE: IronOre,
    coal_ore => COAL_ORE: CoalOre,
    log => LOG: Log1,
    leaves => LEAVES: Leaves1,
    sponge => SPONGE: Sponge,
    glass => GLASS: Glass,
    lapis_ore => LAPIS_ORE: LapisOre,
    lapis_block => LAPIS_BLOCK: LapisBlock,
    dispenser => DISPENSER: Dispenser,
    sandstone => SANDSTONE: Sandstone,
    noteblock => NOTE_BLOCK: NoteBlock,
    bed => BED: Bed,
    golden_rail => GOLDEN_RAIL: PoweredRail,
    detector_rail => DETECTOR_RAIL: DetectorRail,
    sticky_piston => STICKY_PISTON: StickyPiston,
    web => WEB: Web,
    tallgrass => LONG_GRASS: LongGrass,
    deadbush => DEAD_BUSH: DeadBush,
    piston => PISTON: NormalPiston,
    piston_head => PISTON_HEAD: PistonHead,
    wool => WOOL: Wool,
    piston_extension => PISTON_MOVING_PIECE: MovingPiston,
    yellow_flower => YELLOW_FLOWER: YellowFlower,
    red_flower => RED_FLOWER: RedFlower,
    brown_mushroom => BROWN_MUSHROOM: BrownMushroom,
    red_mushroom => RED_MUSHROOM: RedMushroom,
    gold_block => GOLD_BLOCK: GoldBlock,
    iron_block => IRON_BLOCK: IronBlock,
    double_stone_slab => DOUBLE_STONE_SLAB: DoubleStoneSlab,
    stone_slab => STONE_SLAB: StoneSlab,
    brick_block => BRICK_BLOCK: BrickBlock,
    tnt => TNT: Tnt,
    bookshelf => BOOKSHELF: Bookshelf,
    mossy_cobblestone => MOSSY_COBBLESTONE: MossyCobblestone,
    obsidian => OBSIDIAN: Obsidian,
    torch => TORCH: Torch,
    fire => FIRE: Fire,
    mob_spawner => MOB_SPAWNER: MobSpawner,
    oak_stairs => OAK_STAIRS: OakStairs,
    chest => CHEST: Chest,
    redstone_wire => REDSTONE_WIRE: RedstoneWire,
    diamond_ore => DIAMOND_ORE: DiamondOre,
    diamond_block => DIAMOND_BLOCK: DiamondBlock,
    crafting_table => WORKBENCH: CraftingTable,
    wheat => WHEAT: Wheat,
    farmland => FARMLAND: Farmland,
    furnace => FURNACE: Furnace,
    lit_furnace => LIT_FURNACE: LitFurnace,
    standing_sign => SIGN_POST: SignPost,
    wooden_door => OAK_DOOR: OakDoor,
    ladder => LADDER: Ladder,
    rail => RAIL: RegularRail,
    stone_stairs => COBBLESTONE_STAIRS: CobblestoneStairs,
    wall_sign => WALL_SIGN: WallSign,
    lever => LEVER: Lever,
    stone_pressure_plate => STONE_PLATE: StonePressurePlate,
    iron_door => IRON_DOOR: IronDoor,
    wooden_pressure_plate => WOOD_PLATE: WoodenPressurePlate,
    redstone_ore => REDSTONE_ORE: RedstoneOre,
    lit_redstone_ore => GLOWING_REDSTONE_ORE: GlowingRedstoneOre,
    unlit_redstone_torch => REDSTONE_TORCH_OFF: RedstoneTorchOff,
    redstone_torch => REDSTONE_TORCH_ON: RedstoneTorchOn,
    stone_button => STONE_BUTTON: StoneButton,
    snow_layer => SNOW_LAYER: SnowLayer,
    ice => ICE: Ice,
    snow => SNOW_BLOCK: SnowBlock,
    cactus => CACTUS: Cactus,
    clay => CLAY: Clay,
    reeds => SUGAR_CANE: SugarCane,
    jukebox => JUKEBOX: Jukebox,
    fence => FENCE: OakFence,
    pumpkin => PUMPKIN: Pumpkin,
    netherrack => NETHERRACK: Netherrack,
    soul_sand => SOUL_SAND: SoulSand,
    glowstone => GLOWSTONE: Glowstone,
    portal => PORTAL: Portal,
    lit_pumpkin => JACK_O_LANTERN: JackOLantern,
    cake => CAKE: Cake,
    unpowered_repeater => UNPOWERED_REPEATER: UnpoweredRepeater,
    powered_repeater => POWERED_REPEATER: PoweredRepeater,
    stained_glass => STAINED_GLASS: StainedGlass,
    trapdoor => TRAPDOOR: WoodenTrapdoor,
    monster_egg => MONSTER_EGG: MonsterEgg,
    stonebrick => STONE_BRICK: StoneBrick,
    brown_mushroom_block => BROWN_MUSHROOM_BLOCK: BrownMushroomBlock,
    red_mushroom_block => RED_MUSHROOM_BLOCK: RedMushroomBlock,
    iron_bars => IRON_BARS: IronBars,
    glass_pane => GLASS_PANE: GlassPane,
    melon_block => MELON_BLOCK: MelonBlock,
    pumpkin_stem => PUMPKIN_STEM: PumpkinStem,
    melon_stem => MELON_STEM: MelonStem,
    vine => VINE: Vine,
    fence_gate => FENCE_GATE: OakFenceGate,
    brick_stairs => BRICK_STAIRS: BrickStairs,
    stone_brick_stairs => SMOOTH_STAIRS: StoneBrickStairs,
    mycelium => MYCEL: Mycelium,
    waterlily => WATER_LILY: WaterLily,
    nether_brick => NETHER_BRICK: NetherBrick,
    nether_brick_fence => NETHER_FENCE: NetherBrickFence,
    nether_brick_stairs => NETHER_BRICK_STAIRS: NetherBrickStairs,
    nether_wart => NETHER_WARTS: NetherWart,
    enchanting_table => ENCHANTMENT_TABLE: EnchantingTable,
    brewing_stand => BREWING_STAND: BrewingStand,
    cauldron => CAULDRON: Cauldron,
    end_portal => ENDER_PORTAL: EndPortal,
    end_portal_frame => ENDER_PORTAL_FRAME: EndPortalFrame,
    end_stone => ENDER_STONE: EndStone,
    dragon_egg => DRAGON_EGG: DragonEgg,
    redstone_lamp => REDSTONE_LAMP_OFF: RedstoneLampOff,
    lit_redstone_lamp => REDSTONE_LAMP_ON: RedstoneLampOn,
    double_wooden_slab => DOUBLE_WOODEN_SLAB: DoubleWoodenSlab,
    wooden_slab => WOODEN_SLAB: WoodenSlab,
    cocoa => COCOA: Cocoa,
    sandstone_stairs => SANDSTONE_STAIRS: SandstoneStairs,
    emerald_ore => EMERALD_ORE: EmeraldOre,
    ender_chest => ENDER_CHEST: EnderChest,
    tripwire_hook => TRIPWIRE_HOOK: TripwireHook,
    tripwire => TRIPWIRE: Tripwire,
    emerald_block => EMERALD_BLOCK: EmeraldBlock,
    spruce_stairs => SPRUCE_WOOD_STAIRS: SpruceStairs,
    birch_stairs => BIRCH_WOOD_STAIRS: BirchStairs,
    jungle_stairs => JUNGLE_WOOD_STAIRS: JungleStairs,
    command_block => COMMAND: CommandBlock,
    beacon => BEACON: Beacon,
    cobblestone_wall => COBBLE_WALL: CobblestoneWall,
    flower_pot => FLOWER_POT: FlowerPot,
    carrots => CARROT: Carrot,
    potatoes => POTATO: Potato,
    wooden_button => WOOD_BUTTON: WoodenButton,
    skull => SKULL: Skull,
    anvil => ANVIL: Anvil,
    trapped_chest => TRAPPED_CHEST: TrappedChest,
    light_weighted_pressure_plate => GOLD_PLATE: LightWeightedPressurePlate,
    heavy_weighted_pressure_plate => IRON_PLATE: HeavyWeightedPressurePlate,
    unpowered_comparator => UNPOWERED_COMPARATOR: UnpoweredComparator,
    powered_comparator => POWERED_COMPARATOR: PoweredComparator,
    daylight_detector => DAYLIGHT_DETECTOR: DaylightDetector,
    redstone_block => REDSTONE_BLOCK: RedstoneBlock,
    quartz_ore => QUARTZ_ORE: QuartzOre,
    hopper => HOPPER: Hopper,
    quartz_block => QUARTZ_BLOCK: QuartzBlock,
    quartz_stairs => QUARTZ_STAIRS: QuartzStairs,
    activator_rail => ACTIVATOR_RAIL: ActivatorRail,
    dropper => DROPPER: Dropper,
    stained_hardened_clay => STAINED_CLAY: StainedClay,
    stained_glass_pane => STAINED_GLASS_PANE: StainedGlassPane,
    leaves2 => LEAVES_2: Leaves2,
    log2 => LOG_2: Log2,
    acacia_stairs => ACACIA_STAIRS: AcaciaStairs,
    dark_oak_stairs => DARK_OAK_STAIRS: DarkOakStairs,
    slime => SLIME_BLOCK: SlimeBlock,
    barrier => BARRIER: Barrier,
    iron_trapdoor => IRON_TRAPDOOR: IronTrapdoor,
    prismarine => PRISMARINE: Prismarine,
    sea_lantern => SEA_LANTERN: SeaLantern,
    hay_block => HAY_BLOCK: HayBlock,
    carpet => CARPET: Carpet,
    hardened_clay => HARD_CLAY: HardenedClay,
    coal_block => COAL_BLOCK: CoalBlock,
    packed_ice => PACKED_ICE: PackedIce,
    double_plant => DOUBLE_PLANT: DoublePlant,
    standing_banner => STANDING_BANNER: StandingBanner,
    wall_banner => WALL_BANNER: WallBanner,
    daylight_detector_inverted => DAYLIGHT_DETECTOR_INVERTED: DaylightDetectorInverted,
    red_sandstone => RED_SANDSTONE: RedSandstone,
    red_sandstone_stairs => RED_SANDSTONE_STAIRS: RedSandstoneStairs,
    double_stone_slab2 => DOUBLE_STONE_SLAB_2: DoubleStoneSlab2,
    stone_slab2 => STONE_SLAB_2: StoneSlab2,
    spruce_fence_gate => SPRUCE_FENCE_GATE: SpruceFenceGate,
    birch_fence_gate => BIRCH_FENCE_GATE: BirchFenceGate,
    jungle_fence_gate => JUNGLE_FENCE_GATE: JungleFenceGate,
    dark_oak_fence_gate => DARK_OAK_FENCE_GATE: DarkOakFenceGate,
    acacia_fence_gate => ACACIA_FENCE_GATE: AcaciaFenceGate,
    spruce_fence => SPRUCE_FENCE: SpruceFence,
    birch_fence => BIRCH_FENCE: BirchFence,
    jungle_fence => JUNGLE_FENCE: JungleFence,
    dark_oak_fence => DARK_OAK_FENCE: DarkOakFence,
    acacia_fence => ACACIA_FENCE: AcaciaFence,
    spruce_door => SPRUCE_DOOR: SpruceDoor,
    birch_door => BIRCH_DOOR: BirchDoor,
    jungle_door => JUNGLE_DOOR: JungleDoor,
    acacia_door => ACACIA_DOOR: AcaciaDoor,
    dark_oak_door => DARK_OAK_DOOR: DarkOakDoor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockVariant;
    use rustc_hash::FxHashSet;

    pub(super) fn check_variant<V: BlockVariant>() {
        for &variant in V::ALL {
            assert_eq!(V::by_id(variant.data()), Some(variant));
            assert_eq!(V::by_name(variant.type_name()), Some(variant));
            assert_eq!(
                V::by_name(&variant.type_name().to_ascii_lowercase()),
                Some(variant)
            );
            assert_eq!(V::resolve(variant.data()), variant);
            assert_eq!(variant.legacy_state(), variant.state().id);
            assert_eq!(variant.material().downcast::<V>(), Some(variant));
        }
        assert_eq!(V::used_data_values(), V::BLOCK.states.len());
        assert_eq!(V::DEFAULT.state(), V::BLOCK.default_state);
        assert_eq!(V::by_id(16), None);
        assert_eq!(V::by_name("NOT_A_STATE"), None);
    }

    #[test]
    fn every_variant_round_trips() {
        check_all_variants();
    }

    #[test]
    fn ids_cover_the_legacy_range() {
        assert_eq!(ALL_BLOCKS.len(), 198);
        for id in 0..=197u16 {
            let block = block_by_id(BlockId(id)).expect("missing block id");
            assert_eq!(block.id, BlockId(id));
            assert_eq!(ALL_BLOCKS[id as usize], block);
        }
        assert!(block_by_id(BlockId(198)).is_none());
        assert!(block_by_id(BlockId(u16::MAX)).is_none());
    }

    #[test]
    fn states_are_unique_per_block() {
        let mut names = FxHashSet::default();
        let mut identifiers = FxHashSet::default();
        for block in ALL_BLOCKS {
            assert!(names.insert(block.name), "duplicate name {}", block.name);
            assert!(identifiers.insert(block.identifier.as_str()));
            assert!(!block.states.is_empty());
            assert!(block.states.contains(block.default_state));

            let mut data = FxHashSet::default();
            let mut state_names = FxHashSet::default();
            for state in block.states {
                assert!(state.data() < 16);
                assert_eq!(state.id.block_id(), block.id);
                assert!(data.insert(state.data()));
                assert!(state_names.insert(state.name.to_ascii_uppercase()));
            }
            assert_eq!(data.len(), block.used_data_values());
        }
    }

    #[test]
    fn legacy_state_conversion() {
        let material = BlockMaterial::try_from(LegacyBlockState::new(BlockId(64), 7)).unwrap();
        assert_eq!(material.block, &OAK_DOOR);
        assert_eq!(material.type_name(), "BOTTOM_OPEN_NORTH");
        assert_eq!(material.to_string(), "OAK_DOOR:BOTTOM_OPEN_NORTH");

        assert_eq!(
            BlockMaterial::try_from(LegacyBlockState::new(BlockId(1), 7)),
            Err(MaterialError::UnknownData {
                block: "STONE",
                data: 7
            })
        );
        assert_eq!(
            <&Block>::try_from(BlockId(300)),
            Err(MaterialError::UnknownBlock(BlockId(300)))
        );
    }

    #[test]
    fn plugin_inserts_registry() {
        let mut app = App::new();
        app.add_plugins(MaterialPlugin);
        let registry = app.world().resource::<Registry<&'static Block>>();
        assert_eq!(registry.len(), ALL_BLOCKS.len());
        assert_eq!(registry.get_by_name("oak_door").map(|b| b.id), Some(BlockId(64)));
        assert_eq!(
            registry
                .get_by_identifier_str("minecraft:wooden_door")
                .map(|b| b.name),
            Some("OAK_DOOR")
        );
        assert_eq!(registry.get_by_name("wooden_door"), None);
    }
}
