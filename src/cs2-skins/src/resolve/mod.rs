//! Paint kit resolution for weapons, knives and gloves
//!
//! Every base item category finds its skins a different way:
//!
//! | Category | Match                                  | StatTrak      | Souvenir      | Stickers |
//! |----------|----------------------------------------|---------------|---------------|----------|
//! | Weapon   | item set declares `[kit]weapon_class`  | set has crate | set has pkg   | per item |
//! | Knife    | explicit class → kit names table       | always        | never         | 0        |
//! | Glove    | kit name starts with the glove prefix  | never         | never         | 0        |
//!
//! A [`Strategy`] carries the matching data for one category and the single
//! [`resolve`] loop applies it. Catalog records are only borrowed; each
//! association is built as a new value.

mod glove;
mod index;
mod knife;
mod weapon;

pub use glove::{default_prefix, GlovePrefixes, GLOVE_PREFIX_OVERRIDES};
pub use index::PaintKitIndex;
pub use knife::KnifePaintKits;
pub use weapon::WeaponSkins;

use crate::types::{
    BaseWeapon, Eligibility, ItemKind, ItemSet, PaintKit, PaintKitAssociation, SkinCatalog,
    SkinCatalogEntry,
};

/// Matching rule and fixed defaults for one base item category
pub enum Strategy<'a> {
    /// Item set membership
    Weapon(&'a WeaponSkins<'a>),
    /// Table lookup by knife class
    Knife(&'a KnifePaintKits),
    /// Paint kit name prefix
    Glove(&'a GlovePrefixes),
}

impl Strategy<'_> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Strategy::Weapon(_) => ItemKind::Weapon,
            Strategy::Knife(_) => ItemKind::Knife,
            Strategy::Glove(_) => ItemKind::Glove,
        }
    }

    /// Knives and gloves cannot carry stickers
    pub fn sticker_count(&self, base: &BaseWeapon) -> u32 {
        match self {
            Strategy::Weapon(_) => base.num_stickers,
            Strategy::Knife(_) | Strategy::Glove(_) => 0,
        }
    }

    /// Paint kits matching a base item, with their eligibility
    ///
    /// `None` means the base item is left out of the catalog entirely.
    fn matches<'k>(
        &self,
        base: &BaseWeapon,
        index: &PaintKitIndex<'k>,
    ) -> Option<Vec<(&'k PaintKit, Eligibility)>> {
        match self {
            Strategy::Weapon(skins) => Some(
                skins
                    .candidates(&base.class_name)
                    .iter()
                    .filter_map(|name| index.first(name))
                    .map(|kit| (kit, skins.eligibility(&base.class_name, kit)))
                    .collect(),
            ),

            Strategy::Knife(table) => {
                let names = table.get(&base.class_name)?;
                Some(
                    names
                        .iter()
                        .flat_map(|name| index.all(name))
                        .map(|kit| {
                            let eligibility = Eligibility {
                                item_set_id: kit.item_set_id.clone(),
                                stat_trak: true,
                                souvenir: false,
                            };
                            (kit, eligibility)
                        })
                        .collect(),
                )
            }

            Strategy::Glove(prefixes) => {
                let prefix = prefixes.prefix_for(&base.class_name);
                Some(
                    index
                        .iter()
                        .filter(|kit| kit.name.starts_with(prefix))
                        .map(|kit| {
                            let eligibility = Eligibility {
                                item_set_id: kit.item_set_id.clone(),
                                stat_trak: false,
                                souvenir: false,
                            };
                            (kit, eligibility)
                        })
                        .collect(),
                )
            }
        }
    }
}

/// Build catalog entries for one category of base items
///
/// Base items and their matches are visited in catalog order; when two
/// matches share a paint kit definition index the later one is kept.
pub fn resolve(
    strategy: &Strategy<'_>,
    bases: &[BaseWeapon],
    index: &PaintKitIndex<'_>,
) -> SkinCatalog {
    let mut catalog = SkinCatalog::new();

    for base in bases {
        let Some(matches) = strategy.matches(base, index) else {
            tracing::debug!(
                class = %base.class_name,
                kind = %strategy.kind(),
                "No paint kit entry, skipping"
            );
            continue;
        };

        let mut entry = SkinCatalogEntry::new(
            base.display_name.clone(),
            strategy.sticker_count(base),
            strategy.kind(),
        );

        for (kit, eligibility) in matches {
            let association = PaintKitAssociation::new(base, kit, eligibility);
            entry.paints.insert(association.definition_index, association);
        }

        catalog.insert(base.definition_index, entry);
    }

    catalog
}

/// Everything needed to build the unified catalog
pub struct CatalogInputs<'a> {
    pub weapons: &'a [BaseWeapon],
    pub knives: &'a [BaseWeapon],
    pub gloves: &'a [BaseWeapon],
    pub paint_kits: &'a [PaintKit],
    pub item_sets: &'a [ItemSet],
    pub knife_paint_kits: &'a KnifePaintKits,
    pub glove_prefixes: &'a GlovePrefixes,
}

/// Resolve weapons, knives and gloves into one catalog
///
/// Categories are merged in that order; an entry from a later category
/// replaces an earlier one with the same definition index.
pub fn build_catalog(inputs: &CatalogInputs<'_>) -> SkinCatalog {
    let index = PaintKitIndex::new(inputs.paint_kits);
    let weapon_skins = WeaponSkins::new(inputs.item_sets);

    let categories = [
        (Strategy::Weapon(&weapon_skins), inputs.weapons),
        (Strategy::Knife(inputs.knife_paint_kits), inputs.knives),
        (Strategy::Glove(inputs.glove_prefixes), inputs.gloves),
    ];

    let mut catalog = SkinCatalog::new();
    for (strategy, bases) in &categories {
        let resolved = resolve(strategy, bases, &index);
        let paints: usize = resolved.values().map(|entry| entry.paints.len()).sum();
        tracing::info!(
            kind = %strategy.kind(),
            items = resolved.len(),
            paints,
            "Resolved skins"
        );
        catalog.extend(resolved);
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_sets::parse_item_sets;
    use crate::schema::ItemsGame;
    use crate::types::{ItemSetId, SetReference};

    fn base(definition_index: u32, class_name: &str, name: &str, num_stickers: u32) -> BaseWeapon {
        BaseWeapon {
            definition_index,
            class_name: class_name.to_string(),
            display_name: name.to_string(),
            num_stickers,
            image_inventory: format!("econ/weapons/base_weapons/{}", class_name),
        }
    }

    fn kit(definition_index: u32, name: &str, market_hash_name: &str, rarity: &str) -> PaintKit {
        PaintKit {
            definition_index,
            name: name.to_string(),
            market_hash_name: market_hash_name.to_string(),
            wear: 0.5,
            rarity: rarity.to_string(),
            item_set_id: None,
            stat_trak: false,
            souvenir: false,
        }
    }

    const SCHEMA: &str = r##"
        "items_game"
        {
            "item_sets"
            {
                "7"
                {
                    "name"  "#CSGO_set_community_3"
                    "items"
                    {
                        "[cu_tec9_asiimov]weapon_tec9"  "1"
                        "[cu_retired_kit]weapon_tec9"  "1"
                    }
                }
                "set_dust_2"
                {
                    "name"  "#CSGO_set_dust_2"
                    "items"
                    {
                        "[sp_tape_short_jungle]weapon_p2000"  "1"
                        "[cu_tec9_asiimov]weapon_tec9"  "1"
                    }
                }
                "set_agents_1"
                {
                    "name"  "#CSGO_set_agents_1"
                    "items" { "customplayer_ctm_sas_variantf"  "1" }
                }
            }
            "client_loot_lists"
            {
                "507"
                {
                    "name"  "weapon_knife_karambit"
                    "prefab"  "melee_unusual"
                    "item_name"  "Karambit"
                }
                "515"
                {
                    "name"  "weapon_knife_butterfly"
                    "prefab"  "melee_unusual"
                    "item_name"  "Butterfly Knife"
                }
            }
        }
    "##;

    struct Fixture {
        weapons: Vec<BaseWeapon>,
        gloves: Vec<BaseWeapon>,
        paint_kits: Vec<PaintKit>,
        item_sets: Vec<ItemSet>,
        knives: Vec<BaseWeapon>,
        knife_paint_kits: KnifePaintKits,
        glove_prefixes: GlovePrefixes,
    }

    impl Fixture {
        fn new() -> Self {
            let game = ItemsGame::parse(SCHEMA).unwrap();
            let crates = [SetReference::new(7u32)];
            let souvenirs = [SetReference::new("set_dust_2")];

            let mut knife_paint_kits = KnifePaintKits::new();
            knife_paint_kits.insert(
                "weapon_knife_karambit",
                vec!["aq_damascus".to_string(), "am_ruby_marbleized".to_string()],
            );

            let mut ruby = kit(415, "am_ruby_marbleized", "Doppler (Ruby)", "ancient");
            ruby.item_set_id = Some(ItemSetId::from("set_knives"));

            Self {
                weapons: vec![
                    base(30, "weapon_tec9", "Tec-9", 4),
                    base(32, "weapon_p2000", "P2000", 4),
                    base(40, "weapon_ssg08", "SSG 08", 5),
                ],
                gloves: vec![
                    base(4725, "studded_brokenfang_gloves", "Broken Fang Gloves", 0),
                    base(5030, "sporty_gloves", "Sport Gloves", 0),
                    base(5033, "motorcycle_gloves", "Moto Gloves", 0),
                ],
                paint_kits: vec![
                    kit(179, "cu_tec9_asiimov", "Isaac", "mythical"),
                    kit(377, "sp_tape_short_jungle", "Jungle", "common"),
                    kit(411, "aq_damascus", "Damascus Steel", "ancient"),
                    ruby,
                    kit(10085, "operation10_poison_frog", "Needle Point", "ancient"),
                    kit(10018, "sporty_hydra", "Hedge Maze", "ancient"),
                    kit(10027, "motorcycle_mint_triangle", "Eclipse", "ancient"),
                ],
                item_sets: parse_item_sets(&game, &crates, &souvenirs),
                knives: crate::loot_lists::parse_knives(&game),
                knife_paint_kits,
                glove_prefixes: GlovePrefixes::default(),
            }
        }

        fn inputs(&self) -> CatalogInputs<'_> {
            CatalogInputs {
                weapons: &self.weapons,
                knives: &self.knives,
                gloves: &self.gloves,
                paint_kits: &self.paint_kits,
                item_sets: &self.item_sets,
                knife_paint_kits: &self.knife_paint_kits,
                glove_prefixes: &self.glove_prefixes,
            }
        }
    }

    #[test]
    fn test_weapon_association() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        let tec9 = &catalog[&30];
        assert_eq!(tec9.name, "Tec-9");
        assert_eq!(tec9.kind, ItemKind::Weapon);
        assert_eq!(tec9.sticker_count, 4);

        let asiimov = &tec9.paints[&179];
        assert_eq!(asiimov.image_id, "weapon_tec9_cu_tec9_asiimov");
        assert_eq!(asiimov.market_hash_name, "Isaac");
        assert_eq!(asiimov.rarity, "mythical");
        assert_eq!(asiimov.wear, 0.5);
    }

    #[test]
    fn test_crate_set_makes_weapon_stattrak() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        // Declared by set 7 (crate) first, then by set_dust_2 (souvenir)
        let asiimov = &catalog[&30].paints[&179];
        assert!(asiimov.stat_trak);
        assert!(!asiimov.souvenir);
        assert_eq!(asiimov.item_set_id, Some(ItemSetId::from("7")));

        let jungle = &catalog[&32].paints[&377];
        assert!(!jungle.stat_trak);
        assert!(jungle.souvenir);
        assert_eq!(jungle.item_set_id, Some(ItemSetId::from("set_dust_2")));
    }

    #[test]
    fn test_enrichment_leaves_catalog_untouched() {
        let fixture = Fixture::new();
        let before = fixture.paint_kits.clone();

        let catalog = build_catalog(&fixture.inputs());

        assert!(catalog[&30].paints[&179].stat_trak);
        assert_eq!(fixture.paint_kits, before);
        assert!(!fixture.paint_kits[0].stat_trak);
    }

    #[test]
    fn test_weapon_without_skins_is_kept() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        let ssg = &catalog[&40];
        assert_eq!(ssg.kind, ItemKind::Weapon);
        assert_eq!(ssg.sticker_count, 5);
        assert!(ssg.paints.is_empty());
    }

    #[test]
    fn test_retired_and_duplicate_paint_kits() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        // cu_retired_kit has no catalog entry; cu_tec9_asiimov is declared twice
        let keys: Vec<_> = catalog[&30].paints.keys().copied().collect();
        assert_eq!(keys, [179]);
    }

    #[test]
    fn test_knife_defaults() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        let karambit = &catalog[&507];
        assert_eq!(karambit.kind, ItemKind::Knife);
        assert_eq!(karambit.name, "Karambit");
        assert_eq!(karambit.sticker_count, 0);
        assert_eq!(karambit.paints.len(), 2);
        assert!(karambit.paints.values().all(|p| p.stat_trak && !p.souvenir));

        let ruby = &karambit.paints[&415];
        assert_eq!(ruby.image_id, "weapon_knife_karambit_am_ruby_marbleized");
        assert_eq!(ruby.item_set_id, Some(ItemSetId::from("set_knives")));
    }

    #[test]
    fn test_knife_without_table_entry_is_skipped() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        assert!(fixture.knives.iter().any(|k| k.definition_index == 515));
        assert!(!catalog.contains_key(&515));
    }

    #[test]
    fn test_glove_defaults() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        let broken_fang = &catalog[&4725];
        assert_eq!(broken_fang.kind, ItemKind::Glove);
        assert_eq!(broken_fang.sticker_count, 0);
        assert_eq!(broken_fang.paints.keys().copied().collect::<Vec<_>>(), [10085]);
        assert_eq!(
            broken_fang.paints[&10085].image_id,
            "studded_brokenfang_gloves_operation10_poison_frog"
        );

        let gloves = catalog.values().filter(|e| e.kind == ItemKind::Glove);
        for entry in gloves {
            assert!(entry.paints.values().all(|p| !p.stat_trak && !p.souvenir));
        }
    }

    #[test]
    fn test_glove_prefix_overlap_is_a_known_false_positive() {
        let fixture = Fixture::new();
        let index = PaintKitIndex::new(&fixture.paint_kits);
        let gloves = [
            base(5033, "motorcycle_gloves", "Moto Gloves", 0),
            base(9999, "moto_gloves", "Racing Gloves", 0),
        ];

        let catalog = resolve(&Strategy::Glove(&fixture.glove_prefixes), &gloves, &index);

        // "moto" also claims every motorcycle finish
        assert!(catalog[&5033].paints.contains_key(&10027));
        assert!(catalog[&9999].paints.contains_key(&10027));
    }

    #[test]
    fn test_glove_without_matches_is_kept() {
        let fixture = Fixture::new();
        let index = PaintKitIndex::new(&fixture.paint_kits);
        let gloves = [base(5034, "specialist_gloves", "Specialist Gloves", 0)];

        let catalog = resolve(&Strategy::Glove(&fixture.glove_prefixes), &gloves, &index);
        assert!(catalog[&5034].paints.is_empty());
    }

    #[test]
    fn test_later_match_overwrites_same_key() {
        let mut first = kit(500, "sporty_a", "First", "rare");
        first.item_set_id = Some(ItemSetId::from("first"));
        let mut second = kit(500, "sporty_b", "Second", "rare");
        second.item_set_id = Some(ItemSetId::from("second"));
        let paint_kits = [first, second];

        let index = PaintKitIndex::new(&paint_kits);
        let gloves = [base(5030, "sporty_gloves", "Sport Gloves", 0)];
        let catalog = resolve(&Strategy::Glove(&GlovePrefixes::default()), &gloves, &index);

        let paints = &catalog[&5030].paints;
        assert_eq!(paints.len(), 1);
        assert_eq!(paints[&500].market_hash_name, "Second");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let fixture = Fixture::new();

        let first = serde_json::to_string_pretty(&build_catalog(&fixture.inputs())).unwrap();
        let second = serde_json::to_string_pretty(&build_catalog(&fixture.inputs())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_contains_every_category() {
        let fixture = Fixture::new();
        let catalog = build_catalog(&fixture.inputs());

        let keys: Vec<_> = catalog.keys().copied().collect();
        assert_eq!(keys, [30, 32, 40, 507, 4725, 5030, 5033]);
    }
}
