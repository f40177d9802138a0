//! Weapon skins declared through item sets

use crate::types::{Eligibility, ItemSet, ItemSetId, PaintKit};
use std::collections::HashMap;

/// Item set that first declared a paint kit for a weapon class
struct SetMembership<'a> {
    item_set_id: &'a ItemSetId,
    stat_trak: bool,
    souvenir: bool,
}

#[derive(Default)]
struct ClassSkins<'a> {
    paint_kits: Vec<&'a str>,
    sets: HashMap<&'a str, SetMembership<'a>>,
}

/// Paint kits per weapon class, indexed from the extracted item sets
///
/// StatTrak and Souvenir eligibility for weapons is never stored on the
/// weapon or the paint kit; it comes from the crates and souvenir packages
/// that drop the declaring item set.
pub struct WeaponSkins<'a> {
    by_class: HashMap<&'a str, ClassSkins<'a>>,
}

impl<'a> WeaponSkins<'a> {
    pub fn new(item_sets: &'a [ItemSet]) -> Self {
        let mut by_class: HashMap<&str, ClassSkins> = HashMap::new();

        for set in item_sets {
            for item in &set.items {
                let class = by_class.entry(item.weapon_class.as_str()).or_default();
                class.paint_kits.push(item.paint_kit_name.as_str());
                class
                    .sets
                    .entry(item.paint_kit_name.as_str())
                    .or_insert(SetMembership {
                        item_set_id: &set.key,
                        stat_trak: set.has_crate,
                        souvenir: set.has_souvenir,
                    });
            }
        }

        Self { by_class }
    }

    /// Paint kit names declared for a weapon class, in set then item order
    ///
    /// A name repeats when several sets declare the same pairing.
    pub fn candidates(&self, class_name: &str) -> &[&'a str] {
        self.by_class
            .get(class_name)
            .map(|class| class.paint_kits.as_slice())
            .unwrap_or_default()
    }

    /// Eligibility of a paint kit on a weapon class
    ///
    /// Taken from the first item set declaring the pairing, falling back to
    /// the paint kit's own values when no set declares it.
    pub fn eligibility(&self, class_name: &str, paint_kit: &PaintKit) -> Eligibility {
        self.by_class
            .get(class_name)
            .and_then(|class| class.sets.get(paint_kit.name.as_str()))
            .map(|membership| Eligibility {
                item_set_id: Some(membership.item_set_id.clone()),
                stat_trak: membership.stat_trak,
                souvenir: membership.souvenir,
            })
            .unwrap_or_else(|| Eligibility::of(paint_kit))
    }
}
