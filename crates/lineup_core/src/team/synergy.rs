// 시너지 집계 (종족/직업 특성별 카운트 + 발동 퍽)
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{Catalog, Hero};

/// Perk whose threshold is met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePerk {
    pub required_count: u32,
    pub description: String,
}

/// Team composition entry for one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSummary {
    /// 종족 또는 직업 이름
    pub feature: String,
    /// 해당 특성을 가진 선택 영웅 수
    pub count: u32,
    /// 발동된 퍽 (미발동은 제외)
    pub active_perks: Vec<ActivePerk>,
}

/// Count picked heroes per feature, first-seen order.
///
/// Unknown and repeated names are skipped; a hero counts once per
/// distinct feature it carries.
fn tally<'a, S: AsRef<str>>(catalog: &'a Catalog, picked: &[S]) -> Vec<(&'a str, u32)> {
    let mut seen_heroes = FxHashSet::default();
    let mut slots: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut counts: Vec<(&'a str, u32)> = Vec::new();

    for name in picked {
        let name = name.as_ref();
        let Some(hero) = catalog.hero(name) else {
            debug!(name, "skipping unknown picked hero");
            continue;
        };
        if !seen_heroes.insert(hero.name.as_str()) {
            continue;
        }

        for feature in distinct_features(hero) {
            match slots.get(feature) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(feature, counts.len());
                    counts.push((feature, 1));
                }
            }
        }
    }

    counts
}

fn distinct_features(hero: &Hero) -> Vec<&str> {
    let mut features: Vec<&str> = Vec::with_capacity(hero.species.len() + 1);
    for feature in hero.features() {
        if !features.contains(&feature) {
            features.push(feature);
        }
    }
    features
}

/// Per-feature counts and active perks for the picked heroes.
pub fn aggregate_features<S: AsRef<str>>(catalog: &Catalog, picked: &[S]) -> Vec<FeatureSummary> {
    tally(catalog, picked)
        .into_iter()
        .map(|(feature, count)| FeatureSummary {
            feature: feature.to_string(),
            count,
            active_perks: catalog
                .perks_for(feature)
                .filter(|perk| perk.is_active(count))
                .map(|perk| ActivePerk {
                    required_count: perk.required_count,
                    description: perk.description.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Features present in the lineup (aggregation keys, no perk lookup).
pub fn features_list<S: AsRef<str>>(catalog: &Catalog, picked: &[S]) -> Vec<String> {
    tally(catalog, picked).into_iter().map(|(feature, _)| feature.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_catalog, Perk};
    use insta::assert_json_snapshot;

    fn scenario_catalog() -> Catalog {
        Catalog::new(
            "",
            vec![
                Hero::new("A", &["Beast"], "Warrior", 2),
                Hero::new("B", &["Beast"], "Mage", 1),
            ],
            vec![Perk::new("Beast", 2, "bonus")],
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_beast_pair() {
        let summary = aggregate_features(&scenario_catalog(), &["A", "B"]);
        let features: Vec<&str> = summary.iter().map(|s| s.feature.as_str()).collect();
        assert_eq!(features, vec!["Beast", "Warrior", "Mage"]);

        assert_json_snapshot!(summary[0], @r###"
        {
          "feature": "Beast",
          "count": 2,
          "activePerks": [
            {
              "requiredCount": 2,
              "description": "bonus"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_empty_pick() {
        let picked: [&str; 0] = [];
        assert!(aggregate_features(default_catalog(), &picked).is_empty());
        assert!(features_list(default_catalog(), &picked).is_empty());
    }

    #[test]
    fn test_threshold_boundary() {
        let catalog = Catalog::new(
            "",
            vec![
                Hero::new("A", &["Orc"], "Warrior", 1),
                Hero::new("B", &["Orc"], "Hunter", 2),
                Hero::new("C", &["Orc"], "Shaman", 4),
            ],
            vec![
                Perk::new("Orc", 2, "two"),
                Perk::new("Orc", 3, "three"),
                Perk::new("Orc", 4, "four"),
            ],
        )
        .unwrap();

        let summary = aggregate_features(&catalog, &["A", "B", "C"]);
        let orc = &summary[0];
        assert_eq!(orc.count, 3);
        let thresholds: Vec<u32> = orc.active_perks.iter().map(|p| p.required_count).collect();
        assert_eq!(thresholds, vec![2, 3]);
    }

    #[test]
    fn test_unknown_and_repeated_names_skipped() {
        let summary = aggregate_features(&scenario_catalog(), &["A", "Ghost", "A"]);
        assert_eq!(summary[0].feature, "Beast");
        assert_eq!(summary[0].count, 1);
        assert!(summary[0].active_perks.is_empty());
    }

    #[test]
    fn test_multi_species_hero_counts_each_tag() {
        let catalog = default_catalog();
        let summary = aggregate_features(catalog, &["Lycan", "Enchantress"]);
        let counts: Vec<(&str, u32)> =
            summary.iter().map(|s| (s.feature.as_str(), s.count)).collect();
        assert_eq!(counts, vec![("Human", 1), ("Beast", 2), ("Warrior", 1), ("Druid", 1)]);

        let beast = summary.iter().find(|s| s.feature == "Beast").unwrap();
        assert_eq!(beast.active_perks.len(), 1);
        assert_eq!(beast.active_perks[0].required_count, 2);
    }

    #[test]
    fn test_features_list_matches_aggregate_keys() {
        let catalog = default_catalog();
        let picked = ["Puck", "Viper", "Dragon Knight", "Lina"];
        let keys: Vec<String> =
            aggregate_features(catalog, &picked).into_iter().map(|s| s.feature).collect();
        assert_eq!(features_list(catalog, &picked), keys);
        assert_eq!(keys, vec!["Elf", "Dragon", "Mage", "Assassin", "Human", "Knight"]);
    }

    #[test]
    fn test_class_equal_to_species_counted_once() {
        let catalog =
            Catalog::new("", vec![Hero::new("Odd", &["Mech"], "Mech", 3)], vec![]).unwrap();
        let summary = aggregate_features(&catalog, &["Odd"]);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].count, 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// k heroes sharing a feature: perk k active, perk k+1 not
            #[test]
            fn prop_threshold_exact(k in 1usize..8) {
                let heroes: Vec<Hero> =
                    (0..k).map(|i| Hero::new(&format!("H{i}"), &["Troll"], "Knight", 1)).collect();
                let names: Vec<String> = heroes.iter().map(|h| h.name.clone()).collect();
                let catalog = Catalog::new(
                    "",
                    heroes,
                    vec![Perk::new("Troll", k as u32, "met"), Perk::new("Troll", k as u32 + 1, "unmet")],
                )
                .unwrap();

                let summary = aggregate_features(&catalog, &names);
                let troll = summary.iter().find(|s| s.feature == "Troll").unwrap();
                prop_assert_eq!(troll.count, k as u32);
                prop_assert_eq!(troll.active_perks.len(), 1);
                prop_assert_eq!(&troll.active_perks[0].description, "met");
            }

            /// Counts never exceed the number of distinct picked heroes
            #[test]
            fn prop_counts_bounded(picked in prop::sample::subsequence(
                default_catalog().heroes().iter().map(|h| h.name.clone()).collect::<Vec<_>>(),
                0..10,
            )) {
                let summary = aggregate_features(default_catalog(), &picked);
                for entry in &summary {
                    prop_assert!(entry.count >= 1 && entry.count as usize <= picked.len());
                    for perk in &entry.active_perks {
                        prop_assert!(perk.required_count <= entry.count);
                    }
                }
            }
        }
    }
}
