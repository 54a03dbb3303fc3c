//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a plain HashMap model.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{CacheLookup, RecipeCache, DEFAULT_CACHE_TTL};
use crate::models::Recipe;

// == Strategies ==
fn id_strategy() -> impl Strategy<Value = u64> {
    1u64..20
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,32}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { id: u64, name: String },
    Get { id: u64 },
    Remove { id: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (id_strategy(), name_strategy()).prop_map(|(id, name)| CacheOp::Put { id, name }),
        id_strategy().prop_map(|id| CacheOp::Get { id }),
        id_strategy().prop_map(|id| CacheOp::Remove { id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Within the TTL window the cache behaves like a map: the last put wins
    // and remove makes the id absent.
    #[test]
    fn prop_cache_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let cache = RecipeCache::new(DEFAULT_CACHE_TTL);
        let mut model: HashMap<u64, String> = HashMap::new();

        tokio_test::block_on(async {
            for op in ops {
                match op {
                    CacheOp::Put { id, name } => {
                        cache.put(Recipe::new(name.clone(), "", "", "").with_id(id)).await;
                        model.insert(id, name);
                    }
                    CacheOp::Get { id } => {
                        let lookup = cache.get(id).await;
                        match model.get(&id) {
                            Some(name) => {
                                let CacheLookup::Live(recipe) = lookup else {
                                    panic!("expected live entry for {}", id);
                                };
                                assert_eq!(&recipe.name, name);
                            }
                            None => assert_eq!(lookup, CacheLookup::Absent),
                        }
                    }
                    CacheOp::Remove { id } => {
                        assert_eq!(cache.remove(id).await, model.remove(&id).is_some());
                    }
                }
            }

            assert_eq!(cache.len().await, model.len());
        });
    }

    // Clearing always leaves an empty cache with zeroed counters.
    #[test]
    fn prop_clear_resets_everything(ids in prop::collection::vec(id_strategy(), 0..30), reads in 0usize..10) {
        let cache = RecipeCache::new(DEFAULT_CACHE_TTL);

        tokio_test::block_on(async {
            for id in ids {
                cache.put(Recipe::new("x", "", "", "").with_id(id)).await;
            }
            for _ in 0..reads {
                cache.record_hit();
                cache.record_miss();
            }

            cache.clear().await;

            let stats = cache.stats().await;
            assert_eq!(stats.hits, 0);
            assert_eq!(stats.misses, 0);
            assert_eq!(stats.total_entries, 0);
        });
    }
}
