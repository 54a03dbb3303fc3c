//! Search helpers shared by local and online search.

use crate::models::Recipe;

/// Prefix added to every recipe name returned by the online search path
pub const ONLINE_PREFIX: &str = "Online: ";

/// Result cap used when the caller does not give one
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Lowercased, trimmed needle; `None` for a blank query.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Keeps recipes matching `needle` in iteration order, at most `limit` of them.
pub fn filter_recipes(
    recipes: impl IntoIterator<Item = Recipe>,
    needle: &str,
    limit: usize,
) -> Vec<Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| recipe.matches(needle))
        .take(limit)
        .collect()
}

/// Marks a recipe as coming from the remote endpoint.
pub fn tag_online(mut recipe: Recipe) -> Recipe {
    recipe.name = format!("{}{}", ONLINE_PREFIX, recipe.name);
    recipe
}

/// Recovers the local name from an online-tagged one.
pub fn strip_online_prefix(name: &str) -> &str {
    name.strip_prefix(ONLINE_PREFIX).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipes() -> Vec<Recipe> {
        vec![
            Recipe::new("Tomato Soup", "Starter", "tomato, basil", "blend").with_id(1),
            Recipe::new("Pasta", "Main", "tomato, pasta", "boil").with_id(2),
            Recipe::new("Brownies", "Dessert", "chocolate", "bake").with_id(3),
        ]
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(" ToMaTo "), Some("tomato".to_string()));
    }

    #[test]
    fn test_filter_respects_order_and_limit() {
        let all = filter_recipes(recipes(), "tomato", 10);
        let ids: Vec<u64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let limited = filter_recipes(recipes(), "tomato", 1);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, 1);
    }

    #[test]
    fn test_filter_matches_category_and_instructions() {
        assert_eq!(filter_recipes(recipes(), "dessert", 10).len(), 1);
        assert_eq!(filter_recipes(recipes(), "boil", 10).len(), 1);
    }

    #[test]
    fn test_tag_and_strip() {
        let tagged = tag_online(Recipe::new("Pasta", "", "", ""));
        assert_eq!(tagged.name, "Online: Pasta");
        assert_eq!(strip_online_prefix(&tagged.name), "Pasta");
        assert_eq!(strip_online_prefix("Pasta"), "Pasta");
    }
}
