use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Category id to category name, ordered by id
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the id-to-name mapping the frontend expects
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response DTO for the category listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_serializes_as_object() {
        let map = category_map(vec![
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
        ]);
        let value = serde_json::to_value(CategoriesResponseDto { categories: map }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"categories": {"1": "Science", "2": "Art"}})
        );
    }
}
