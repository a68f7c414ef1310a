use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{category_map, CategoryMap};
use crate::features::categories::models::Category;
use crate::modules::storage::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Id-to-name mapping of every category, ordered by id.
    ///
    /// An empty mapping is not an error here; callers decide.
    pub async fn map(&self) -> Result<CategoryMap> {
        let categories = self.store.list_categories().await?;
        Ok(category_map(categories))
    }

    /// Id-to-name mapping of every category. Fails with `NotFound` when there are none.
    pub async fn list(&self) -> Result<CategoryMap> {
        let categories = self.map().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }
        Ok(categories)
    }

    /// Get category by id
    pub async fn get(&self, id: i64) -> Result<Category> {
        let not_found = || AppError::NotFound(format!("Category {} not found", id));
        let id = i32::try_from(id).map_err(|_| not_found())?;

        self.store.find_category(id).await?.ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::InMemoryTriviaStore;

    #[tokio::test]
    async fn test_empty_categories_is_not_found() {
        let service = CategoryService::new(Arc::new(InMemoryTriviaStore::default()));
        assert!(service.map().await.unwrap().is_empty());
        assert!(matches!(service.list().await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = InMemoryTriviaStore::with_categories(["Science", "Art", "Geography"]);
        let service = CategoryService::new(Arc::new(store));
        let names: Vec<String> = service.list().await.unwrap().into_values().collect();
        assert_eq!(names, vec!["Science", "Art", "Geography"]);
    }

    #[tokio::test]
    async fn test_get_out_of_range_id() {
        let store = InMemoryTriviaStore::with_categories(["Science"]);
        let service = CategoryService::new(Arc::new(store));
        assert_eq!(service.get(1).await.unwrap().kind, "Science");
        assert!(matches!(service.get(2).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.get(i64::MAX).await,
            Err(AppError::NotFound(_))
        ));
    }
}
