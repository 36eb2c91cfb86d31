//! Category Service
//!
//! CRUD over categories. Categories carry no ownership, so mutations are not
//! gated on the caller's identity; name uniqueness (case-insensitive,
//! excluding the row itself on update) is the only write gate.

use std::sync::Arc;

use crate::models::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::responses::CategoryResponse;
use crate::repository::CategoryRepository;
use crate::utils::error::{messages, ApiError, ApiResult};
use crate::utils::validation::validate_category;

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list(&self) -> ApiResult<Vec<CategoryResponse>> {
        let categories = self.categories.all().await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> ApiResult<CategoryResponse> {
        let category = self
            .categories
            .by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::CATEGORY_NOT_FOUND.into()))?;

        Ok(CategoryResponse::from(&category))
    }

    pub async fn create(&self, request: CreateCategoryRequest) -> ApiResult<CategoryResponse> {
        validate_category(&*self.categories, &request.name, 0).await?;

        let category = self.categories.insert(&request.name).await?;
        Ok(CategoryResponse::from(&category))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateCategoryRequest,
    ) -> ApiResult<CategoryResponse> {
        // Validation first, then existence: uniqueness excludes the row
        // being renamed, so keeping its own name succeeds.
        validate_category(&*self.categories, &request.name, id).await?;

        let mut category = self
            .categories
            .by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::CATEGORY_NOT_FOUND.into()))?;

        category.name = request.name;
        self.categories.update(&category).await?;

        Ok(CategoryResponse::from(&category))
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let category = self
            .categories
            .by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(messages::CATEGORY_NOT_FOUND.into()))?;

        self.categories.delete(category.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryStore;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(MemoryStore::new()))
    }

    fn create(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();
        let created = service.create(create("Food")).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "Food");
    }

    #[tokio::test]
    async fn test_duplicate_name_differing_only_by_case_fails() {
        let service = service();
        service.create(create("Food")).await.unwrap();

        let err = service.create(create("food")).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::BadRequest(m) if m == messages::CATEGORY_ALREADY_EXISTS
        ));
    }

    #[tokio::test]
    async fn test_empty_name_fails() {
        let service = service();
        let err = service.create(create("   ")).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(m) if m == messages::INVALID_NAME));
    }

    #[tokio::test]
    async fn test_update_to_other_categorys_name_fails() {
        let service = service();
        let food = service.create(create("Food")).await.unwrap();
        service.create(create("Drinks")).await.unwrap();

        let err = service
            .update(
                food.id,
                UpdateCategoryRequest {
                    name: "DRINKS".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::BadRequest(m) if m == messages::CATEGORY_ALREADY_EXISTS
        ));
    }

    #[tokio::test]
    async fn test_update_to_own_name_succeeds() {
        let service = service();
        let food = service.create(create("Food")).await.unwrap();

        let updated = service
            .update(
                food.id,
                UpdateCategoryRequest {
                    name: "Food".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Food");
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let service = service();
        let err = service
            .update(
                999,
                UpdateCategoryRequest {
                    name: "Food".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(m) if m == messages::CATEGORY_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_missing_category_is_not_found() {
        let service = service();
        let err = service.delete(999).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(m) if m == messages::CATEGORY_NOT_FOUND));
    }
}
