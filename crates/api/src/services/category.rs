use movieflix_core::types::DbId;
use movieflix_db::models::category::{Category, CreateCategory};
use movieflix_db::repositories::CategoryRepo;
use movieflix_db::DbPool;

/// Category lookups and writes.
#[derive(Clone)]
pub struct CategoryService {
    pool: DbPool,
}

impl CategoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Category>, sqlx::Error> {
        CategoryRepo::list(&self.pool).await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        CategoryRepo::find_by_id(&self.pool, id).await
    }

    /// Persist a category. Name validation happens at the transport boundary.
    pub async fn save(&self, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        CategoryRepo::create(&self.pool, input).await
    }

    /// Delete unconditionally; deleting a missing id is not an error.
    pub async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let deleted = CategoryRepo::delete(&self.pool, id).await?;
        tracing::debug!(category_id = id, deleted, "Category delete");
        Ok(())
    }
}
