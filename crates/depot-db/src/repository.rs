//! Item repository for PostgreSQL.

use depot_core::error::AppError;
use depot_core::models::Item;
use sqlx::{PgPool, Pool, Postgres};

/// Column list for SELECT queries. Must remain a const literal to ensure SQL safety
/// since format!() bypasses sqlx compile-time validation.
const ITEM_COLUMNS: &str = "id, name, description, status, email";

/// Schema statements, executed one at a time by [`ensure_schema`].
const SCHEMA: &[&str] = &[r#"CREATE TABLE IF NOT EXISTS items (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        status TEXT NOT NULL,
        email TEXT NOT NULL
    )"#];

/// Creates the `items` table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(AppError::DatabaseError)?;
    }
    Ok(())
}

/// Repository for item persistence in PostgreSQL.
///
/// # Examples
///
/// ```no_run
/// use sqlx::postgres::PgPoolOptions;
/// use depot_db::ItemRepository;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = PgPoolOptions::new()
///     .max_connections(5)
///     .connect("postgresql://localhost/depot")
///     .await?;
///
/// let repo = ItemRepository::new(pool);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ItemRepository {
    pool: Pool<Postgres>,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns all item ids in ascending order.
    pub async fn list_ids(&self) -> Result<Vec<i64>, AppError> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(ids)
    }

    /// Retrieves an item by id.
    pub async fn get(&self, id: i64) -> Result<Option<Item>, AppError> {
        let query = format!("SELECT {} FROM items WHERE id = $1", ITEM_COLUMNS);
        let row = sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(row.map(Item::from))
    }

    /// Lists every item ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Item>, AppError> {
        let query = format!("SELECT {} FROM items ORDER BY id", ITEM_COLUMNS);
        let rows = sqlx::query_as::<_, ItemRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Inserts a new item and returns it with its generated id.
    pub async fn insert(&self, item: &Item) -> Result<Item, AppError> {
        let row: ItemRow = sqlx::query_as(
            r#"
            INSERT INTO items (name, description, status, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, status, email
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.status)
        .bind(&item.email)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        Ok(row.into())
    }

    /// Overwrites the item with the given id.
    ///
    /// Returns `AppError::ItemNotFound` if no row has that id.
    pub async fn update(&self, id: i64, item: &Item) -> Result<Item, AppError> {
        let row: Option<ItemRow> = sqlx::query_as(
            r#"
            UPDATE items
            SET name = $2, description = $3, status = $4, email = $5
            WHERE id = $1
            RETURNING id, name, description, status, email
            "#,
        )
        .bind(id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.status)
        .bind(&item.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::DatabaseError)?;

        row.map(Item::from).ok_or(AppError::ItemNotFound(id))
    }

    /// Deletes an item. Returns true if a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks database connectivity by executing a simple query.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::DatabaseError)?;
        Ok(())
    }
}

/// Helper struct for deserializing item rows
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    status: String,
    email: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            status: row.status,
            email: row.email,
        }
    }
}

// =============================================================================
// Trait Implementation: ItemStore
// =============================================================================

impl depot_core::traits::ItemStore for ItemRepository {
    async fn list_all_ids(&self) -> Result<Vec<i64>, AppError> {
        ItemRepository::list_ids(self).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        ItemRepository::get(self, id).await
    }

    async fn save(&self, item: &Item) -> Result<Item, AppError> {
        match item.id {
            Some(id) => ItemRepository::update(self, id, item).await,
            None => ItemRepository::insert(self, item).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        ItemRepository::delete(self, id).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        ItemRepository::list_all(self).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        ItemRepository::health_check(self).await
    }
}
