use crate::models::Floor;
use sqlx::{Sqlite, Transaction};

#[derive(Clone, Copy, Default)]
pub struct FloorRepository;

impl FloorRepository {
    pub async fn create(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<Floor, sqlx::Error> {
        sqlx::query_as::<_, Floor>(
            "INSERT INTO floor DEFAULT VALUES RETURNING id, created_at, updated_at",
        )
        .fetch_one(&mut **tx)
        .await
    }
}
