use crate::models::Elevator;
use sqlx::{Sqlite, Transaction};

/// Elevators are insert-only, so every call runs on the caller's transaction.
#[derive(Clone, Copy, Default)]
pub struct ElevatorRepository;

impl ElevatorRepository {
    pub async fn create(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<Elevator, sqlx::Error> {
        sqlx::query_as::<_, Elevator>(
            "INSERT INTO elevator DEFAULT VALUES RETURNING id, created_at, updated_at",
        )
        .fetch_one(&mut **tx)
        .await
    }
}
