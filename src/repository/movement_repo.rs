use crate::models::{ElevatorMovement, NewMovement, Pagination};
use sqlx::{Sqlite, SqlitePool, Transaction};

const MOVEMENT_COLUMNS: &str = "id, created_at, updated_at, floor_start_id, floor_moving_to_id, \
     elevator_id, timestamp_start, timestamp_finish, movement_type";

#[derive(Clone)]
pub struct MovementRepository {
    pool: SqlitePool,
}

impl MovementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        movement: &NewMovement,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<ElevatorMovement, sqlx::Error> {
        let id = sqlx::query(
            "INSERT INTO elevator_movement (floor_start_id, floor_moving_to_id, elevator_id, \
             timestamp_start, timestamp_finish, movement_type) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(movement.floor_start_id)
        .bind(movement.floor_moving_to_id)
        .bind(movement.elevator_id)
        .bind(movement.timestamp_start)
        .bind(movement.timestamp_finish)
        .bind(movement.movement_type)
        .execute(&mut **tx)
        .await?
        .last_insert_rowid();

        let query = format!("SELECT {} FROM elevator_movement WHERE id = ?", MOVEMENT_COLUMNS);
        sqlx::query_as::<_, ElevatorMovement>(&query)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }

    #[cfg(test)]
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ElevatorMovement>, sqlx::Error> {
        let query = format!("SELECT {} FROM elevator_movement WHERE id = ?", MOVEMENT_COLUMNS);

        sqlx::query_as::<_, ElevatorMovement>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// One export page for a single elevator, oldest first. `id` breaks ties
    /// between rows stamped in the same second.
    pub async fn list_page_for_elevator(
        &self,
        elevator_id: i64,
        pagination: Pagination,
    ) -> Result<Vec<ElevatorMovement>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM elevator_movement WHERE elevator_id = ? \
             ORDER BY created_at ASC, id ASC LIMIT ? OFFSET ?",
            MOVEMENT_COLUMNS
        );

        sqlx::query_as::<_, ElevatorMovement>(&query)
            .bind(elevator_id)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM elevator_movement")
            .fetch_one(&self.pool)
            .await
    }
}
