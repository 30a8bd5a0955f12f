use crate::models::{ElevatorDemand, NewDemand, Pagination};
use chrono::NaiveDateTime;
use sqlx::{Sqlite, SqlitePool, Transaction};

const DEMAND_COLUMNS: &str =
    "id, created_at, updated_at, timestamp, timestamp_attended, floor_id, elevator_id";

#[derive(Clone)]
pub struct DemandRepository {
    pool: SqlitePool,
}

impl DemandRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a pending demand. The insert runs to completion before the row
    /// is read back, so foreign-key failures surface here.
    pub async fn create(
        &self,
        demand: &NewDemand,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<ElevatorDemand, sqlx::Error> {
        let id = sqlx::query(
            "INSERT INTO elevator_demand (timestamp, floor_id, elevator_id) VALUES (?, ?, ?)",
        )
        .bind(demand.timestamp)
        .bind(demand.floor_id)
        .bind(demand.elevator_id)
        .execute(&mut **tx)
        .await?
        .last_insert_rowid();

        self.find_by_id(id, Some(tx))
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(
        &self,
        id: i64,
        tx: Option<&mut Transaction<'_, Sqlite>>,
    ) -> Result<Option<ElevatorDemand>, sqlx::Error> {
        let query = format!("SELECT {} FROM elevator_demand WHERE id = ?", DEMAND_COLUMNS);

        if let Some(t) = tx {
            sqlx::query_as::<_, ElevatorDemand>(&query)
                .bind(id)
                .fetch_optional(&mut **t)
                .await
        } else {
            sqlx::query_as::<_, ElevatorDemand>(&query)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
        }
    }

    /// Sets `timestamp_attended` and refreshes `updated_at` in a single
    /// statement, so the transaction takes the write lock on its first step
    /// and never upgrades from a read. Returns `None` for an unknown id.
    pub async fn complete(
        &self,
        id: i64,
        timestamp_attended: NaiveDateTime,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Option<ElevatorDemand>, sqlx::Error> {
        let query = format!(
            "UPDATE elevator_demand SET timestamp_attended = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? RETURNING {}",
            DEMAND_COLUMNS
        );

        sqlx::query_as::<_, ElevatorDemand>(&query)
            .bind(timestamp_attended)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// One export page, ordered by id so pages stay stable across requests.
    pub async fn list_page(&self, pagination: Pagination) -> Result<Vec<ElevatorDemand>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM elevator_demand ORDER BY id ASC LIMIT ? OFFSET ?",
            DEMAND_COLUMNS
        );

        sqlx::query_as::<_, ElevatorDemand>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM elevator_demand")
            .fetch_one(&self.pool)
            .await
    }
}
