use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::timestamp;
use crate::models::{
    Elevator, ElevatorDemand, ElevatorMovement, Floor, NewDemand, NewMovement, Pagination,
};
use crate::repository::{DemandRepository, ElevatorRepository, FloorRepository, MovementRepository};
use crate::service::csv_export;
use sqlx::SqlitePool;

/// Domain operations over the elevator store. Each write opens its own
/// transaction; dropping it on an error path rolls it back and returns the
/// connection to the pool.
#[derive(Clone)]
pub struct ElevatorService {
    pool: SqlitePool,
    elevator_repo: ElevatorRepository,
    floor_repo: FloorRepository,
    demand_repo: DemandRepository,
    movement_repo: MovementRepository,
}

impl ElevatorService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            elevator_repo: ElevatorRepository,
            floor_repo: FloorRepository,
            demand_repo: DemandRepository::new(pool.clone()),
            movement_repo: MovementRepository::new(pool.clone()),
            pool,
        }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn demands(&self) -> &DemandRepository {
        &self.demand_repo
    }

    pub fn movements(&self) -> &MovementRepository {
        &self.movement_repo
    }

    pub async fn create_elevator(&self) -> Result<Elevator, AppError> {
        let mut tx = self.pool.begin().await?;
        let elevator = self.elevator_repo.create(&mut tx).await?;
        tx.commit().await?;

        tracing::info!("{} Created elevator: {}", API_NAME, elevator.id);
        Ok(elevator)
    }

    pub async fn create_floor(&self) -> Result<Floor, AppError> {
        let mut tx = self.pool.begin().await?;
        let floor = self.floor_repo.create(&mut tx).await?;
        tx.commit().await?;

        tracing::info!("{} Created floor: {}", API_NAME, floor.id);
        Ok(floor)
    }

    pub async fn create_demand(
        &self,
        floor_id: i64,
        elevator_id: i64,
        epoch_seconds: i64,
    ) -> Result<ElevatorDemand, AppError> {
        let new_demand = NewDemand::new(floor_id, elevator_id, epoch_seconds)?;

        let mut tx = self.pool.begin().await?;
        let demand = self.demand_repo.create(&new_demand, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(
            "{} Created demand {} for floor {} on elevator {}",
            API_NAME,
            demand.id,
            demand.floor_id,
            demand.elevator_id
        );
        Ok(demand)
    }

    /// Sets `timestamp_attended`. Completing twice keeps the latest value.
    pub async fn complete_demand(
        &self,
        demand_id: i64,
        epoch_attended: i64,
    ) -> Result<ElevatorDemand, AppError> {
        let attended = timestamp::from_epoch_seconds(epoch_attended)?;

        let mut tx = self.pool.begin().await?;
        let demand = self
            .demand_repo
            .complete(demand_id, attended, &mut tx)
            .await?
            .ok_or_else(|| demand_not_found(demand_id))?;
        tx.commit().await?;

        tracing::info!("{} Completed demand: {}", API_NAME, demand.id);
        Ok(demand)
    }

    pub async fn create_movement(
        &self,
        floor_start_id: i64,
        floor_moving_to_id: i64,
        elevator_id: i64,
        epoch_start: i64,
        epoch_finish: i64,
        movement_type: &str,
    ) -> Result<ElevatorMovement, AppError> {
        let new_movement = NewMovement::new(
            floor_start_id,
            floor_moving_to_id,
            elevator_id,
            epoch_start,
            epoch_finish,
            movement_type,
        )?;

        let mut tx = self.pool.begin().await?;
        let movement = self.movement_repo.create(&new_movement, &mut tx).await?;
        tx.commit().await?;

        tracing::info!(
            "{} Created {} movement {} for elevator {}",
            API_NAME,
            movement.movement_type,
            movement.id,
            movement.elevator_id
        );
        Ok(movement)
    }

    pub async fn export_demands(&self, pagination: Pagination) -> Result<Vec<u8>, AppError> {
        let demands = self.demand_repo.list_page(pagination).await?;

        tracing::info!(
            "{} Exporting {} demands (page {}, per_page {})",
            API_NAME,
            demands.len(),
            pagination.page,
            pagination.per_page
        );
        csv_export::encode_demands(&demands)
    }

    pub async fn export_movements(
        &self,
        elevator_id: i64,
        pagination: Pagination,
    ) -> Result<Vec<u8>, AppError> {
        let movements = self
            .movement_repo
            .list_page_for_elevator(elevator_id, pagination)
            .await?;

        tracing::info!(
            "{} Exporting {} movements for elevator {} (page {}, per_page {})",
            API_NAME,
            movements.len(),
            elevator_id,
            pagination.page,
            pagination.per_page
        );
        csv_export::encode_movements(&movements)
    }
}

fn demand_not_found(demand_id: i64) -> AppError {
    AppError::NotFound(format!("ElevatorDemand with id {} does not exist", demand_id))
}
