use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::models::Envelope;
use crate::service::ElevatorService;

pub fn router() -> Router<ElevatorService> {
    Router::new()
        .route("/add_elevator", get(add_elevator))
        .route("/add_floor", get(add_floor))
        .route(
            "/request_elevator/:floor_id/:elevator_id/:start",
            get(request_elevator),
        )
        .route(
            "/request_elevator_complete/:request_id/:timestamp_attended",
            get(request_elevator_complete),
        )
        .route(
            "/add_elevator_movement/:floor_start_id/:floor_moving_to_id/:elevator_id/:timestamp_start/:timestamp_finish/:movement_type",
            get(add_elevator_movement),
        )
}

async fn add_elevator(
    State(service): State<ElevatorService>,
) -> Result<Json<Envelope>, AppError> {
    let elevator = service.create_elevator().await?;
    Ok(Json(Envelope::success(elevator.id)))
}

async fn add_floor(State(service): State<ElevatorService>) -> Result<Json<Envelope>, AppError> {
    let floor = service.create_floor().await?;
    Ok(Json(Envelope::success(floor.id)))
}

async fn request_elevator(
    State(service): State<ElevatorService>,
    Path((floor_id, elevator_id, start)): Path<(i64, i64, i64)>,
) -> Result<Json<Envelope>, AppError> {
    let demand = service.create_demand(floor_id, elevator_id, start).await?;
    Ok(Json(Envelope::success(demand.id)))
}

async fn request_elevator_complete(
    State(service): State<ElevatorService>,
    Path((request_id, timestamp_attended)): Path<(i64, i64)>,
) -> Result<Json<Envelope>, AppError> {
    let demand = service
        .complete_demand(request_id, timestamp_attended)
        .await?;
    Ok(Json(Envelope::success(demand.id)))
}

async fn add_elevator_movement(
    State(service): State<ElevatorService>,
    Path((
        floor_start_id,
        floor_moving_to_id,
        elevator_id,
        timestamp_start,
        timestamp_finish,
        movement_type,
    )): Path<(i64, i64, i64, i64, i64, String)>,
) -> Result<Json<Envelope>, AppError> {
    let movement = service
        .create_movement(
            floor_start_id,
            floor_moving_to_id,
            elevator_id,
            timestamp_start,
            timestamp_finish,
            &movement_type,
        )
        .await?;
    Ok(Json(Envelope::success(movement.id)))
}
