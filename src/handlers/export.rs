use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::models::{Pagination, PaginationQuery};
use crate::service::ElevatorService;

pub fn router() -> Router<ElevatorService> {
    Router::new()
        .route("/get_data/demand", get(get_data_demand))
        .route("/get_data/movement/:elevator_id", get(get_data_movement))
}

fn csv_attachment(body: Vec<u8>, filename: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        body,
    )
        .into_response()
}

async fn get_data_demand(
    State(service): State<ElevatorService>,
    Query(query): Query<PaginationQuery>,
) -> Result<Response, AppError> {
    let pagination = Pagination::from(query);
    let body = service.export_demands(pagination).await?;

    Ok(csv_attachment(
        body,
        format!("elevator_demand_page_{}.csv", pagination.page),
    ))
}

async fn get_data_movement(
    State(service): State<ElevatorService>,
    Path(elevator_id): Path<i64>,
    Query(query): Query<PaginationQuery>,
) -> Result<Response, AppError> {
    let pagination = Pagination::from(query);
    let body = service.export_movements(elevator_id, pagination).await?;

    Ok(csv_attachment(
        body,
        format!("elevator_movement_page_{}.csv", pagination.page),
    ))
}
