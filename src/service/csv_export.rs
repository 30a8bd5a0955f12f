//! CSV rendering for the export endpoints.
//!
//! Records are comma-delimited with `|` as the quote character and CRLF line
//! endings. The header row is written even when the page is empty.

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::error::AppError;
use crate::models::timestamp::{format_datetime, format_optional_datetime};
use crate::models::{ElevatorDemand, ElevatorMovement};

pub const DEMAND_HEADER: [&str; 7] = [
    "id",
    "created_at",
    "updated_at",
    "timestamp",
    "timestamp_attended",
    "floor_id",
    "elevator_id",
];

pub const MOVEMENT_HEADER: [&str; 9] = [
    "id",
    "created_at",
    "updated_at",
    "floor_start_id",
    "floor_moving_to_id",
    "elevator_id",
    "timestamp_start",
    "timestamp_finish",
    "movement_type",
];

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(b',')
        .quote(b'|')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .has_headers(false)
        .from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, AppError> {
    writer.into_inner().map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to flush CSV buffer: {}", e.error()))
    })
}

pub fn demand_record(demand: &ElevatorDemand) -> [String; 7] {
    [
        demand.id.to_string(),
        format_datetime(&demand.created_at),
        format_datetime(&demand.updated_at),
        format_datetime(&demand.timestamp),
        format_optional_datetime(demand.timestamp_attended.as_ref()),
        demand.floor_id.to_string(),
        demand.elevator_id.to_string(),
    ]
}

pub fn movement_record(movement: &ElevatorMovement) -> [String; 9] {
    [
        movement.id.to_string(),
        format_datetime(&movement.created_at),
        format_datetime(&movement.updated_at),
        movement.floor_start_id.to_string(),
        movement.floor_moving_to_id.to_string(),
        movement.elevator_id.to_string(),
        format_datetime(&movement.timestamp_start),
        format_optional_datetime(movement.timestamp_finish.as_ref()),
        movement.movement_type.as_str().to_string(),
    ]
}

pub fn encode_demands(demands: &[ElevatorDemand]) -> Result<Vec<u8>, AppError> {
    let mut writer = writer();
    writer.write_record(DEMAND_HEADER)?;
    for demand in demands {
        writer.write_record(demand_record(demand))?;
    }
    finish(writer)
}

pub fn encode_movements(movements: &[ElevatorMovement]) -> Result<Vec<u8>, AppError> {
    let mut writer = writer();
    writer.write_record(MOVEMENT_HEADER)?;
    for movement in movements {
        writer.write_record(movement_record(movement))?;
    }
    finish(writer)
}
