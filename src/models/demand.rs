use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use super::timestamp;
use crate::error::AppError;

/// A passenger call for an elevator at a floor.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ElevatorDemand {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub timestamp: NaiveDateTime,
    pub timestamp_attended: Option<NaiveDateTime>,
    pub floor_id: i64,
    pub elevator_id: i64,
}

/// A demand that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDemand {
    pub floor_id: i64,
    pub elevator_id: i64,
    pub timestamp: NaiveDateTime,
}

impl NewDemand {
    pub fn new(floor_id: i64, elevator_id: i64, epoch_seconds: i64) -> Result<Self, AppError> {
        Ok(Self {
            floor_id,
            elevator_id,
            timestamp: timestamp::from_epoch_seconds(epoch_seconds)?,
        })
    }
}
