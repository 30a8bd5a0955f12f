use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use super::timestamp;
use crate::error::AppError;

/// Why an elevator moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MovementType {
    Autonomous,
    Called,
    Resting,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Autonomous => "autonomous",
            MovementType::Called => "called",
            MovementType::Resting => "resting",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "autonomous" => Ok(MovementType::Autonomous),
            "called" => Ok(MovementType::Called),
            "resting" => Ok(MovementType::Resting),
            other => Err(AppError::Validation(format!(
                "Invalid movement type {}.",
                other
            ))),
        }
    }
}

/// A logged traversal of an elevator between two floors.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ElevatorMovement {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub floor_start_id: i64,
    pub floor_moving_to_id: i64,
    pub elevator_id: i64,
    pub timestamp_start: NaiveDateTime,
    pub timestamp_finish: Option<NaiveDateTime>,
    pub movement_type: MovementType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMovement {
    pub floor_start_id: i64,
    pub floor_moving_to_id: i64,
    pub elevator_id: i64,
    pub timestamp_start: NaiveDateTime,
    pub timestamp_finish: Option<NaiveDateTime>,
    pub movement_type: MovementType,
}

impl NewMovement {
    /// Builds a movement from wire values. The movement type is checked first,
    /// so an unknown type never reaches the store.
    pub fn new(
        floor_start_id: i64,
        floor_moving_to_id: i64,
        elevator_id: i64,
        epoch_start: i64,
        epoch_finish: i64,
        movement_type: &str,
    ) -> Result<Self, AppError> {
        let movement_type = movement_type.parse::<MovementType>()?;

        Ok(Self {
            floor_start_id,
            floor_moving_to_id,
            elevator_id,
            timestamp_start: timestamp::from_epoch_seconds(epoch_start)?,
            timestamp_finish: Some(timestamp::from_epoch_seconds(epoch_finish)?),
            movement_type,
        })
    }
}
