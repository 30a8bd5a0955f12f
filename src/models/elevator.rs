use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// One elevator car. Identity only.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Elevator {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One building floor. Identity only.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Floor {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
