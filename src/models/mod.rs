pub mod demand;
pub mod elevator;
pub mod envelope;
pub mod movement;
pub mod pagination;
pub mod timestamp;

pub use demand::{ElevatorDemand, NewDemand};
pub use elevator::{Elevator, Floor};
pub use envelope::Envelope;
pub use movement::{ElevatorMovement, MovementType, NewMovement};
pub use pagination::{Pagination, PaginationQuery};
