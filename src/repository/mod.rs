pub mod demand_repo;
pub mod elevator_repo;
pub mod floor_repo;
pub mod movement_repo;
pub mod store;

pub use demand_repo::DemandRepository;
pub use elevator_repo::ElevatorRepository;
pub use floor_repo::FloorRepository;
pub use movement_repo::MovementRepository;
