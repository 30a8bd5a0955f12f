pub mod csv_export;
pub mod elevator_service;


pub use elevator_service::ElevatorService;
