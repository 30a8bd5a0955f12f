pub mod elevator;
pub mod export;
pub mod health;
