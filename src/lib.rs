pub mod capture;
pub mod core;
pub mod engine;
pub mod hal;
pub mod observability;
