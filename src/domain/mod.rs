pub mod models;
pub mod registry;
pub mod router;
pub mod sample;
pub mod timer;
