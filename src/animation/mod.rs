pub mod runner;
pub mod scheduler;
pub mod state;
