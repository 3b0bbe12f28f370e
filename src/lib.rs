pub mod agent;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod session;
pub mod simulation;

#[cfg(test)]
mod test;
