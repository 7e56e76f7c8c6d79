//! Domain models for the smart-dose system.

mod catalog;
mod doctor;
mod dose;
mod patient;
mod prescription;
mod suggestion;

pub use catalog::*;
pub use doctor::*;
pub use dose::*;
pub use patient::*;
pub use prescription::*;
pub use suggestion::*;
