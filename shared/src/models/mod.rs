//! Domain models for the Agricultural Management Platform

mod climate;
mod crop;
mod inventory;
mod market;
mod production;

pub use climate::*;
pub use crop::*;
pub use inventory::*;
pub use market::*;
pub use production::*;
