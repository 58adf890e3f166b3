//! API request handlers

mod distributor;
mod health;

pub use distributor::*;
pub use health::*;
