mod manage;
mod purchase;
mod types;
mod views;

pub use types::*;
