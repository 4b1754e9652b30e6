//! DreamJob Explorer — discover which skills you lack for a target
//! occupation, which school subjects close the gap, and what the role
//! pays per region.

pub mod analysis;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod esco;
pub mod routes;
pub mod state;
