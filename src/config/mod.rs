//! Configuration models for rooms and seed applications.

pub mod allotment;

pub use allotment::{AllotmentConfig, RoomConfig};
