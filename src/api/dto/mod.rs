//! Data Transfer Objects for REST request/response serialization.
//!
//! Monetary amounts stay integer minor units end to end; formatting for
//! display is a client concern.

pub mod admin_dto;
pub mod booking_dto;
pub mod checkin_dto;
pub mod common_dto;

pub use admin_dto::*;
pub use booking_dto::*;
pub use checkin_dto::*;
pub use common_dto::*;
