//! Wire types shared by the bike store backend and its clients.
//!
//! Aggregates live under `domain`, report request/response shapes under
//! `dashboards`. Nothing here touches the database or the network.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
