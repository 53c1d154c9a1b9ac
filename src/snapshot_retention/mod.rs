//! Domain layer for snapshot retention
//!
//! Pure naming, ordering and decision rules. Nothing in here touches the
//! filesystem or spawns processes; that is the adapters' job.

pub mod domain;
pub mod policies;
pub mod services;
