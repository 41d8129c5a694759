//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where needed, an update DTO with `Option` fields for patches

pub mod journal;
pub mod session;
pub mod waitlist;
