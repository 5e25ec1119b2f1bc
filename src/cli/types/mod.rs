//! Type-safe wrappers and enums for NBA games data.

pub mod kind;
pub mod time;


pub use kind::RecordKind;
pub use time::Year;
