//! Record-access layer
//!
//! One module per entity. Every mutating operation runs inside an explicit
//! transaction: commit on success, and any error path drops the transaction,
//! which rolls back and returns the connection to the pool.

pub mod artists;
pub mod shows;
pub mod venues;
