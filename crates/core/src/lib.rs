//! Domain types and pure logic shared by the MovieFlix crates.
//!
//! Nothing in here touches the database or the network.

pub mod association;
pub mod error;
pub mod release_date;
pub mod types;
pub mod validation;
