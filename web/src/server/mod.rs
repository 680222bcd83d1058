//! Server-only code: storage, sessions and the operations behind server functions.

pub mod catalog;
pub mod db;
pub mod error;
pub mod session;
