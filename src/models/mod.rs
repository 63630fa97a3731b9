//! Data models for the ForTem API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifiers and the [`Network`] table
//! - [`response`] - The response envelope and authentication payloads
//! - [`user`] - Wallet lookup results
//! - [`collection`] - Collections and their creation parameters
//! - [`item`] - Items, minting parameters, and image uploads

pub mod primitives;
pub mod response;
pub mod user;
pub mod collection;
pub mod item;

// Re-export commonly used types
pub use primitives::*;
pub use response::*;
pub use user::*;
pub use collection::*;
pub use item::*;
