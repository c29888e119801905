//! Repositories module - database access, one repository per entity.
//!
//! Queries use the runtime `query_as` API bound against the migrated schema;
//! every method returns `sqlx::Error` for the service layer to map.

pub mod item;
pub mod traits;
pub mod user;

// Re-export the traits to simplify imports
pub use traits::{Create, Delete, Read, Update};

// Re-export the repository structs to simplify imports
pub use item::ItemRepository;
pub use user::UserRepository;
