//! Model structs and wire payloads.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The `Deserialize` payload(s) the API layer binds request bodies into

pub mod project;
pub mod project_content;
