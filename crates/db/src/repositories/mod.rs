//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod profile_repo;
pub mod project_repo;

pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
