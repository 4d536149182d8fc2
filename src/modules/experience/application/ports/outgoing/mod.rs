mod experience_project_repository;
mod experience_repository;

pub use experience_project_repository::*;
pub use experience_repository::*;
