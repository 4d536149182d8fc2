mod skill_repository;

pub use skill_repository::*;
