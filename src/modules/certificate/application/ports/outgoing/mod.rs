mod certificate_repository;

pub use certificate_repository::*;
