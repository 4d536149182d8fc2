pub mod extractors;
pub mod guard;
pub mod pages;
pub mod routes;
