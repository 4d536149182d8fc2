mod create_education;
mod delete_education;
mod get_educations;
mod update_education;

pub use create_education::create_education_handler;
pub use delete_education::delete_education_handler;
pub use get_educations::get_educations_handler;
pub use update_education::update_education_handler;
