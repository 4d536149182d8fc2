mod create_experience;
mod create_experience_project;
mod delete_experience;
mod delete_experience_project;
mod get_experiences;
mod update_experience;
mod update_experience_project;

pub use create_experience::create_experience_handler;
pub use create_experience_project::create_experience_project_handler;
pub use delete_experience::delete_experience_handler;
pub use delete_experience_project::delete_experience_project_handler;
pub use get_experiences::get_experiences_handler;
pub use update_experience::update_experience_handler;
pub use update_experience_project::update_experience_project_handler;
