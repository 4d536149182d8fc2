mod create_about;
mod delete_about;
mod get_abouts;
mod update_about;

pub use create_about::create_about_handler;
pub use delete_about::delete_about_handler;
pub use get_abouts::get_abouts_handler;
pub use update_about::update_about_handler;
