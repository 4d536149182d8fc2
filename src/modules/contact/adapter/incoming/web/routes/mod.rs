mod delete_contact;
mod get_contacts;
mod submit_contact;
mod update_contact;

pub use delete_contact::delete_contact_handler;
pub use get_contacts::get_contacts_handler;
pub use submit_contact::submit_contact_handler;
pub use update_contact::update_contact_handler;
