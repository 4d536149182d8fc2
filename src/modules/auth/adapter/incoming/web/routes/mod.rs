mod login_admin;
mod logout_admin;

pub use login_admin::login_admin_handler;
pub use logout_admin::logout_admin_handler;
