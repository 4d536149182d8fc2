pub mod about;
pub mod auth;
pub mod certificate;
pub mod contact;
pub mod education;
pub mod experience;
pub mod project;
pub mod skill;
