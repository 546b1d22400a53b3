pub mod auth;
pub mod contacts;
pub mod media;
pub mod projects;
pub mod settings;
pub mod site;
pub mod testimonials;
