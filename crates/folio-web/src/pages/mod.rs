//! One component per route.

mod about;
mod blog;
mod contact;
mod home;
mod journey;
mod not_found;
mod projects;
mod skills;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use home::Home;
pub use journey::Journey;
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;
