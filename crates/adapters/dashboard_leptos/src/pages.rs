mod actions;
mod login;
mod not_found;

pub use actions::Actions;
pub use login::Login;
pub use not_found::NotFound;
