pub mod auth;
pub mod protected;
pub mod users;

pub use self::users::model::Role;
