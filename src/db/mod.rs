pub mod admins;
pub mod goals;
pub mod helpers;
pub mod matches;
pub mod players;
pub mod teams;
