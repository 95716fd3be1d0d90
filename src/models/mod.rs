pub mod admin;
pub mod common;
pub mod goal;
pub mod matches;
pub mod player;
pub mod report;
pub mod team;
