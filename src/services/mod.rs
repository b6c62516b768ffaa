pub mod auth;
pub mod filters;
pub mod genres;
pub mod movies;
pub mod providers;
pub mod recommendations;
pub mod title_search;
pub mod users;

pub use providers::{MovieProvider, TmdbProvider};
