pub mod movie;
pub mod tmdb;
pub mod user;

pub use movie::{Credits, Genre, Movie, MovieGenre, NewGenre, Person, MAX_CAST_MEMBERS};
pub use tmdb::{
    DetailContextMovie, ListContextMovie, TmdbCastMember, TmdbCredits, TmdbCrewMember, TmdbGenre,
    TmdbGenreList, TmdbPage,
};
pub use user::{NewUser, User, UserPreferences};
