use serde::{Deserialize, Serialize};

/// Maximum number of cast members kept on a canonical movie
pub const MAX_CAST_MEMBERS: usize = 10;

/// Canonical movie returned to clients
///
/// Only `id` and `title` are guaranteed. Which of the remaining fields are
/// populated depends on the upstream endpoint that produced the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: String,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub adult: bool,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<MovieGenre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u64>,
}

impl Movie {
    /// Whether any of the movie's genre entries carries `genre_id`
    pub fn has_genre(&self, genre_id: u64) -> bool {
        self.genres.iter().any(|genre| genre.id == genre_id)
    }
}

/// Genre entry attached to a movie
///
/// List endpoints only supply genre ids; the name is left for the caller to
/// resolve against the genre cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieGenre {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Genre from the provider catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Genre to insert into the store; `id` falls back to the store counter
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub id: Option<u64>,
    pub name: String,
}

/// Cast or crew member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub profile_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Credits block of a detailed movie
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    pub cast: Vec<Person>,
}
