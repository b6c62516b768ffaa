use serde::Deserialize;

use super::{Credits, Genre, Movie, MovieGenre, Person, MAX_CAST_MEMBERS};

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged list response (`/trending`, `/discover`, `/search`, `/similar`)
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage<T> {
    pub results: Option<Vec<T>>,
}

/// Movie as returned inside list responses; genres are ids only
#[derive(Debug, Clone, Deserialize)]
pub struct ListContextMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub adult: Option<bool>,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    pub genre_ids: Option<Vec<u64>>,
}

/// Movie as returned by `/movie/{id}`, with embedded genres and optional credits
#[derive(Debug, Clone, Deserialize)]
pub struct DetailContextMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub adult: Option<bool>,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    pub runtime: Option<u32>,
    pub genres: Option<Vec<TmdbGenre>>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub credits: Option<TmdbCredits>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub id: u64,
    pub name: String,
}

/// Response of `/genre/movie/list`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenreList {
    pub genres: Option<Vec<TmdbGenre>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    pub cast: Option<Vec<TmdbCastMember>>,
    pub crew: Option<Vec<TmdbCrewMember>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    pub department: Option<String>,
    pub profile_path: Option<String>,
}

// ============================================================================
// Adapters
// ============================================================================

impl From<TmdbGenre> for Genre {
    fn from(genre: TmdbGenre) -> Self {
        Genre {
            id: genre.id,
            name: genre.name,
        }
    }
}

impl From<ListContextMovie> for Movie {
    fn from(movie: ListContextMovie) -> Self {
        Movie {
            id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path,
            backdrop_path: movie.backdrop_path,
            overview: movie.overview,
            release_date: movie.release_date.unwrap_or_default(),
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            adult: movie.adult.unwrap_or(false),
            original_language: movie.original_language,
            popularity: movie.popularity,
            runtime: None,
            genres: movie
                .genre_ids
                .unwrap_or_default()
                .into_iter()
                .map(|id| MovieGenre { id, name: None })
                .collect(),
            director: None,
            credits: None,
            status: None,
            tagline: None,
            budget: None,
            revenue: None,
        }
    }
}

impl From<DetailContextMovie> for Movie {
    fn from(movie: DetailContextMovie) -> Self {
        let (director, credits) = match movie.credits {
            Some(credits) => (
                find_director(credits.crew.as_deref().unwrap_or_default()),
                Some(Credits {
                    cast: top_billed_cast(credits.cast.unwrap_or_default()),
                }),
            ),
            None => (None, None),
        };

        Movie {
            id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path,
            backdrop_path: movie.backdrop_path,
            overview: movie.overview,
            release_date: movie.release_date.unwrap_or_default(),
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            adult: movie.adult.unwrap_or(false),
            original_language: movie.original_language,
            popularity: movie.popularity,
            runtime: movie.runtime,
            genres: movie
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|genre| MovieGenre {
                    id: genre.id,
                    name: Some(genre.name),
                })
                .collect(),
            director,
            credits,
            status: movie.status,
            tagline: movie.tagline,
            budget: movie.budget,
            revenue: movie.revenue,
        }
    }
}

impl DetailContextMovie {
    /// Keeps the list-context fields and the named genres, dropping credits
    /// and the detail-only fields
    pub fn into_summary(self) -> Movie {
        Movie {
            runtime: None,
            status: None,
            tagline: None,
            budget: None,
            revenue: None,
            ..Movie::from(DetailContextMovie {
                credits: None,
                ..self
            })
        }
    }
}

/// First crew member whose job is "director", ignoring case
pub fn find_director(crew: &[TmdbCrewMember]) -> Option<Person> {
    crew.iter()
        .find(|member| member.job.eq_ignore_ascii_case("director"))
        .map(|member| Person {
            id: member.id,
            name: member.name.clone(),
            profile_path: member.profile_path.clone(),
            character: None,
            order: None,
            job: None,
            department: None,
        })
}

/// Keeps the first `MAX_CAST_MEMBERS` cast entries in upstream billing order
pub fn top_billed_cast(cast: Vec<TmdbCastMember>) -> Vec<Person> {
    cast.into_iter()
        .take(MAX_CAST_MEMBERS)
        .map(|member| Person {
            id: member.id,
            name: member.name,
            profile_path: member.profile_path,
            character: member.character,
            order: member.order,
            job: None,
            department: None,
        })
        .collect()
}
