use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::models::{Genre, Movie, NewGenre, NewUser, User, UserPreferences};

/// In-memory stand-in for the database
///
/// Holds users, genres and movies keyed by integer id. Movies and genres are
/// keyed by their provider id when one is supplied; the internal counters are
/// only a fallback. Nothing is evicted and nothing survives a restart.
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    users: BTreeMap<u64, User>,
    genres: BTreeMap<u64, Genre>,
    movies: BTreeMap<u64, Movie>,
    next_user_id: u64,
    next_genre_id: u64,
    next_movie_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: BTreeMap::new(),
                genres: BTreeMap::new(),
                movies: BTreeMap::new(),
                next_user_id: 1,
                next_genre_id: 1,
                next_movie_id: 1,
            }),
        }
    }

    // Users

    pub async fn get_user(&self, id: u64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Inserts a user with the next id, an empty watchlist and no preferences.
    /// Returns `None` when the username is already taken.
    pub async fn create_user(&self, new_user: NewUser) -> Option<User> {
        let mut inner = self.inner.write().await;
        if inner
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return None;
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
            watchlist: Vec::new(),
            preferences: UserPreferences::default(),
        };
        inner.users.insert(id, user.clone());
        Some(user)
    }

    /// Replaces the user's whole watchlist. Last write wins.
    pub async fn update_user_watchlist(&self, user_id: u64, movie_ids: Vec<u64>) -> Option<User> {
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(&user_id)?;
        user.watchlist = movie_ids;
        Some(user.clone())
    }

    /// Applies `edit` to the user's watchlist while holding the write lock
    pub async fn modify_user_watchlist<F>(&self, user_id: u64, edit: F) -> Option<User>
    where
        F: FnOnce(&mut Vec<u64>),
    {
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(&user_id)?;
        edit(&mut user.watchlist);
        Some(user.clone())
    }

    // Genres

    pub async fn get_genre(&self, id: u64) -> Option<Genre> {
        self.inner.read().await.genres.get(&id).cloned()
    }

    /// All cached genres in ascending id order
    pub async fn get_all_genres(&self) -> Vec<Genre> {
        self.inner.read().await.genres.values().cloned().collect()
    }

    /// Upserts a genre by id
    pub async fn create_genre(&self, new_genre: NewGenre) -> Genre {
        let mut inner = self.inner.write().await;
        let id = match new_genre.id {
            Some(id) => id,
            None => {
                let id = inner.next_genre_id;
                inner.next_genre_id += 1;
                id
            }
        };

        let genre = Genre {
            id,
            name: new_genre.name,
        };
        inner.genres.insert(id, genre.clone());
        genre
    }

    // Movies

    pub async fn get_movie(&self, id: u64) -> Option<Movie> {
        self.inner.read().await.movies.get(&id).cloned()
    }

    pub async fn get_movies_by_genre(&self, genre_id: u64) -> Vec<Movie> {
        self.inner
            .read()
            .await
            .movies
            .values()
            .filter(|movie| movie.has_genre(genre_id))
            .cloned()
            .collect()
    }

    /// Upserts a movie keyed by `tmdb_id`, or by the next counter id when absent.
    /// The stored movie's `id` is set to the key.
    pub async fn create_movie(&self, tmdb_id: Option<u64>, mut movie: Movie) -> Movie {
        let mut inner = self.inner.write().await;
        let id = match tmdb_id {
            Some(id) => id,
            None => {
                let id = inner.next_movie_id;
                inner.next_movie_id += 1;
                id
            }
        };

        movie.id = id;
        inner.movies.insert(id, movie.clone());
        movie
    }

    /// Case-insensitive substring match over title and overview
    pub async fn search_movies(&self, query: &str) -> Vec<Movie> {
        let query = query.to_lowercase();
        self.inner
            .read()
            .await
            .movies
            .values()
            .filter(|movie| {
                movie.title.to_lowercase().contains(&query)
                    || movie
                        .overview
                        .as_deref()
                        .is_some_and(|overview| overview.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }
}
