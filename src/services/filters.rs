use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Sort order applied when the client does not choose one
pub const DEFAULT_SORT_BY: &str = "popularity.desc";
/// Page requested when the client does not choose one
pub const DEFAULT_PAGE: &str = "1";

/// Keyword ids sent for each recognised mood, pipe-joined as TMDB expects
const MOOD_KEYWORDS: [(&str, &str); 5] = [
    ("happy", "9715|1701|950"),
    ("sad", "1721|9748|9713"),
    ("excited", "9882|9675|9748"),
    ("thoughtful", "818|3801|10112"),
    ("relaxed", "9889|818|4495"),
];

/// Flat string-keyed query parameters for a provider request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Preferences submitted to the recommendations endpoint
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPreferences {
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub release_year_range: Option<String>,
    #[serde(default)]
    pub include_adult: bool,
}

/// Builds the discovery query for a set of recommendation preferences
///
/// `current_year` anchors the "new" release range. Unknown moods and year
/// ranges add nothing, and the genre is passed through unchecked.
pub fn recommendation_query(prefs: &RecommendationPreferences, current_year: i32) -> QueryParams {
    let mut params = QueryParams::new();
    params.set("sort_by", DEFAULT_SORT_BY);
    params.set("include_adult", prefs.include_adult.to_string());

    if let Some(genre) = &prefs.genre {
        params.set("with_genres", genre.as_str());
    }

    if let Some(range) = &prefs.release_year_range {
        let (gte, lte) = release_date_bounds(range, current_year);
        if let Some(gte) = gte {
            params.set("primary_release_date_gte", gte);
        }
        if let Some(lte) = lte {
            params.set("primary_release_date_lte", lte);
        }
    }

    if let Some(keywords) = prefs.mood.as_deref().and_then(mood_keywords) {
        params.set("with_keywords", keywords);
    }

    params
}

/// Same as [`recommendation_query`], anchored on the current UTC year
pub fn recommendation_query_now(prefs: &RecommendationPreferences) -> QueryParams {
    recommendation_query(prefs, chrono::Utc::now().year())
}

/// Lower and upper release date bounds for a named range
fn release_date_bounds(range: &str, current_year: i32) -> (Option<String>, Option<String>) {
    match range {
        "new" => (Some(format!("{}-01-01", current_year - 5)), None),
        "2010s" => (Some("2010-01-01".into()), Some("2019-12-31".into())),
        "2000s" => (Some("2000-01-01".into()), Some("2009-12-31".into())),
        "1990s" => (Some("1990-01-01".into()), Some("1999-12-31".into())),
        "classic" => (None, Some("1989-12-31".into())),
        _ => (None, None),
    }
}

fn mood_keywords(mood: &str) -> Option<&'static str> {
    MOOD_KEYWORDS
        .iter()
        .find(|(name, _)| *name == mood)
        .map(|(_, keywords)| *keywords)
}

/// Browse parameters shared by the genre and discover listings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseParams {
    pub page: Option<String>,
    pub sort_by: Option<String>,
    pub year: Option<String>,
}

/// Builds a discovery query for browsing, optionally restricted to a genre
pub fn browse_query(genre: Option<&str>, browse: &BrowseParams) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(genre) = genre {
        params.set("with_genres", genre);
    }
    params.set(
        "sort_by",
        browse.sort_by.as_deref().unwrap_or(DEFAULT_SORT_BY),
    );
    params.set("page", browse.page.as_deref().unwrap_or(DEFAULT_PAGE));

    if let Some(year) = browse.year.as_deref().filter(|year| !year.is_empty()) {
        params.set("primary_release_year", year);
    }

    params
}

/// Builds a title search query; a year of "all" means no year filter
pub fn search_query(query: &str, page: Option<&str>, year: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    params.set("query", query);
    params.set("page", page.unwrap_or(DEFAULT_PAGE));

    if let Some(year) = year.filter(|year| !year.is_empty() && *year != "all") {
        params.set("year", year);
    }

    params
}
