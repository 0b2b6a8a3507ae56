//! Bipartite person/movie graph with a name index

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique person identifier (e.g. an IMDb-style "nm0000102")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub String);

/// Unique movie identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieId(pub String);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId(s.to_string())
    }
}

/// A person node: name, birth year, and the movies they starred in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birth: Option<String>,
    /// BTreeSet keeps neighbor expansion deterministic
    pub movies: BTreeSet<MovieId>,
}

/// A movie node: title, release year, and its stars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Option<String>,
    pub stars: BTreeSet<PersonId>,
}

/// The full graph plus a lowercased-name lookup index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    pub people: HashMap<PersonId, Person>,
    pub movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person and index their name
    pub fn add_person(&mut self, id: PersonId, name: &str, birth: Option<String>) {
        self.names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());
        self.people.insert(
            id,
            Person {
                name: name.to_string(),
                birth,
                movies: BTreeSet::new(),
            },
        );
    }

    /// Insert a movie
    pub fn add_movie(&mut self, id: MovieId, title: &str, year: Option<String>) {
        self.movies.insert(
            id,
            Movie {
                title: title.to_string(),
                year,
                stars: BTreeSet::new(),
            },
        );
    }

    /// Link a person to a movie. Pairs referencing unknown ids are ignored,
    /// matching the tolerance of the original data loader.
    pub fn add_star(&mut self, person: &PersonId, movie: &MovieId) {
        if !self.people.contains_key(person) || !self.movies.contains_key(movie) {
            return;
        }
        if let Some(p) = self.people.get_mut(person) {
            p.movies.insert(movie.clone());
        }
        if let Some(m) = self.movies.get_mut(movie) {
            m.stars.insert(person.clone());
        }
    }

    /// All person ids registered under a display name (case-insensitive),
    /// sorted. Several people may share a name; disambiguation is the
    /// caller's decision, never a silent first-pick.
    pub fn person_ids_for_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Resolve a display name to a unique person id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownPerson`] when the name is absent and
    /// [`crate::Error::AmbiguousName`] with the candidate ids when several
    /// people share it.
    pub fn resolve_name(&self, name: &str) -> Result<PersonId, crate::Error> {
        let candidates = self.person_ids_for_name(name);
        match candidates.len() {
            0 => Err(crate::Error::UnknownPerson {
                name: name.to_string(),
            }),
            1 => Ok(candidates.into_iter().next().expect("len checked")),
            _ => Err(crate::Error::AmbiguousName {
                name: name.to_string(),
                candidates: candidates.into_iter().map(|id| id.0).collect(),
            }),
        }
    }

    /// All (movie, co-star) pairs reachable from a person via shared movies.
    ///
    /// The person themself is excluded. Expansion order is deterministic
    /// (sorted movie ids, then sorted star ids).
    pub fn neighbors(&self, person: &PersonId) -> Vec<(MovieId, PersonId)> {
        let Some(p) = self.people.get(person) else {
            return Vec::new();
        };

        let mut neighbors = Vec::new();
        for movie_id in &p.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    if star != person {
                        neighbors.push((movie_id.clone(), star.clone()));
                    }
                }
            }
        }
        neighbors
    }

    /// Number of people in the graph
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of movies in the graph
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut g = Graph::new();
        g.add_person("p1".into(), "Kevin Bacon", Some("1958".into()));
        g.add_person("p2".into(), "Tom Hanks", Some("1956".into()));
        g.add_person("p3".into(), "Kevin Bacon", None);
        g.add_movie("m1".into(), "Apollo 13", Some("1995".into()));
        g.add_star(&"p1".into(), &"m1".into());
        g.add_star(&"p2".into(), &"m1".into());
        g
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        let g = sample();
        assert_eq!(g.person_ids_for_name("tom hanks"), vec![PersonId::from("p2")]);
        assert_eq!(g.person_ids_for_name("TOM HANKS"), vec![PersonId::from("p2")]);
    }

    #[test]
    fn test_resolve_name_rejects_ambiguity() {
        let g = sample();
        let err = g.resolve_name("Kevin Bacon").unwrap_err();
        match err {
            crate::Error::AmbiguousName { candidates, .. } => {
                assert_eq!(candidates, vec!["p1".to_string(), "p3".to_string()]);
            }
            other => panic!("expected AmbiguousName, got {other}"),
        }
    }

    #[test]
    fn test_resolve_name_unknown() {
        let g = sample();
        assert!(g.resolve_name("Nobody").is_err());
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let g = sample();
        let n = g.neighbors(&"p1".into());
        assert_eq!(n, vec![("m1".into(), "p2".into())]);
    }

    #[test]
    fn test_star_rows_with_unknown_ids_are_skipped() {
        let mut g = sample();
        g.add_star(&"p1".into(), &"missing".into());
        g.add_star(&"ghost".into(), &"m1".into());
        assert_eq!(g.people[&PersonId::from("p1")].movies.len(), 1);
        assert_eq!(g.movies[&MovieId::from("m1")].stars.len(), 2);
    }
}
