//! CSV loading for the person/movie graph
//!
//! Expects the three-file layout the original dataset ships with:
//! `people.csv` (id,name,birth), `movies.csv` (id,title,year) and
//! `stars.csv` (person_id,movie_id). Empty birth/year fields become `None`;
//! star rows referencing unknown ids are skipped.

use std::path::Path;

use serde::Deserialize;

use super::graph::{Graph, MovieId, PersonId};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path).map_err(Error::from)
}

/// Load a graph from a directory containing `people.csv`, `movies.csv`
/// and `stars.csv`.
///
/// # Errors
///
/// Returns an error if any of the three files is missing or malformed.
pub fn load_graph(dir: &Path) -> Result<Graph> {
    let mut graph = Graph::new();

    let mut people = open(&dir.join("people.csv"))?;
    for row in people.deserialize() {
        let row: PersonRow = row?;
        graph.add_person(PersonId(row.id), &row.name, non_empty(row.birth));
    }

    let mut movies = open(&dir.join("movies.csv"))?;
    for row in movies.deserialize() {
        let row: MovieRow = row?;
        graph.add_movie(MovieId(row.id), &row.title, non_empty(row.year));
    }

    let mut stars = open(&dir.join("stars.csv"))?;
    for row in stars.deserialize() {
        let row: StarRow = row?;
        graph.add_star(&PersonId(row.person_id), &MovieId(row.movie_id));
    }

    Ok(graph)
}
