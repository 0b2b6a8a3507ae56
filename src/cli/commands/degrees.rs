//! Degrees command - Shortest co-starring path between two actors

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    Error,
    cli::output::{create_spinner, format_number},
    degrees::{Graph, PersonId, loader, search},
};

#[derive(Parser, Debug)]
#[command(about = "Find the degrees of separation between two actors")]
pub struct DegreesArgs {
    /// Directory containing people.csv, movies.csv and stars.csv
    #[arg(long, short = 'd', default_value = "data")]
    pub data: PathBuf,

    /// Source actor name
    pub source: String,

    /// Target actor name
    pub target: String,

    /// Resolve an ambiguous source name to an explicit person id
    #[arg(long)]
    pub source_id: Option<String>,

    /// Resolve an ambiguous target name to an explicit person id
    #[arg(long)]
    pub target_id: Option<String>,
}

/// Resolve a name to a person id, honoring an explicit `--*-id` override.
/// Ambiguity is surfaced with the candidate list, never silently picked.
fn resolve(graph: &Graph, name: &str, id_override: Option<&str>, flag: &str) -> Result<PersonId> {
    if let Some(id) = id_override {
        let id = PersonId(id.to_string());
        if !graph.people.contains_key(&id) {
            return Err(Error::UnknownPersonId { id: id.0 }.into());
        }
        return Ok(id);
    }

    graph.resolve_name(name).map_err(|err| match err {
        Error::AmbiguousName { name, candidates } => {
            let listing: Vec<String> = candidates
                .iter()
                .map(|id| {
                    let person = &graph.people[&PersonId(id.clone())];
                    match &person.birth {
                        Some(birth) => format!("  {id}: {} (born {birth})", person.name),
                        None => format!("  {id}: {}", person.name),
                    }
                })
                .collect();
            anyhow!(
                "Several people are named '{name}'. Disambiguate with {flag}:\n{}",
                listing.join("\n")
            )
        }
        other => other.into(),
    })
}

pub fn execute(args: DegreesArgs) -> Result<()> {
    let spinner = create_spinner("Loading graph data...");
    let graph = loader::load_graph(&args.data)?;
    spinner.finish_with_message(format!(
        "Loaded {} people, {} movies",
        format_number(graph.person_count()),
        format_number(graph.movie_count())
    ));

    let source = resolve(&graph, &args.source, args.source_id.as_deref(), "--source-id")?;
    let target = resolve(&graph, &args.target, args.target_id.as_deref(), "--target-id")?;

    match search::shortest_path(&graph, &source, &target) {
        None => println!("Not connected."),
        Some(path) if path.is_empty() => {
            println!("0 degrees of separation.");
        }
        Some(path) => {
            println!("{} degrees of separation.", path.len());
            let mut current = source;
            for (i, (movie_id, person_id)) in path.iter().enumerate() {
                let from = &graph.people[&current].name;
                let to = &graph.people[person_id].name;
                let title = &graph.movies[movie_id].title;
                println!("{}: {from} and {to} starred in {title}", i + 1);
                current = person_id.clone();
            }
        }
    }

    Ok(())
}
