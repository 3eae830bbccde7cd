use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use algovision::config::{GridConfig, SortConfig};
use algovision::core::Grid;
use algovision::error::{Error, Result};
use algovision::explain::{explain_or_fallback, Algorithm, BuiltinExplanations};
use algovision::hashing::{HashTable, InsertOutcome, SearchOutcome, DEFAULT_TABLE_SIZE};
use algovision::{maze, render, search, sorting};
use algovision::{SearchAlgorithm, SortAlgorithm};

#[derive(Parser)]
#[command(name = "algovision")]
#[command(about = "Deterministic traces for classic algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort a random array and show its animation trace
    Sort {
        /// Algorithm: bubble, quick, merge, or heap
        #[arg(short, long)]
        algorithm: String,

        /// Number of values to sort
        #[arg(long)]
        len: Option<usize>,

        /// RNG seed for a reproducible array
        #[arg(long)]
        seed: Option<u64>,

        /// Print every animation step
        #[arg(long)]
        steps: bool,
    },

    /// Run a search over a board and show what it explored
    Path {
        /// Algorithm: dijkstra, bfs, dfs, or astar
        #[arg(short, long)]
        algorithm: String,

        /// Board file: an ASCII map, or a JSON grid config for .json files
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Carve a recursive-division maze before searching
        #[arg(long)]
        maze: bool,

        /// RNG seed for maze carving
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Insert and look up keys in a linear-probing hash table
    Hash {
        /// Slot count
        #[arg(long, default_value_t = DEFAULT_TABLE_SIZE)]
        size: usize,

        /// Keys to insert, in order
        #[arg(long, value_delimiter = ',')]
        insert: Vec<u32>,

        /// Keys to look up after the inserts
        #[arg(long, value_delimiter = ',')]
        search: Vec<u32>,
    },

    /// Print the write-up for an algorithm
    Explain {
        /// Algorithm token, e.g. bubble, astar, hashing
        #[arg(short, long)]
        algorithm: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sort {
            algorithm,
            len,
            seed,
            steps,
        } => cmd_sort(&algorithm, len, seed, steps),
        Command::Path {
            algorithm,
            layout,
            maze,
            seed,
        } => cmd_path(&algorithm, layout.as_deref(), maze, seed),
        Command::Hash {
            size,
            insert,
            search,
        } => cmd_hash(size, &insert, &search),
        Command::Explain { algorithm } => cmd_explain(&algorithm),
    }
}

// =============================================================================
// SUBCOMMANDS
// =============================================================================

fn cmd_sort(algorithm: &str, len: Option<usize>, seed: Option<u64>, steps: bool) -> Result<()> {
    let algorithm = parse_sort_algorithm(algorithm)?;
    let mut config = SortConfig::default();
    if let Some(len) = len {
        config.len = len;
    }

    let mut rng = rng_from(seed);
    let values = sorting::random_values(&config, &mut rng)?;
    let log = sorting::animation_steps(&values, algorithm);

    println!("{} over {} values", algorithm.display_name(), values.len());
    println!("{}", render::bar_chart(&values));
    println!("{} steps", log.len());
    if steps {
        for step in &log {
            println!("{}", render::step_to_line(step));
        }
    }
    println!("{}", render::bar_chart(&sorting::replay(&values, &log)));
    Ok(())
}

fn cmd_path(algorithm: &str, layout: Option<&Path>, maze: bool, seed: Option<u64>) -> Result<()> {
    let algorithm = parse_search_algorithm(algorithm)?;
    let mut grid = match layout {
        Some(path) => load_grid(path)?,
        None => Grid::new(&GridConfig::default())?,
    };
    if maze {
        let mut rng = rng_from(seed);
        for pos in maze::generate_walls(&grid, &mut rng) {
            grid.set_wall(pos);
        }
    }

    let run = search::search(&grid, algorithm);
    println!("{}", algorithm.display_name());
    println!("{}", render::search_to_ascii(&run));
    println!("visited {} cells", run.visited().len());
    if run.finish_reached() {
        let guarantee = if algorithm.is_shortest_path() {
            "shortest"
        } else {
            "not necessarily shortest"
        };
        println!("path of {} cells ({guarantee})", run.path().len());
    } else {
        println!("finish not reached");
    }
    Ok(())
}

fn cmd_hash(size: usize, insert: &[u32], search: &[u32]) -> Result<()> {
    let mut table = HashTable::new(size)?;

    for &key in insert {
        let report = table.insert(key);
        println!("insert {key}");
        for probe in &report.probes {
            println!("  {}", render::probe_to_line(probe));
        }
        match report.outcome {
            InsertOutcome::Inserted { index } => println!("  -> stored in slot {index}"),
            InsertOutcome::AlreadyPresent { index } => println!("  -> already in slot {index}"),
            InsertOutcome::Full => println!("  -> table full, key dropped"),
        }
    }

    println!("{}", render::table_to_ascii(&table));

    for &key in search {
        let report = table.search(key);
        println!("search {key}");
        for probe in &report.probes {
            println!("  {}", render::probe_to_line(probe));
        }
        match report.outcome {
            SearchOutcome::Found { index } => println!("  -> found in slot {index}"),
            SearchOutcome::NotFound => println!("  -> not present"),
        }
    }
    Ok(())
}

fn cmd_explain(algorithm: &str) -> Result<()> {
    let algorithm = Algorithm::from_name(algorithm).ok_or_else(|| {
        Error::Config(format!(
            "unknown algorithm '{algorithm}' (expected one of: {})",
            token_list(Algorithm::ALL.iter().map(|a| a.as_str()))
        ))
    })?;
    println!("{}", explain_or_fallback(&BuiltinExplanations, algorithm));
    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_sort_algorithm(name: &str) -> Result<SortAlgorithm> {
    SortAlgorithm::from_name(name).ok_or_else(|| {
        Error::Config(format!(
            "unknown sort algorithm '{name}' (expected one of: {})",
            token_list(SortAlgorithm::ALL.iter().map(|a| a.as_str()))
        ))
    })
}

fn parse_search_algorithm(name: &str) -> Result<SearchAlgorithm> {
    SearchAlgorithm::from_name(name).ok_or_else(|| {
        Error::Config(format!(
            "unknown search algorithm '{name}' (expected one of: {})",
            token_list(SearchAlgorithm::ALL.iter().map(|a| a.as_str()))
        ))
    })
}

fn token_list<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(", ")
}

/// Seeded runs reproduce exactly; unseeded runs draw from the OS.
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn load_grid(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        let config: GridConfig = serde_json::from_str(&text)?;
        Grid::new(&config)
    } else {
        Grid::from_ascii(&text)
    }
}
