use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, bail};
use log::info;

use entity_search::error::util::safe_read_to_string;
use entity_search::{
    Catalog, ChronoDateParser, SearchConfig, SearchEngine, parse_search_request,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [snapshot_path, criteria_path] = args.as_slice() else {
        bail!("usage: entity-search <snapshot.json> <criteria.json>");
    };
    let snapshot_path = PathBuf::from(snapshot_path);
    let criteria_path = PathBuf::from(criteria_path);

    let start = Instant::now();
    let catalog = Catalog::load(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;

    let request = safe_read_to_string(&criteria_path)?;
    let criteria = parse_search_request(&request)
        .with_context(|| format!("Invalid search request in {}", criteria_path.display()))?;
    info!("Parsed {} criteria", criteria.len());

    let config = SearchConfig::default();
    let dates = ChronoDateParser::from_config(&config);
    let engine = SearchEngine::new(&catalog, &catalog, &dates, config);
    let matched = engine
        .search(catalog.entities(), &criteria)
        .context("Search failed")?;

    info!("Search completed in {:?}", start.elapsed());
    println!("{}", serde_json::to_string_pretty(&matched)?);

    Ok(())
}
