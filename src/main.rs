use anyhow::{Context, Result};
use biosim_genetics::config::ConfigManager;
use biosim_genetics::{average_genome_length, DiversityEstimator, Genome, Population};
use rand::rngs::StdRng;
use rand::SeedableRng;

const USAGE: &str = "usage: biosim-diversity <population.json> [config.toml]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let population_path = args.next().context(USAGE)?;
    let config_path = args.next();

    let manager = ConfigManager::new();
    manager
        .load_layered(config_path.as_deref())
        .context("Failed to load configuration")?;
    let config = manager.get();

    let contents = std::fs::read_to_string(&population_path)
        .with_context(|| format!("Failed to read population from {}", population_path))?;
    let genomes: Vec<Genome> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse population from {}", population_path))?;
    let population = Population::from_genomes(genomes);

    let estimator = DiversityEstimator::from_config(&config.analysis)?;
    let mut rng = match config.analysis.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Estimating diversity of {} individuals (method {}, up to {} samples)",
        population.len(),
        config.analysis.genome_comparison_method.code(),
        estimator.sample_size()
    );

    let diversity = estimator.estimate(&population, &mut rng)?;
    let average_length = average_genome_length(&population, &mut rng);
    log::info!("Average genome length {:.2}", average_length);
    println!("{:.6}", diversity);

    Ok(())
}
