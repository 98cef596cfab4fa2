use clap::Parser;
use decora::{
    builtin_catalog, DesignEngine, DetectedObject, DetectedObjectSet, HashEmbedder, StyleCatalog,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Interior design recommendations from detected furniture
#[derive(Parser, Debug)]
#[command(name = "decora")]
#[command(about = "Interior design recommendations from detected furniture", long_about = None)]
struct Args {
    /// Path to a detections JSON file (array of detected objects)
    #[arg(short, long)]
    detections: PathBuf,

    /// Style catalog JSON file; defaults to the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Number of styles to recommend
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting decora v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &args.catalog {
        Some(path) => {
            info!("Loading style catalog from {:?}", path);
            StyleCatalog::load_from_file(path)?
        }
        None => builtin_catalog(),
    };
    info!("Catalog ready: {} styles", catalog.len());

    let contents = std::fs::read_to_string(&args.detections)?;
    let objects: Vec<DetectedObject> = serde_json::from_str(&contents)?;
    let detected = DetectedObjectSet::from_objects(objects);
    info!(
        "Detections loaded: {}",
        if detected.is_empty() {
            "none".to_string()
        } else {
            detected.object_description()
        }
    );

    let engine = DesignEngine::new(catalog, HashEmbedder::default()).with_top_k(args.top_k);
    let bundle = engine.recommend(&detected)?;

    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
