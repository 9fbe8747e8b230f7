use anyhow::{Context as AnyhowContext, Result};
use chrono::{Local, NaiveTime};
use clap::{Args, Parser, Subcommand};
use eatery_recommend::{parse_time_of_day, RecommendationService};
use eatery_store::{load_seed_file, seed_store, CuisineStyle, RecordStore, StoreConfig};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub mod http_api;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "eatery")]
#[command(about = "Recommend a restaurant from a plain-language request", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Store backend: memory|file|rest (overrides EATERY_STORE_BACKEND)
    #[arg(long, global = true)]
    store: Option<String>,

    /// Table name (overrides RESTAURANT_TABLE)
    #[arg(long, global = true)]
    table: Option<String>,

    /// Directory holding `<table>.json` for the file backend (overrides EATERY_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Document store URL for the rest backend (overrides EATERY_STORE_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Store request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    store_timeout_seconds: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve recommendations over HTTP
    #[command(name = "serve-http")]
    ServeHttp(ServeArgs),

    /// Recommend a restaurant for one sentence and print the JSON outcome
    Recommend(RecommendArgs),

    /// Load restaurant records from a JSON file into the store
    Seed(SeedArgs),

    /// List the supported cuisine styles
    Styles,
}

#[derive(Args)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:7878")]
    bind: String,

    /// Seed file loaded into the store before serving (useful with --store memory)
    #[arg(long)]
    seed_file: Option<PathBuf>,
}

#[derive(Args)]
struct RecommendArgs {
    /// What you are looking for, e.g. "vegetarian italian food open now"
    sentence: String,

    /// Evaluate "open now" at this HH:MM instead of the local clock
    #[arg(long)]
    at: Option<String>,
}

#[derive(Args)]
struct SeedArgs {
    /// Path to a JSON array of restaurant records
    #[arg(long)]
    file: PathBuf,
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    // `recommend` prints JSON on stdout; keep info chatter off the terminal unless asked.
    let json_output = matches!(cli.command, Commands::Recommend(_));
    if cli.quiet || (json_output && !cli.verbose) {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let store_cfg = store_config(&cli)?;

    match cli.command {
        Commands::ServeHttp(args) => serve_http(args, store_cfg).await?,
        Commands::Recommend(args) => run_recommend(args, store_cfg).await?,
        Commands::Seed(args) => run_seed(args, store_cfg).await?,
        Commands::Styles => run_styles()?,
    }

    Ok(())
}

fn store_config(cli: &Cli) -> Result<StoreConfig> {
    let mut cfg = StoreConfig::from_env().context("Invalid store environment")?;
    if let Some(backend) = &cli.store {
        cfg.backend = backend.parse()?;
    }
    if let Some(table) = &cli.table {
        cfg.table = table.clone();
    }
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        cfg.endpoint = Some(endpoint.clone());
    }
    cfg.timeout = Duration::from_secs(cli.store_timeout_seconds);
    Ok(cfg)
}

fn open_store(cfg: &StoreConfig) -> Result<Arc<dyn RecordStore>> {
    cfg.open().with_context(|| {
        format!(
            "Failed to open {} store for table '{}'",
            cfg.backend.as_str(),
            cfg.table
        )
    })
}

async fn run_recommend(args: RecommendArgs, store_cfg: StoreConfig) -> Result<()> {
    let now = match args.at.as_deref() {
        Some(raw) => parse_time_of_day(raw)
            .with_context(|| format!("Invalid --at value '{raw}': expected HH:MM (24-hour)"))?,
        None => local_time_of_day(),
    };

    let service = RecommendationService::new(open_store(&store_cfg)?);
    let outcome = service.recommend(Some(&args.sentence), now).await;
    print_stdout(&serde_json::to_string_pretty(&outcome)?)?;

    if outcome.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_seed(args: SeedArgs, store_cfg: StoreConfig) -> Result<()> {
    let store = open_store(&store_cfg)?;
    let records = load_seed_file(&args.file).await?;
    let report = seed_store(store.as_ref(), records).await?;
    print_stdout(&format!(
        "Seeded {} record(s) into table '{}'",
        report.inserted,
        store.table()
    ))
}

fn run_styles() -> Result<()> {
    for style in CuisineStyle::ALL {
        print_stdout(style.as_str())?;
    }
    Ok(())
}

async fn serve_http(args: ServeArgs, store_cfg: StoreConfig) -> Result<()> {
    let store = open_store(&store_cfg)?;
    if let Some(seed_file) = &args.seed_file {
        let records = load_seed_file(seed_file).await?;
        seed_store(store.as_ref(), records).await?;
    }

    let app = http_api::router(RecommendationService::new(store));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    let local_addr = listener.local_addr()?;
    let base_url = format!("http://{local_addr}");

    print_stdout(&format!("Serving recommendations: {base_url}/recommend"))?;
    print_stdout(&format!("Health endpoint: {base_url}/health"))?;
    print_stdout(&format!(
        "Try: curl '{base_url}/recommend?sentence=vegetarian%20italian%20open%20now'"
    ))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn local_time_of_day() -> NaiveTime {
    Local::now().time()
}
