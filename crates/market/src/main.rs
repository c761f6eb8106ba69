use liga_clock::SystemClock;
use liga_market::infrastructure::{
    BroadcastAnnouncer, JsonFileStore, JsonHistoryLog, LeagueConfig,
};
use liga_market::{EnginePorts, IntakeScheduler, MarketEngine};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

const USAGE: &str = "\
usage: liga-market [-c|--config FILE]

Runs the transfer market until Ctrl-C. Settings come from FILE (JSON) when
given, then LIGA_DATA_DIR, LIGA_DAILY_ADD_COUNT and LIGA_AUTO_DAILY_ADD
override them. RUST_LOG picks the log level.";

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Invocation {
    Run { config: Option<PathBuf> },
    Usage,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Invocation, String> {
    let mut config = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Invocation::Usage),
            "-c" | "--config" => {
                let path = args.next().ok_or("missing FILE after --config")?;
                config = Some(PathBuf::from(path));
            }
            other => return Err(format!("unexpected argument '{}'", other)),
        }
    }

    Ok(Invocation::Run { config })
}

fn load_config(path: Option<PathBuf>) -> Result<LeagueConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => {
            info!("Reading configuration from {}", path.display());
            LeagueConfig::from_file(&path)?
        }
        None => LeagueConfig::default(),
    };
    Ok(config.apply_env()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("liga_market=info"))
        .init();

    let config_path = match parse_args(std::env::args().skip(1)) {
        Ok(Invocation::Run { config }) => config,
        Ok(Invocation::Usage) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("liga-market: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
    };

    let config = load_config(config_path)?;
    info!(
        "League '{}', data in {}",
        config.name,
        config.data_dir.display()
    );

    let announcements = BroadcastAnnouncer::new(config.engine.announcement_capacity);
    let log_relay = announcements.spawn_log_relay();

    let ports = EnginePorts {
        store: Box::new(JsonFileStore::open(&config.data_dir)?),
        history: Arc::new(JsonHistoryLog::new(&config.data_dir)),
        announcer: Arc::new(announcements),
        clock: Arc::new(SystemClock::new()),
    };

    let (market, engine_thread) =
        MarketEngine::spawn(config.rules.clone(), config.engine_config(), ports)?;

    let scheduler = config.intake.enabled.then(|| {
        IntakeScheduler::new(market.clone(), config.intake.interval(), config.intake.count).spawn()
    });
    if scheduler.is_none() {
        info!("Daily intake disabled");
    }

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received, stopping the market");

    if let Some(task) = scheduler {
        task.abort();
    }
    market.shutdown().await?;
    drop(market);

    if tokio::task::spawn_blocking(move || engine_thread.join())
        .await?
        .is_err()
    {
        error!("Market engine thread panicked");
    }
    // The engine thread owned the last announcer clone, so the relay has drained
    let _ = log_relay.await;

    Ok(())
}
