use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadplanner_cli::output::OutputFormat;
use roadplanner_lib::{DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR};

mod commands;

use commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "National highway route planner")]
struct Cli {
    /// Road network database file or directory.
    #[arg(long, global = true, env = "ROADPLANNER_DB")]
    db: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the road network database and fill it with the bundled routes.
    Seed,
    /// List every city in the road network.
    Cities,
    /// Find the shortest route between two cities and suggest a departure time.
    Route {
        /// Starting city name.
        #[arg(long = "from")]
        from: String,
        /// Destination city name.
        #[arg(long = "to")]
        to: String,
        /// Average driving speed in km/h.
        #[arg(long, env = "ROADPLANNER_SPEED_KMH", default_value_t = DEFAULT_AVERAGE_SPEED_KMH)]
        speed: f64,
        /// Hour (0-23) at which daylight driving may begin.
        #[arg(long, default_value_t = DEFAULT_DAY_START_HOUR)]
        day_start: u32,
        /// Hour (0-23) by which arrival should happen.
        #[arg(long, default_value_t = DEFAULT_DAY_END_HOUR)]
        day_end: u32,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let target = cli.db.as_deref();

    match cli.command {
        Command::Seed => commands::seed::handle_seed(target, cli.format),
        Command::Cities => commands::cities::handle_cities(target, cli.format),
        Command::Route {
            from,
            to,
            speed,
            day_start,
            day_end,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                speed,
                day_start,
                day_end,
            };
            commands::route::handle_route_command(target, cli.format, &args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
