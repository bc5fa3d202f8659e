//! varnishadm CLI Client
//!
//! Command-line interface for the cache server's admin port.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use varnishadm::config::{DEFAULT_HOST, DEFAULT_PORT};
use varnishadm::{AdminClient, Config, Result};

/// varnishadm CLI
#[derive(Parser, Debug)]
#[command(name = "varnishadm")]
#[command(about = "Control a running cache server through its admin port")]
#[command(version)]
struct Args {
    /// Admin interface host
    #[arg(short = 'T', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Admin interface port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Connect/read/write timeout in milliseconds (0 = none)
    #[arg(short, long, default_value = "0")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check status of the cache process
    Status,

    /// Start the cache process
    Start,

    /// Stop the cache process
    Stop,

    /// Check that the admin port answers
    Ping,

    /// Purge URLs matching a regular expression
    Purge {
        /// Regular expression matched against URLs
        pattern: String,
    },

    /// Print all counters
    Stats,

    /// Show one parameter, or all of them
    ParamShow {
        /// Parameter name
        name: Option<String>,
    },

    /// Set a parameter value
    ParamSet {
        /// Parameter name
        name: String,

        /// New value
        value: String,
    },

    /// Add a ban expression
    Ban {
        /// Ban expression, e.g. `req.url ~ ^/images`
        #[arg(num_args = 1.., required = true)]
        expression: Vec<String>,
    },

    /// List active bans
    BanList,

    /// List loaded configurations
    VclList,

    /// Switch to a named configuration
    VclUse {
        /// Configuration name
        name: String,
    },

    /// Show the last panic, if any
    PanicShow,

    /// Send any command verbatim
    Raw {
        /// Command and arguments
        #[arg(num_args = 1.., required = true)]
        command: Vec<String>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,varnishadm=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .connect_timeout_ms(args.timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    tracing::debug!("Admin interface: {}", config.addr());

    let mut client = AdminClient::new(config);
    match run(&mut client, args.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("varnishadm: {}", e);
            std::process::exit(1);
        }
    }
}

/// Execute one subcommand and render its output
fn run(client: &mut AdminClient, command: Commands) -> Result<String> {
    match command {
        Commands::Status => client.status(),
        Commands::Start => client.start(),
        Commands::Stop => client.stop(),
        Commands::Ping => client.ping(),
        Commands::Purge { pattern } => client.purge(&pattern),
        Commands::Stats => {
            let mut stats: Vec<_> = client.stats()?.into_iter().collect();
            stats.sort();
            Ok(stats
                .into_iter()
                .map(|(name, value)| format!("{:>12}  {}", value, name))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Commands::ParamShow { name: Some(name) } => {
            let info = client.show_param(&name)?;
            Ok(format!("{:<24} {}\n{}", name, info.value, info.description.trim_end()))
        }
        Commands::ParamShow { name: None } => Ok(client
            .all_params()?
            .into_iter()
            .map(|(name, info)| format!("{:<24} {}", name, info.value))
            .collect::<Vec<_>>()
            .join("\n")),
        Commands::ParamSet { name, value } => client.set_param(&name, &value),
        Commands::Ban { expression } => client.ban(&expression.join(" ")),
        Commands::BanList => client.ban_list(),
        Commands::VclList => client.vcl_list(),
        Commands::VclUse { name } => client.vcl_use(&name),
        Commands::PanicShow => client.panic_show(),
        Commands::Raw { command } => client.execute(&command.join(" ")),
    }
}
