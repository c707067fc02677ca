//! kvclient CLI
//!
//! Sends one command to a server and prints the reply.
//!
//! ```text
//! kvclient-cli SET greeting hello
//! kvclient-cli --port 6380 LRANGE queue 0 -1
//! ```

use clap::Parser;
use kvclient::{Client, Command, Config, Reply};
use tracing_subscriber::{fmt, EnvFilter};

/// kvclient CLI
#[derive(Parser, Debug)]
#[command(name = "kvclient-cli")]
#[command(about = "Send a command to a RESP key-value server")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "6379")]
    port: u16,

    /// Connect, read and write timeout in milliseconds (0 = no timeout)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    /// Command keyword followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() {
    // Logs go to stderr so stdout only carries the reply
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .timeout_ms(args.timeout_ms)
        .build();

    let Some((name, arguments)) = args.command.split_first() else {
        eprintln!("No command given");
        std::process::exit(2);
    };

    let mut client = match Client::open(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect to {}: {}", config.address(), e);
            eprintln!("Could not connect to {}: {}", config.address(), e);
            std::process::exit(1);
        }
    };

    let command = Command::new(name).args(arguments);
    match client.raw(command) {
        Ok(reply) => {
            println!("{}", reply);
            if matches!(reply, Reply::Error(_)) {
                std::process::exit(1);
            }
        }
        Err(e) => {
            if e.is_timeout() {
                eprintln!("(error) timed out waiting for {}", config.address());
            } else {
                eprintln!("(error) {}", e);
            }
            std::process::exit(1);
        }
    }

    client.close();
}
