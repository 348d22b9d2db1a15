//! Command-line resolver for EIP-3770 account references.
//!
//! # Usage
//!
//! ```bash
//! # Bare address on the primary chain
//! r3770 0x6B175474E89094C44Da98b954EedeAC495271d0F
//!
//! # ENS name
//! r3770 vitalik.eth
//!
//! # Chain-qualified forms
//! r3770 137:0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063
//! r3770 eip155:137:0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063
//!
//! # JSON output, custom registry
//! r3770 --json --registry https://safe-client.gnosis.io vitalik.eth
//! ```
//!
//! # Environment Variables
//!
//! - `R3770_REGISTRY` — chain-metadata registry base URL
//! - `RUST_LOG` — log level filter (default: `warn`)
//!
//! Failures print a single human-readable line (the error plus its source
//! chain) and exit non-zero.

use std::error::Error;

use clap::Parser;
use r3770::directory::DEFAULT_REGISTRY_URL;
use r3770::{AccountResolver, ChainDirectory, ResolvedAccount};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "r3770", version, about = "Resolve an EVM account reference to a verified address")]
struct Args {
    /// Account reference: `0x…` address, ENS name, `chainId:0x…`, or
    /// `eip155:chainId:0x…`.
    reference: String,

    /// Chain-metadata registry base URL.
    #[arg(long, env = "R3770_REGISTRY", default_value = DEFAULT_REGISTRY_URL)]
    registry: String,

    /// Print the resolved account as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", render_chain(e.as_ref()));
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let directory = ChainDirectory::try_from(args.registry.as_str())?;
    let resolver = AccountResolver::new(directory);

    let account = resolver.resolve(&args.reference).await?;
    print_account(&account, args.json)?;
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_account(account: &ResolvedAccount, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(account)?);
    } else {
        println!("{} on {}", account.address, account.chain_name);
    }
    Ok(())
}

/// Collapses an error and its source chain into one line.
fn render_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
