//! `mp` - command line client for the MercadoPago REST API

use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use mercadopago_lib::apis::card_tokens::CardTokenRequest;
use mercadopago_lib::{ApiClient, ClientConfig, to_pretty_json};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mp")]
#[command(version)]
#[command(about = "Call the MercadoPago REST API from the command line", long_about = None)]
#[command(after_help = "ENVIRONMENT:
    MERCADOPAGO_ACCESS_TOKEN    Bearer token (required)
    MERCADOPAGO_BASE_URL        API base URL [default: https://api.mercadopago.com/]
    MERCADOPAGO_TIMEOUT_SECS    Request timeout in seconds [default: 60]")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// API base URL (overrides MERCADOPAGO_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides MERCADOPAGO_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a credit card
    CardToken {
        /// Card number
        #[arg(long)]
        number: String,

        /// Expiration month (1-12)
        #[arg(long)]
        month: u32,

        /// Expiration year (four digits)
        #[arg(long)]
        year: u32,

        /// Card security code
        #[arg(long)]
        security_code: String,

        /// Cardholder name as printed on the card
        #[arg(long)]
        holder: Option<String>,
    },

    /// Exchange client credentials for an OAuth access token
    AccessToken {
        #[arg(long)]
        client_id: String,

        #[arg(long)]
        client_secret: String,
    },

    /// List the payment methods available to the account
    PaymentMethods,

    /// Create a sandbox test user
    TestUser {
        /// Marketplace site id (e.g. MLA, MLB, MLM)
        #[arg(long, value_name = "SITE")]
        site: String,

        /// Free-form label stored with the user
        #[arg(long, default_value = "")]
        description: String,

        /// Token to create the user under [default: the configured token]
        #[arg(long)]
        access_token: Option<String>,
    },
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,mercadopago_lib=info".to_string(),
            2 => "info,mercadopago_lib=debug".to_string(),
            _ => "debug,mercadopago_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Reads the environment and applies command line overrides.
fn load_config(cli: &Cli) -> color_eyre::Result<ClientConfig> {
    let mut config = ClientConfig::from_env().wrap_err("cannot load client configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
}

async fn run(
    client: &ApiClient,
    config: &ClientConfig,
    command: Commands,
) -> color_eyre::Result<String> {
    let output = match command {
        Commands::CardToken {
            number,
            month,
            year,
            security_code,
            holder,
        } => {
            let mut request = CardTokenRequest::new(number, month, year, security_code);
            if let Some(name) = holder {
                request = request.with_cardholder_name(name);
            }
            let token = client
                .get_card_token(&request)
                .await
                .wrap_err("card token request failed")?;
            to_pretty_json(&token)?
        }
        Commands::AccessToken {
            client_id,
            client_secret,
        } => {
            let token = client
                .get_access_token(&client_id, &client_secret)
                .await
                .wrap_err("access token request failed")?;
            to_pretty_json(&token)?
        }
        Commands::PaymentMethods => {
            let methods = client
                .payment_methods()
                .await
                .wrap_err("payment methods request failed")?;
            to_pretty_json(&methods)?
        }
        Commands::TestUser {
            site,
            description,
            access_token,
        } => {
            let token = access_token.as_deref().unwrap_or(&config.access_token);
            let user = client
                .get_test_user(token, site, description)
                .await
                .wrap_err("test user request failed")?;
            to_pretty_json(&user)?
        }
    };

    Ok(output)
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    let config = load_config(&cli)?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");

    let client = config.build_client().wrap_err("cannot build client")?;
    let output = run(&client, &config, cli.command).await?;
    println!("{output}");

    Ok(())
}
