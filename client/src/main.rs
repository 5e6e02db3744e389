use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use client::api::ApiClient;
use client::router::{Access, Navigator, app_routes, names};
use client::session::SessionStore;
use client::stores::{AuthStore, OrdersStore};
use client::util::start_app_token;
use shared::config::load_config;
use shared::types::order::OrderFilter;

#[derive(Parser)]
#[command(
    name = "client",
    about = "Headless client for the shipment-tracking backend"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "client.toml")]
    config: String,

    /// Launch URL carrying a deep-link start token
    #[arg(long)]
    start_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with an email / Telegram id and password
    Login {
        email_or_telegram_id: String,
        password: String,
    },
    /// List orders (admin listing by default, --mine for your own)
    Orders {
        #[arg(long)]
        mine: bool,
        /// Track-code filter (free-text filter with --mine)
        #[arg(long)]
        track_code: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        city_id: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Show the current session
    Status,
    /// Drop the persisted session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let config = load_config(&cli.config).context("Failed to load configuration")?;

    let session = SessionStore::new(&config.auth.cookie_name, config.auth.state_file.as_str());
    let navigator = Navigator::new(names::HOME);
    let api = ApiClient::new(&config.api, session.clone(), navigator.clone())?;
    let auth = AuthStore::new(api.clone());

    // Deep link: adopt a start token before running the command, exactly
    // as the Mini App does on launch.
    if let Some(url) = &cli.start_url {
        if let Some(token) = start_app_token(url, None) {
            auth.adopt_token(&token);
        }
    }

    match cli.command {
        Command::Login {
            email_or_telegram_id,
            password,
        } => {
            auth.login(&email_or_telegram_id, &password).await?;
            println!("Logged in as {}", email_or_telegram_id);
        }

        Command::Orders {
            mine,
            track_code,
            status,
            city_id,
            page,
        } => {
            let routes = app_routes();
            let target = if mine { names::HOME } else { names::ALL_ORDERS };
            let route = routes
                .find(target)
                .context("Route table is missing the orders view")?;
            if let Access::Redirect(dest) = navigator.navigate(route, session.current().as_ref()) {
                println!("Not allowed to view orders; redirected to '{}'", dest);
                return Ok(());
            }

            let mut orders = OrdersStore::new(api.clone());
            let filter = OrderFilter {
                track_code: if mine { None } else { track_code.clone() },
                text: if mine { track_code } else { None },
                status,
                city_id,
                page,
                ..Default::default()
            };
            let result = if mine {
                orders.fetch_my_orders(&filter).await?
            } else {
                orders.fetch_orders(&filter).await?
            };

            println!(
                "page {}/{} — {} orders total",
                result.page + 1,
                result.total_pages,
                result.total_elements
            );
            for order in &result.items {
                println!(
                    "{:<20} {:<12} {}  {}",
                    order.track_code,
                    order.status.as_str(),
                    order.title,
                    order.updated_at_label
                );
            }
        }

        Command::Status => {
            match session.current() {
                Some(credential) => {
                    let who = credential
                        .subject_id
                        .or(credential.channel_id)
                        .unwrap_or_else(|| "unknown".to_string());
                    let role = session
                        .role()
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    println!("Authenticated as {} (role: {})", who, role);
                }
                None => println!("Anonymous"),
            }
            println!("Mini app: {}", config.telegram.resolved_mini_app_link());
        }

        Command::Logout => {
            auth.logout();
            println!("Logged out");
        }
    }

    Ok(())
}
