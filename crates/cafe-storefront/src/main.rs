//! cafe-storefront - Café Théâtre storefront CLI
//!
//! Lists the catalog, renders the page, or runs a scripted order session.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cafe_catalog::{Catalog, ProductId};
use cafe_order::OrderError;
use cafe_present::Theme;
use cafe_storefront::{Storefront, StorefrontConfig, StorefrontError};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cafe-storefront")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Theme override (classic or noir)
    #[arg(long, global = true)]
    theme: Option<Theme>,

    /// Log filter, e.g. `info` or `cafe_cart=debug`
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List products
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the page HTML
    Render {
        /// Product ids to add first (repeatable)
        #[arg(long = "add", value_name = "ID")]
        add: Vec<ProductId>,
    },

    /// Place an order
    Order(OrderArgs),
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// Product ids to add (repeatable)
    #[arg(long = "add", value_name = "ID")]
    add: Vec<ProductId>,

    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    #[arg(long, default_value = "")]
    email: String,

    /// Pickup store
    #[arg(long)]
    store: String,

    #[arg(long, default_value = "")]
    note: String,
}

fn load_config(cli: &Cli) -> Result<StorefrontConfig> {
    let mut config = match &cli.config {
        Some(path) => StorefrontConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StorefrontConfig::default(),
    };
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme);
    }
    Ok(config)
}

fn list_catalog(json: bool) -> Result<()> {
    let products = Catalog::builtin().all();
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }

    println!("{:<4} {:<28} {:<10} {:>8}", "ID", "NAME", "ROAST", "PRICE");
    for p in products {
        println!("{:<4} {:<28} {:<10} {:>8}", p.id, p.name, p.roast.label(), p.price);
    }
    Ok(())
}

async fn place_order(config: &StorefrontConfig, args: OrderArgs) -> Result<ExitCode> {
    let mut shop = Storefront::from_config(config);
    for id in args.add {
        shop.add_to_cart(id);
    }

    let form = shop.form_mut();
    form.name = args.name;
    form.phone = args.phone;
    form.email = args.email;
    form.store = args.store;
    form.note = args.note;

    match shop.submit_order().await {
        Ok(receipt) => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(StorefrontError::Order(OrderError::Validation(errors))) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Catalog { json } => list_catalog(json).map(|()| ExitCode::SUCCESS),
        Commands::Render { add } => {
            let mut shop = Storefront::from_config(&config);
            for id in add {
                shop.add_to_cart(id);
            }
            println!("{}", shop.render_page());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Order(args) => place_order(&config, args).await,
    }
}
