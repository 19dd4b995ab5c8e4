mod commands;
mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use emojisushi_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "emojisushi")]
#[command(about = "Browse the Emojisushi menu, manage a cart and place orders")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (defaults to EMOJISUSHI_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Response locale (defaults to EMOJISUSHI_LANG, then "uk")
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Header sent with every request, as NAME:VALUE. Repeatable.
    #[arg(long = "header", global = true)]
    headers: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cities
    Cities(commands::locations::CitiesArgs),
    /// Show one city
    City(commands::locations::CityArgs),
    /// List spots
    Spots(commands::locations::SpotsArgs),
    /// Show one spot
    Spot(commands::locations::SpotArgs),
    /// List menu categories
    Categories(commands::catalog::CategoriesArgs),
    /// Find a category by id
    Category(commands::catalog::CategoryArgs),
    /// List products
    Products(commands::catalog::ProductsArgs),
    /// Find a product by id
    Product(commands::catalog::ProductArgs),
    /// Find a product variant by id
    Variant(commands::catalog::VariantArgs),
    /// List or look up payment methods
    Payments(commands::checkout::MethodsArgs),
    /// List or look up shipping methods
    Shipping(commands::checkout::MethodsArgs),
    /// Inspect or change the session cart
    Cart(commands::cart::CartArgs),
    /// Place an order for the current cart
    Order(commands::checkout::OrderArgs),
}

fn parse_format(s: &str) -> OutputFormat {
    match s {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    }
}

fn parse_header(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once(':') else {
        bail!("invalid header '{}', expected NAME:VALUE", raw);
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("invalid header '{}', name is empty", raw);
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn build_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match cli.base_url {
        Some(ref url) => {
            let env_lang = std::env::var(emojisushi_api::ENV_LANG).ok();
            let config = ClientConfig::new(url);
            match env_lang {
                Some(lang) if !lang.is_empty() => config.with_lang(&lang),
                _ => config,
            }
        }
        None => ClientConfig::from_env()
            .context("no API base URL: pass --base-url or set EMOJISUSHI_BASE_URL")?,
    };
    if let Some(ref lang) = cli.lang {
        config = config.with_lang(lang);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emojisushi=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = parse_format(&cli.output);

    let client = Client::new(build_config(&cli)?)?;
    for raw in &cli.headers {
        let (name, value) = parse_header(raw)?;
        client.set_header(&name, &value)?;
    }

    match &cli.command {
        Commands::Cities(args) => commands::locations::run_cities(args, &client, &format).await?,
        Commands::City(args) => commands::locations::run_city(args, &client, &format).await?,
        Commands::Spots(args) => commands::locations::run_spots(args, &client, &format).await?,
        Commands::Spot(args) => commands::locations::run_spot(args, &client, &format).await?,
        Commands::Categories(args) => {
            commands::catalog::run_categories(args, &client, &format).await?
        }
        Commands::Category(args) => commands::catalog::run_category(args, &client, &format).await?,
        Commands::Products(args) => commands::catalog::run_products(args, &client, &format).await?,
        Commands::Product(args) => commands::catalog::run_product(args, &client, &format).await?,
        Commands::Variant(args) => commands::catalog::run_variant(args, &client, &format).await?,
        Commands::Payments(args) => commands::checkout::run_payments(args, &client, &format).await?,
        Commands::Shipping(args) => commands::checkout::run_shipping(args, &client, &format).await?,
        Commands::Cart(args) => commands::cart::run(args, &client, &format).await?,
        Commands::Order(args) => commands::checkout::run_order(args, &client, &format).await?,
    }

    Ok(())
}
