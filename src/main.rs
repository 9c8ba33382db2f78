use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use ppl_myapi::{CityRoutingQuery, ParcelShopQuery, PplClient, PplConfig, PplError};

#[derive(Parser)]
#[command(name = "ppl-myapi", version, about = "Consultas operativas contra PPL MyAPI")]
struct Cli {
    /// Logs de depuración (peticiones, cache de token)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estado del servicio (`IsHealtly`)
    Health,
    /// Versión del servicio
    Version,
    /// Buscar parcel shops
    ParcelShops {
        #[arg(long, default_value = "CZ")]
        country: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        zip_code: Option<String>,
        #[arg(long)]
        access_point_type: Option<String>,
    },
    /// Ruteo por ciudad / código postal
    CitiesRouting {
        #[arg(long, default_value = "CZ")]
        country: String,
        #[arg(long)]
        zip_code: Option<String>,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        date_from: Option<NaiveDate>,
    },
    /// Reservar números de paquete
    NumberRange {
        #[arg(long)]
        product: u16,
        #[arg(long)]
        quantity: u32,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = PplConfig::from_env().context("invalid PPL configuration")?;

    let client = match PplClient::from_config(&config).await {
        Ok(client) => client,
        Err(PplError::Offline(reason)) if matches!(cli.command, Command::Health) => {
            error!("❌ {}", reason);
            print_json(&json!({ "healthy": false }))?;
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("cannot connect to PPL MyAPI"),
    };

    match cli.command {
        Command::Health => print_json(&json!({ "healthy": client.is_healthy().await })),
        Command::Version => print_json(&json!({ "version": client.version().await? })),
        Command::ParcelShops {
            country,
            city,
            zip_code,
            access_point_type,
        } => {
            let mut query = ParcelShopQuery::new(&country)?;
            if let Some(city) = city {
                query = query.with_city(city)?;
            }
            if let Some(zip_code) = zip_code {
                query = query.with_zip_code(zip_code)?;
            }
            if let Some(access_point_type) = access_point_type {
                query = query.with_access_point_type(&access_point_type)?;
            }
            print_json(&client.get_parcel_shops(&query).await?)
        }
        Command::CitiesRouting {
            country,
            zip_code,
            street,
            date_from,
        } => {
            let mut query = CityRoutingQuery::new(&country)?;
            if let Some(zip_code) = zip_code {
                query = query.with_zip_code(zip_code)?;
            }
            if let Some(street) = street {
                query = query.with_street(street)?;
            }
            if let Some(date_from) = date_from {
                query = query.with_date_from(date_from);
            }
            print_json(&client.get_cities_routing(&query).await?)
        }
        Command::NumberRange { product, quantity } => {
            print_json(&client.get_number_range_by_code(product, quantity).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let cli = Cli::parse();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    info!("🚚 PPL MyAPI CLI");

    if let Err(e) = run(cli).await {
        error!("❌ {:#}", e);
        return Err(e);
    }
    Ok(())
}
