use anyhow::Result;
use clap::Args;
use emojisushi_api::{CitiesParams, CityParams, Client, RequestOptions, SlugOrId, SpotParams};

use super::PageArgs;
use crate::output::{build_city_rows, build_spot_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct CitiesArgs {
    /// Embed each city's spots
    #[arg(long)]
    pub include_spots: bool,

    /// Embed each city's delivery districts
    #[arg(long)]
    pub include_districts: bool,
}

#[derive(Args)]
pub struct CityArgs {
    /// City slug or numeric id
    pub slug_or_id: String,
}

#[derive(Args)]
pub struct SpotsArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct SpotArgs {
    /// Spot slug or numeric id
    pub slug_or_id: String,
}

pub async fn run_cities(args: &CitiesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut params = CitiesParams::default();
    if args.include_spots {
        params = params.with_spots(true);
    }
    if args.include_districts {
        params = params.with_districts(true);
    }
    let cities = client.get_cities(&params, &RequestOptions::new()).await?;
    eprintln!("{} cities", cities.data.len());

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &cities)?,
        _ => print_rows(build_city_rows(&cities.data), format),
    }
    Ok(())
}

pub async fn run_city(args: &CityArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let key: SlugOrId = args.slug_or_id.parse()?;
    let city = client.get_city(&CityParams::new(key), &RequestOptions::new()).await?;

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &city)?,
        _ => {
            print_rows(build_city_rows(std::slice::from_ref(&city)), format);
            if !city.spots.is_empty() {
                print_rows(build_spot_rows(&city.spots), format);
            }
        }
    }
    Ok(())
}

pub async fn run_spots(args: &SpotsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let spots = client
        .get_spots(&args.page.to_params(), &RequestOptions::new())
        .await?;

    if let Some(meta) = &spots.meta {
        eprintln!("Showing {} of {} spots", spots.data.len(), meta.total);
    }

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &spots)?,
        _ => print_rows(build_spot_rows(&spots.data), format),
    }
    Ok(())
}

pub async fn run_spot(args: &SpotArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let key: SlugOrId = args.slug_or_id.parse()?;
    let spot = client.get_spot(&SpotParams::new(key), &RequestOptions::new()).await?;

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &spot)?,
        _ => print_rows(build_spot_rows(std::slice::from_ref(&spot)), format),
    }
    Ok(())
}
