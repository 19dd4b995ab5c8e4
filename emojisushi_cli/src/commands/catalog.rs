use anyhow::{bail, Result};
use clap::Args;
use emojisushi_api::{
    Client, IdLookup, ProductLookup, ProductsParams, RequestOptions, VariantLookup,
};

use super::PageArgs;
use crate::output::{
    build_category_rows, build_product_rows, build_variant_rows, print_json, print_rows,
    OutputFormat,
};

#[derive(Args)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct CategoryArgs {
    /// Category id
    pub id: i64,
}

#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Category slug (use "menu" for the whole menu)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ProductArgs {
    /// Product id
    pub id: i64,
}

#[derive(Args)]
pub struct VariantArgs {
    /// Variant id
    pub id: i64,
}

impl ProductsArgs {
    fn to_params(&self) -> ProductsParams {
        let mut params = ProductsParams::default();
        if let Some(offset) = self.page.offset {
            params = params.with_offset(offset);
        }
        if let Some(limit) = self.page.limit {
            params = params.with_limit(limit);
        }
        if let Some(ref slug) = self.category {
            params = params.with_category_slug(slug);
        }
        params
    }
}

pub async fn run_categories(
    args: &CategoriesArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let categories = client
        .get_categories(&args.page.to_params(), &RequestOptions::new())
        .await?;

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &categories)?,
        _ => print_rows(build_category_rows(&categories.data), format),
    }
    Ok(())
}

pub async fn run_category(
    args: &CategoryArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let Some(category) = client
        .get_category(&IdLookup::new(args.id), &RequestOptions::new())
        .await?
    else {
        bail!("No category with id {}", args.id);
    };

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &category)?,
        _ => print_rows(build_category_rows(std::slice::from_ref(&category)), format),
    }
    Ok(())
}

pub async fn run_products(
    args: &ProductsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let products = client
        .get_products(&args.to_params(), &RequestOptions::new())
        .await?;

    if let Some(meta) = &products.meta {
        eprintln!("Showing {} of {} products", products.data.len(), meta.total);
    }

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &products)?,
        _ => print_rows(build_product_rows(&products.data), format),
    }
    Ok(())
}

pub async fn run_product(args: &ProductArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let Some(product) = client
        .get_product(&ProductLookup::new(args.id), &RequestOptions::new())
        .await?
    else {
        bail!("No product with id {} on the menu", args.id);
    };

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &product)?,
        _ => {
            print_rows(build_product_rows(std::slice::from_ref(&product)), format);
            if let Some(ref description) = product.description {
                println!("{}", description);
            }
            if !product.variants.is_empty() {
                print_rows(build_variant_rows(&product.variants), format);
            }
        }
    }
    Ok(())
}

pub async fn run_variant(args: &VariantArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let Some(variant) = client
        .get_variant(&VariantLookup::new(args.id), &RequestOptions::new())
        .await?
    else {
        bail!("No variant with id {} on the menu", args.id);
    };

    match format {
        OutputFormat::Json => print_json(client.hydrator(), &variant)?,
        _ => print_rows(build_variant_rows(std::slice::from_ref(&variant)), format),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojisushi_api::Params;

    #[test]
    fn test_products_args_to_params() {
        let args = ProductsArgs {
            page: PageArgs {
                offset: None,
                limit: Some(12),
            },
            category: Some("roli".to_string()),
        };
        let map = args.to_params().to_map();
        assert_eq!(map["limit"], 12);
        assert_eq!(map["category_slug"], "roli");
        assert!(map.get("offset").is_none());
    }
}
