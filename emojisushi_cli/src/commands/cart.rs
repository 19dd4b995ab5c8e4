use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use emojisushi_api::{
    AddCartProduct, CartProductLookup, Client, NoParams, RemoveCartProduct, RequestOptions,
};
use emojisushi_api::types::Cart;

use crate::output::{build_cart_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub action: CartAction,
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart of the current session
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: i64,
        /// Quantity to add
        #[arg(long, default_value_t = 1)]
        quantity: i64,
        /// Variant id, for products sold in variants
        #[arg(long)]
        variant: Option<i64>,
    },
    /// Remove a cart line
    Remove {
        /// Cart line id
        cart_product_id: i64,
    },
    /// Remove every line from the cart
    Clear,
    /// Find the cart line for a product
    Find {
        /// Product id
        product_id: i64,
        /// Only match this exact variant
        #[arg(long)]
        variant: Option<i64>,
    },
}

pub async fn run(args: &CartArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = RequestOptions::new();
    let cart = match args.action {
        CartAction::Show => client.get_cart(&NoParams::default(), &options).await?,
        CartAction::Add {
            product_id,
            quantity,
            variant,
        } => {
            if quantity < 1 {
                bail!("--quantity must be at least 1");
            }
            let mut params = AddCartProduct::new(product_id, quantity);
            if let Some(variant_id) = variant {
                params = params.with_variant(variant_id);
            }
            client.add_cart_product(&params, &options).await?
        }
        CartAction::Remove { cart_product_id } => {
            client
                .remove_from_cart(&RemoveCartProduct::new(cart_product_id), &options)
                .await?
        }
        CartAction::Clear => client.clear_cart(&NoParams::default(), &options).await?,
        CartAction::Find {
            product_id,
            variant,
        } => {
            let mut params = CartProductLookup::new(product_id);
            if let Some(variant_id) = variant {
                params = params.with_variant(variant_id);
            }
            let Some(line) = client.get_cart_product(&params, &options).await? else {
                bail!("Product {} is not in the cart", product_id);
            };
            match format {
                OutputFormat::Json => print_json(client.hydrator(), &line)?,
                _ => print_rows(build_cart_rows(std::slice::from_ref(&line)), format),
            }
            return Ok(());
        }
    };

    print_cart(client, &cart, format)
}

fn print_cart(client: &Client, cart: &Cart, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(client.hydrator(), cart)?,
        _ if cart.is_empty() => eprintln!("Cart is empty"),
        _ => print_rows(build_cart_rows(&cart.data), format),
    }
    Ok(())
}
