use anyhow::{bail, Result};
use clap::Args;
use emojisushi_api::{Client, IdLookup, PlaceOrder, RequestOptions};

use super::PageArgs;
use crate::output::{
    build_payment_rows, build_shipping_rows, print_json, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct MethodsArgs {
    /// Look up a single method by id
    #[arg(long)]
    pub id: Option<i64>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct OrderArgs {
    /// Customer phone number
    #[arg(long)]
    pub phone: String,

    /// Shipping method id
    #[arg(long)]
    pub shipping: i64,

    /// Payment method id
    #[arg(long)]
    pub payment: i64,

    /// Spot that prepares the order
    #[arg(long)]
    pub spot: i64,

    #[arg(long)]
    pub firstname: Option<String>,

    #[arg(long)]
    pub lastname: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Delivery address, for courier shipping
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    /// Number of chopstick sets
    #[arg(long)]
    pub sticks: Option<i64>,

    /// Banknote to bring change for
    #[arg(long)]
    pub change: Option<String>,
}

impl OrderArgs {
    fn to_params(&self) -> PlaceOrder {
        let mut order = PlaceOrder::new(&self.phone, self.shipping, self.payment, self.spot);
        if let Some(ref v) = self.firstname {
            order = order.with_firstname(v);
        }
        if let Some(ref v) = self.lastname {
            order = order.with_lastname(v);
        }
        if let Some(ref v) = self.email {
            order = order.with_email(v);
        }
        if let Some(ref v) = self.address {
            order = order.with_address(v);
        }
        if let Some(ref v) = self.comment {
            order = order.with_comment(v);
        }
        if let Some(v) = self.sticks {
            order = order.with_sticks(v);
        }
        if let Some(ref v) = self.change {
            order = order.with_change(v);
        }
        order
    }
}

pub async fn run_payments(
    args: &MethodsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let options = RequestOptions::new();
    if let Some(id) = args.id {
        let Some(method) = client.get_payment_method(&IdLookup::new(id), &options).await? else {
            bail!("No payment method with id {}", id);
        };
        return match format {
            OutputFormat::Json => print_json(client.hydrator(), &method),
            _ => {
                print_rows(build_payment_rows(std::slice::from_ref(&method)), format);
                Ok(())
            }
        };
    }

    let methods = client
        .get_payment_methods(&args.page.to_params(), &options)
        .await?;
    match format {
        OutputFormat::Json => print_json(client.hydrator(), &methods)?,
        _ => print_rows(build_payment_rows(&methods.data), format),
    }
    Ok(())
}

pub async fn run_shipping(
    args: &MethodsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let options = RequestOptions::new();
    if let Some(id) = args.id {
        let Some(method) = client.get_shipping_method(&IdLookup::new(id), &options).await? else {
            bail!("No shipping method with id {}", id);
        };
        return match format {
            OutputFormat::Json => print_json(client.hydrator(), &method),
            _ => {
                print_rows(build_shipping_rows(std::slice::from_ref(&method)), format);
                Ok(())
            }
        };
    }

    let methods = client
        .get_shipping_methods(&args.page.to_params(), &options)
        .await?;
    match format {
        OutputFormat::Json => print_json(client.hydrator(), &methods)?,
        _ => print_rows(build_shipping_rows(&methods.data), format),
    }
    Ok(())
}

pub async fn run_order(args: &OrderArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let response = client
        .place_order(&args.to_params(), &RequestOptions::new())
        .await?;

    if let OutputFormat::Json = format {
        return print_json(client.hydrator(), &response);
    }

    match (response.success, response.order_id) {
        (true, Some(id)) => println!("Order #{} placed", id),
        (true, None) => println!("Order placed"),
        (false, _) => bail!(
            "Order was rejected: {}",
            response.message.as_deref().unwrap_or("no reason given")
        ),
    }
    Ok(())
}
