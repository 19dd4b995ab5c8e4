use anyhow::Result;
use emojisushi_api::hydrate::Entity;
use emojisushi_api::types::{
    CartProduct, Category, City, PaymentMethod, Product, ShipmentMethod, Spot, Variant,
};
use emojisushi_api::Hydrator;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Tabled)]
pub struct CityRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Main")]
    main: String,
    #[tabled(rename = "Spots")]
    spots: usize,
    #[tabled(rename = "Districts")]
    districts: usize,
}

#[derive(Tabled)]
pub struct SpotRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Phones")]
    phones: String,
}

#[derive(Tabled)]
pub struct CategoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
}

#[derive(Tabled)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Variants")]
    variants: String,
}

#[derive(Tabled)]
pub struct VariantRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Product")]
    product_id: i64,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Attributes")]
    attributes: String,
}

#[derive(Tabled)]
pub struct CartRow {
    #[tabled(rename = "Line")]
    id: i64,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Variant")]
    variant: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
}

/// Shared row shape for payment and shipping methods.
#[derive(Tabled)]
pub struct MethodRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Code")]
    code: String,
}

pub fn build_city_rows(cities: &[City]) -> Vec<CityRow> {
    cities
        .iter()
        .map(|c| CityRow {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
            main: if c.is_main { "yes" } else { "" }.to_string(),
            spots: c.spots.len(),
            districts: c.districts.len(),
        })
        .collect()
}

pub fn build_spot_rows(spots: &[Spot]) -> Vec<SpotRow> {
    spots
        .iter()
        .map(|s| SpotRow {
            id: s.id,
            name: s.name.clone(),
            slug: s.slug.clone(),
            address: s.address.clone().unwrap_or_default(),
            phones: s.phones.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn build_category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
        })
        .collect()
}

pub fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            name: p.name.clone(),
            category: p
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| p.category_id.to_string()),
            price: format_price(p.price),
            variants: p
                .variants
                .iter()
                .map(|v| v.id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

pub fn build_variant_rows(variants: &[Variant]) -> Vec<VariantRow> {
    variants
        .iter()
        .map(|v| VariantRow {
            id: v.id,
            product_id: v.product_id,
            price: format_price(v.price),
            attributes: v
                .attributes
                .iter()
                .map(|a| format!("{}: {}", a.name, a.value))
                .collect::<Vec<_>>()
                .join("; "),
        })
        .collect()
}

pub fn build_cart_rows(lines: &[CartProduct]) -> Vec<CartRow> {
    lines
        .iter()
        .map(|l| CartRow {
            id: l.id,
            product: l
                .product
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| l.product_id.to_string()),
            variant: l.variant_id.map(|v| v.to_string()).unwrap_or_default(),
            quantity: l.quantity,
        })
        .collect()
}

pub fn build_payment_rows(methods: &[PaymentMethod]) -> Vec<MethodRow> {
    methods
        .iter()
        .map(|m| MethodRow {
            id: m.id,
            name: m.name.clone(),
            code: m.code.clone(),
        })
        .collect()
}

pub fn build_shipping_rows(methods: &[ShipmentMethod]) -> Vec<MethodRow> {
    methods
        .iter()
        .map(|m| MethodRow {
            id: m.id,
            name: m.name.clone(),
            code: m.code.clone(),
        })
        .collect()
}

/// Prints rows as a plain or markdown table.
pub fn print_rows<R: Tabled>(rows: Vec<R>, format: &OutputFormat) {
    let mut table = Table::new(rows);
    match format {
        OutputFormat::Markdown => table.with(Style::markdown()),
        _ => table.with(Style::rounded()),
    };
    println!("{}", table);
}

/// Prints the declared fields of an entity as pretty JSON.
pub fn print_json<T: Entity>(hydrator: &Hydrator, entity: &T) -> Result<()> {
    let value = hydrator.extract(entity)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0} ₴", price)
    } else {
        format!("{:.2} ₴", price)
    }
}
