//! HTTP client for the Emojisushi storefront API.

use crate::{
    config::ClientConfig,
    hydrate::{Entity, Hydrator},
    params::{
        AddCartProduct, CartProductLookup, CitiesParams, CityParams, IdLookup, NoParams,
        PageParams, Params, PlaceOrder, ProductLookup, ProductsParams, RemoveCartProduct,
        SpotParams, VariantLookup,
    },
    pipeline::{RequestOptions, RequestPipeline},
    types::{
        Cart, CartProduct, CategoriesList, Category, CitiesList, City, PaymentMethod,
        PaymentMethodsList, PlaceOrderResponse, Product, ProductsList, ShipmentMethod,
        ShipmentMethodsList, Spot, SpotsList, Variant,
    },
    Error,
};

/// Limit sent by the by-id lookups so the backend returns the whole list.
pub const UNBOUNDED_LIMIT: i64 = 44_543_534;

/// Category slug covering every product on the menu.
pub const MENU_CATEGORY_SLUG: &str = "menu";

/// Typed client for the storefront API.
///
/// Every operation takes its parameters and per-call [`RequestOptions`],
/// issues one HTTP round trip and hydrates the JSON body into the response
/// type. The `get_*` lookups by id fetch a full list and return the first
/// match in list order; they never assume ids are unique server-side and
/// return `Ok(None)` when nothing matches.
///
/// The client is `Send + Sync` and can be shared between tasks.
#[derive(Debug)]
pub struct Client {
    pipeline: RequestPipeline,
    hydrator: Hydrator,
}

impl Client {
    /// Creates a client with a fresh `reqwest::Client` and no default timeout.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;
        Self::with_http_client(config, http)
    }

    /// Creates a client with the default locale. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Creates a client on top of a caller-configured `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            pipeline: RequestPipeline::new(&config, http)?,
            hydrator: Hydrator::new(),
        })
    }

    /// Sets or replaces a header sent with every subsequent request.
    pub fn set_header(&self, name: &str, value: &str) -> Result<(), Error> {
        self.pipeline.set_header(name, value)
    }

    pub fn hydrator(&self) -> &Hydrator {
        &self.hydrator
    }

    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    async fn get<T, P>(&self, path: &str, params: &P, options: &RequestOptions) -> Result<T, Error>
    where
        T: Entity,
        P: Params,
    {
        let raw = self.pipeline.get(path, &params.to_map(), options).await?;
        self.hydrate(path, &raw)
    }

    async fn post<T, P>(&self, path: &str, params: &P, options: &RequestOptions) -> Result<T, Error>
    where
        T: Entity,
        P: Params,
    {
        let raw = self.pipeline.post(path, &params.to_map(), options).await?;
        self.hydrate(path, &raw)
    }

    fn hydrate<T: Entity>(&self, path: &str, raw: &serde_json::Value) -> Result<T, Error> {
        self.hydrator.hydrate(raw).map_err(|e| {
            tracing::error!("Failed to hydrate {} from {}: {}", T::descriptor().name, path, e);
            Error::Hydration(e)
        })
    }

    /// Fetches a single city by slug or id.
    pub async fn get_city(
        &self,
        params: &CityParams,
        options: &RequestOptions,
    ) -> Result<City, Error> {
        self.get("city", params, options).await
    }

    /// Fetches all cities, optionally embedding their spots and districts.
    pub async fn get_cities(
        &self,
        params: &CitiesParams,
        options: &RequestOptions,
    ) -> Result<CitiesList, Error> {
        self.get("cities", params, options).await
    }

    /// Fetches a single spot by slug or id.
    pub async fn get_spot(
        &self,
        params: &SpotParams,
        options: &RequestOptions,
    ) -> Result<Spot, Error> {
        self.get("spot", params, options).await
    }

    pub async fn get_spots(
        &self,
        params: &PageParams,
        options: &RequestOptions,
    ) -> Result<SpotsList, Error> {
        self.get("spots", params, options).await
    }

    pub async fn get_categories(
        &self,
        params: &PageParams,
        options: &RequestOptions,
    ) -> Result<CategoriesList, Error> {
        self.get("categories", params, options).await
    }

    /// Finds a category by id in the full category list.
    pub async fn get_category(
        &self,
        params: &IdLookup,
        options: &RequestOptions,
    ) -> Result<Option<Category>, Error> {
        let categories = self
            .get_categories(&PageParams::default().with_limit(UNBOUNDED_LIMIT), options)
            .await?;
        Ok(categories.find(params.id).cloned())
    }

    /// Fetches a page of products.
    pub async fn get_products(
        &self,
        params: &ProductsParams,
        options: &RequestOptions,
    ) -> Result<ProductsList, Error> {
        self.get("products", params, options).await
    }

    fn whole_menu() -> ProductsParams {
        ProductsParams::default()
            .with_limit(UNBOUNDED_LIMIT)
            .with_category_slug(MENU_CATEGORY_SLUG)
    }

    /// Finds a product by id among all products of the `menu` category.
    pub async fn get_product(
        &self,
        params: &ProductLookup,
        options: &RequestOptions,
    ) -> Result<Option<Product>, Error> {
        let products = self.get_products(&Self::whole_menu(), options).await?;
        Ok(products.find(params.product_id).cloned())
    }

    /// Finds a variant by id, scanning the `menu` products in order.
    pub async fn get_variant(
        &self,
        params: &VariantLookup,
        options: &RequestOptions,
    ) -> Result<Option<Variant>, Error> {
        let products = self.get_products(&Self::whole_menu(), options).await?;
        Ok(products.find_variant(params.variant_id).cloned())
    }

    /// Fetches the cart of the current session.
    pub async fn get_cart(
        &self,
        params: &NoParams,
        options: &RequestOptions,
    ) -> Result<Cart, Error> {
        self.get("cart/products", params, options).await
    }

    pub async fn add_cart_product(
        &self,
        params: &AddCartProduct,
        options: &RequestOptions,
    ) -> Result<Cart, Error> {
        self.post("cart/add", params, options).await
    }

    pub async fn remove_from_cart(
        &self,
        params: &RemoveCartProduct,
        options: &RequestOptions,
    ) -> Result<Cart, Error> {
        self.post("cart/remove", params, options).await
    }

    /// Finds a cart line by product and, when given, exact variant.
    pub async fn get_cart_product(
        &self,
        params: &CartProductLookup,
        options: &RequestOptions,
    ) -> Result<Option<CartProduct>, Error> {
        let cart = self.get_cart(&NoParams::default(), options).await?;
        Ok(cart.find(params.product_id, params.variant_id).cloned())
    }

    pub async fn clear_cart(
        &self,
        params: &NoParams,
        options: &RequestOptions,
    ) -> Result<Cart, Error> {
        self.post("cart/clear", params, options).await
    }

    pub async fn get_payment_methods(
        &self,
        params: &PageParams,
        options: &RequestOptions,
    ) -> Result<PaymentMethodsList, Error> {
        self.get("payments", params, options).await
    }

    pub async fn get_payment_method(
        &self,
        params: &IdLookup,
        options: &RequestOptions,
    ) -> Result<Option<PaymentMethod>, Error> {
        let methods = self
            .get_payment_methods(&PageParams::default().with_limit(UNBOUNDED_LIMIT), options)
            .await?;
        Ok(methods.find(params.id).cloned())
    }

    pub async fn get_shipping_methods(
        &self,
        params: &PageParams,
        options: &RequestOptions,
    ) -> Result<ShipmentMethodsList, Error> {
        self.get("shipping", params, options).await
    }

    pub async fn get_shipping_method(
        &self,
        params: &IdLookup,
        options: &RequestOptions,
    ) -> Result<Option<ShipmentMethod>, Error> {
        let methods = self
            .get_shipping_methods(&PageParams::default().with_limit(UNBOUNDED_LIMIT), options)
            .await?;
        Ok(methods.find(params.id).cloned())
    }

    /// Places an order for the current cart.
    pub async fn place_order(
        &self,
        params: &PlaceOrder,
        options: &RequestOptions,
    ) -> Result<PlaceOrderResponse, Error> {
        self.post("order/place", params, options).await
    }
}
