//! Typed client for the Emojisushi restaurant-ordering API.
//!
//! Requests go through a [`pipeline::RequestPipeline`] that adds the locale
//! and static headers; responses are mapped onto [`types`] by a
//! descriptor-driven [`Hydrator`].

mod client;
mod config;
mod errors;
pub mod hydrate;
pub mod params;
pub mod pipeline;
pub mod types;

pub use self::client::{Client, MENU_CATEGORY_SLUG, UNBOUNDED_LIMIT};
pub use self::config::{ClientConfig, DEFAULT_LANG, ENV_BASE_URL, ENV_HTTP_ERRORS, ENV_LANG};
pub use self::errors::Error;
pub use self::hydrate::{HydrationError, Hydrator};
pub use self::params::{
    AddCartProduct, CartProductLookup, CitiesParams, CityParams, IdLookup, NoParams, PageParams,
    Params, PlaceOrder, ProductLookup, ProductsParams, RemoveCartProduct, SlugOrId, SpotParams,
    VariantLookup,
};
pub use self::pipeline::RequestOptions;
