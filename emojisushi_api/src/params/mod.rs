mod common;
pub use self::common::{IdLookup, NoParams, PageParams, Params, SlugOrId};

mod location;
pub use self::location::{CitiesParams, CityParams, SpotParams};

mod catalog;
pub use self::catalog::{ProductLookup, ProductsParams, VariantLookup};

mod cart;
pub use self::cart::{AddCartProduct, CartProductLookup, RemoveCartProduct};

mod order;
pub use self::order::PlaceOrder;
