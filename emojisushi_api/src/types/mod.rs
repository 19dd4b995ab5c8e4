//! Typed response entities and their field-descriptor tables.

use crate::hydrate::Descriptor;

/// Implements [`crate::hydrate::Entity`] for a type backed by a static descriptor.
macro_rules! entity {
    ($ty:ty => $descriptor:ident) => {
        impl $crate::hydrate::Entity for $ty {
            fn descriptor() -> &'static $crate::hydrate::Descriptor {
                &$descriptor
            }
        }
    };
}

mod meta;
pub use self::meta::PaginationMeta;

mod city;
pub use self::city::{CitiesList, City, District};

mod spot;
pub use self::spot::{Spot, SpotsList};

mod category;
pub use self::category::{CategoriesList, Category};

mod product;
pub use self::product::{Attribute, Product, ProductsList, Variant};

mod cart;
pub use self::cart::{Cart, CartProduct};

mod payment;
pub use self::payment::{PaymentMethod, PaymentMethodsList};

mod shipping;
pub use self::shipping::{ShipmentMethod, ShipmentMethodsList};

mod order;
pub use self::order::PlaceOrderResponse;

/// Every entity descriptor known to the default [`crate::Hydrator`].
pub(crate) static DESCRIPTORS: &[&Descriptor] = &[
    &meta::PAGINATION_META,
    &city::DISTRICT,
    &city::CITY,
    &city::CITIES_LIST,
    &spot::SPOT,
    &spot::SPOTS_LIST,
    &category::CATEGORY,
    &category::CATEGORIES_LIST,
    &product::ATTRIBUTE,
    &product::VARIANT,
    &product::PRODUCT,
    &product::PRODUCTS_LIST,
    &cart::CART_PRODUCT,
    &cart::CART,
    &payment::PAYMENT_METHOD,
    &payment::PAYMENT_METHODS_LIST,
    &shipping::SHIPMENT_METHOD,
    &shipping::SHIPMENT_METHODS_LIST,
    &order::PLACE_ORDER_RESPONSE,
];
