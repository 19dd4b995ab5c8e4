use std::time::Duration;

use emojisushi_api::{
    AddCartProduct, CartProductLookup, CitiesParams, CityParams, Client, ClientConfig, Error,
    IdLookup, NoParams, PageParams, PlaceOrder, ProductLookup, ProductsParams, RemoveCartProduct,
    RequestOptions, SpotParams, VariantLookup,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn ok(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(load_fixture(name))
}

fn no_options() -> RequestOptions {
    RequestOptions::default()
}

#[tokio::test]
async fn get_cities_sends_flags_and_locale() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cities"))
        .and(query_param("includeSpots", "1"))
        .and(query_param("lang", "uk"))
        .respond_with(ok("cities.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let cities = client
        .get_cities(&CitiesParams::default().with_spots(true), &no_options())
        .await
        .unwrap();
    assert_eq!(cities.data.len(), 2);
    assert_eq!(cities.data[0].spots.len(), 2);
}

#[tokio::test]
async fn get_city_by_slug() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/city"))
        .and(query_param("slug_or_id", "odesa"))
        .respond_with(ok("city.json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let city = client
        .get_city(&CityParams::new("odesa"), &no_options())
        .await
        .unwrap();
    assert_eq!(city.id, 1);
    assert_eq!(city.name, "Одеса");
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spots"))
        .respond_with(ok("spots.json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&format!("{}/api", mock_server.uri())).unwrap();
    let spots = client
        .get_spots(&PageParams::default(), &no_options())
        .await
        .unwrap();
    assert_eq!(spots.data.len(), 2);
}

#[tokio::test]
async fn get_spot_by_numeric_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spot"))
        .and(query_param("slug_or_id", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "name": "Говорова",
            "slug": "govorova",
            "city_id": "1",
            "city": {"id": 1, "name": "Одеса", "slug": "odesa"}
        })))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let spot = client
        .get_spot(&SpotParams::new(11i64), &no_options())
        .await
        .unwrap();
    assert_eq!(spot.slug, "govorova");
    assert_eq!(spot.city_id, 1);
    assert!(spot.address.is_none());
    assert_eq!(spot.city.unwrap().slug, "odesa");
}

#[tokio::test]
async fn get_shipping_methods_passes_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shipping"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ok("shipping.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let methods = client
        .get_shipping_methods(
            &PageParams::default().with_offset(0).with_limit(10),
            &no_options(),
        )
        .await
        .unwrap();
    assert_eq!(methods.data.len(), 2);
    assert_eq!(methods.data[1].code, "courier");
    assert!(methods.meta.is_none());
}

#[tokio::test]
async fn configured_locale_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .and(query_param("lang", "ru"))
        .respond_with(ok("payments.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&mock_server.uri()).with_lang("ru");
    let client = Client::new(config).unwrap();
    let methods = client
        .get_payment_methods(&PageParams::default(), &no_options())
        .await
        .unwrap();
    assert_eq!(methods.data.len(), 2);
}

#[tokio::test]
async fn static_header_is_sent_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart/products"))
        .and(header("X-Session-Id", "d3adb33f"))
        .respond_with(ok("cart.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    client.set_header("X-Session-Id", "d3adb33f").unwrap();
    let cart = client.get_cart(&NoParams::default(), &no_options()).await.unwrap();
    assert_eq!(cart.data.len(), 3);
}

#[tokio::test]
async fn get_category_scans_one_unbounded_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(query_param("limit", "44543534"))
        .respond_with(ok("categories.json"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let category = client
        .get_category(&IdLookup::new(3), &no_options())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(category.slug, "roli");

    let missing = client
        .get_category(&IdLookup::new(99), &no_options())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn lookup_limit_overrides_caller_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shipping"))
        .and(query_param("limit", "44543534"))
        .and(query_param("search", "courier"))
        .respond_with(ok("shipping.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let options = RequestOptions::new()
        .with_query("limit", 1)
        .with_query("search", "courier");
    let courier = client
        .get_shipping_method(&IdLookup::new(2), &options)
        .await
        .unwrap();
    assert_eq!(courier.map(|m| m.code), Some("courier".to_string()));
}

#[tokio::test]
async fn get_payment_method_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ok("payments.json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let cash = client
        .get_payment_method(&IdLookup::new(1), &no_options())
        .await
        .unwrap();
    assert_eq!(cash.map(|m| m.code), Some("cash".to_string()));
    let none = client
        .get_payment_method(&IdLookup::new(3), &no_options())
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn get_product_and_variant_from_menu() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("category_slug", "menu"))
        .and(query_param("limit", "44543534"))
        .respond_with(ok("products.json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();

    let product = client
        .get_product(&ProductLookup::new(102), &no_options())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(product.slug, "california");

    let variant = client
        .get_variant(&VariantLookup::new(502), &no_options())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(variant.product_id, 101);
    assert_eq!(variant.price, 609.0);

    let missing = client
        .get_variant(&VariantLookup::new(999), &no_options())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn get_products_passes_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ok("products.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let products = client
        .get_products(
            &ProductsParams::default().with_offset(10).with_limit(5),
            &no_options(),
        )
        .await
        .unwrap();
    assert_eq!(products.meta.map(|m| m.total), Some(3));
}

#[tokio::test]
async fn cart_mutations_post_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cart/add"))
        .and(query_param("lang", "uk"))
        .and(body_json(json!({"product_id": 101, "quantity": 2, "variant_id": 501})))
        .respond_with(ok("cart.json"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cart/remove"))
        .and(body_json(json!({"cart_product_id": 9002})))
        .respond_with(ok("cart.json"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cart/clear"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let cart = client
        .add_cart_product(&AddCartProduct::new(101, 2).with_variant(501), &no_options())
        .await
        .unwrap();
    assert_eq!(cart.data[0].quantity, 2);

    client
        .remove_from_cart(&RemoveCartProduct::new(9002), &no_options())
        .await
        .unwrap();

    let cleared = client.clear_cart(&NoParams::default(), &no_options()).await.unwrap();
    assert!(cleared.is_empty());
}

#[tokio::test]
async fn get_cart_product_matches_variant_exactly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart/products"))
        .respond_with(ok("cart.json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();

    let first = client
        .get_cart_product(&CartProductLookup::new(101), &no_options())
        .await
        .unwrap();
    assert_eq!(first.map(|l| l.id), Some(9001));

    let exact = client
        .get_cart_product(&CartProductLookup::new(101).with_variant(502), &no_options())
        .await
        .unwrap();
    assert_eq!(exact.map(|l| l.id), Some(9002));

    let no_variant_line = client
        .get_cart_product(&CartProductLookup::new(103).with_variant(1), &no_options())
        .await
        .unwrap();
    assert!(no_variant_line.is_none());
}

#[tokio::test]
async fn place_order_posts_order_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/order/place"))
        .and(body_json(json!({
            "phone": "+380930000000",
            "shipping_method_id": 1,
            "payment_method_id": 1,
            "spot_id": 11,
            "comment": "Без васабі"
        })))
        .respond_with(ok("place_order.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let order = PlaceOrder::new("+380930000000", 1, 1, 11).with_comment("Без васабі");
    let resp = client.place_order(&order, &no_options()).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.order_id, Some(73021));
}

#[tokio::test]
async fn per_call_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spots"))
        .and(header("x-request-id", "42"))
        .respond_with(ok("spots.json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let options = RequestOptions::new()
        .with_header("x-request-id", "42")
        .with_timeout(Duration::from_secs(5));
    client.get_spots(&PageParams::default(), &options).await.unwrap();
}

#[tokio::test]
async fn server_error_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_categories(&PageParams::default(), &no_options())
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn http_errors_disabled_hydrates_error_bodies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/order/place"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string(r#"{"success": false, "message": "Phone is required"}"#),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&mock_server.uri()).with_http_errors(false);
    let client = Client::new(config).unwrap();
    let resp = client
        .place_order(&PlaceOrder::new("", 1, 1, 11), &no_options())
        .await
        .unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Phone is required"));
    assert!(resp.order_id.is_none());
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cities"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_cities(&CitiesParams::default(), &no_options())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn wrong_shape_is_a_hydration_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": "sold out"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_products(&ProductsParams::default(), &no_options())
        .await
        .unwrap_err();
    assert!(err.is_hydration());
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = Client::with_base_url(&uri).unwrap();
    let err = client
        .get_spots(&PageParams::default(), &no_options())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn invalid_per_call_header_is_not_a_transport_error() {
    let client = Client::with_base_url("http://127.0.0.1:9/api").unwrap();
    let err = client
        .get_spots(
            &PageParams::default(),
            &RequestOptions::new().with_header("bad header", "x"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidHeader(_)));
    assert!(!err.is_transport());
}
