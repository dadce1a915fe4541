//! Drives the live adapters against `wiremock` servers standing in for the
//! three retailers. Each retailer gets its own server, so these tests also
//! check request shapes, session affinity and error mapping end to end.

use common::result::{base::Store, enums::RetailerName};
use retailers::{config::RetailerConfig, errors::RetailerError, registry::RetailerRegistry};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

const STORE_COOKIE: &str = "cw-lrkswrdjp=pickup-1225718";

struct Retailers {
    countdown: MockServer,
    pak_n_save: MockServer,
    new_world: MockServer,
}

impl Retailers {
    async fn start() -> Self {
        Self {
            countdown: MockServer::start().await,
            pak_n_save: MockServer::start().await,
            new_world: MockServer::start().await,
        }
    }

    fn registry(&self) -> RetailerRegistry {
        RetailerRegistry::from_config(&RetailerConfig {
            countdown_url: self.countdown.uri(),
            pak_n_save_url: self.pak_n_save.uri(),
            new_world_url: self.new_world.uri(),
        })
    }
}

fn countdown_stores(count: u64) -> Value {
    let addresses: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "id": 1225718 + index,
                "name": format!("Countdown {index}"),
                "address": format!("{index} Queen Street, Auckland")
            })
        })
        .collect();

    json!({"storeAreas": [{"storeAddresses": addresses}]})
}

fn foodstuffs_stores(prefix: &str, count: u64) -> Value {
    let stores: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "id": format!("{prefix}-{index}"),
                "name": format!("{prefix} {index}"),
                "address": format!("{index} Great South Road")
            })
        })
        .collect();

    json!({"stores": stores})
}

fn countdown_store() -> Store {
    Store::new("1225718", "Countdown Ponsonby", "7 Williamson Ave", RetailerName::Countdown)
}

fn pak_n_save_store() -> Store {
    Store::new("e1925ea7", "PAK'nSAVE Albany", "Don McKinnon Drive", RetailerName::PakNSave)
}

async fn mount_store_lists(retailers: &Retailers, countdown: u64, pak_n_save: u64, new_world: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v1/addresses/pickup-addresses"))
        .and(header("x-requested-with", "OnlineShopping.WebApp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countdown_stores(countdown)))
        .expect(1)
        .mount(&retailers.countdown)
        .await;

    Mock::given(method("POST"))
        .and(path("/CommonApi/Store/GetStoreList"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(foodstuffs_stores("pns", pak_n_save)),
        )
        .expect(1)
        .mount(&retailers.pak_n_save)
        .await;

    Mock::given(method("POST"))
        .and(path("/CommonApi/Store/GetStoreList"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(foodstuffs_stores("nw", new_world)),
        )
        .expect(1)
        .mount(&retailers.new_world)
        .await;
}

#[tokio::test]
async fn list_all_stores_aggregates_every_retailer() {
    let retailers = Retailers::start().await;
    mount_store_lists(&retailers, 5, 3, 0).await;

    let stores = retailers.registry().list_all_stores().await.unwrap();

    assert_eq!(stores.len(), 8);
    assert!(stores[..5].iter().all(|store| store.retailer == RetailerName::Countdown));
    assert!(stores[5..].iter().all(|store| store.retailer == RetailerName::PakNSave));
    assert_eq!(stores[0].id, "1225718");
    assert_eq!(stores[5].id, "pns-0");
}

#[tokio::test]
async fn list_all_stores_fails_when_one_retailer_fails() {
    let retailers = Retailers::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/addresses/pickup-addresses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(countdown_stores(2)))
        .mount(&retailers.countdown)
        .await;

    Mock::given(method("POST"))
        .and(path("/CommonApi/Store/GetStoreList"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&retailers.pak_n_save)
        .await;

    Mock::given(method("POST"))
        .and(path("/CommonApi/Store/GetStoreList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(foodstuffs_stores("nw", 1)))
        .mount(&retailers.new_world)
        .await;

    let result = retailers.registry().list_all_stores().await;

    assert!(
        matches!(result, Err(RetailerError::UpstreamStatus { status: 500, .. })),
        "expected upstream 500, got {result:?}"
    );
}

#[tokio::test]
async fn malformed_store_list_is_an_upstream_error() {
    let retailers = Retailers::start().await;

    Mock::given(method("POST"))
        .and(path("/CommonApi/Store/GetStoreList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"banners": []})))
        .mount(&retailers.new_world)
        .await;

    let registry = retailers.registry();
    let result = registry.for_retailer(RetailerName::NewWorld).list_stores().await;

    assert!(matches!(result, Err(RetailerError::InvalidApiResponse(_))));
}

#[tokio::test]
async fn countdown_store_affinity_lives_in_its_session() {
    let retailers = Retailers::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/fulfilment/my/pickup-addresses"))
        .and(body_json(json!({"addressId": 1225718})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{STORE_COOKIE}; Path=/").as_str()),
        )
        .expect(2)
        .mount(&retailers.countdown)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .and(query_param("target", "search"))
        .and(query_param("search", "milk & honey"))
        .and(query_param("page", "1"))
        .and(query_param("size", "60"))
        .and(header("cookie", STORE_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": {
                "items": [{"name": "Anchor Milk 2L", "price": {"salePrice": 5.99}}],
                "totalItems": 1
            }
        })))
        .expect(1)
        .mount(&retailers.countdown)
        .await;

    // the other retailers sit on the same host: a shared jar would leak the cookie here
    Mock::given(method("GET"))
        .and(path("/next/api/products/search"))
        .and(|request: &wiremock::Request| !request.headers.contains_key("cookie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"products": [], "total": 0}
        })))
        .expect(1)
        .mount(&retailers.pak_n_save)
        .await;

    let registry = retailers.registry();
    let countdown = registry.for_retailer(RetailerName::Countdown);

    countdown.select_store(&countdown_store()).await.unwrap();
    countdown.select_store(&countdown_store()).await.unwrap();

    let result = countdown
        .search_products("milk & honey", &countdown_store(), 1)
        .await
        .unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].price_minor_units, 599);

    let other = registry
        .for_retailer(RetailerName::PakNSave)
        .search_products("milk", &pak_n_save_store(), 1)
        .await
        .unwrap();

    assert!(other.is_empty());
}

#[tokio::test]
async fn foodstuffs_search_is_scoped_to_the_store() {
    let retailers = Retailers::start().await;

    Mock::given(method("POST"))
        .and(path("/CommonApi/Store/ChangeStore"))
        .and(query_param("storeId", "e1925ea7"))
        .and(query_param("clickSource", "list"))
        .and(header("referer", retailers.pak_n_save.uri().as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&retailers.pak_n_save)
        .await;

    Mock::given(method("GET"))
        .and(path("/next/api/products/search"))
        .and(query_param("q", "free range eggs"))
        .and(query_param("pg", "2"))
        .and(query_param("storeId", "e1925ea7"))
        .and(query_param("ps", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "products": [
                    {"name": "Farmer Brown Eggs 12pk", "price": 1049},
                    {"name": "Pams Eggs 6pk", "price": 599}
                ],
                "total": 62
            }
        })))
        .expect(1)
        .mount(&retailers.pak_n_save)
        .await;

    let registry = retailers.registry();
    let pak_n_save = registry.for_retailer(RetailerName::PakNSave);

    pak_n_save.select_store(&pak_n_save_store()).await.unwrap();
    let result = pak_n_save
        .search_products("free range eggs", &pak_n_save_store(), 2)
        .await
        .unwrap();

    assert_eq!(result.total_items, 62);
    let prices: Vec<u64> = result.items.iter().map(|item| item.price_minor_units).collect();
    assert_eq!(prices, vec![1049, 599]);
}

#[tokio::test]
async fn rejected_store_selection_is_an_upstream_error() {
    let retailers = Retailers::start().await;

    Mock::given(method("POST"))
        .and(path("/CommonApi/Store/ChangeStore"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&retailers.new_world)
        .await;

    let registry = retailers.registry();
    let store = Store::new("unknown", "Nowhere", "Nowhere", RetailerName::NewWorld);

    let result = registry.for_retailer(RetailerName::NewWorld).select_store(&store).await;

    assert!(matches!(result, Err(RetailerError::UpstreamStatus { status: 404, .. })));
}

#[tokio::test]
async fn stores_of_another_retailer_are_rejected_before_any_request() {
    let retailers = Retailers::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&retailers.countdown)
        .await;

    let registry = retailers.registry();
    let result = registry
        .for_retailer(RetailerName::Countdown)
        .select_store(&pak_n_save_store())
        .await;

    assert!(matches!(result, Err(RetailerError::WrongRetailer { .. })));
}

#[tokio::test]
async fn oversized_pages_are_truncated() {
    let retailers = Retailers::start().await;

    let products: Vec<Value> = (0..75)
        .map(|index| json!({"name": format!("Item {index}"), "price": 100 + index}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/next/api/products/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"products": products, "total": 75}
        })))
        .mount(&retailers.new_world)
        .await;

    let registry = retailers.registry();
    let store = Store::new("nw-1", "New World", "Somewhere", RetailerName::NewWorld);

    let result = registry
        .for_retailer(RetailerName::NewWorld)
        .search_products("item", &store, 1)
        .await
        .unwrap();

    assert_eq!(result.items.len(), 60);
    assert_eq!(result.total_items, 75);
}
