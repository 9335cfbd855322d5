//! Drives the reqwest-backed transport against a local mock server.

use owm_client::{Client, Error, Query};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CURRENT_BODY: &str = r#"{"coord":{"lon":139,"lat":35},
"sys":{"country":"JP","sunrise":1369769524,"sunset":1369821049},
"weather":[{"id":804,"main":"clouds","description":"overcast clouds","icon":"04n"}],
"main":{"temp":289.5,"humidity":89,"pressure":1013,"temp_min":287.04,"temp_max":292.04},
"wind":{"speed":7.31,"deg":187.002},
"rain":{"3h":5},
"clouds":{"all":92},
"dt":1369824698,
"id":1851632,
"name":"Shuzenji",
"cod":200}"#;

#[tokio::test]
async fn fetch_current_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Shuzenji"))
        .and(query_param("appid", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CURRENT_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = Client::new_http("secret").with_base_url(server.uri());
    let current = client
        .fetch_current(&Query::by_city("Shuzenji"))
        .await
        .expect("fetch should succeed");

    assert_eq!(current.name, "Shuzenji");
    assert_eq!(current.id, 1851632);
    assert_eq!(current.main.humidity, 89);
}

#[tokio::test]
async fn http_404_maps_to_status_error() {
    // No mounts: the mock server answers every request with 404.
    let server = MockServer::start().await;

    let client = Client::new_http("secret").with_base_url(server.uri());
    let err = client
        .fetch_forecast(&Query::by_id(1851632))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn embedded_error_over_http_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"cod":401,"message":"Invalid API key"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = Client::new_http("bad-key").with_base_url(server.uri());
    let err = client.fetch_current(&Query::by_city("Berlin")).await.unwrap_err();

    assert!(matches!(err, Error::ApiStatus { code, .. } if code == "401"));
}
