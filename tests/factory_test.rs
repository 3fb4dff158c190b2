use rancher_config::{ClientError, Config, FactoryError};
use serde_json::{json, Value};
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCESS_KEY: &str = "test-access";
const SECRET_KEY: &str = "test-secret";

fn schema(uri: &str, id: &str, collection: &str) -> Value {
    json!({
        "id": id,
        "type": "schema",
        "links": {
            "self": format!("{}/v2-beta/schemas/{}", uri, id),
            "collection": format!("{}{}", uri, collection),
        }
    })
}

/// Mount the global root document and its schema collection
async fn mount_global_api(server: &MockServer) {
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/v2-beta"))
        .and(basic_auth(ACCESS_KEY, SECRET_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-API-Schemas", format!("{}/v2-beta/schemas", uri).as_str())
                .set_body_json(json!({"type": "apiVersion", "links": {}})),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/schemas"))
        .and(basic_auth(ACCESS_KEY, SECRET_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "collection",
            "data": [
                schema(&uri, "project", "/v2-beta/projects"),
                schema(&uri, "registry", "/v2-beta/registries"),
            ]
        })))
        .mount(server)
        .await;
}

/// Mount project `id` and its environment-scoped schema endpoint
async fn mount_environment(server: &MockServer, id: &str) {
    let uri = server.uri();
    let self_link = format!("{}/v2-beta/projects/{}", uri, id);

    Mock::given(method("GET"))
        .and(path(format!("/v2-beta/projects/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "type": "project",
            "name": "Default",
            "state": "active",
            "links": {"self": self_link},
        })))
        .mount(server)
        .await;

    let schemas_url = format!("{}/schemas", self_link);
    Mock::given(method("GET"))
        .and(path(format!("/v2-beta/projects/{}/schemas", id)))
        .and(basic_auth(ACCESS_KEY, SECRET_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-API-Schemas", schemas_url.as_str())
                .set_body_json(json!({
                    "type": "collection",
                    "data": [
                        schema(&uri, "service", &format!("/v2-beta/projects/{}/services", id)),
                        schema(&uri, "stack", &format!("/v2-beta/projects/{}/stacks", id)),
                    ]
                })),
        )
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> Config {
    Config::new(format!("{}/v2-beta", server.uri()), ACCESS_KEY, SECRET_KEY)
}

#[tokio::test]
async fn test_global_client_uses_stored_url_and_credentials() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;

    let config = config_for(&server);
    let client = config.global_client().await.unwrap();

    assert_eq!(client.url(), config.api_url);
    assert!(client.base().has_type("project"));
    assert!(client.base().has_type("registry"));
}

#[tokio::test]
async fn test_global_client_passes_api_error_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2-beta"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = config_for(&server).global_client().await.unwrap_err();
    match err {
        FactoryError::Client(ClientError::Api { status, body, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_global_client_requires_schemas_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2-beta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = config_for(&server).global_client().await.unwrap_err();
    assert!(matches!(
        err,
        FactoryError::Client(ClientError::SchemasNotFound { .. })
    ));
}

#[tokio::test]
async fn test_environment_client_targets_project_schemas() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;
    mount_environment(&server, "1a5").await;

    let client = config_for(&server).environment_client("1a5").await.unwrap();

    assert_eq!(
        client.url(),
        format!("{}/v2-beta/projects/1a5/schemas", server.uri())
    );
    assert!(client.base().has_type("service"));
    assert!(!client.base().has_type("project"));
}

#[tokio::test]
async fn test_environment_client_unknown_environment() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/projects/1a99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = config_for(&server)
        .environment_client("1a99")
        .await
        .unwrap_err();
    assert!(matches!(err, FactoryError::EnvironmentNotFound { ref id } if id == "1a99"));
}

#[tokio::test]
async fn test_registry_client_resolves_owning_environment() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;
    mount_environment(&server, "1a7").await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/registries/1sp1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1sp1",
            "type": "registry",
            "serverAddress": "quay.io",
            "accountId": "1a7",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = config_for(&server).registry_client("1sp1").await.unwrap();
    assert_eq!(
        client.url(),
        format!("{}/v2-beta/projects/1a7/schemas", server.uri())
    );
}

#[tokio::test]
async fn test_registry_client_not_found_hints_at_permissions() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/registries/1sp404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    // No environment lookup may happen after a registry miss
    Mock::given(method("GET"))
        .and(path("/v2-beta/projects/1a7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = config_for(&server)
        .registry_client("1sp404")
        .await
        .unwrap_err();

    assert!(matches!(err, FactoryError::RegistryNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "Registry ID 1sp404 not found. Check your API key permissions."
    );
}

#[tokio::test]
async fn test_registry_lookup_server_error_passes_through() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/registries/1sp1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = config_for(&server).registry_client("1sp1").await.unwrap_err();
    match err {
        FactoryError::Client(e) => assert_eq!(e.status(), Some(500)),
        other => panic!("expected client error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_catalog_client_uses_stored_url() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/v1-catalog"))
        .and(basic_auth(ACCESS_KEY, SECRET_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-API-Schemas", format!("{}/v1-catalog/schemas", uri).as_str())
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1-catalog/schemas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [schema(&uri, "template", "/v1-catalog/templates")]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1-catalog/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "library:infra*ebs",
                "type": "template",
                "catalogId": "library",
                "defaultVersion": "0.1.0"
            }]
        })))
        .mount(&server)
        .await;

    let config = Config::new(format!("{}/v1-catalog", uri), ACCESS_KEY, SECRET_KEY);
    let client = config.catalog_client().await.unwrap();
    assert_eq!(client.url(), config.api_url);

    let templates = client.template().list().await.unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].catalog_id, "library");
}

#[tokio::test]
async fn test_registry_client_accepts_null_fields() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;
    mount_environment(&server, "1a7").await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/registries/1sp1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1sp1",
            "type": "registry",
            "name": null,
            "description": null,
            "state": null,
            "serverAddress": "quay.io",
            "accountId": "1a7",
        })))
        .mount(&server)
        .await;

    let client = config_for(&server).registry_client("1sp1").await.unwrap();
    assert_eq!(
        client.url(),
        format!("{}/v2-beta/projects/1a7/schemas", server.uri())
    );
}

#[tokio::test]
async fn test_environment_client_without_self_link() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/projects/1a5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1a5",
            "type": "project",
            "name": "Default",
            "links": {},
        })))
        .mount(&server)
        .await;

    let err = config_for(&server)
        .environment_client("1a5")
        .await
        .unwrap_err();
    assert!(matches!(err, FactoryError::MissingSelfLink { ref id } if id == "1a5"));
}

#[tokio::test]
async fn test_environment_client_schema_error_passes_through() {
    let server = MockServer::start().await;
    mount_global_api(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/projects/1a5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1a5",
            "type": "project",
            "links": {"self": format!("{}/v2-beta/projects/1a5", server.uri())},
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2-beta/projects/1a5/schemas"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let err = config_for(&server)
        .environment_client("1a5")
        .await
        .unwrap_err();
    match err {
        FactoryError::Client(ClientError::Api { status, url, .. }) => {
            assert_eq!(status, 403);
            assert_eq!(url, format!("{}/v2-beta/projects/1a5/schemas", server.uri()));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}
