//! REST client tests against a mock cluster

#[cfg(test)]
mod tests {
    use crate::common::fixtures::cluster_info_body;
    use crate::{assert_err, assert_ok};
    use index_maintenance::config::ClusterConfig;
    use index_maintenance::core::cluster::{HttpClusterClient, IndexAdmin};
    use index_maintenance::core::unfreeze::UnfreezeOperator;
    use index_maintenance::MaintenanceError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ClusterConfig {
        ClusterConfig {
            host: server.uri(),
            request_timeout_secs: 5,
            reindex_timeout_secs: 5,
            ..Default::default()
        }
    }

    fn client_for(server: &MockServer) -> HttpClusterClient {
        HttpClusterClient::new(&config_for(server)).unwrap()
    }

    // ==================== Connection ====================

    #[tokio::test]
    async fn test_connect_reads_cluster_info() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(cluster_info_body("7.17.9")))
            .expect(1)
            .mount(&server)
            .await;

        let (_client, info) = assert_ok!(HttpClusterClient::connect(&config_for(&server)).await);

        assert_eq!(info.cluster_name, "maintenance-test");
        assert_eq!(info.version.number, "7.17.9");
        assert!(info.version_warning("7.17").is_none());
        assert!(info.version_warning("8.11").is_some());
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_host() {
        let config = ClusterConfig {
            host: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 2,
            ..Default::default()
        };

        let err = assert_err!(HttpClusterClient::connect(&config).await);

        assert!(matches!(err, MaintenanceError::Connection(_)));
        assert!(err.to_string().contains("127.0.0.1:1"));
    }

    #[tokio::test]
    async fn test_connect_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "type": "security_exception", "reason": "unable to authenticate user" },
                "status": 401
            })))
            .mount(&server)
            .await;

        let err = assert_err!(HttpClusterClient::connect(&config_for(&server)).await);

        assert!(matches!(err, MaintenanceError::Connection(_)));
        assert!(err.to_string().contains("security_exception"));
    }

    #[tokio::test]
    async fn test_basic_auth_header_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("authorization", "Basic dXNlcjpwYXNz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(cluster_info_body("7.17.0")))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClusterConfig {
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..config_for(&server)
        };

        assert_ok!(HttpClusterClient::connect(&config).await);
    }

    // ==================== Index Operations ====================

    #[tokio::test]
    async fn test_index_exists() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/fg-000001"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/fg-000002"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/fg-000003"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);

        assert!(assert_ok!(client.index_exists("fg-000001").await));
        assert!(!assert_ok!(client.index_exists("fg-000002").await));
        let err = assert_err!(client.index_exists("fg-000003").await);
        assert!(matches!(err, MaintenanceError::Cluster { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_create_index() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/fg-000001-reindexed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "acknowledged": true,
                "index": "fg-000001-reindexed"
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(client_for(&server).create_index("fg-000001-reindexed").await);
    }

    #[tokio::test]
    async fn test_error_envelope_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/fg-000001-reindexed"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "type": "resource_already_exists_exception",
                    "reason": "index [fg-000001-reindexed] already exists"
                },
                "status": 400
            })))
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).create_index("fg-000001-reindexed").await);

        match err {
            MaintenanceError::Cluster { status, reason } => {
                assert_eq!(status, 400);
                assert_eq!(
                    reason,
                    "resource_already_exists_exception: index [fg-000001-reindexed] already exists"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_put_alias() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/fg-000001-reindexed/_alias/fg-archive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(
            client_for(&server)
                .put_alias("fg-000001-reindexed", "fg-archive")
                .await
        );
    }

    #[tokio::test]
    async fn test_alias_with_reserved_characters_is_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/fg-000001-reindexed/_alias/arch%231"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "type": "invalid_alias_name_exception",
                    "reason": "Invalid alias name [arch#1]: must not contain '#'"
                },
                "status": 400
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = assert_err!(
            client_for(&server)
                .put_alias("fg-000001-reindexed", "arch#1")
                .await
        );

        assert!(matches!(err, MaintenanceError::Cluster { status: 400, .. }));
        assert!(err.to_string().contains("invalid_alias_name_exception"));
    }

    #[tokio::test]
    async fn test_question_mark_stays_in_the_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/odd%3Fname/_unfreeze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(client_for(&server).open_index("odd?name").await);
    }

    #[tokio::test]
    async fn test_put_settings_sends_body() {
        let server = MockServer::start().await;
        let settings = json!({ "index.lifecycle.indexing_complete": true });
        Mock::given(method("PUT"))
            .and(path("/fg-000001-reindexed/_settings"))
            .and(body_json(&settings))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(
            client_for(&server)
                .put_settings("fg-000001-reindexed", &settings)
                .await
        );
    }

    #[tokio::test]
    async fn test_reindex_parses_report() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/_reindex"))
            .and(query_param("wait_for_completion", "true"))
            .and(body_json(json!({
                "source": { "index": "fg-000001" },
                "dest": { "index": "fg-000001-reindexed" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "took": 1520,
                "timed_out": false,
                "total": 10,
                "created": 8,
                "updated": 2,
                "deleted": 0,
                "batches": 1,
                "version_conflicts": 0,
                "noops": 0,
                "failures": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let report = assert_ok!(
            client_for(&server)
                .reindex("fg-000001", "fg-000001-reindexed")
                .await
        );

        assert_eq!(report.took, 1520);
        assert_eq!(report.created, 8);
        assert_eq!(report.updated, 2);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_list_indices_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_cat/indices/logs-*"))
            .and(query_param("format", "json"))
            .and(query_param("h", "index,search.throttled"))
            .and(query_param("expand_wildcards", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "index": "index1", "search.throttled": "true" },
                { "index": "index2", "search.throttled": "false" },
                { "index": "index3" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let listing = assert_ok!(client_for(&server).list_indices("logs-*").await);

        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].name, "index1");
        assert_eq!(listing[0].frozen_flag.as_deref(), Some("true"));
        assert_eq!(listing[2].frozen_flag, None);
    }

    #[tokio::test]
    async fn test_unfreeze_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/index1/_unfreeze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "acknowledged": true,
                "shards_acknowledged": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(client_for(&server).open_index("index1").await);
    }

    // ==================== Workflow over HTTP ====================

    #[tokio::test]
    async fn test_scan_and_unfreeze_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/_cat/indices/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "index": "index1", "search.throttled": "true" },
                { "index": "index2", "search.throttled": "true" },
                { "index": "index3", "search.throttled": "false" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/index1/_unfreeze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/index2/_unfreeze"))
            .respond_with(ResponseTemplate::new(500).set_body_string("fail"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = assert_ok!(UnfreezeOperator::new(&client, "*").scan_and_unfreeze().await);

        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.succeeded, 1);
        assert!(
            report
                .summary
                .record("index2")
                .unwrap()
                .detail()
                .contains("fail")
        );
    }

    #[tokio::test]
    async fn test_listing_failure_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/_cat/indices/"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": { "type": "master_not_discovered_exception", "reason": null },
                "status": 503
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = assert_err!(UnfreezeOperator::new(&client, "*").scan_and_unfreeze().await);

        assert!(matches!(err, MaintenanceError::Enumeration(_)));
        assert!(err.to_string().contains("master_not_discovered_exception"));
    }
}
