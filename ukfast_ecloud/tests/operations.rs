mod common;

use serde_json::json;
use ukfast_api::testing::{error_body, item_body, page_body};
use ukfast_api::types::RawResponse;
use ukfast_api::Method;
use ukfast_ecloud::models::RenameTemplateRequest;
use ukfast_ecloud::{
    ClientRequestParameters, CollectionOperations, Error, NestedCollectionOperations,
    NestedMutations,
};

use common::mock_ecloud;

fn dhcp(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "dhcp",
        "vpc_id": "vpc-11112222",
        "availability_zone_id": "az-aaaa0001"
    })
}

fn template(name: &str) -> serde_json::Value {
    json!({ "name": name, "platform": "Linux" })
}

#[tokio::test]
async fn list_all_dhcps_returns_every_item() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(200, page_body(vec![dhcp("dhcp-1"), dhcp("dhcp-2")], 1, 1, 2, 15));

    let dhcps = ecloud.dhcps().list_all(None).await.unwrap();

    assert_eq!(dhcps.len(), 2);
    assert_eq!(transport.requests()[0].path, "/ecloud/v2/dhcps");
}

#[tokio::test]
async fn list_page_requests_collection_path_with_parameters() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(200, page_body(vec![dhcp("dhcp-1"), dhcp("dhcp-2")], 1, 1, 2, 15));

    let params = ClientRequestParameters::new().with_page(1).with_per_page(15);
    let page = ecloud.dhcps().list_page(Some(params.clone())).await.unwrap();

    assert_eq!(page.items().len(), 2);
    let sent = &transport.requests()[0];
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.path, "/ecloud/v2/dhcps");
    assert_eq!(sent.parameters, Some(params));
}

#[tokio::test]
async fn get_dhcp_requests_member_path() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(200, item_body(dhcp("dhcp-abcd1234")));

    let found = ecloud.dhcps().get("dhcp-abcd1234").await.unwrap();

    assert_eq!(found.id, "dhcp-abcd1234");
    assert_eq!(transport.requests()[0].path, "/ecloud/v2/dhcps/dhcp-abcd1234");
}

#[tokio::test]
async fn get_dhcp_with_blank_id_fails_before_any_request() {
    let (transport, ecloud) = mock_ecloud();

    for id in ["", "   "] {
        let err = ecloud.dhcps().get(id).await.unwrap_err();
        assert_eq!(err, Error::Validation("Invalid DHCP id".to_string()));
    }
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn get_dhcp_not_found_propagates() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(404, error_body(404, "Not found", "DHCP not found"));

    let err = ecloud.dhcps().get("dhcp-abcd1234").await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(err.response_errors()[0].detail.as_deref(), Some("DHCP not found"));
}

#[tokio::test]
async fn numeric_ids_must_be_positive() {
    let (transport, ecloud) = mock_ecloud();

    let err = ecloud.firewalls().get(&0).await.unwrap_err();
    assert_eq!(err, Error::Validation("Invalid firewall id".to_string()));
    let err = ecloud.solutions().get(&-4).await.unwrap_err();
    assert_eq!(err, Error::Validation("Invalid solution id".to_string()));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn v1_get_uses_numeric_member_path() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(200, item_body(json!({"id": 9, "name": "corp.example"})));

    let domain = ecloud.active_directory_domains().get(&9).await.unwrap();

    assert_eq!(domain.name, "corp.example");
    assert_eq!(
        transport.requests()[0].path,
        "/ecloud/v1/active-directory/domains/9"
    );
}

#[tokio::test]
async fn nested_list_all_walks_pages_under_parent() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(200, page_body(vec![template("a"), template("b")], 1, 2, 3, 2));
    transport.push_json(200, page_body(vec![template("c")], 2, 2, 3, 2));

    let templates = ecloud
        .solution_templates()
        .list_all(&4567, None)
        .await
        .unwrap();

    let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.path == "/ecloud/v1/solutions/4567/templates"));
}

#[tokio::test]
async fn nested_operations_validate_parent_first() {
    let (transport, ecloud) = mock_ecloud();

    let err = ecloud
        .solution_firewalls()
        .list_page(&0, None)
        .await
        .unwrap_err();
    assert_eq!(err, Error::Validation("Invalid solution id".to_string()));

    let err = ecloud.pod_templates().get(&0, "").await.unwrap_err();
    assert_eq!(err, Error::Validation("Invalid pod id".to_string()));

    let err = ecloud.pod_templates().get(&14, " ").await.unwrap_err();
    assert_eq!(err, Error::Validation("Invalid template id".to_string()));

    let err = ecloud
        .solution_templates()
        .list_all(&-1, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn nested_get_requests_member_under_parent() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(
        200,
        item_body(json!({"id": 77, "name": "fw-1", "role": "N/A"})),
    );

    let firewall = ecloud.solution_firewalls().get(&4567, &77).await.unwrap();

    assert_eq!(firewall.id, 77);
    assert_eq!(
        transport.requests()[0].path,
        "/ecloud/v1/solutions/4567/firewalls/77"
    );
}

#[tokio::test]
async fn delete_template_sends_one_delete() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_response(RawResponse::new(204, ""));

    ecloud
        .solution_templates()
        .delete(&4567, "web-base")
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].path, "/ecloud/v1/solutions/4567/templates/web-base");
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn rename_template_posts_destination() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(202, json!({ "meta": [] }));

    ecloud
        .pod_templates()
        .rename(&14, "web-base", &RenameTemplateRequest::new("web-legacy"))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/ecloud/v1/pods/14/templates/web-base/move");
    assert_eq!(requests[0].body, Some(json!({ "destination": "web-legacy" })));
}

#[tokio::test]
async fn mutations_reject_invalid_ids_offline() {
    let (transport, ecloud) = mock_ecloud();

    let err = ecloud.pod_templates().delete(&14, "").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    let err = ecloud
        .solution_templates()
        .rename(&0, "web-base", &RenameTemplateRequest::new("x"))
        .await
        .unwrap_err();
    assert_eq!(err, Error::Validation("Invalid solution id".to_string()));

    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn rename_failure_surfaces_api_error() {
    let (transport, ecloud) = mock_ecloud();
    transport.push_json(409, error_body(409, "Conflict", "Template already exists"));

    let err = ecloud
        .solution_templates()
        .rename(&4567, "web-base", &RenameTemplateRequest::new("db-base"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api { status: 409, .. }));
}
