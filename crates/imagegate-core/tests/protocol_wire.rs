#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use imagegate_core::protocol::{ActivateResponse, AuthzRequest, AuthzResponse};

#[test]
fn request_accepts_daemon_payload() {
    // Shape as the daemon sends it, including fields the policy ignores.
    let raw = r#"{
        "User": "",
        "UserAuthNMethod": "",
        "RequestMethod": "POST",
        "RequestUri": "/v1.42/containers/create",
        "RequestBody": "eyJJbWFnZSI6ICJuZ2lueCJ9",
        "RequestHeaders": {"Content-Type": "application/json"}
    }"#;
    let req: AuthzRequest = serde_json::from_str(raw).expect("must parse");
    assert_eq!(req.request_method, "POST");
    assert_eq!(req.request_uri, "/v1.42/containers/create");
    assert_eq!(req.request_body.as_deref(), Some("eyJJbWFnZSI6ICJuZ2lueCJ9"));
}

#[test]
fn request_body_is_optional() {
    let raw = r#"{"RequestMethod": "GET", "RequestUri": "/v1.42/containers/json"}"#;
    let req: AuthzRequest = serde_json::from_str(raw).expect("must parse");
    assert!(req.request_body.is_none());
    assert!(req.user.is_empty());
}

#[test]
fn allow_response_omits_empty_fields() {
    let json = serde_json::to_string(&AuthzResponse::allowed()).unwrap();
    assert_eq!(json, r#"{"Allow":true}"#);
}

#[test]
fn deny_response_carries_message() {
    let json = serde_json::to_string(&AuthzResponse::denied("image is blacklisted")).unwrap();
    assert!(json.contains(r#""Allow":false"#));
    assert!(json.contains(r#""Msg":"image is blacklisted""#));
    assert!(!json.contains("Err"));
}

#[test]
fn activate_response_implements_authz() {
    let json = serde_json::to_string(&ActivateResponse::authz()).unwrap();
    assert_eq!(json, r#"{"Implements":["authz"]}"#);
}
