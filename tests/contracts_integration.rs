//! Contract Integration Tests
//!
//! Checks the shapes a client can rely on: response envelopes, the 404
//! body, and the navigation shells.

use cask_mobile::contracts::{route_not_found, ApiError, ApiResponse, AVAILABLE_ROUTES};
use cask_mobile::ui::{NavigationStack, Route, RouteGroup, StackShell};
use serde_json::json;

#[test]
fn test_not_found_body_matches_contract() {
    let response = route_not_found("/api/v2/unknown?x=1");
    assert_eq!(response.status, 404);

    let body: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Route not found - /api/v2/unknown?x=1");

    let routes = body["availableRoutes"].as_object().unwrap();
    assert_eq!(routes.len(), AVAILABLE_ROUTES.len());
    for (name, prefix) in AVAILABLE_ROUTES {
        assert_eq!(routes[*name], *prefix);
    }
}

#[test]
fn test_envelope_branches() {
    let ok: ApiResponse<Vec<String>> =
        serde_json::from_value(json!({ "success": true, "data": ["a", "b"] })).unwrap();
    assert_eq!(ok.into_result().unwrap(), vec!["a", "b"]);

    let failed: ApiResponse<Vec<String>> =
        serde_json::from_value(json!({ "success": false, "message": "Unauthorized" })).unwrap();
    assert_eq!(
        failed.into_result(),
        Err(ApiError::Failed("Unauthorized".to_string()))
    );
}

#[test]
fn test_shell_flow() {
    let auth = StackShell::auth();
    let mut stack = NavigationStack::new(&auth);
    stack.push(Route::from_path("/(auth)/sign-up").unwrap()).unwrap();
    stack.push(Route::ForgotPassword).unwrap();
    assert_eq!(stack.depth(), 3);

    assert!(stack.push(Route::Notifications).is_err());
    assert!(StackShell::post_auth().contains(Route::Notifications));
    assert_eq!(Route::Notifications.group(), RouteGroup::PostAuth);
}
