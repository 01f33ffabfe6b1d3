#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use services::instructor::{CreateInstructor, Instructor, InstructorService};
    use tower::ServiceExt;
    use util::state::AppState;

    async fn seed_ada(app_state: &AppState) -> Instructor {
        InstructorService::from_db(app_state.db_clone())
            .create(CreateInstructor {
                name: "Ada Lovelace".into(),
                qualification: Some("Mathematician".into()),
                profile: Some("First programmer".into()),
                courses_taught: None,
            })
            .await
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    /// Test Case: Create instructor with defaults applied
    #[tokio::test]
    async fn test_create_instructor_success() {
        let (app, _) = make_test_app().await;

        let req = json_request(
            "POST",
            "/instructors",
            json!({ "name": "Grace Hopper", "profile": "Rear admiral" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Instructor created successfully");
        assert_eq!(json["data"]["name"], "Grace Hopper");
        assert_eq!(json["data"]["coursesTaught"], 0);
        assert!(json["data"]["qualification"].is_null());
        assert!(json["data"]["id"].as_i64().unwrap() > 0);
    }

    /// Test Case: Create instructor without a name
    #[tokio::test]
    async fn test_create_instructor_missing_name() {
        let (app, _) = make_test_app().await;

        let req = json_request("POST", "/instructors", json!({ "profile": "Nobody" }));
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "The instructor's name is required!");
        assert!(json["data"].is_null());

        let list = app.oneshot(empty_request("GET", "/instructors")).await.unwrap();
        let json = get_json_body(list).await;
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    /// Test Case: Negative coursesTaught is rejected
    #[tokio::test]
    async fn test_create_instructor_negative_counter() {
        let (app, _) = make_test_app().await;

        let req = json_request(
            "POST",
            "/instructors",
            json!({ "name": "Ada", "coursesTaught": -2 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: String coursesTaught is rejected with the envelope
    #[tokio::test]
    async fn test_create_instructor_string_counter() {
        let (app, _) = make_test_app().await;

        let req = json_request(
            "POST",
            "/instructors",
            json!({ "name": "Ada", "coursesTaught": "3" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert!(json["message"].as_str().unwrap().contains("coursesTaught"));
    }

    /// Test Case: Bad id is reported before a bad body on update
    #[tokio::test]
    async fn test_update_instructor_bad_id_and_bad_body() {
        let (app, _) = make_test_app().await;

        let req = json_request(
            "PUT",
            "/instructors/abc",
            json!({ "name": "Ada", "coursesTaught": "3" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Unrecognised ID format: abc!");
    }

    /// Test Case: Second create with the same name and profile
    #[tokio::test]
    async fn test_create_instructor_duplicate() {
        let (app, app_state) = make_test_app().await;
        seed_ada(&app_state).await;

        let req = json_request(
            "POST",
            "/instructors",
            json!({ "name": "Ada Lovelace", "profile": "First programmer" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "The instructor, Ada Lovelace has already been added!");
    }

    /// Test Case: List and get by id
    #[tokio::test]
    async fn test_list_and_get_instructor() {
        let (app, app_state) = make_test_app().await;
        let ada = seed_ada(&app_state).await;

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/instructors"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["id"], ada.id);

        let uri = format!("/instructors/{}", ada.id);
        let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["profile"], "First programmer");
        assert_eq!(json["message"], "Instructor retrieved successfully");
    }

    /// Test Case: Malformed id is rejected before touching the store
    #[tokio::test]
    async fn test_get_instructor_bad_id() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(empty_request("GET", "/instructors/not-an-id"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Unrecognised ID format: not-an-id!");
    }

    /// Test Case: Unknown id is not found
    #[tokio::test]
    async fn test_get_instructor_not_found() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(empty_request("GET", "/instructors/12345"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "No such instructor with ID: 12345 found!");
    }

    /// Test Case: Update an unknown id
    #[tokio::test]
    async fn test_update_instructor_not_found() {
        let (app, _) = make_test_app().await;

        let req = json_request("PUT", "/instructors/999", json!({ "name": "Someone" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Update with no changed fields
    #[tokio::test]
    async fn test_update_instructor_no_changes() {
        let (app, app_state) = make_test_app().await;
        let ada = seed_ada(&app_state).await;

        let uri = format!("/instructors/{}", ada.id);
        let req = json_request(
            "PUT",
            &uri,
            json!({ "name": "Ada Lovelace", "qualification": "Mathematician" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(
            json["message"],
            "No changes were made to the instructor details that require an update!"
        );
    }

    /// Test Case: Update that changes a field succeeds and keeps omitted fields
    #[tokio::test]
    async fn test_update_instructor_success() {
        let (app, app_state) = make_test_app().await;
        let ada = seed_ada(&app_state).await;

        let uri = format!("/instructors/{}", ada.id);
        let req = json_request(
            "PUT",
            &uri,
            json!({ "name": "Ada Lovelace", "coursesTaught": 4 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["coursesTaught"], 4);
        assert_eq!(json["data"]["profile"], "First programmer");
        assert_eq!(json["message"], "Instructor updated successfully");
    }

    /// Test Case: Update onto another instructor's name and profile
    #[tokio::test]
    async fn test_update_instructor_duplicate() {
        let (app, app_state) = make_test_app().await;
        seed_ada(&app_state).await;
        let grace = InstructorService::from_db(app_state.db_clone())
            .create(CreateInstructor {
                name: "Grace Hopper".into(),
                profile: Some("First programmer".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let uri = format!("/instructors/{}", grace.id);
        let req = json_request("PUT", &uri, json!({ "name": "Ada Lovelace" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    /// Test Case: Delete, then the record is gone
    #[tokio::test]
    async fn test_delete_instructor() {
        let (app, app_state) = make_test_app().await;
        let ada = seed_ada(&app_state).await;
        let uri = format!("/instructors/{}", ada.id);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert!(json["data"].is_null());
        assert_eq!(
            json["message"],
            format!("Instructor with ID: {} has been deleted!", ada.id)
        );

        let response = app
            .clone()
            .oneshot(empty_request("GET", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
