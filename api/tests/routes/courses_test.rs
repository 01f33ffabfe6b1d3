#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use services::{
        course::{Course, CourseService, CreateCourse},
        instructor::{CreateInstructor, Instructor, InstructorService},
    };
    use tower::ServiceExt;
    use util::state::AppState;

    struct TestData {
        grace: Instructor,
        compilers: Course,
    }

    async fn setup_test_data(app_state: &AppState) -> TestData {
        let grace = InstructorService::from_db(app_state.db_clone())
            .create(CreateInstructor {
                name: "Grace Hopper".into(),
                profile: Some("Compiler pioneer".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let (compilers, _) = CourseService::from_db(app_state.db_clone())
            .create(CreateCourse {
                title: "Compilers".into(),
                instructor_id: Some(grace.id),
                subject: Some("Computer Science".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        TestData { grace, compilers }
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

    /// Test Case: Listing courses embeds the instructor record
    #[tokio::test]
    async fn test_list_courses_embeds_instructor() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let response = app.oneshot(empty_request("GET", "/courses")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        let courses = json["data"].as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["title"], "Compilers");
        assert_eq!(courses[0]["instructor"]["id"], data.grace.id);
        assert_eq!(courses[0]["instructor"]["name"], "Grace Hopper");
        assert_eq!(courses[0]["instructor"]["profile"], "Compiler pioneer");
    }

    /// Test Case: Create course returns it with the instructor embedded
    #[tokio::test]
    async fn test_create_course_success() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let req = json_request(
            "POST",
            "/courses",
            json!({
                "title": "Operating Systems",
                "instructor": data.grace.id,
                "startDate": "2027-02-01T08:00:00Z",
                "description": "Processes and memory"
            }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Course created successfully");
        assert_eq!(json["data"]["title"], "Operating Systems");
        assert_eq!(json["data"]["enrolmentCount"], 0);
        assert_eq!(json["data"]["startDate"], "2027-02-01T08:00:00+00:00");
        assert!(json["data"]["endDate"].is_null());
        assert_eq!(json["data"]["instructor"]["name"], "Grace Hopper");
    }

    /// Test Case: Create course without an instructor
    #[tokio::test]
    async fn test_create_course_missing_instructor() {
        let (app, _) = make_test_app().await;

        let req = json_request("POST", "/courses", json!({ "title": "Databases" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "The course's title and its instructor are required!"
        );
    }

    /// Test Case: Create course with a blank title
    #[tokio::test]
    async fn test_create_course_blank_title() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let req = json_request(
            "POST",
            "/courses",
            json!({ "title": "   ", "instructor": data.grace.id }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: Second create with the same title and instructor
    #[tokio::test]
    async fn test_create_course_duplicate() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let req = json_request(
            "POST",
            "/courses",
            json!({ "title": "Compilers", "instructor": data.grace.id }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = get_json_body(response).await;
        assert_eq!(
            json["message"],
            format!(
                "The course Compilers, taught by instructor {} has already been added!",
                data.grace.id
            )
        );
    }

    /// Test Case: Non-numeric instructor reference is rejected with the envelope
    #[tokio::test]
    async fn test_create_course_string_instructor() {
        let (app, _) = make_test_app().await;

        let req = json_request(
            "POST",
            "/courses",
            json!({ "title": "Rust", "instructor": "64f0c2a1b2c3d4e5f6a7b8c9" }),
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert!(json["message"].as_str().unwrap().contains("instructor"));

        let list = app.oneshot(empty_request("GET", "/courses")).await.unwrap();
        let json = get_json_body(list).await;
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    /// Test Case: Malformed JSON body is rejected with the envelope
    #[tokio::test]
    async fn test_create_course_malformed_json() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/courses")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"title\": \"Rust\","))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
    }

    /// Test Case: String enrolmentCount on update is rejected with the envelope
    #[tokio::test]
    async fn test_update_course_string_counter() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let uri = format!("/courses/{}", data.compilers.id);
        let req = json_request(
            "PUT",
            &uri,
            json!({ "title": "Compilers", "instructor": data.grace.id, "enrolmentCount": "30" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("enrolmentCount"));
    }

    /// Test Case: Bad id is reported before a bad body
    #[tokio::test]
    async fn test_update_course_bad_id_and_bad_body() {
        let (app, _) = make_test_app().await;

        let req = json_request(
            "PUT",
            "/courses/abc",
            json!({ "title": "Rust", "instructor": "64f0c2a1b2c3d4e5f6a7b8c9" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Unrecognised ID format: abc!");
    }

    /// Test Case: Get a course by id
    #[tokio::test]
    async fn test_get_course() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let uri = format!("/courses/{}", data.compilers.id);
        let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id"], data.compilers.id);
        assert_eq!(json["data"]["subject"], "Computer Science");
        assert_eq!(json["data"]["instructor"]["id"], data.grace.id);
    }

    /// Test Case: Course whose instructor was deleted falls back to the bare id
    #[tokio::test]
    async fn test_get_course_with_deleted_instructor() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let uri = format!("/instructors/{}", data.grace.id);
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let uri = format!("/courses/{}", data.compilers.id);
        let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["instructor"], data.grace.id);
    }

    /// Test Case: Malformed course id
    #[tokio::test]
    async fn test_course_bad_id() {
        let (app, _) = make_test_app().await;

        let req = json_request(
            "PUT",
            "/courses/64f0c2a9e1",
            json!({ "title": "X", "instructor": 1 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Unrecognised ID format: 64f0c2a9e1!");
    }

    /// Test Case: Update an unknown course id
    #[tokio::test]
    async fn test_update_course_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let req = json_request(
            "PUT",
            "/courses/4040",
            json!({ "title": "Compilers", "instructor": data.grace.id }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "No such course with ID: 4040 found!");
    }

    /// Test Case: Update without changed fields
    #[tokio::test]
    async fn test_update_course_no_changes() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let uri = format!("/courses/{}", data.compilers.id);
        let req = json_request(
            "PUT",
            &uri,
            json!({
                "title": "Compilers",
                "instructor": data.grace.id,
                "subject": "Computer Science"
            }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(
            json["message"],
            "No changes were made to the course details that require an update!"
        );
    }

    /// Test Case: Update keeping its own title/instructor with another change
    #[tokio::test]
    async fn test_update_course_success() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;

        let uri = format!("/courses/{}", data.compilers.id);
        let req = json_request(
            "PUT",
            &uri,
            json!({
                "title": "Compilers",
                "instructor": data.grace.id,
                "enrolmentCount": 25
            }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["enrolmentCount"], 25);
        assert_eq!(json["data"]["subject"], "Computer Science");
        assert_eq!(json["data"]["instructor"]["name"], "Grace Hopper");
    }

    /// Test Case: Update onto another course's title and instructor
    #[tokio::test]
    async fn test_update_course_duplicate() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let (os, _) = CourseService::from_db(app_state.db_clone())
            .create(CreateCourse {
                title: "Operating Systems".into(),
                instructor_id: Some(data.grace.id),
                ..Default::default()
            })
            .await
            .unwrap();

        let uri = format!("/courses/{}", os.id);
        let req = json_request(
            "PUT",
            &uri,
            json!({ "title": "Compilers", "instructor": data.grace.id }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    /// Test Case: Delete removes the course from subsequent reads
    #[tokio::test]
    async fn test_delete_course() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(&app_state).await;
        let uri = format!("/courses/{}", data.compilers.id);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(
            json["message"],
            format!("Course with ID: {} has been deleted!", data.compilers.id)
        );

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/courses"))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert!(json["data"].as_array().unwrap().is_empty());

        let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
