//! Routing tests: authentication and role gates, history and chrome

mod fixtures;
mod helpers;

use fixtures::*;
use helpers::*;
use proptest::prelude::*;

use std::sync::Arc;

use CourseDesk::{
    handlers::Action,
    models::{Role, User},
    state::{PersistenceAdapter, CURRENT_USER_KEY, IS_AUTHENTICATED_KEY},
    App, AutoConfirm, Route, Router, SessionStore,
};

/// App whose storage already holds a signed-in user; the backend is unreachable
fn signed_in_app(role: Role) -> App {
    let storage = PersistenceAdapter::in_memory();
    let user = User {
        id: 40,
        name: "Prop Tester".to_string(),
        email: "prop@test.com".to_string(),
        password: "secret1".to_string(),
        role,
        phone: String::new(),
        enroll_number: String::new(),
        date_of_admission: None,
    };
    storage.set_durable(CURRENT_USER_KEY, &user).unwrap();
    storage.set_session(IS_AUTHENTICATED_KEY, &true).unwrap();

    let app = build_app("http://127.0.0.1:1", storage, Arc::new(AutoConfirm::accept()));
    assert!(app.context().session_manager.restore());
    app
}

fn any_path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        Just("/dashboard".to_string()),
        Just("/users".to_string()),
        Just("/courses".to_string()),
        Just("/enrollments".to_string()),
        Just("/login".to_string()),
        Just("/register".to_string()),
        "/[a-z]{0,12}",
        "/[a-z]{1,6}/[0-9]{1,3}",
        "/courses\\?[a-z]{1,5}=[0-9]{1,3}",
    ]
}

proptest! {
    #[test]
    fn prop_unauthenticated_sessions_only_see_public_routes(path in any_path()) {
        let session = SessionStore::new();
        let mut router = Router::new(session.clone());

        let route = router.navigate(&path);

        prop_assert!(route.is_public(), "{} reached {:?}", path, route);
        if Route::parse(&path).is_public() {
            prop_assert_eq!(route, Route::parse(&path));
        } else {
            prop_assert_eq!(route, Route::Login);
            prop_assert_eq!(session.current_route(), "/login");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_role_gates_hold_for_signed_in_users(path in any_path(), admin in any::<bool>()) {
        let role = if admin { Role::Admin } else { Role::Visitor };
        let mut app = signed_in_app(role);

        let frame = tokio_test::block_on(app.navigate(&path));

        match role {
            Role::Admin => prop_assert_ne!(frame.path.as_str(), "/enrollments"),
            Role::Visitor => prop_assert_ne!(frame.path.as_str(), "/users"),
        }
        match Route::parse(&path) {
            Route::Users if role == Role::Visitor => prop_assert_eq!(frame.path.as_str(), "/"),
            Route::Enrollments if role == Role::Admin => prop_assert_eq!(frame.path.as_str(), "/"),
            _ => prop_assert_eq!(frame.path, path),
        }
        prop_assert!(frame.chrome.sidebar_visible);
    }
}

#[tokio::test]
async fn test_start_without_session_lands_on_login() {
    let mut ctx = TestContext::new().await;

    let frame = ctx.app.start().await;

    assert_eq!(frame.path, "/login");
    assert!(!frame.chrome.header_visible);
    assert!(!frame.chrome.sidebar_visible);
    assert!(frame.chrome.full_width);
    assert!(frame.view.body.as_str().contains("loginForm"));
}

#[tokio::test]
async fn test_admin_is_sent_home_from_enrollments() {
    let mut ctx = TestContext::new().await;
    ctx.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let frame = ctx.app.navigate("/enrollments").await;

    assert_eq!(frame.path, "/");
    assert_eq!(ctx.app.router().history().entries().last().map(String::as_str), Some("/"));
}

#[tokio::test]
async fn test_visitor_is_sent_home_from_users() {
    let mut ctx = TestContext::new().await;
    ctx.login(JUAN_EMAIL, JUAN_PASSWORD).await;

    let frame = ctx.app.navigate("/users").await;

    assert_eq!(frame.path, "/");
    assert!(!frame.chrome.users_nav_visible);
}

#[tokio::test]
async fn test_admin_sees_user_table() {
    let mut ctx = TestContext::new().await;
    ctx.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let frame = ctx.app.navigate("/users").await;

    assert_eq!(frame.path, "/users");
    let body = frame.view.body.as_str();
    assert!(body.contains(ADMIN_EMAIL));
    assert!(body.contains(JUAN_EMAIL));
    assert!(body.contains("maria@email.com"));
    assert!(frame.chrome.users_nav_visible);
    assert!(!frame.chrome.enrollments_nav_visible);
}

#[tokio::test]
async fn test_visitor_sees_only_own_enrollments() {
    let mut ctx = TestContext::new().await;
    ctx.login(JUAN_EMAIL, JUAN_PASSWORD).await;

    let frame = ctx.app.navigate("/enrollments").await;

    assert_eq!(frame.path, "/enrollments");
    let body = frame.view.body.as_str();
    for id in JUAN_ENROLLMENT_IDS {
        assert!(body.contains(&format!(r#"data-action="cancel-enrollment" data-id="{}""#, id)));
    }
    for id in MARIA_ENROLLMENT_IDS {
        assert!(!body.contains(&format!(r#"data-action="cancel-enrollment" data-id="{}""#, id)));
    }
    assert!(body.contains("Introduction to Rust"));
    assert!(body.contains("Web Development"));
    assert!(!body.contains("Data Science Seminar"));
}

#[tokio::test]
async fn test_visitor_course_cards_reflect_enrollment_state() {
    let mut ctx = TestContext::new().await;
    ctx.login(JUAN_EMAIL, JUAN_PASSWORD).await;

    let frame = ctx.app.navigate("/courses").await;
    let body = frame.view.body.as_str();

    assert!(body.contains("Already enrolled"));
    assert!(body.contains("Course full"));
    assert!(body.contains(&format!(r#"data-action="enroll" data-id="{}""#, OPEN_COURSE_ID)));
    assert!(!body.contains(&format!(r#"data-action="enroll" data-id="{}""#, FULL_COURSE_ID)));
    assert!(!body.contains(&format!(r#"data-action="enroll" data-id="{}""#, RUST_COURSE_ID)));
}

#[tokio::test]
async fn test_admin_course_table_shows_occupancy() {
    let mut ctx = TestContext::new().await;
    ctx.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let frame = ctx.app.navigate("/courses").await;
    let body = frame.view.body.as_str();

    assert!(body.contains("<td>2/30</td>"));
    assert!(body.contains("<td>1/1</td>"));
    assert!(body.contains("<td>0/10</td>"));
    assert!(body.contains(r#"data-action="new-course""#));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_when_signed_in() {
    let mut ctx = TestContext::new().await;
    ctx.login(JUAN_EMAIL, JUAN_PASSWORD).await;

    let frame = ctx.app.navigate("/no-such-page").await;

    assert_eq!(frame.path, "/no-such-page");
    assert_eq!(frame.view.title, "Not found");
    assert!(frame.view.body.as_str().contains("Page not found: /no-such-page"));
    assert!(frame.links().contains(&"/".to_string()));
}

#[tokio::test]
async fn test_unknown_path_requires_login_first() {
    let mut ctx = TestContext::new().await;

    let frame = ctx.app.navigate("/no-such-page").await;

    assert_eq!(frame.path, "/login");
}

#[tokio::test]
async fn test_back_and_forward_follow_history() {
    let mut ctx = TestContext::new().await;
    ctx.login(JUAN_EMAIL, JUAN_PASSWORD).await;
    ctx.app.navigate("/courses").await;
    ctx.app.navigate("/enrollments").await;

    assert_eq!(ctx.app.back().await.path, "/courses");
    assert_eq!(ctx.app.back().await.path, "/");
    assert_eq!(ctx.app.forward().await.path, "/courses");

    let frame = ctx.app.dispatch(Action::Navigate("/".to_string())).await;
    assert_eq!(frame.path, "/");
    assert_eq!(ctx.app.forward().await.path, "/");
}

#[tokio::test]
async fn test_back_after_logout_is_gated_again() {
    let mut ctx = TestContext::new().await;
    ctx.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    ctx.app.navigate("/users").await;
    ctx.app.dispatch(Action::Logout).await;

    let frame = ctx.app.back().await;

    assert_eq!(frame.path, "/login");
    assert!(!frame.chrome.sidebar_visible);
}

#[tokio::test]
async fn test_sidebar_links_match_role() {
    let mut ctx = TestContext::new().await;

    let admin = ctx.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let links = admin.links();
    assert!(links.contains(&"/users".to_string()));
    assert!(!links.contains(&"/enrollments".to_string()));
    assert_eq!(admin.chrome.active_link, "/");

    ctx.app.dispatch(Action::Logout).await;
    let visitor = ctx.login(JUAN_EMAIL, JUAN_PASSWORD).await;
    let links = visitor.links();
    assert!(!links.contains(&"/users".to_string()));
    assert!(links.contains(&"/enrollments".to_string()));

    let document = visitor.to_document();
    assert!(document.contains(r#"id="userWelcome""#));
    assert!(document.contains("Juan Pérez"));
}

#[tokio::test]
async fn test_every_rendered_link_resolves() {
    let mut ctx = TestContext::new().await;
    let frame = ctx.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    for link in frame.links() {
        let target = ctx.app.navigate(&link).await;
        assert_ne!(target.view.title, "Not found", "dead link {}", link);
        assert_ne!(target.view.title, "Error", "broken page behind {}", link);
    }
}
