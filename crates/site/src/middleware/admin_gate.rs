//! Coarse route protection for the admin subtree.
//!
//! Redirects requests to `/admin/*` straight to the login page when the
//! session cookie is absent. This is only a presence check on the cookie
//! header; it does not validate the session. Handlers behind the gate
//! still verify the logged-in admin via `RequireAdminAuth`, which reads
//! the session store.

use axum::{
    extract::Request,
    http::header::COOKIE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::session::SESSION_COOKIE_NAME;

/// Middleware that redirects cookie-less requests under `/admin` to the
/// login page. The login page itself is exempt so a fresh browser can
/// reach it.
///
/// This layer runs inside the router nested at `/admin`, where axum has
/// already stripped the prefix, so the exemption matches the stripped
/// path.
pub async fn require_admin_cookie(request: Request, next: Next) -> Response {
    let path = request.uri().path();

    let exempt = path == "/login" || path == "/login/";
    if !exempt && !has_session_cookie(&request) {
        return Redirect::to("/admin/login").into_response();
    }

    next.run(request).await
}

fn has_session_cookie(request: &Request) -> bool {
    request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .any(|pair| {
            pair.trim()
                .split_once('=')
                .is_some_and(|(name, _)| name == SESSION_COOKIE_NAME)
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{StatusCode, header::LOCATION},
        middleware::from_fn,
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;

    /// Mirrors the production shape: the gate layered inside the router
    /// that gets nested at `/admin`, so the prefix is stripped before the
    /// middleware sees the path.
    fn gated_app() -> Router {
        let admin = Router::new()
            .route("/", get(|| async { "dashboard" }))
            .route("/login", get(|| async { "login" }))
            .layer(from_fn(require_admin_cookie));
        Router::new().nest("/admin", admin)
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> Request {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_login_page_reachable_without_cookie() {
        let response = gated_app()
            .oneshot(get_request("/admin/login", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_redirects_without_cookie() {
        let response = gated_app()
            .oneshot(get_request("/admin", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/admin/login"
        );
    }

    #[tokio::test]
    async fn test_dashboard_passes_with_cookie() {
        let response = gated_app()
            .oneshot(get_request(
                "/admin",
                Some("scalehouse_admin_session=abc123"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    fn request_with_cookie(cookie: &str) -> Request {
        Request::builder()
            .uri("/admin")
            .header(COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_detects_session_cookie() {
        let req = request_with_cookie("scalehouse_admin_session=abc123");
        assert!(has_session_cookie(&req));
    }

    #[test]
    fn test_detects_session_cookie_among_others() {
        let req = request_with_cookie("theme=dark; scalehouse_admin_session=abc123; lang=en");
        assert!(has_session_cookie(&req));
    }

    #[test]
    fn test_ignores_other_cookies() {
        let req = request_with_cookie("theme=dark; lang=en");
        assert!(!has_session_cookie(&req));
    }

    #[test]
    fn test_ignores_prefix_named_cookie() {
        let req = request_with_cookie("scalehouse_admin_session_old=abc123");
        assert!(!has_session_cookie(&req));
    }

    #[test]
    fn test_no_cookie_header() {
        let req = Request::builder()
            .uri("/admin")
            .body(Body::empty())
            .unwrap();
        assert!(!has_session_cookie(&req));
    }
}
