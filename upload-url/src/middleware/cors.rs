use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Methods a browser may use against the function
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Request headers a browser may send with the upload URL request
pub const ALLOWED_HEADERS: &str = "content-type";

/// Answers CORS preflight requests without invoking the function
///
/// `OPTIONS` gets an empty `204` listing the allowed methods and headers;
/// the origin and credentials headers are added by the outer CORS layers.
/// Every other request is passed through.
pub async fn answer_preflight(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );

    response
}
