use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Prints one line per request to stdout:
/// local time, duration, body size, status, method and path with query.
///
/// The body is buffered to measure it, so this must stay outermost.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = format_number(bytes.len());
            println!("{}", log_line(&method, &uri, parts.status, &size, start.elapsed()));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {} {}: {}", method, uri.path(), e);
            println!("{}", log_line(&method, &uri, parts.status, "error", start.elapsed()));
            Response::from_parts(parts, Body::default())
        }
    }
}

/// Time colour: cyan below 400, yellow for client errors, red for server errors.
fn status_color(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "31"
    } else if status.is_client_error() {
        "33"
    } else {
        "36"
    }
}

fn log_line(method: &Method, uri: &Uri, status: StatusCode, size: &str, elapsed: Duration) -> String {
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(status),
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method.as_str(),
        target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_keeps_report_query() {
        let uri: Uri = "/api/report/revenue-over-time/?period=week".parse().unwrap();
        let line = log_line(&Method::GET, &uri, StatusCode::OK, "1 024", Duration::from_millis(12));
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("|    12ms |"));
        assert!(line.contains("|        1 024 |"));
        assert!(line.ends_with("200    GET /api/report/revenue-over-time/?period=week"));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(StatusCode::CREATED), "36");
        assert_eq!(status_color(StatusCode::NOT_FOUND), "33");
        assert_eq!(status_color(StatusCode::INTERNAL_SERVER_ERROR), "31");
    }
}
