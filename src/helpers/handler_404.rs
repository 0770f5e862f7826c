use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use crate::site::footer::render_footer;

pub async fn page_not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(format!(
            "<h1>404 Not Found</h1>\n<p>Oops, there is nothing here. <a href=\"/\">Back to Home</a></p>\n{}",
            render_footer()
        )),
    )
}
