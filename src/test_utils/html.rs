use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

pub(crate) async fn response_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Checks that `html` contains an alert whose headline is `message`.
#[track_caller]
pub(crate) fn assert_alert_message(html: &Html, message: &str) {
    let headline = html
        .select(&Selector::parse("[role=alert] p.font-medium").unwrap())
        .next()
        .expect("No alert found")
        .text()
        .collect::<String>();

    assert_eq!(headline.trim(), message);
}
