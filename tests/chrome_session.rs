//! Real-browser checks. They need a local Chrome/Chromium, so run them with
//! `cargo test -- --ignored`.

use parcel_watch::browser::{ChromeSession, LaunchOptions, Selectors, TrackingSession};
use pretty_assertions::assert_eq;
use std::time::Duration;

/// A tracking form whose text boxes sit under a full-page overlay. Typed values are mirrored into
/// a span so they show up in the extracted text.
const COVERED_FORM: &str = r#"<!DOCTYPE html>
<html><body>
<div style="position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 10"></div>
<input class="textBox"><input class="textBox">
<button type="button" onclick="document.getElementById('state').textContent = 'Colis livré'">OK</button>
<span id="echo"></span>
<p id="state"></p>
<script>
document.addEventListener('input', () => {
  document.getElementById('echo').textContent = Array.from(document.querySelectorAll('input.textBox'))
    .map(input => input.value)
    .join('|');
});
</script>
</body></html>"#;

fn data_url(html: &str) -> String {
    let encoded: String = html
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                char::from(b).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    format!("data:text/html;charset=utf-8,{encoded}")
}

#[tokio::test]
#[ignore = "needs a local Chrome"]
async fn types_into_covered_fields() {
    let mut session = ChromeSession::launch(&LaunchOptions::default(), Selectors::default())
        .await
        .expect("Failed to launch browser");

    session.navigate(&data_url(COVERED_FORM)).await.unwrap();
    session
        .fill_form("A123", "75001", Duration::ZERO)
        .await
        .unwrap();
    session.submit().await.unwrap();
    let blocks = session.text_blocks().await.unwrap();
    session.close().await.unwrap();

    assert_eq!(blocks, vec!["A123|75001", "Colis livré"]);
}

#[tokio::test]
#[ignore = "needs a local Chrome"]
async fn missing_form_is_reported_and_session_still_closes() {
    let mut session = ChromeSession::launch(&LaunchOptions::default(), Selectors::default())
        .await
        .expect("Failed to launch browser");

    session
        .navigate(&data_url("<html><body><p>Maintenance</p></body></html>"))
        .await
        .unwrap();
    let err = session
        .fill_form("A123", "75001", Duration::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        parcel_watch::Error::FormFieldsNotFound { found: 0, .. }
    ));
    assert!(!session.wait_for_result(Duration::ZERO, Duration::ZERO).await.unwrap());
    session.reload().await.unwrap();
    session.close().await.unwrap();
}
