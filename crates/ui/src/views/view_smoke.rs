use services::CameraError;

use super::test_harness::{StubCamera, setup_run_view, setup_test_view};

#[tokio::test(flavor = "current_thread")]
async fn test_view_renders_fixed_element_ids() {
    let mut harness = setup_test_view(StubCamera(Ok(())));
    harness.rebuild();
    let html = harness.render();

    for id in ["webcam", "startBtn", "patientName", "statusText", "progress-bar-fill"] {
        let needle = format!(r#"id="{id}""#);
        assert!(html.contains(&needle), "missing {needle} in {html}");
    }
    assert!(html.contains("Start Test"), "missing start label in {html}");
    assert!(!html.contains("flash-overlay"), "overlay shown before run in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_reports_denied_camera() {
    let mut harness = setup_test_view(StubCamera(Err(CameraError::Denied(
        "NotAllowedError".to_string(),
    ))));
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("Please enable webcam access."),
        "missing camera status in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_keeps_status_empty_when_camera_granted() {
    let mut harness = setup_test_view(StubCamera(Ok(())));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("webcam access"), "unexpected camera status in {html}");
    assert!(!html.contains("status-error"), "unexpected error status in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn blank_name_shows_alert_banner_without_status() {
    let mut harness = setup_run_view(&[""]);
    harness.rebuild();
    let renders = harness
        .drive_until(10, |html| html.contains(r#"role="alert""#))
        .await;
    let html = renders.last().expect("at least one render");

    assert!(html.contains(r#"role="alert""#), "missing alert banner in {html}");
    assert!(html.contains("Please enter a patient name."), "{html}");
    assert!(!html.contains("Test running..."), "status set for blank name in {html}");
    assert!(!html.contains("Test completed"), "{html}");
    assert!(!html.contains("disabled"), "start button left disabled in {html}");
    assert!(renders.iter().all(|html| !html.contains("flash-overlay")));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn named_run_flashes_then_links_results() {
    let mut harness = setup_run_view(&["Ada"]);
    harness.rebuild();
    let renders = harness
        .drive_until(400, |html| html.contains("Test completed for Ada."))
        .await;
    let html = renders.last().expect("at least one render");

    assert!(html.contains("✅ Test completed for Ada."), "run never finished: {html}");
    assert!(
        html.contains("width:100%") || html.contains("width: 100%"),
        "progress not full in {html}"
    );
    assert!(html.contains(r#"href="/results/Ada""#), "{html}");
    assert!(!html.contains("flash-overlay"), "overlay left up in {html}");
    assert!(
        renders.iter().any(|html| html.contains("flash-overlay")),
        "overlay never shown"
    );
    assert!(
        renders
            .iter()
            .any(|html| html.contains("Test running...") && html.contains("disabled")),
        "start button not disabled while running"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn next_run_clears_previous_alert() {
    let mut harness = setup_run_view(&["", "Ada"]);
    harness.rebuild();
    let renders = harness
        .drive_until(400, |html| html.contains("Test completed for Ada."))
        .await;
    let html = renders.last().expect("at least one render");

    assert!(
        renders.iter().any(|html| html.contains(r#"role="alert""#)),
        "blank run never alerted"
    );
    assert!(html.contains("Test completed for Ada."), "{html}");
    assert!(!html.contains(r#"role="alert""#), "stale alert in {html}");
}
