//! Behavioral tests for the health monitor and error reporter.
//!
//! The probe contract matters more than the wire details: it must always
//! resolve with a status, replace the stored snapshot wholesale, and never
//! surface transport failures as errors.

use promptdeck_core::{
    BackendConfig, ErrorReporter, HealthMonitor, ReportContext, ReportOptions,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Minimal HTTP server answering a fixed number of requests with 200 OK.
async fn serve_health_ok(listener: TcpListener, requests: usize) {
    for _ in 0..requests {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok",
            )
            .await;
    }
}

#[tokio::test]
async fn probe_against_dead_port_resolves_unavailable() {
    // Port 9 on localhost is unassigned in practice; connection is refused
    let config = BackendConfig::new("http://127.0.0.1:9");
    let monitor = HealthMonitor::new(&config);

    let status = monitor.check_backend_health().await;

    assert!(!status.available);
    assert!(status.error.is_some());
    assert_eq!(monitor.current_status(), status);
}

#[tokio::test]
async fn probe_against_live_server_resolves_available() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_health_ok(listener, 1));

    let config = BackendConfig::new(format!("http://{addr}"));
    let monitor = HealthMonitor::new(&config);

    let status = monitor.check_backend_health().await;

    assert!(status.available);
    assert!(status.error.is_none());
}

#[tokio::test]
async fn snapshot_is_replaced_wholesale() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_health_ok(listener, 1));

    let config = BackendConfig::new(format!("http://{addr}"));
    let monitor = HealthMonitor::new(&config);

    let up = monitor.check_backend_health().await;
    assert!(up.available);

    // Server is gone; the next snapshot must not inherit anything from the
    // previous one
    server.await.unwrap();
    let down = monitor.check_backend_health().await;

    assert!(!down.available);
    assert!(down.error.is_some());
    assert!(down.last_checked >= up.last_checked);
    assert_eq!(monitor.current_status(), down);
}

#[tokio::test]
async fn reporter_queues_toast_only_on_request() {
    let reporter = ErrorReporter::new();

    reporter.handle_error(
        &"section blew up",
        ReportContext::new("boundary:settings", "render"),
        ReportOptions {
            show_toast: false,
            log_to_console: false,
        },
    );
    reporter.handle_error(
        &"widget blew up",
        ReportContext::new("boundary:preview", "render"),
        ReportOptions {
            show_toast: true,
            log_to_console: false,
        },
    );

    let toasts = reporter.take_pending();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].source, "boundary:preview");
    assert!(reporter.take_pending().is_empty());
}
