//! Simulator harness for the scan session.
//!
//! Reads one metadata callback per stdin line (`qr:ABC123`, `ean13:...`,
//! `face`, `;`-separated batches) and prints the scanned code on stdout.
//! The simulated platform is configured through `QR_SCAN__SIMULATOR__*`.
//!
//! Stdin is read only after the session has settled. With the default
//! `not_determined` permission the simulated prompt is answered first, so
//! piped lines always reach a scanning session. When the session ends up
//! inactive or failed, stdin is left unread and the harness exits without
//! printing a code.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use qr_scan_session::adapters::{parse_metadata_line, RecordingDelegate, SimulatedPlatform};
use qr_scan_session::application::{ScanController, ScanSession};
use qr_scan_session::config::{AppConfig, TelemetryConfig};
use qr_scan_session::domain::scan::ScanStatus;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.telemetry)?;

    let platform = SimulatedPlatform::from_config(&config.simulator);
    let (code_tx, mut code_rx) = mpsc::unbounded_channel();
    let delegate = Arc::new(RecordingDelegate::with_channel(code_tx));

    let mut session = ScanSession::new(
        config.scanner.capture_settings(),
        platform.ports(),
        platform.pipeline(),
    );
    session.set_delegate(&delegate);

    let (controller, handle) = ScanController::new(session);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut controller_task = tokio::spawn(controller.run(shutdown_rx));

    info!(session_id = %handle.session_id(), "Scanner view activated");
    handle.activate()?;
    handle.view_will_appear()?;

    let settled = handle.settled().await;
    if settled != ScanStatus::Scanning {
        warn!(status = %settled, "Scan session is not scanning, stdin ignored");
        shutdown_tx.send(true).ok();
        let session = controller_task.await?;
        report(&session);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let session = loop {
        tokio::select! {
            finished = &mut controller_task => break finished?,

            line = lines.next_line() => match line? {
                Some(line) => match parse_metadata_line(&line) {
                    Ok(objects) => {
                        if handle.deliver_metadata(objects).is_err() {
                            debug!("Scan session closed, waiting for controller");
                        }
                    }
                    Err(e) => warn!(error = %e, "Skipping unreadable metadata line"),
                },
                None => {
                    handle.view_will_disappear().ok();
                    shutdown_tx.send(true).ok();
                    break (&mut controller_task).await?;
                }
            },
        }
    };

    if let Ok(code) = code_rx.try_recv() {
        println!("{}", code);
    }
    report(&session);

    Ok(())
}

fn report(session: &ScanSession) {
    info!(
        session_id = %session.id(),
        status = %session.status(),
        dismissed = session.is_dismissed(),
        "Scanner view torn down"
    );
}

fn init_tracing(telemetry: &TelemetryConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(telemetry.env_filter()?)
        .with_writer(std::io::stderr);

    if telemetry.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
