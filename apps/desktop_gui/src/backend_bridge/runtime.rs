//! Backend worker: owns the tokio runtime and the view controller.

use std::{sync::Arc, thread};

use client_core::{ViewController, ViewEvent, ViewSnapshot};
use crossbeam_channel::{Receiver, Sender};
use tokio::sync::{
    broadcast::{self, error::RecvError},
    watch,
};
use url::Url;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

/// `view_tx` always holds the newest snapshot; `on_update` wakes the ui after each replace.
pub fn launch(
    server_url: Url,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    view_tx: watch::Sender<ViewSnapshot>,
    on_update: impl Fn() + Send + 'static,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                on_update();
                return;
            }
        };

        runtime.block_on(async move {
            let controller = ViewController::connect(server_url);
            tokio::spawn(forward_view_events(
                controller.subscribe_events(),
                view_tx,
                on_update,
            ));

            // Initial load, same as any later refresh.
            tokio::spawn(run_command(Arc::clone(&controller), BackendCommand::Refresh));

            // Each command gets its own task so a slow request never blocks the next click.
            while let Ok(cmd) = cmd_rx.recv() {
                tokio::spawn(run_command(Arc::clone(&controller), cmd));
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}

pub async fn run_command(controller: Arc<ViewController>, cmd: BackendCommand) {
    match cmd {
        BackendCommand::Refresh => controller.fetch_state().await,
        BackendCommand::Activate { coord } => {
            if !controller.activate(coord).await {
                tracing::debug!(
                    row = coord.row,
                    col = coord.col,
                    "activation ignored, cell is not bound to a move"
                );
            }
        }
        BackendCommand::Reset => controller.reset_game().await,
    }
}

pub async fn forward_view_events(
    mut events: broadcast::Receiver<ViewEvent>,
    view_tx: watch::Sender<ViewSnapshot>,
    on_update: impl Fn(),
) {
    loop {
        match events.recv().await {
            Ok(ViewEvent::Updated(snapshot)) => {
                // Replacing never fails or blocks, so a busy ui only ever skips stale snapshots.
                view_tx.send_replace(snapshot);
                on_update();
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "view event subscriber lagged; newer snapshots follow");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{controller::FETCH_STATE_ERROR, Severity, StatusMessage};
    use shared::domain::Coord;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };
    use tokio::net::TcpListener;

    async fn unreachable_controller() -> Arc<ViewController> {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        ViewController::connect(Url::parse(&format!("http://{addr}/")).expect("url"))
    }

    fn spawn_forwarder(
        controller: &ViewController,
    ) -> (watch::Receiver<ViewSnapshot>, Arc<AtomicUsize>) {
        let (view_tx, view_rx) = watch::channel(ViewSnapshot::default());
        let wakeups = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakeups);
        tokio::spawn(forward_view_events(
            controller.subscribe_events(),
            view_tx,
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        ));
        (view_rx, wakeups)
    }

    async fn wait_for_wakeups(wakeups: &AtomicUsize, expected: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while wakeups.load(Ordering::SeqCst) < expected {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("ui was not woken for every update");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn refresh_failure_reaches_the_ui() {
        let controller = unreachable_controller().await;
        let (mut view_rx, wakeups) = spawn_forwarder(&controller);

        run_command(Arc::clone(&controller), BackendCommand::Refresh).await;
        wait_for_wakeups(&wakeups, 1).await;

        assert!(view_rx.has_changed().expect("sender alive"));
        let snapshot = view_rx.borrow_and_update().clone();
        assert_eq!(snapshot.view, None);
        assert_eq!(snapshot.message, Some(StatusMessage::error(FETCH_STATE_ERROR)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unread_ui_still_sees_the_newest_snapshot() {
        let controller = unreachable_controller().await;
        let (view_rx, wakeups) = spawn_forwarder(&controller);

        // Nothing drains the ui side between these two updates.
        controller.show_message("first", Severity::Info).await;
        controller.show_message("second", Severity::Error).await;
        wait_for_wakeups(&wakeups, 2).await;

        assert_eq!(view_rx.borrow().message, Some(StatusMessage::error("second")));
        assert_eq!(*view_rx.borrow(), controller.snapshot().await);
    }

    #[tokio::test]
    async fn activation_without_a_view_does_nothing() {
        let controller = unreachable_controller().await;
        let (view_rx, wakeups) = spawn_forwarder(&controller);

        run_command(
            Arc::clone(&controller),
            BackendCommand::Activate {
                coord: Coord::new(2, 3).expect("coord"),
            },
        )
        .await;
        tokio::task::yield_now().await;

        assert_eq!(controller.snapshot().await, Default::default());
        assert_eq!(wakeups.load(Ordering::SeqCst), 0);
        assert!(!view_rx.has_changed().expect("sender alive"));
    }
}
