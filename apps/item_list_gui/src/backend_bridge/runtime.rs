//! Backend worker: owns the tokio runtime, runs the single load and forwards
//! every published state to the UI.

use std::{sync::Arc, thread};

use client_core::{LoadController, Settings};
use crossbeam_channel::Sender;

use crate::controller::events::{UiError, UiEvent};

pub fn launch(settings: Settings, ui_tx: Sender<UiEvent>, repaint: egui::Context) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::startup(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                repaint.request_repaint();
                return;
            }
        };

        runtime.block_on(async move {
            let controller = match LoadController::from_settings(&settings) {
                Ok(controller) => Arc::new(controller),
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::startup(format!(
                        "cannot load items from '{}': {err}",
                        settings.endpoint_url
                    ))));
                    tracing::error!("failed to build records client: {err}");
                    repaint.request_repaint();
                    return;
                }
            };

            let mut state_rx = controller.subscribe();
            let load = controller.start();

            loop {
                let state = state_rx.borrow_and_update().clone();
                let settled = !state.is_loading();
                if ui_tx.send(UiEvent::StateChanged(state)).is_err() {
                    tracing::debug!("ui closed before records settled");
                    break;
                }
                repaint.request_repaint();
                if settled || state_rx.changed().await.is_err() {
                    break;
                }
            }

            if let Err(err) = load.await {
                tracing::error!("records load task failed: {err}");
            }
        });
    });
}
