
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Level;

use switchboard_server::{Coordinator, CoordinatorCommand};

use crate::utils::{Delivery, MockEventSink};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_coordinator() -> (
    mpsc::Sender<CoordinatorCommand>,
    mpsc::UnboundedReceiver<Delivery>,
    MockEventSink,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<CoordinatorCommand>(100);
    let (sink, delivery_rx) = MockEventSink::new();

    let coordinator = Coordinator::new(cmd_rx, Arc::new(sink.clone()));

    tokio::spawn(async move {
        coordinator.run().await;
    });

    (cmd_tx, delivery_rx, sink)
}
