use crate::coordinator::{CoordinatorCommand, RelayMessage};
use crate::signaling::SignalingService;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use switchboard_core::{ClientEvent, SessionId};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, service))
}

async fn handle_socket(socket: WebSocket, service: SignalingService) {
    let session = SessionId::new();
    info!("User connected: {session}");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    service.add_session(session.clone(), tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();
        let session = session.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => {
                            let cmd = command_for(session.clone(), event);
                            if let Err(e) = service.command_tx.send(cmd).await {
                                error!("Coordinator died: {}", e);
                                break;
                            }
                        }
                        Err(e) => warn!("Ignoring invalid frame from {session}: {e}"),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Pull the outbound sender before announcing the disconnect so the
    // departure broadcasts never target this dead socket. The single
    // Disconnect goes down the same channel as everything the socket
    // sent, so cleanup cannot overtake commands queued earlier.
    service.remove_session(&session);
    let _ = service
        .command_tx
        .send(CoordinatorCommand::Disconnect {
            session: session.clone(),
        })
        .await;

    info!("User disconnected: {session}");
}

fn command_for(session: SessionId, event: ClientEvent) -> CoordinatorCommand {
    match event {
        ClientEvent::Join { room, user_id } => CoordinatorCommand::Join {
            session,
            room,
            user: user_id,
        },
        ClientEvent::Leave { room, user_id } => CoordinatorCommand::Leave {
            room,
            user: user_id,
        },
        ClientEvent::Offer { offer, to, from } => CoordinatorCommand::Relay {
            session,
            message: RelayMessage::Offer { offer, to, from },
        },
        ClientEvent::Answer { answer, to } => CoordinatorCommand::Relay {
            session,
            message: RelayMessage::Answer { answer, to },
        },
        ClientEvent::IceCandidate { candidate, to } => CoordinatorCommand::Relay {
            session,
            message: RelayMessage::IceCandidate { candidate, to },
        },
        ClientEvent::CallDeclined { to } => CoordinatorCommand::Relay {
            session,
            message: RelayMessage::CallDeclined { to },
        },
    }
}
