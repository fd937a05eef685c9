use switchboard_core::{ServerEvent, SessionId, UserId};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{
    disconnect, join, user_ids, wait_for_connected_users, wait_for_delivery, Delivery,
    EVENT_TIMEOUT_MS,
};

#[tokio::test]
async fn test_departure_notification() {
    init_tracing();

    let (cmd_tx, mut delivery_rx, sink) = create_test_coordinator();
    let session_a = SessionId::new();
    let session_b = SessionId::new();

    join(&cmd_tx, &session_a, "lobby", "alice").await.expect("send join");
    join(&cmd_tx, &session_b, "lobby", "bob").await.expect("send join");
    for _ in 0..2 {
        wait_for_connected_users(&mut delivery_rx).await.expect("join");
    }

    disconnect(&cmd_tx, &session_b).await.expect("send disconnect");

    // The departure goes out process-wide so anyone mid-call with Bob
    // can reset, and only then do the rosters shrink.
    let departure = wait_for_delivery(&mut delivery_rx, EVENT_TIMEOUT_MS, |d| {
        matches!(
            d,
            Delivery::Broadcast {
                event: ServerEvent::UserDisconnected { .. }
            }
        )
    })
    .await
    .expect("departure broadcast");
    assert!(matches!(
        departure,
        Delivery::Broadcast {
            event: ServerEvent::UserDisconnected { user_id }
        } if user_id == UserId::from("bob")
    ));

    let connected = wait_for_connected_users(&mut delivery_rx)
        .await
        .expect("post-disconnect snapshot");
    assert_eq!(user_ids(&connected), vec!["alice"]);

    let last_roster = sink
        .events_for(&session_a)
        .await
        .into_iter()
        .rev()
        .find_map(|e| match e {
            ServerEvent::RoomUsers { users } => Some(users),
            _ => None,
        })
        .expect("roster for alice");
    assert_eq!(user_ids(&last_roster), vec!["alice"]);
}
