use crate::model::session::SessionId;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// One roster entry: an identity together with the session it is
/// currently reachable on.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Participant {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "socketId")]
    pub session_id: SessionId,
}
