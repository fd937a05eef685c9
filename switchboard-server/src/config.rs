/// Runtime settings for the signaling server, mirroring the knobs the
/// deployment exposes through the environment (`HOST`, `PORT`,
/// `CLIENT_URL`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Exact origin allowed to reach the signaling endpoint. `None`
    /// allows any origin.
    pub client_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            client_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
