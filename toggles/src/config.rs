use std::net::SocketAddr;

use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct Config {
    #[envconfig(default = "127.0.0.1:3001")]
    pub address: SocketAddr,

    #[envconfig(default = "https://sheets.googleapis.com")]
    pub sheets_api_url: String,

    pub sheets_api_key: String,

    #[envconfig(default = "3000")]
    pub sheet_timeout_ms: u64,
}
