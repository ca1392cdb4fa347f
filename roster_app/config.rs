use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub http_port: u16,
    pub rpc_port: u16,
    /// Position whose players are dumped to the log at startup.
    pub list_position: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("ROSTER_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let rpc_port = match env::var("ROSTER_RPC_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(50051),
            Err(_) => 50051,
        };

        let list_position = match env::var("ROSTER_LIST_POSITION") {
            Ok(val) => val,
            Err(_) => "QB".to_string(),
        };

        Self {
            http_port,
            rpc_port,
            list_position,
        }
    }
}
