//! Server Status Command
//!
//! Health probe reporting the backend's database connection.

use gloo_net::http::Request;

use super::{api_url, into_json, HttpTodoApi, Result};
use crate::models::ServerStatus;

pub const STATUS_PATH: &str = "/status";

impl HttpTodoApi {
    pub async fn server_status(&self) -> Result<ServerStatus> {
        let response = Request::get(&api_url(self.base, STATUS_PATH)).send().await?;
        into_json(response).await
    }
}
