//! Request and response shapes. Defaults mirror what the web client expects
//! when a field is left out.

pub mod analysis;
pub mod application;
pub mod job;
pub mod resume;
pub mod settings;
pub mod user;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
