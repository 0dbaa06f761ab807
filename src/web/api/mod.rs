mod catchers;
mod email_controller;
pub mod server;
mod transcript_controller;
