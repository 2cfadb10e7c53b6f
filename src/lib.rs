// Library root
// ------------
// The binary (`main.rs`) only parses arguments, sets up logging and hands
// over to `commands::run`.
//
// Module responsibilities:
// - `api`: blocking HTTP client for the jokes service.
// - `error`: typed failures of the API client.
// - `cli`: clap definition of the command line.
// - `commands`: dispatch, error boundary and exit codes.
// - `ui`: text rendering, spinner and the interactive menu.
pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod ui;

pub use api::{ApiClient, ClientConfig};
pub use error::{ApiError, ErrorKind};
