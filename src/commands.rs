// Command dispatch: builds the API client from the global options, runs
// one subcommand and converts any failure into a printed message plus a
// non-zero exit status. This is the only place errors are caught.

use crate::api::ApiClient;
use crate::cli::{Cli, Commands};
use crate::ui::{self, Theme, Themes};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Run the parsed command line, writing results to `out` and error
/// messages to `err`. Returns the process exit status.
pub fn run(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    run_with_themes(cli, Themes::from_choice(cli.color), out, err)
}

/// Same as [`run`] with the stream themes already resolved.
pub fn run_with_themes(
    cli: &Cli,
    themes: Themes,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8 {
    match execute(cli, themes, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            // Nothing useful left to do if stderr itself is gone.
            let _ = ui::render_error(err, themes.err, &format!("{:#}", e));
            EXIT_FAILURE
        }
    }
}

fn execute(cli: &Cli, themes: Themes, out: &mut dyn Write) -> Result<()> {
    let api = ApiClient::with_config(cli.client_config())?;
    debug!(base_url = api.base_url(), command = ?cli.command, "dispatching");

    if cli.banner {
        ui::render_banner(out, themes.out)?;
    }

    match &cli.command {
        Commands::Random { category } => handle_random(&api, themes.out, out, category.as_deref()),
        Commands::Categories => handle_categories(&api, themes.out, out),
        Commands::Search { query } => handle_search(&api, themes.out, out, query),
        Commands::Interactive => ui::main_menu(&api, themes),
    }
}

fn handle_random(
    api: &ApiClient,
    theme: Theme,
    out: &mut dyn Write,
    category: Option<&str>,
) -> Result<()> {
    let joke = ui::with_spinner("Fetching a joke...", || api.fetch_random_joke(category))?;
    ui::render_joke(out, theme, &joke)?;
    Ok(())
}

fn handle_categories(api: &ApiClient, theme: Theme, out: &mut dyn Write) -> Result<()> {
    let categories = ui::with_spinner("Fetching categories...", || api.fetch_categories())?;
    ui::render_categories(out, theme, &categories)?;
    Ok(())
}

fn handle_search(api: &ApiClient, theme: Theme, out: &mut dyn Write, query: &str) -> Result<()> {
    let jokes = ui::with_spinner("Searching...", || api.search_jokes(query))?;
    ui::render_search(out, theme, query, &jokes)?;
    Ok(())
}
