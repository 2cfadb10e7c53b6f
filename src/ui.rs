// UI layer: turns API results into terminal text. Rendering functions take
// any `io::Write` so the same code serves stdout, stderr and tests. Colors
// come from crossterm, the request spinner from indicatif and the
// interactive menu from dialoguer.

use crate::api::ApiClient;
use crate::cli::ColorChoice;
use anyhow::Result;
use crossterm::style::{style, StyledContent, Stylize};
use crossterm::tty::IsTty;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

const JOKE_HEADER: &str = "--- CHUCK SAYS: BEWARE! ---";
pub const CATEGORY_SEPARATOR: &str = " | ";

const BANNER: &str = r"  ____ _                _       ____ _     ___
 / ___| |__  _   _  ___| | __  / ___| |   |_ _|
| |   | '_ \| | | |/ __| |/ / | |   | |    | |
| |___| | | | |_| | (__|   <  | |___| |___ | |
 \____|_| |_|\__,_|\___|_|\_\  \____|_____|___|";

/// Whether output gets ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

/// Themes for the two output streams, resolved independently so that
/// redirecting one of them does not change the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Themes {
    pub out: Theme,
    pub err: Theme,
}

impl Themes {
    /// Resolve `--color` against the real stdout and stderr.
    pub fn from_choice(choice: ColorChoice) -> Self {
        Self::resolve(choice, io::stdout().is_tty(), io::stderr().is_tty())
    }

    pub fn resolve(choice: ColorChoice, stdout_tty: bool, stderr_tty: bool) -> Self {
        Themes {
            out: Theme::resolve(choice, stdout_tty),
            err: Theme::resolve(choice, stderr_tty),
        }
    }
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Theme { color }
    }

    /// `auto` colors only when the stream is a terminal.
    fn resolve(choice: ColorChoice, is_tty: bool) -> Self {
        match choice {
            ColorChoice::Always => Theme::new(true),
            ColorChoice::Never => Theme::new(false),
            ColorChoice::Auto => Theme::new(is_tty),
        }
    }

    fn paint(
        &self,
        text: &str,
        f: impl FnOnce(StyledContent<String>) -> StyledContent<String>,
    ) -> String {
        if self.color {
            f(style(text.to_string())).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render_banner(out: &mut dyn Write, theme: Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.paint(BANNER, |s| s.red().bold()))
}

/// Print a single joke framed by a header and a footer.
pub fn render_joke(out: &mut dyn Write, theme: Theme, joke: &str) -> io::Result<()> {
    let footer = "-".repeat(JOKE_HEADER.len());
    writeln!(out)?;
    writeln!(out, "{}", theme.paint(JOKE_HEADER, |s| s.yellow().on_red().bold()))?;
    writeln!(out, "{}", theme.paint(joke, |s| s.white().on_red().bold()))?;
    writeln!(out, "{}", theme.paint(&footer, |s| s.yellow().on_red().bold()))?;
    writeln!(out)
}

/// Print the categories on one line, separated by `CATEGORY_SEPARATOR`.
pub fn render_categories(
    out: &mut dyn Write,
    theme: Theme,
    categories: &[String],
) -> io::Result<()> {
    let line = categories
        .iter()
        .map(|c| theme.paint(c, |s| s.green()))
        .collect::<Vec<_>>()
        .join(CATEGORY_SEPARATOR);
    writeln!(out)?;
    writeln!(out, "{}", theme.paint("Available Categories:", |s| s.cyan().bold()))?;
    writeln!(out, "{}", line)?;
    writeln!(out)
}

/// Print search hits as a numbered list, starting at 1.
pub fn render_search(
    out: &mut dyn Write,
    theme: Theme,
    query: &str,
    jokes: &[String],
) -> io::Result<()> {
    let header = format!("--- Found {} Joke(s) for '{}' ---", jokes.len(), query);
    writeln!(out)?;
    writeln!(out, "{}", theme.paint(&header, |s| s.yellow().bold()))?;
    writeln!(out)?;
    for (i, joke) in jokes.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, theme.paint(joke, |s| s.white()))?;
        writeln!(out)?;
    }
    let footer = "-".repeat(header.chars().count());
    writeln!(out, "{}", theme.paint(&footer, |s| s.yellow().bold()))
}

pub fn render_error(err: &mut dyn Write, theme: Theme, message: &str) -> io::Result<()> {
    let line = format!("Error: {}", message);
    writeln!(err, "{}", theme.paint(&line, |s| s.red().bold()))
}

/// Run `f` while a spinner with `message` turns on stderr. indicatif hides
/// the spinner by itself when stderr is not a terminal.
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    let template = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(template);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = f();
    spinner.finish_and_clear();
    result
}

/// Interactive menu. Runs a select loop until the user picks "Exit".
/// API failures are printed and the loop goes on.
pub fn main_menu(api: &ApiClient, themes: Themes) -> Result<()> {
    let items = ["Random joke", "Random joke from a category", "Search jokes", "Exit"];
    loop {
        let selection = Select::new().items(&items).default(0).interact()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut err = io::stderr();
        match selection {
            0 => match with_spinner("Fetching a joke...", || api.fetch_random_joke(None)) {
                Ok(joke) => render_joke(&mut out, themes.out, &joke)?,
                Err(e) => render_error(&mut err, themes.err, &e.to_string())?,
            },
            1 => {
                let fetched = with_spinner("Fetching categories...", || api.fetch_categories());
                let categories = match fetched {
                    Ok(categories) => categories,
                    Err(e) => {
                        render_error(&mut err, themes.err, &e.to_string())?;
                        continue;
                    }
                };
                if categories.is_empty() {
                    render_error(&mut err, themes.err, "The service returned no categories")?;
                    continue;
                }
                let picked = Select::new().items(&categories).default(0).interact()?;
                let category = categories[picked].as_str();
                let fetched =
                    with_spinner("Fetching a joke...", || api.fetch_random_joke(Some(category)));
                match fetched {
                    Ok(joke) => render_joke(&mut out, themes.out, &joke)?,
                    Err(e) => render_error(&mut err, themes.err, &e.to_string())?,
                }
            }
            2 => {
                let query: String = Input::new().with_prompt("Search for").interact_text()?;
                match with_spinner("Searching...", || api.search_jokes(&query)) {
                    Ok(jokes) => render_search(&mut out, themes.out, &query, &jokes)?,
                    Err(e) => render_error(&mut err, themes.err, &e.to_string())?,
                }
            }
            3 => break,
            _ => {}
        }
    }
    Ok(())
}
