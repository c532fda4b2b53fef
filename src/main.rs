//! # api-tester Main Entry Point
//!
//! Dispatches between the interactive shell and the one-shot modes.

use anyhow::Result;
use api_tester::cmd_args::{CommandLineArgs, Mode};
use api_tester::config::{self, Settings, LOG_LEVEL_ENV_VAR};
use api_tester::repl::{interrupt, run_request};
use api_tester::views::Style;
use api_tester::{
    HttpService, Method, ReplController, RequestSpec, ResponseRenderer, SessionState, TokenStore,
};
use std::process::ExitCode;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<ExitCode> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let settings = load_settings(&cmd_args);
    let store = TokenStore::new(config::get_token_path()?);
    tracing::debug!("Using token file {}", store.path().display());

    let style = Style::new(atty::is(atty::Stream::Stdout));

    match cmd_args.mode() {
        Mode::SetToken(token) => match store.save(token) {
            Ok(()) => println!("{}", style.green("✓ Token saved!")),
            Err(e) => {
                eprintln!("{}", style.red(&format!("Failed to save token: {e}")));
                return Ok(ExitCode::FAILURE);
            }
        },
        Mode::ClearToken => match store.clear() {
            Ok(true) => println!("{}", style.green("✓ Token cleared!")),
            Ok(false) => println!("{}", style.yellow("No token to clear.")),
            Err(e) => {
                eprintln!("{}", style.red(&format!("Failed to clear token: {e}")));
                return Ok(ExitCode::FAILURE);
            }
        },
        Mode::SingleRequest(url) => {
            let spec = RequestSpec::new(Method::Get, url).with_token(store.load().as_deref());
            let outcome = run_request(
                &HttpService::new(settings.timeout_secs),
                &ResponseRenderer::new(style),
                &spec,
                settings.show_headers,
                cmd_args.verbose(),
                &mut std::io::stdout().lock(),
            )?;
            if outcome.is_transport_error() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Mode::Interactive => {
            let watcher = interrupt::spawn_interrupt_watcher(move || {
                let _ = interrupt::write_interrupted(&mut std::io::stdout(), style);
                std::process::exit(0);
            });
            if let Err(e) = watcher {
                tracing::warn!("Ctrl-C handler not installed: {}", e);
            }

            let state = SessionState::from_store(&store, settings.show_headers);
            let mut app = ReplController::with_io_streams(
                state,
                store,
                HttpService::new(settings.timeout_secs),
                ResponseRenderer::new(style),
                std::io::stdin().lock(),
                std::io::stdout(),
            );
            app.set_verbose(cmd_args.verbose());
            app.run()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Settings file first, then command-line overrides
fn load_settings(cmd_args: &CommandLineArgs) -> Settings {
    let path = config::get_config_path();
    let mut settings = Settings::load(&path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring settings file {}: {}", path, e);
        eprintln!("Warning: ignoring settings file {path}: {e}");
        Settings::default()
    });

    if let Some(timeout) = cmd_args.timeout() {
        settings.timeout_secs = timeout;
    }
    if cmd_args.no_headers() {
        settings.show_headers = false;
    }
    tracing::debug!("Effective settings: {:?}", settings);
    settings
}

fn init_tracing_subscriber() {
    let level = std::env::var(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_new(format!(
        "{level},reqwest=warn,hyper=warn,hyper_util=warn,rustls=warn"
    ))
    .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
