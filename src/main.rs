//! Cradle CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use cradle::cli::{Cli, CommandDispatcher, Commands};
use cradle::config::default_config_path;
use cradle::shell::is_ci;
use cradle::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cradle=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cradle=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Cradle starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let is_interactive = match &cli.command {
        Some(Commands::Create(args)) => !args.non_interactive && !is_ci(),
        _ => !is_ci(),
    };

    let mut ui = create_ui(is_interactive, output_mode);

    let config_path = match cli.config.clone().map_or_else(default_config_path, Ok) {
        Ok(path) => path,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(config_path);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if let Some(advice) = e.remediation() {
                ui.show_hint(&advice);
            }
            ExitCode::from(1)
        }
    }
}
