//! Terminal Sound CLI entry point

use std::process::ExitCode;

use clap::Parser;

use terminal_sound::cli::{
    app::{alert_options, cli_config, load_merged_config, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    generate_cmd::{handle_generate_command, GenerateArgs},
    logging,
    presenter::Presenter,
    run_cmd::{hook_command, run_command},
    sound_cmd::handle_sound_command,
    watch_cmd::watch_command,
};
use terminal_sound::domain::config::AppConfig;
use terminal_sound::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let presenter = Presenter::new();

    let overrides = cli_config(&cli);

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Generate {
            output,
            sample_rate,
            duration,
            frequency,
            volume,
            fade,
        } => {
            let args = GenerateArgs {
                output,
                sample_rate,
                duration,
                frequency,
                volume,
                fade,
            };
            match handle_generate_command(args, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    let code = if e.is_usage() {
                        EXIT_USAGE_ERROR
                    } else {
                        EXIT_ERROR
                    };
                    ExitCode::from(code)
                }
            }
        }
        Commands::Sound { action } => {
            let store = XdgConfigStore::new();
            let config = load_merged_config(overrides).await;
            match handle_sound_command(action, &store, &config, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    let code = if e.is_usage() {
                        EXIT_USAGE_ERROR
                    } else {
                        EXIT_ERROR
                    };
                    ExitCode::from(code)
                }
            }
        }
        Commands::Run { label, command } => {
            let config = load_merged_config(overrides).await;
            let options = match alert_options(&config) {
                Ok(options) => options,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            run_command(options, label, command, &presenter).await
        }
        Commands::Hook { exit_code, label } => {
            let config = load_merged_config(overrides).await;
            let options = match alert_options(&config) {
                Ok(options) => options,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            hook_command(options, exit_code, label).await
        }
        Commands::Watch { keywords } => {
            let keyword_override = AppConfig {
                keyword_detection: keywords.then_some(true),
                ..Default::default()
            };
            let config = load_merged_config(overrides.merge(keyword_override)).await;
            let options = match alert_options(&config) {
                Ok(options) => options,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            watch_command(options, &presenter).await
        }
    }
}
