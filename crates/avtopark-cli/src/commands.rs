//! Command handlers

use std::io::{Read, Write};

use avtopark_app::app;
use avtopark_app::config::Config;
use avtopark_domain::service::report;
use avtopark_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_listing, output_outcome};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Create { vehicle_type, wait } => {
            let outcome = app::create_vehicle(vehicle_type.as_deref(), &config);
            output_outcome(format, &outcome)?;

            // An unknown type is a reported outcome, not a failure
            if wait || config.wait_on_exit {
                wait_for_keypress()?;
            }
            Ok(())
        }

        Commands::List => output_listing(format),

        Commands::Config {
            show,
            set_default_type,
            set_output,
            set_wait,
            reset,
        } => handle_config(config, show, set_default_type, set_output, set_wait, reset),
    }
}

/// Print the exit prompt and block until one byte of input arrives.
/// EOF also ends the wait.
fn wait_for_keypress() -> Result<()> {
    print!("{}", report::MSG_APP_EXIT);
    std::io::stdout().flush()?;

    let mut buf = [0u8; 1];
    let _ = std::io::stdin().read(&mut buf)?;
    Ok(())
}

fn handle_config(
    mut config: Config,
    show: bool,
    set_default_type: Option<String>,
    set_output: Option<OutputFormat>,
    set_wait: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;

    if let Some(vehicle_type) = set_default_type {
        config.default_vehicle_type = vehicle_type;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(wait) = set_wait {
        config.wait_on_exit = wait;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        print!("{}", config);
    }

    Ok(())
}
