use std::fs;
use std::io::Read;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::cli::script::{ScriptError, run_script};
use crate::io::config_io;
use crate::model::config::Config;
use crate::model::list::TodoList;
use crate::model::view::Composition;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = effective_config(&cli)?;

    match cli.command {
        None => crate::tui::run(config),
        Some(Commands::Run(args)) => cmd_run(args, &config),
    }
}

/// Config file plus command-line overrides
fn effective_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = config_io::load_config(cli.config.as_deref())?;
    if let Some(composition) = cli.composition.as_deref() {
        config.view.composition = composition.parse::<Composition>()?;
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Script runner
// ---------------------------------------------------------------------------

fn cmd_run(args: RunArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = match &args.file {
        Some(path) => fs::read_to_string(path).map_err(ScriptError::IoError)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(ScriptError::IoError)?;
            buf
        }
    };

    let mut list = TodoList::with_config(&config.view);
    let mut rendered = Vec::new();
    run_script(&mut list, &source, |list| {
        if args.json {
            rendered.push(serde_json::to_string_pretty(&view_to_json(list)));
        } else {
            rendered.push(Ok(format_view(list).join("\n")));
        }
    })?;

    let mut first = true;
    for block in rendered {
        if !first && !args.json {
            println!();
        }
        first = false;
        println!("{}", block?);
    }
    Ok(())
}
