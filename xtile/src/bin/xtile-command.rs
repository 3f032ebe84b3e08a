use anyhow::{Context, Result};
use clap::{arg, command};
use std::fs::OpenOptions;
use std::io::prelude::*;
use xdg::BaseDirectories;
use xtile_core::{Command, CommandPipe};

fn main() -> Result<()> {
    let matches = get_command().get_matches();

    if matches.get_flag("list") {
        print_commandlist();
    }

    let Some(commands) = matches.get_many::<String>("COMMAND") else {
        return Ok(());
    };
    let commands = commands
        .map(|command| command.parse::<Command>())
        .collect::<Result<Vec<_>, _>>()?;

    let file_name = CommandPipe::pipe_name();
    let file_path = BaseDirectories::with_prefix("xtile")?
        .find_runtime_file(&file_name)
        .with_context(|| format!("ERROR: Couldn't find {}, is xtile running?", file_name.display()))?;
    let mut file = OpenOptions::new()
        .append(true)
        .open(file_path)
        .with_context(|| format!("ERROR: Couldn't open {}", file_name.display()))?;
    for command in commands {
        writeln!(file, "{}", command.name())
            .with_context(|| format!("ERROR: Couldn't write {} to the pipe", command.name()))?;
    }
    Ok(())
}

fn get_command() -> clap::Command {
    command!("xtile-command")
        .about("Sends commands to a running xtile")
        .help_template(xtile::utils::get_help_template())
        .args(&[
            arg!(-l --list "Print a list of available commands with their ids."),
            arg!([COMMAND] ... "Name or id of the command to be sent. See 'list' flag."),
        ])
}

fn print_commandlist() {
    println!("Available commands:\n");
    println!("{:>4}  NAME", "ID");
    for command in Command::all() {
        println!("{:>4}  {}", command.id(), command.name());
    }
}
