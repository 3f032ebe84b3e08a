use anyhow::Result;
use clap::{arg, command};
use std::path::{Path, PathBuf};
use xtile::Config;

fn main() -> Result<()> {
    let matches = command!("xtile Check")
        .about("Checks syntax and values of the configuration file")
        .help_template(xtile::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default location otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m xtile version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match check_config_file(config_file.as_deref()) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config.check_log_level(verbose);
            config.check_modkey(verbose);
            check_keybinds(&config, verbose);
        }
        Err(e) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed. Reason: {e:#} \x1b[0m");
        }
    }

    println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
    check_environment(verbose);
    Ok(())
}

/// Loads the given file, or the default one (creating it when missing), and validates it.
fn check_config_file(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return xtile::load(None);
    };
    let config = xtile::load_file(path)?;
    config.check()?;
    Ok(config)
}

fn check_keybinds(config: &Config, verbose: bool) {
    for keybind in &config.keybind {
        match keybind.to_core(&config.modkey) {
            Ok(core) if verbose => println!(
                "Keybind: {} + {} => {}",
                core.modifier.join("+"),
                core.key,
                core.command.name()
            ),
            Ok(_) => {}
            Err(err) => println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {keybind:?}: {err} \x1b[0m"),
        }
    }
}

fn check_environment(verbose: bool) {
    match std::env::var("DISPLAY") {
        Ok(display) if verbose => println!(":: DISPLAY: {display}"),
        Ok(_) => {}
        Err(_) => println!("\x1b[1;93mWARN: DISPLAY is not set, xtile needs an X server.\x1b[0m"),
    }
    if std::env::var("XDG_RUNTIME_DIR").is_err() {
        println!("\x1b[1;93mWARN: XDG_RUNTIME_DIR is not set, xtile-command will not find the command pipe.\x1b[0m");
    }
    if xtile::utils::is_program_in_path("notify-send") {
        println!("\x1b[0;92m    -> Environment OK \x1b[0m");
    } else {
        println!("\x1b[1;93mWARN: notify-send not found, notifications are disabled.\x1b[0m");
    }
}
