use std::collections::HashSet;

use tracing_subscriber::EnvFilter;
use xtile_core::errors::{Result, XtileError};

use super::Config;

/// Upper bound of `delay_time_tiling`, in seconds.
const MAX_DELAY_TIME_TILING: f32 = 60.0;

impl Config {
    /// Validates value ranges and keybinds. Regular expressions are already compiled when the
    /// file is parsed.
    ///
    /// # Errors
    ///
    /// `ConfigInvalid` naming the first offending value.
    pub fn check(&self) -> Result<()> {
        let invalid = |msg: String| Err(XtileError::ConfigInvalid(msg));
        if self.margin < 0 {
            return invalid(format!("margin must not be negative, got {}", self.margin));
        }
        if self.min_size <= 0 {
            return invalid(format!("min_size must be positive, got {}", self.min_size));
        }
        if self.step_size <= 0 {
            return invalid(format!("step_size must be positive, got {}", self.step_size));
        }
        let delay = self.delay_time_tiling;
        if !(0.0..=MAX_DELAY_TIME_TILING).contains(&delay) {
            return invalid(format!(
                "delay_time_tiling must lie between 0 and {MAX_DELAY_TIME_TILING} seconds, got {delay}"
            ));
        }
        for (tiler, config) in self.tilers.iter() {
            if config.max_windows < 1 {
                return invalid(format!("{tiler}: max_windows must be at least 1"));
            }
            let fraction = config.master_fraction;
            if fraction.is_nan() || fraction <= 0.0 || fraction >= 1.0 {
                return invalid(format!(
                    "{tiler}: master_fraction must lie strictly between 0 and 1, got {fraction}"
                ));
            }
        }
        if self.notification.time_ms == 0 {
            return invalid("notification time_ms must be positive".to_owned());
        }
        let mut bindings = HashSet::new();
        for keybind in &self.keybind {
            let core = keybind
                .to_core(&self.modkey)
                .map_err(|err| XtileError::ConfigInvalid(format!("{keybind:?}: {err}")))?;
            let mut modifier = core.modifier.clone();
            modifier.sort_unstable();
            if !bindings.insert((modifier, core.key)) {
                return invalid(format!(
                    "multiple commands bound to {} + {}",
                    core.modifier.join("+"),
                    core.key
                ));
            }
        }
        Ok(())
    }

    pub fn check_log_level(&self, verbose: bool) {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => println!("Log level is ok."),
            Ok(_) => {}
            Err(err) => println!("Log level is invalid: {err}"),
        }
    }

    pub fn check_modkey(&self, verbose: bool) {
        if verbose {
            println!("Checking if modkey is set.");
        }
        if self.modkey.is_empty() {
            println!("Your modkey is set to nothing, hotkeys will fire without any modifier.");
        } else if verbose {
            println!("Modkey is okay: {}", self.modkey);
        }
    }
}
