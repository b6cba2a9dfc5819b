//! Configuration constants and profile loading for soapcalc
//!
//! Settings are resolved in order: command line flag, then the selected
//! profile section of the INI profile file, then the built-in defaults.

use crate::cmd_args::CommandLineArgs;
use crate::repl::services::SoapEndpoint;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Default profile file path for soapcalc
pub const DEFAULT_PROFILE_PATH: &str = "~/.soapcalc/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "SOAPCALC_PROFILE_PATH";

/// Environment variable naming a log file when `--log-file` is not given
pub const LOG_FILE_ENV_VAR: &str = "SOAPCALC_LOG_FILE";

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "SOAPCALC_LOG_LEVEL";

/// Public calculator service used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://www.dneonline.com/calculator.asmx";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Log file from the command line, or from the environment
pub fn get_log_file(cmd_args: &CommandLineArgs) -> Option<String> {
    cmd_args
        .log_file()
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_FILE_ENV_VAR).ok())
        .filter(|path| !path.trim().is_empty())
}

/// One `[name]` section of the profile file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorProfile {
    endpoint: Option<String>,
    proxy: Option<String>,
    user: Option<String>,
    password: Option<String>,
}

impl CalculatorProfile {
    /// Load `name` from the INI file at `path`
    ///
    /// Returns `Ok(None)` when the file or the section does not exist. A file
    /// that exists but cannot be parsed is an error.
    pub fn load(path: &str, name: &str) -> Result<Option<Self>> {
        let expanded = shellexpand::tilde(path).into_owned();
        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' not found", expanded);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&expanded)
            .with_context(|| format!("Failed to read profile file '{expanded}'"))?;

        Ok(ini.section(Some(name)).map(|section| {
            let value = |key: &str| {
                section
                    .get(key)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            Self {
                endpoint: value("endpoint"),
                proxy: value("proxy"),
                user: value("user"),
                password: value("password"),
            }
        }))
    }

    /// Like [`CalculatorProfile::load`], falling back to an empty profile
    pub fn load_or_default(path: &str, name: &str) -> Result<Self> {
        match Self::load(path, name)? {
            Some(profile) => {
                tracing::debug!("Profile '{}' loaded from '{}'", name, path);
                Ok(profile)
            }
            None => {
                tracing::debug!("Profile '{}' not found, using defaults", name);
                Ok(Self::default())
            }
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

/// Build the endpoint from command line flags over profile values
pub fn resolve_endpoint(cmd_args: &CommandLineArgs, profile: &CalculatorProfile) -> SoapEndpoint {
    let target = cmd_args
        .endpoint()
        .or(profile.endpoint())
        .unwrap_or(DEFAULT_ENDPOINT);

    let proxy = if cmd_args.no_proxy() {
        None
    } else {
        cmd_args.proxy().or(profile.proxy()).map(str::to_string)
    };

    let endpoint = SoapEndpoint::new(target).with_proxy_prefix(proxy);
    match &profile.user {
        Some(user) => endpoint.with_credentials(
            user.clone(),
            profile.password.clone().unwrap_or_default(),
        ),
        None => endpoint,
    }
}
