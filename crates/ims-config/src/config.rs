// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::errors::ConfigError;
use std::env;

const DEBUG_ENV_VAR: &str = "IMS_CONFIG_DEBUG";

/// Options fixed at [`crate::ImsConfig`] construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorOptions {
    /// Emit a debug log line with the parameters of every call
    pub debug_logging: bool,
}

impl Default for AccessorOptions {
    fn default() -> Self {
        Self {
            debug_logging: true,
        }
    }
}

impl AccessorOptions {
    /// Create options from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let debug_logging = match env::var(DEBUG_ENV_VAR) {
            Ok(val) => parse_flag(&val).ok_or_else(|| {
                ConfigError::InvalidConfig(format!(
                    "Invalid {DEBUG_ENV_VAR} value '{val}'. Must be one of: true, false, 1, 0"
                ))
            })?,
            Err(_) => true,
        };

        Ok(Self { debug_logging })
    }

    pub fn quiet() -> Self {
        Self {
            debug_logging: false,
        }
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
