// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Error types surfaced by the IMS configuration accessor.

use derive_more::Display;

use crate::constants::ConfigItem;

/// Reason code attached to every failed service call: the local IMS service
/// could not be reached.
pub const CODE_LOCAL_SERVICE_UNAVAILABLE: i32 = 131;

/// The accessor operation that issued a remote call.
///
/// Rendered with the remote interface's method name so failures line up with
/// service-side logs.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    #[display("getProvisionedValue()")]
    GetProvisionedValue,
    #[display("getProvisionedStringValue()")]
    GetProvisionedStringValue,
    #[display("setProvisionedValue()")]
    SetProvisionedValue,
    #[display("setProvisionedStringValue()")]
    SetProvisionedStringValue,
    #[display("getFeatureValue()")]
    GetFeatureValue,
    #[display("setFeatureValue()")]
    SetFeatureValue,
    #[display("getVolteProvisioned()")]
    GetVolteProvisioned,
    #[display("getVideoQuality()")]
    GetVideoQuality,
    #[display("setVideoQuality()")]
    SetVideoQuality,
}

/// Failure of the call boundary itself, independent of what was asked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("remote service is disconnected")]
    Disconnected,

    #[error("remote service dropped the call without replying")]
    NoReply,

    #[error("remote call failed: {0}")]
    Remote(String),

    /// A blocking call was made on a thread driving a current-thread runtime.
    #[error("blocking call issued from inside a current-thread runtime")]
    BlockingInRuntime,
}

/// Errors returned by [`crate::ImsConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ImsError {
    /// The remote call could not be completed.
    #[error("{operation} failed (code {code}): {source}")]
    ServiceCall {
        operation: Operation,
        code: i32,
        #[source]
        source: TransportError,
    },

    /// The service answered with a value outside the item's constant table.
    #[error("{item} returned out-of-range value {value}")]
    InvalidValue { item: ConfigItem, value: i32 },
}

impl ImsError {
    pub(crate) fn service_unavailable(operation: Operation, source: TransportError) -> Self {
        Self::ServiceCall {
            operation,
            code: CODE_LOCAL_SERVICE_UNAVAILABLE,
            source,
        }
    }

    /// Reason code for service failures, `None` for local validation errors.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::ServiceCall { code, .. } => Some(*code),
            Self::InvalidValue { .. } => None,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::ServiceCall { operation, .. } => Some(*operation),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Raised when a raw code or name does not belong to a constant table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstantError {
    #[error("invalid {kind} code: {code}")]
    InvalidCode { kind: &'static str, code: i32 },

    #[error("invalid {kind} name: '{name}'")]
    InvalidName { kind: &'static str, name: String },
}

/// Errors raised while loading accessor options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_operation_display_uses_remote_method_name() {
        assert_eq!(Operation::SetFeatureValue.to_string(), "setFeatureValue()");
        assert_eq!(
            Operation::GetProvisionedStringValue.to_string(),
            "getProvisionedStringValue()"
        );
    }

    #[test]
    fn test_service_call_error_display_and_source() {
        let error =
            ImsError::service_unavailable(Operation::GetVolteProvisioned, TransportError::NoReply);
        assert_eq!(
            error.to_string(),
            "getVolteProvisioned() failed (code 131): remote service dropped the call without replying"
        );
        assert_eq!(error.code(), Some(CODE_LOCAL_SERVICE_UNAVAILABLE));
        assert_eq!(error.operation(), Some(Operation::GetVolteProvisioned));

        let source = error.source().expect("service call error carries a cause");
        assert_eq!(source.to_string(), "remote service dropped the call without replying");
    }

    #[test]
    fn test_blocking_in_runtime_maps_to_service_call() {
        let error = ImsError::service_unavailable(
            Operation::SetProvisionedValue,
            TransportError::BlockingInRuntime,
        );
        assert_eq!(
            error.to_string(),
            "setProvisionedValue() failed (code 131): blocking call issued from inside a current-thread runtime"
        );
    }

    #[test]
    fn test_invalid_value_has_no_code() {
        let error = ImsError::InvalidValue {
            item: ConfigItem::VoiceOverWifiMode,
            value: 9,
        };
        assert_eq!(error.code(), None);
        assert_eq!(error.operation(), None);
        assert_eq!(
            error.to_string(),
            "VOICE_OVER_WIFI_MODE returned out-of-range value 9"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidConfig("bad flag".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: bad flag");
    }
}
