// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Client side access to the IMS configuration service.
//!
//! [`ImsConfig`] wraps an [`ImsConfigService`] handle and exposes typed getters
//! and setters for operator provisioned items and feature toggles. Any failure
//! to complete a call surfaces as [`ImsError::ServiceCall`].

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod accessor;
pub mod config;
pub mod constants;
pub mod errors;
pub mod service;
pub mod snapshot;
pub mod transport;

pub use accessor::ImsConfig;
pub use config::AccessorOptions;
pub use constants::{
    ConfigItem, FeatureType, FeatureValue, NetworkType, OperationStatus, ProvisionedValue,
    ValueType, VideoQuality, WfcMode,
};
pub use errors::{
    ConfigError, ConstantError, ImsError, Operation, TransportError,
    CODE_LOCAL_SERVICE_UNAVAILABLE,
};
pub use service::{ImsConfigListener, ImsConfigService};
pub use snapshot::ProvisioningSnapshot;
pub use transport::{ServiceHandle, ServiceHost};
