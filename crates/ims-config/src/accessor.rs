// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Typed access to the IMS configuration service.
//!
//! [`ImsConfig`] forwards every request to an [`ImsConfigService`] and turns a
//! failed call into [`ImsError::ServiceCall`]. Nothing is cached and nothing is
//! retried. Every method may block until the service answers, so callers must
//! keep them off latency sensitive threads.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::AccessorOptions;
use crate::constants::{
    ConfigItem, FeatureType, FeatureValue, NetworkType, OperationStatus, ProvisionedValue,
    ValueType, VideoQuality, WfcMode,
};
use crate::errors::{ImsError, Operation};
use crate::service::{ImsConfigListener, ImsConfigService};

/// Accessor bound to one IMS configuration service for its whole lifetime.
///
/// `C` is an opaque context owned alongside the service handle.
pub struct ImsConfig<C = ()> {
    service: Arc<dyn ImsConfigService>,
    context: C,
    options: AccessorOptions,
}

impl<C> ImsConfig<C> {
    pub fn new(service: Arc<dyn ImsConfigService>, context: C, options: AccessorOptions) -> Self {
        if options.debug_logging {
            debug!("ImsConfig creates");
        }
        Self {
            service,
            context,
            options,
        }
    }

    pub fn service(&self) -> &Arc<dyn ImsConfigService> {
        &self.service
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn options(&self) -> &AccessorOptions {
        &self.options
    }

    /// Gets the provisioned integer value of `item`.
    pub fn get_provisioned_value(&self, item: ConfigItem) -> Result<i32, ImsError> {
        let ret = self
            .service
            .get_provisioned_value(item)
            .map_err(|e| ImsError::service_unavailable(Operation::GetProvisionedValue, e))?;
        if self.options.debug_logging {
            debug!("getProvisionedValue(): item = {item}, ret = {ret}");
        }
        Ok(ret)
    }

    /// Gets the provisioned string value of `item`.
    pub fn get_provisioned_string_value(&self, item: ConfigItem) -> Result<String, ImsError> {
        let ret = self
            .service
            .get_provisioned_string_value(item)
            .map_err(|e| ImsError::service_unavailable(Operation::GetProvisionedStringValue, e))?;
        if self.options.debug_logging {
            debug!("getProvisionedStringValue(): item = {item}, ret = {ret}");
        }
        Ok(ret)
    }

    /// Sets the provisioned integer value of `item` on behalf of the
    /// operator's device management entity.
    pub fn set_provisioned_value(
        &self,
        item: ConfigItem,
        value: i32,
    ) -> Result<OperationStatus, ImsError> {
        if self.options.debug_logging {
            debug!("setProvisionedValue(): item = {item}, value = {value}");
        }
        let ret = self
            .service
            .set_provisioned_value(item, value)
            .map_err(|e| ImsError::service_unavailable(Operation::SetProvisionedValue, e))?;
        if self.options.debug_logging {
            debug!("setProvisionedValue(): item = {item}, value = {value}, ret = {ret}");
        }
        Ok(ret)
    }

    /// Sets the provisioned string value of `item`.
    pub fn set_provisioned_string_value(
        &self,
        item: ConfigItem,
        value: &str,
    ) -> Result<OperationStatus, ImsError> {
        let ret = self
            .service
            .set_provisioned_string_value(item, value)
            .map_err(|e| ImsError::service_unavailable(Operation::SetProvisionedStringValue, e))?;
        if self.options.debug_logging {
            debug!("setProvisionedStringValue(): item = {item}, value = {value}, ret = {ret}");
        }
        Ok(ret)
    }

    /// Requests the on/off state of `feature` on `network`.
    ///
    /// Returns once the request is dispatched; the answer arrives through
    /// `listener`.
    pub fn get_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        listener: Arc<dyn ImsConfigListener>,
    ) -> Result<(), ImsError> {
        if self.options.debug_logging {
            debug!("getFeatureValue(): feature = {feature}, network = {network}");
        }
        self.service
            .get_feature_value(feature, network, listener)
            .map_err(|e| ImsError::service_unavailable(Operation::GetFeatureValue, e))
    }

    /// Turns `feature` on or off for `network`. The outcome is reported to
    /// `listener` when one is given.
    pub fn set_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), ImsError> {
        if self.options.debug_logging {
            debug!(
                "setFeatureValue(): feature = {feature}, network = {network}, value = {value}, listener = {}",
                listener.is_some()
            );
        }
        self.service
            .set_feature_value(feature, network, value, listener)
            .map_err(|e| ImsError::service_unavailable(Operation::SetFeatureValue, e))
    }

    /// Whether VoLTE is provisioned. Matches the operator provisioned value
    /// where one applies.
    pub fn get_volte_provisioned(&self) -> Result<bool, ImsError> {
        let ret = self
            .service
            .get_volte_provisioned()
            .map_err(|e| ImsError::service_unavailable(Operation::GetVolteProvisioned, e))?;
        if self.options.debug_logging {
            debug!("getVolteProvisioned(): ret = {ret}");
        }
        Ok(ret)
    }

    pub fn get_video_quality(&self, listener: Arc<dyn ImsConfigListener>) -> Result<(), ImsError> {
        if self.options.debug_logging {
            debug!("getVideoQuality()");
        }
        self.service
            .get_video_quality(listener)
            .map_err(|e| ImsError::service_unavailable(Operation::GetVideoQuality, e))
    }

    pub fn set_video_quality(
        &self,
        quality: VideoQuality,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), ImsError> {
        if self.options.debug_logging {
            debug!("setVideoQuality(): quality = {quality}");
        }
        self.service
            .set_video_quality(quality, listener)
            .map_err(|e| ImsError::service_unavailable(Operation::SetVideoQuality, e))
    }

    /// Reads `item` through the getter matching its declared value type.
    pub fn get_provisioned(&self, item: ConfigItem) -> Result<ProvisionedValue, ImsError> {
        match item.value_type() {
            ValueType::Integer => self
                .get_provisioned_value(item)
                .map(ProvisionedValue::Integer),
            ValueType::String => self
                .get_provisioned_string_value(item)
                .map(ProvisionedValue::String),
        }
    }

    pub fn get_wfc_mode(&self) -> Result<WfcMode, ImsError> {
        let item = ConfigItem::VoiceOverWifiMode;
        let value = self.get_provisioned_value(item)?;
        WfcMode::try_from(value).map_err(|_| ImsError::InvalidValue { item, value })
    }

    pub fn set_wfc_mode(&self, mode: WfcMode) -> Result<OperationStatus, ImsError> {
        self.set_provisioned_value(ConfigItem::VoiceOverWifiMode, mode.code())
    }
}

impl<C: fmt::Debug> fmt::Debug for ImsConfig<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImsConfig")
            .field("context", &self.context)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
