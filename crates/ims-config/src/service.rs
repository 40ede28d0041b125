// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The remote IMS configuration interface consumed by [`crate::ImsConfig`].

use std::sync::Arc;

use crate::constants::{
    ConfigItem, FeatureType, FeatureValue, NetworkType, OperationStatus, VideoQuality,
};
use crate::errors::TransportError;

/// Receives results of the listener based requests.
///
/// Invoked by the remote side on a context it controls.
pub trait ImsConfigListener: Send + Sync {
    fn on_get_feature_response(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        status: OperationStatus,
    );

    fn on_set_feature_response(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        status: OperationStatus,
    );

    fn on_get_video_quality_response(&self, status: OperationStatus, quality: VideoQuality);

    fn on_set_video_quality_response(&self, status: OperationStatus);
}

/// Call surface of the IMS configuration service.
///
/// Every method may block while the call crosses the process boundary. An
/// `Err` means the call itself did not complete; service level outcomes are
/// carried in the returned values or delivered to the listener.
pub trait ImsConfigService: Send + Sync {
    fn get_provisioned_value(&self, item: ConfigItem) -> Result<i32, TransportError>;

    fn get_provisioned_string_value(&self, item: ConfigItem) -> Result<String, TransportError>;

    fn set_provisioned_value(
        &self,
        item: ConfigItem,
        value: i32,
    ) -> Result<OperationStatus, TransportError>;

    fn set_provisioned_string_value(
        &self,
        item: ConfigItem,
        value: &str,
    ) -> Result<OperationStatus, TransportError>;

    fn get_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        listener: Arc<dyn ImsConfigListener>,
    ) -> Result<(), TransportError>;

    fn set_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError>;

    fn get_volte_provisioned(&self) -> Result<bool, TransportError>;

    fn get_video_quality(&self, listener: Arc<dyn ImsConfigListener>)
        -> Result<(), TransportError>;

    fn set_video_quality(
        &self,
        quality: VideoQuality,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError>;
}

impl<T: ImsConfigService + ?Sized> ImsConfigService for Arc<T> {
    fn get_provisioned_value(&self, item: ConfigItem) -> Result<i32, TransportError> {
        (**self).get_provisioned_value(item)
    }

    fn get_provisioned_string_value(&self, item: ConfigItem) -> Result<String, TransportError> {
        (**self).get_provisioned_string_value(item)
    }

    fn set_provisioned_value(
        &self,
        item: ConfigItem,
        value: i32,
    ) -> Result<OperationStatus, TransportError> {
        (**self).set_provisioned_value(item, value)
    }

    fn set_provisioned_string_value(
        &self,
        item: ConfigItem,
        value: &str,
    ) -> Result<OperationStatus, TransportError> {
        (**self).set_provisioned_string_value(item, value)
    }

    fn get_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        listener: Arc<dyn ImsConfigListener>,
    ) -> Result<(), TransportError> {
        (**self).get_feature_value(feature, network, listener)
    }

    fn set_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError> {
        (**self).set_feature_value(feature, network, value, listener)
    }

    fn get_volte_provisioned(&self) -> Result<bool, TransportError> {
        (**self).get_volte_provisioned()
    }

    fn get_video_quality(
        &self,
        listener: Arc<dyn ImsConfigListener>,
    ) -> Result<(), TransportError> {
        (**self).get_video_quality(listener)
    }

    fn set_video_quality(
        &self,
        quality: VideoQuality,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError> {
        (**self).set_video_quality(quality, listener)
    }
}
