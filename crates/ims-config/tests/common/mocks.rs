// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Fake implementations of the IMS configuration service for testing

use ims_config::{
    ConfigItem, FeatureType, FeatureValue, ImsConfigListener, ImsConfigService, NetworkType,
    OperationStatus, TransportError, VideoQuality,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory service that stores set values and reports listener results
/// synchronously. `fail_with` makes every call fail before touching state.
#[derive(Default)]
pub struct FakeImsConfigService {
    pub ints: Mutex<HashMap<ConfigItem, i32>>,
    pub strings: Mutex<HashMap<ConfigItem, String>>,
    pub features: Mutex<HashMap<(FeatureType, NetworkType), FeatureValue>>,
    pub video_quality: Mutex<Option<VideoQuality>>,
    pub volte_provisioned: bool,
    pub set_status: Option<OperationStatus>,
    pub fail_with: Option<TransportError>,
    pub calls: Mutex<Vec<&'static str>>,
}

#[allow(dead_code)]
impl FakeImsConfigService {
    pub fn failing(error: TransportError) -> Self {
        Self {
            fail_with: Some(error),
            ..Default::default()
        }
    }

    pub fn with_int(self, item: ConfigItem, value: i32) -> Self {
        self.ints.lock().unwrap().insert(item, value);
        self
    }

    pub fn with_string(self, item: ConfigItem, value: &str) -> Self {
        self.strings
            .lock()
            .unwrap()
            .insert(item, value.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn enter(&self, call: &'static str) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn status(&self) -> OperationStatus {
        self.set_status.unwrap_or(OperationStatus::Success)
    }
}

impl ImsConfigService for FakeImsConfigService {
    fn get_provisioned_value(&self, item: ConfigItem) -> Result<i32, TransportError> {
        self.enter("get_provisioned_value")?;
        Ok(*self.ints.lock().unwrap().get(&item).unwrap_or(&0))
    }

    fn get_provisioned_string_value(&self, item: ConfigItem) -> Result<String, TransportError> {
        self.enter("get_provisioned_string_value")?;
        Ok(self
            .strings
            .lock()
            .unwrap()
            .get(&item)
            .cloned()
            .unwrap_or_default())
    }

    fn set_provisioned_value(
        &self,
        item: ConfigItem,
        value: i32,
    ) -> Result<OperationStatus, TransportError> {
        self.enter("set_provisioned_value")?;
        self.ints.lock().unwrap().insert(item, value);
        Ok(self.status())
    }

    fn set_provisioned_string_value(
        &self,
        item: ConfigItem,
        value: &str,
    ) -> Result<OperationStatus, TransportError> {
        self.enter("set_provisioned_string_value")?;
        self.strings
            .lock()
            .unwrap()
            .insert(item, value.to_string());
        Ok(self.status())
    }

    fn get_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        listener: Arc<dyn ImsConfigListener>,
    ) -> Result<(), TransportError> {
        self.enter("get_feature_value")?;
        let value = self
            .features
            .lock()
            .unwrap()
            .get(&(feature, network))
            .copied()
            .unwrap_or(FeatureValue::Off);
        listener.on_get_feature_response(feature, network, value, OperationStatus::Success);
        Ok(())
    }

    fn set_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError> {
        self.enter("set_feature_value")?;
        self.features
            .lock()
            .unwrap()
            .insert((feature, network), value);
        if let Some(listener) = listener {
            listener.on_set_feature_response(feature, network, value, self.status());
        }
        Ok(())
    }

    fn get_volte_provisioned(&self) -> Result<bool, TransportError> {
        self.enter("get_volte_provisioned")?;
        Ok(self.volte_provisioned)
    }

    fn get_video_quality(&self, listener: Arc<dyn ImsConfigListener>) -> Result<(), TransportError> {
        self.enter("get_video_quality")?;
        let quality = self.video_quality.lock().unwrap().unwrap_or(VideoQuality::Low);
        listener.on_get_video_quality_response(OperationStatus::Success, quality);
        Ok(())
    }

    fn set_video_quality(
        &self,
        quality: VideoQuality,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError> {
        self.enter("set_video_quality")?;
        *self.video_quality.lock().unwrap() = Some(quality);
        if let Some(listener) = listener {
            listener.on_set_video_quality_response(self.status());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerEvent {
    GetFeature(FeatureType, NetworkType, FeatureValue, OperationStatus),
    SetFeature(FeatureType, NetworkType, FeatureValue, OperationStatus),
    GetVideoQuality(OperationStatus, VideoQuality),
    SetVideoQuality(OperationStatus),
}

/// Listener that records every callback it receives
#[derive(Default)]
pub struct RecordingListener {
    pub events: Mutex<Vec<ListenerEvent>>,
}

#[allow(dead_code)]
impl RecordingListener {
    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ListenerEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ImsConfigListener for RecordingListener {
    fn on_get_feature_response(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        status: OperationStatus,
    ) {
        self.push(ListenerEvent::GetFeature(feature, network, value, status));
    }

    fn on_set_feature_response(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        status: OperationStatus,
    ) {
        self.push(ListenerEvent::SetFeature(feature, network, value, status));
    }

    fn on_get_video_quality_response(&self, status: OperationStatus, quality: VideoQuality) {
        self.push(ListenerEvent::GetVideoQuality(status, quality));
    }

    fn on_set_video_quality_response(&self, status: OperationStatus) {
        self.push(ListenerEvent::SetVideoQuality(status));
    }
}
