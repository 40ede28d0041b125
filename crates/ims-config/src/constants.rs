// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Constant tables shared with the IMS configuration service.
//!
//! Every table maps to a fixed integer code on the wire. Conversions from raw
//! codes go through `TryFrom<i32>`; serde uses the constant name.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ConstantError;

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        impl $name {
            /// Every constant in the table, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const fn code(self) -> i32 {
                self as i32
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ConstantError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(ConstantError::InvalidCode { kind: $kind, code }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl FromStr for $name {
            type Err = ConstantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(ConstantError::InvalidName {
                        kind: $kind,
                        name: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                name.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

code_enum! {
    /// IMS service/capability feature classes.
    pub enum FeatureType ("feature type") {
        Unknown = -1 => "FEATURE_TYPE_UNKNOWN",
        /// 3GPP and GSMA IR.92 voice over LTE.
        VoiceOverLte = 0 => "FEATURE_TYPE_VOICE_OVER_LTE",
        /// 3GPP and GSMA IR.94 video over LTE.
        VideoOverLte = 1 => "FEATURE_TYPE_VIDEO_OVER_LTE",
        /// 3GPP and GSMA IR.92 voice over WiFi.
        VoiceOverWifi = 2 => "FEATURE_TYPE_VOICE_OVER_WIFI",
        /// 3GPP and GSMA IR.94 video over WiFi.
        VideoOverWifi = 3 => "FEATURE_TYPE_VIDEO_OVER_WIFI",
        /// Supplementary service configuration (UT) over LTE.
        UtOverLte = 4 => "FEATURE_TYPE_UT_OVER_LTE",
        /// Supplementary service configuration (UT) over WiFi.
        UtOverWifi = 5 => "FEATURE_TYPE_UT_OVER_WIFI",
    }
}

code_enum! {
    /// Operator provisioned configuration items.
    ///
    /// Each item carries an implicit value type, see [`ConfigItem::value_type`].
    pub enum ConfigItem ("config item") {
        /// AMR codec mode set, 0-7 comma separated.
        VocoderAmrModeSet = 0 => "VOCODER_AMRMODESET",
        /// Wide band AMR codec mode set, 0-7 comma separated.
        VocoderAmrWbModeSet = 1 => "VOCODER_AMRWBMODESET",
        /// SIP session timer, seconds.
        SipSessionTimer = 2 => "SIP_SESSION_TIMER",
        /// Minimum SIP session expiration timer, seconds.
        MinSe = 3 => "MIN_SE",
        /// SIP INVITE cancellation timeout, milliseconds.
        CancellationTimer = 4 => "CANCELLATION_TIMER",
        /// Delay of an iRAT transition from eHRPD/HRPD/1xRTT to LTE.
        TDelay = 5 => "TDELAY",
        SilentRedialEnable = 6 => "SILENT_REDIAL_ENABLE",
        /// RFC 3261 T1, milliseconds.
        SipT1Timer = 7 => "SIP_T1_TIMER",
        /// RFC 3261 T2, milliseconds.
        SipT2Timer = 8 => "SIP_T2_TIMER",
        /// RFC 3261 TF, milliseconds.
        SipTfTimer = 9 => "SIP_TF_TIMER",
        VltSettingEnabled = 10 => "VLT_SETTING_ENABLED",
        LvcSettingEnabled = 11 => "LVC_SETTING_ENABLED",
        /// Domain used to populate the REGISTER request URI.
        DomainName = 12 => "DOMAIN_NAME",
        /// 3GPP2 (0) or 3GPP (1).
        SmsFormat = 13 => "SMS_FORMAT",
        SmsOverIp = 14 => "SMS_OVER_IP",
        PublishTimer = 15 => "PUBLISH_TIMER",
        PublishTimerExtended = 16 => "PUBLISH_TIMER_EXTENDED",
        CapabilitiesCacheExpiration = 17 => "CAPABILITIES_CACHE_EXPIRATION",
        AvailabilityCacheExpiration = 18 => "AVAILABILITY_CACHE_EXPIRATION",
        CapabilitiesPollInterval = 19 => "CAPABILITIES_POLL_INTERVAL",
        SourceThrottlePublish = 20 => "SOURCE_THROTTLE_PUBLISH",
        MaxNumEntriesInRcl = 21 => "MAX_NUMENTRIES_IN_RCL",
        CapabPollListSubExp = 22 => "CAPAB_POLL_LIST_SUB_EXP",
        GzipFlag = 23 => "GZIP_FLAG",
        EabSettingEnabled = 24 => "EAB_SETTING_ENABLED",
        VoiceOverWifiRoaming = 25 => "VOICE_OVER_WIFI_ROAMING",
        /// Holds a [`WfcMode`] code.
        VoiceOverWifiMode = 26 => "VOICE_OVER_WIFI_MODE",
        MobileDataEnabled = 27 => "MOBILE_DATA_ENABLED",
        VolteUserOptInStatus = 28 => "VOLTE_USER_OPT_IN_STATUS",
        /// P-CSCF address for local breakout.
        LboPcscfAddress = 29 => "LBO_PCSCF_ADDRESS",
        KeepAliveEnabled = 30 => "KEEP_ALIVE_ENABLED",
        RegistrationRetryBaseTimeSec = 31 => "REGISTRATION_RETRY_BASE_TIME_SEC",
        RegistrationRetryMaxTimeSec = 32 => "REGISTRATION_RETRY_MAX_TIME_SEC",
        SpeechStartPort = 33 => "SPEECH_START_PORT",
        SpeechEndPort = 34 => "SPEECH_END_PORT",
        /// SIP timer A.
        SipInviteReqRetxIntervalMsec = 35 => "SIP_INVITE_REQ_RETX_INTERVAL_MSEC",
        /// SIP timer B.
        SipInviteRspWaitTimeMsec = 36 => "SIP_INVITE_RSP_WAIT_TIME_MSEC",
        /// SIP timer D.
        SipInviteRspRetxWaitTimeMsec = 37 => "SIP_INVITE_RSP_RETX_WAIT_TIME_MSEC",
        /// SIP timer E.
        SipNonInviteReqRetxIntervalMsec = 38 => "SIP_NON_INVITE_REQ_RETX_INTERVAL_MSEC",
        /// SIP timer F.
        SipNonInviteTxnTimeoutTimerMsec = 39 => "SIP_NON_INVITE_TXN_TIMEOUT_TIMER_MSEC",
        /// SIP timer G.
        SipInviteRspRetxIntervalMsec = 40 => "SIP_INVITE_RSP_RETX_INTERVAL_MSEC",
        /// SIP timer H.
        SipAckReceiptWaitTimeMsec = 41 => "SIP_ACK_RECEIPT_WAIT_TIME_MSEC",
        /// SIP timer I.
        SipAckRetxWaitTimeMsec = 42 => "SIP_ACK_RETX_WAIT_TIME_MSEC",
        /// SIP timer J.
        SipNonInviteReqRetxWaitTimeMsec = 43 => "SIP_NON_INVITE_REQ_RETX_WAIT_TIME_MSEC",
        /// SIP timer K.
        SipNonInviteRspRetxWaitTimeMsec = 44 => "SIP_NON_INVITE_RSP_RETX_WAIT_TIME_MSEC",
        AmrWbOctetAlignedPt = 45 => "AMR_WB_OCTET_ALIGNED_PT",
        AmrWbBandwidthEfficientPt = 46 => "AMR_WB_BANDWIDTH_EFFICIENT_PT",
        AmrOctetAlignedPt = 47 => "AMR_OCTET_ALIGNED_PT",
        AmrBandwidthEfficientPt = 48 => "AMR_BANDWIDTH_EFFICIENT_PT",
        DtmfWbPt = 49 => "DTMF_WB_PT",
        DtmfNbPt = 50 => "DTMF_NB_PT",
        AmrDefaultMode = 51 => "AMR_DEFAULT_MODE",
        /// SMS public service identity.
        SmsPsi = 52 => "SMS_PSI",
        /// Holds a [`VideoQuality`] code.
        VideoQuality = 53 => "VIDEO_QUALITY",
    }
}

code_enum! {
    /// Outcome of a set operation.
    pub enum OperationStatus ("operation status") {
        Unknown = -1 => "UNKNOWN",
        Success = 0 => "SUCCESS",
        Failed = 1 => "FAILED",
        UnsupportedCauseNone = 2 => "UNSUPPORTED_CAUSE_NONE",
        UnsupportedCauseRat = 3 => "UNSUPPORTED_CAUSE_RAT",
        UnsupportedCauseDisabled = 4 => "UNSUPPORTED_CAUSE_DISABLED",
    }
}

code_enum! {
    pub enum VideoQuality ("video quality") {
        Low = 0 => "LOW",
        High = 1 => "HIGH",
    }
}

code_enum! {
    pub enum FeatureValue ("feature value") {
        Off = 0 => "OFF",
        On = 1 => "ON",
    }
}

code_enum! {
    /// WiFi calling preference stored under [`ConfigItem::VoiceOverWifiMode`].
    pub enum WfcMode ("wfc mode") {
        WifiOnly = 0 => "WIFI_ONLY",
        CellularPreferred = 1 => "CELLULAR_PREFERRED",
        WifiPreferred = 2 => "WIFI_PREFERRED",
    }
}

code_enum! {
    /// Radio access network a feature item applies to.
    pub enum NetworkType ("network type") {
        Unknown = 0 => "NETWORK_TYPE_UNKNOWN",
        Gprs = 1 => "NETWORK_TYPE_GPRS",
        Edge = 2 => "NETWORK_TYPE_EDGE",
        Umts = 3 => "NETWORK_TYPE_UMTS",
        Cdma = 4 => "NETWORK_TYPE_CDMA",
        Evdo0 = 5 => "NETWORK_TYPE_EVDO_0",
        EvdoA = 6 => "NETWORK_TYPE_EVDO_A",
        OneXRtt = 7 => "NETWORK_TYPE_1xRTT",
        Hsdpa = 8 => "NETWORK_TYPE_HSDPA",
        Hsupa = 9 => "NETWORK_TYPE_HSUPA",
        Hspa = 10 => "NETWORK_TYPE_HSPA",
        Iden = 11 => "NETWORK_TYPE_IDEN",
        EvdoB = 12 => "NETWORK_TYPE_EVDO_B",
        Lte = 13 => "NETWORK_TYPE_LTE",
        Ehrpd = 14 => "NETWORK_TYPE_EHRPD",
        Hspap = 15 => "NETWORK_TYPE_HSPAP",
        Gsm = 16 => "NETWORK_TYPE_GSM",
        TdScdma = 17 => "NETWORK_TYPE_TD_SCDMA",
        Iwlan = 18 => "NETWORK_TYPE_IWLAN",
    }
}

/// Value representation of a provisioned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Integer,
    String,
}

/// A provisioned value in the representation its item declares.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProvisionedValue {
    #[display("{_0}")]
    Integer(i32),
    #[display("{_0}")]
    String(String),
}

impl ProvisionedValue {
    pub const fn value_type(&self) -> ValueType {
        match self {
            ProvisionedValue::Integer(_) => ValueType::Integer,
            ProvisionedValue::String(_) => ValueType::String,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ProvisionedValue::Integer(value) => Some(*value),
            ProvisionedValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ProvisionedValue::Integer(_) => None,
            ProvisionedValue::String(value) => Some(value.as_str()),
        }
    }
}

impl ConfigItem {
    pub const PROVISIONED_CONFIG_START: ConfigItem = ConfigItem::VocoderAmrModeSet;
    pub const PROVISIONED_CONFIG_END: ConfigItem = ConfigItem::VideoQuality;

    pub const fn value_type(self) -> ValueType {
        match self {
            ConfigItem::VocoderAmrModeSet
            | ConfigItem::VocoderAmrWbModeSet
            | ConfigItem::DomainName
            | ConfigItem::LboPcscfAddress
            | ConfigItem::SmsPsi => ValueType::String,
            _ => ValueType::Integer,
        }
    }

    /// Whether the item falls inside the operator provisioned range.
    pub const fn is_provisioned(self) -> bool {
        let code = self.code();
        code >= Self::PROVISIONED_CONFIG_START.code() && code <= Self::PROVISIONED_CONFIG_END.code()
    }

    /// Items in the operator provisioned range, in code order.
    pub fn provisioned() -> impl Iterator<Item = ConfigItem> {
        Self::ALL.iter().copied().filter(|item| item.is_provisioned())
    }
}

impl FeatureValue {
    pub const fn is_on(self) -> bool {
        matches!(self, FeatureValue::On)
    }
}

impl From<bool> for FeatureValue {
    fn from(on: bool) -> Self {
        if on {
            FeatureValue::On
        } else {
            FeatureValue::Off
        }
    }
}

impl OperationStatus {
    pub const fn is_success(self) -> bool {
        matches!(self, OperationStatus::Success)
    }

    pub const fn is_unsupported(self) -> bool {
        matches!(
            self,
            OperationStatus::UnsupportedCauseNone
                | OperationStatus::UnsupportedCauseRat
                | OperationStatus::UnsupportedCauseDisabled
        )
    }
}
