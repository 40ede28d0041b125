// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Point-in-time dump of every operator provisioned item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accessor::ImsConfig;
use crate::constants::{ConfigItem, ProvisionedValue};
use crate::errors::ImsError;

/// Provisioned values keyed by item, in code order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisioningSnapshot {
    pub values: BTreeMap<ConfigItem, ProvisionedValue>,
}

impl ProvisioningSnapshot {
    pub fn get(&self, item: ConfigItem) -> Option<&ProvisionedValue> {
        self.values.get(&item)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.values)
    }
}

impl<C> ImsConfig<C> {
    /// Reads every provisioned item, one call per item.
    ///
    /// Stops at the first failed call and returns its error.
    pub fn snapshot(&self) -> Result<ProvisioningSnapshot, ImsError> {
        let mut snapshot = ProvisioningSnapshot::default();
        for item in ConfigItem::provisioned() {
            let value = self.get_provisioned(item)?;
            snapshot.values.insert(item, value);
        }
        if self.options().debug_logging {
            debug!("snapshot(): read {} provisioned items", snapshot.len());
        }
        Ok(snapshot)
    }
}
