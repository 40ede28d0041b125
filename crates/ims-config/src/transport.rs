// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Channel backed call boundary.
//!
//! [`ServiceHost`] owns an [`ImsConfigService`] implementation and serves it on
//! a tokio task. [`ServiceHandle`] is the client end: it implements
//! [`ImsConfigService`] itself by sending commands to the host. Blocking calls
//! wait on a oneshot reply. Inside a multi-thread runtime the wait moves off
//! the worker with `block_in_place`; a current-thread runtime cannot give up
//! its only thread, so calls made there fail with
//! [`TransportError::BlockingInRuntime`] before anything is sent.
//!
//! The host runs each backend call on the blocking pool, so a backend that
//! blocks on IPC never stalls the runtime driving the command loop.

use std::fmt;
use std::sync::Arc;

use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::{mpsc, oneshot};
use tokio::task;
use tracing::{debug, error, warn};

use crate::constants::{
    ConfigItem, FeatureType, FeatureValue, NetworkType, OperationStatus, VideoQuality,
};
use crate::errors::TransportError;
use crate::service::{ImsConfigListener, ImsConfigService};

pub type Reply<T> = oneshot::Sender<Result<T, TransportError>>;

pub enum ServiceCommand {
    GetProvisionedValue {
        item: ConfigItem,
        response_tx: Reply<i32>,
    },
    GetProvisionedStringValue {
        item: ConfigItem,
        response_tx: Reply<String>,
    },
    SetProvisionedValue {
        item: ConfigItem,
        value: i32,
        response_tx: Reply<OperationStatus>,
    },
    SetProvisionedStringValue {
        item: ConfigItem,
        value: String,
        response_tx: Reply<OperationStatus>,
    },
    GetFeatureValue {
        feature: FeatureType,
        network: NetworkType,
        listener: Arc<dyn ImsConfigListener>,
    },
    SetFeatureValue {
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        listener: Option<Arc<dyn ImsConfigListener>>,
    },
    GetVolteProvisioned {
        response_tx: Reply<bool>,
    },
    GetVideoQuality {
        listener: Arc<dyn ImsConfigListener>,
    },
    SetVideoQuality {
        quality: VideoQuality,
        listener: Option<Arc<dyn ImsConfigListener>>,
    },
    Shutdown,
}

impl ServiceCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::GetProvisionedValue { .. } => "getProvisionedValue",
            Self::GetProvisionedStringValue { .. } => "getProvisionedStringValue",
            Self::SetProvisionedValue { .. } => "setProvisionedValue",
            Self::SetProvisionedStringValue { .. } => "setProvisionedStringValue",
            Self::GetFeatureValue { .. } => "getFeatureValue",
            Self::SetFeatureValue { .. } => "setFeatureValue",
            Self::GetVolteProvisioned { .. } => "getVolteProvisioned",
            Self::GetVideoQuality { .. } => "getVideoQuality",
            Self::SetVideoQuality { .. } => "setVideoQuality",
            Self::Shutdown => "shutdown",
        }
    }
}

impl fmt::Debug for ServiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceCommand").field(&self.name()).finish()
    }
}

#[derive(Clone)]
pub struct ServiceHandle {
    tx: mpsc::UnboundedSender<ServiceCommand>,
}

impl ServiceHandle {
    /// Stops the host loop. Calls issued afterwards fail with
    /// [`TransportError::Disconnected`].
    pub fn shutdown(&self) -> Result<(), TransportError> {
        self.send(ServiceCommand::Shutdown)
    }

    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }

    fn send(&self, command: ServiceCommand) -> Result<(), TransportError> {
        self.tx
            .send(command)
            .map_err(|_| TransportError::Disconnected)
    }

    fn call<T>(
        &self,
        command: impl FnOnce(Reply<T>) -> ServiceCommand,
    ) -> Result<T, TransportError> {
        let in_runtime = match Handle::try_current() {
            Err(_) => false,
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => true,
            Ok(_) => return Err(TransportError::BlockingInRuntime),
        };

        let (response_tx, response_rx) = oneshot::channel();
        self.send(command(response_tx))?;
        if in_runtime {
            task::block_in_place(|| wait(response_rx))
        } else {
            wait(response_rx)
        }
    }
}

fn wait<T>(
    response_rx: oneshot::Receiver<Result<T, TransportError>>,
) -> Result<T, TransportError> {
    response_rx
        .blocking_recv()
        .map_err(|_| TransportError::NoReply)?
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl ImsConfigService for ServiceHandle {
    fn get_provisioned_value(&self, item: ConfigItem) -> Result<i32, TransportError> {
        self.call(|response_tx| ServiceCommand::GetProvisionedValue { item, response_tx })
    }

    fn get_provisioned_string_value(&self, item: ConfigItem) -> Result<String, TransportError> {
        self.call(|response_tx| ServiceCommand::GetProvisionedStringValue { item, response_tx })
    }

    fn set_provisioned_value(
        &self,
        item: ConfigItem,
        value: i32,
    ) -> Result<OperationStatus, TransportError> {
        self.call(|response_tx| ServiceCommand::SetProvisionedValue {
            item,
            value,
            response_tx,
        })
    }

    fn set_provisioned_string_value(
        &self,
        item: ConfigItem,
        value: &str,
    ) -> Result<OperationStatus, TransportError> {
        self.call(|response_tx| ServiceCommand::SetProvisionedStringValue {
            item,
            value: value.to_string(),
            response_tx,
        })
    }

    fn get_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        listener: Arc<dyn ImsConfigListener>,
    ) -> Result<(), TransportError> {
        self.send(ServiceCommand::GetFeatureValue {
            feature,
            network,
            listener,
        })
    }

    fn set_feature_value(
        &self,
        feature: FeatureType,
        network: NetworkType,
        value: FeatureValue,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError> {
        self.send(ServiceCommand::SetFeatureValue {
            feature,
            network,
            value,
            listener,
        })
    }

    fn get_volte_provisioned(&self) -> Result<bool, TransportError> {
        self.call(|response_tx| ServiceCommand::GetVolteProvisioned { response_tx })
    }

    fn get_video_quality(
        &self,
        listener: Arc<dyn ImsConfigListener>,
    ) -> Result<(), TransportError> {
        self.send(ServiceCommand::GetVideoQuality { listener })
    }

    fn set_video_quality(
        &self,
        quality: VideoQuality,
        listener: Option<Arc<dyn ImsConfigListener>>,
    ) -> Result<(), TransportError> {
        self.send(ServiceCommand::SetVideoQuality { quality, listener })
    }
}

pub struct ServiceHost<S> {
    backend: Arc<S>,
    rx: mpsc::UnboundedReceiver<ServiceCommand>,
}

impl<S: ImsConfigService + 'static> ServiceHost<S> {
    pub fn new(backend: S) -> (Self, ServiceHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                backend: Arc::new(backend),
                rx,
            },
            ServiceHandle { tx },
        )
    }

    /// Serves commands in arrival order until [`ServiceHandle::shutdown`] or
    /// until every handle is dropped. Commands still queued behind a shutdown
    /// are dropped, so their callers see [`TransportError::NoReply`].
    pub async fn run(mut self) {
        debug!("IMS config host started");

        while let Some(command) = self.rx.recv().await {
            if let ServiceCommand::Shutdown = command {
                debug!("IMS config host shutting down");
                break;
            }

            let name = command.name();
            let backend = Arc::clone(&self.backend);
            let call = task::spawn_blocking(move || dispatch(backend.as_ref(), command));
            if let Err(e) = call.await {
                error!("{name} backend call did not complete: {e}");
            }
        }

        debug!("IMS config host stopped");
    }
}

fn dispatch<S: ImsConfigService>(backend: &S, command: ServiceCommand) {
    let name = command.name();
    match command {
        ServiceCommand::GetProvisionedValue { item, response_tx } => {
            reply(name, response_tx, backend.get_provisioned_value(item));
        }
        ServiceCommand::GetProvisionedStringValue { item, response_tx } => {
            reply(name, response_tx, backend.get_provisioned_string_value(item));
        }
        ServiceCommand::SetProvisionedValue {
            item,
            value,
            response_tx,
        } => {
            reply(name, response_tx, backend.set_provisioned_value(item, value));
        }
        ServiceCommand::SetProvisionedStringValue {
            item,
            value,
            response_tx,
        } => {
            reply(
                name,
                response_tx,
                backend.set_provisioned_string_value(item, &value),
            );
        }
        ServiceCommand::GetFeatureValue {
            feature,
            network,
            listener,
        } => {
            dispatched(name, backend.get_feature_value(feature, network, listener));
        }
        ServiceCommand::SetFeatureValue {
            feature,
            network,
            value,
            listener,
        } => {
            dispatched(
                name,
                backend.set_feature_value(feature, network, value, listener),
            );
        }
        ServiceCommand::GetVolteProvisioned { response_tx } => {
            reply(name, response_tx, backend.get_volte_provisioned());
        }
        ServiceCommand::GetVideoQuality { listener } => {
            dispatched(name, backend.get_video_quality(listener));
        }
        ServiceCommand::SetVideoQuality { quality, listener } => {
            dispatched(name, backend.set_video_quality(quality, listener));
        }
        ServiceCommand::Shutdown => {}
    }
}

fn reply<T>(name: &str, response_tx: Reply<T>, result: Result<T, TransportError>) {
    if response_tx.send(result).is_err() {
        error!("Failed to send {name} response - receiver dropped");
    }
}

// Listener based calls have no reply channel; the backend reports through the
// listener, so a failure here can only be logged.
fn dispatched(name: &str, result: Result<(), TransportError>) {
    if let Err(e) = result {
        warn!("{name} request failed in backend: {e}");
    }
}
