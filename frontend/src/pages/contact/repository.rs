use super::utils::ContactFields;
use crate::error::TransportError;
use async_trait::async_trait;
use std::rc::Rc;

#[async_trait(?Send)]
pub trait ContactTransport {
    async fn deliver(&self, fields: &ContactFields) -> Result<(), TransportError>;
}

/// Stand-in for a mail endpoint: waits a fixed delay and reports success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl ContactTransport for SimulatedTransport {
    async fn deliver(&self, fields: &ContactFields) -> Result<(), TransportError> {
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        log::debug!(
            "simulated delivery of {} byte message",
            fields.message.len()
        );
        Ok(())
    }
}

#[derive(Clone)]
pub struct ContactRepository {
    transport: Rc<dyn ContactTransport>,
}

impl ContactRepository {
    pub fn new_with_transport(transport: Rc<dyn ContactTransport>) -> Self {
        Self { transport }
    }

    pub async fn send(&self, fields: &ContactFields) -> Result<(), TransportError> {
        self.transport.deliver(fields).await
    }
}
