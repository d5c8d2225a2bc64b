use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// What the form hands to the delivery collaborator on a successful submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("signup delivery rejected: {0}")]
    Rejected(String),
}

pub type DeliveryFuture = Pin<Box<dyn Future<Output = Result<(), DeliveryError>>>>;

/// Cloneable handle to whatever records the signup. The form only ever calls
/// `submit`; pages mount the form with the default handle, tests swap in
/// instant or failing ones.
#[derive(Clone)]
pub struct Delivery {
    submit: Rc<dyn Fn(SignupRequest) -> DeliveryFuture>,
}

impl Delivery {
    pub fn new(submit: impl Fn(SignupRequest) -> DeliveryFuture + 'static) -> Self {
        Self {
            submit: Rc::new(submit),
        }
    }

    /// The shipped collaborator: logs the payload and resolves after a fixed
    /// delay. No real side effect.
    pub fn simulated() -> Self {
        Self::new(|request| {
            Box::pin(async move {
                match serde_json::to_string(&request) {
                    Ok(payload) => log::info!("Email signup: {}", payload),
                    Err(e) => log::warn!("Email signup payload failed to serialize: {}", e),
                }
                TimeoutFuture::new(config::SIMULATED_DELIVERY_MS).await;
                Ok(())
            })
        })
    }

    pub fn submit(&self, request: SignupRequest) -> DeliveryFuture {
        (self.submit)(request)
    }
}

impl Default for Delivery {
    fn default() -> Self {
        Self::simulated()
    }
}

impl PartialEq for Delivery {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.submit, &other.submit)
    }
}

// The handler closure is not printable, so show the handle as opaque.
impl fmt::Debug for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delivery").finish_non_exhaustive()
    }
}
