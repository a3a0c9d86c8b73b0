//! Checkout client widget.
//!
//! Holds the button state for one product: `Idle -> Pending -> Resolved | Failed`.
//! Only one checkout call may be in flight per widget; while pending the
//! control is disabled and further activations are ignored. A resolved widget
//! can be activated again, which starts a fresh checkout.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::checkout::CheckoutResponse;
use crate::client::CheckoutTransport;
use crate::pages::escape_html;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Pending,
    Resolved(CheckoutResponse),
    Failed(String),
}

/// Outcome of one [`CheckoutWidget::activate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A checkout was already in flight; no call was made.
    Ignored,
    Resolved(CheckoutResponse),
    Failed(String),
}

/// Opens the mock payment URL in a new browsing context (tab, browser, ...).
pub trait Navigator: Send + Sync {
    fn open_in_new_context(&self, url: &str);
}

#[derive(Clone)]
pub struct CheckoutWidget {
    product_id: String,
    product_name: String,
    transport: Arc<dyn CheckoutTransport>,
    navigator: Option<Arc<dyn Navigator>>,
    state: Arc<Mutex<WidgetState>>,
}

impl CheckoutWidget {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        transport: Arc<dyn CheckoutTransport>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            transport,
            navigator: None,
            state: Arc::new(Mutex::new(WidgetState::Idle)),
        }
    }

    /// Open the payment URL through `navigator` after each successful checkout.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub async fn state(&self) -> WidgetState {
        self.state.lock().await.clone()
    }

    pub async fn is_enabled(&self) -> bool {
        !matches!(*self.state.lock().await, WidgetState::Pending)
    }

    pub fn failure_message(&self) -> String {
        failure_message(&self.product_name)
    }

    /// Runs one checkout. Transport errors end up in [`WidgetState::Failed`], never returned.
    pub async fn activate(&self) -> Activation {
        {
            let mut state = self.state.lock().await;
            if matches!(*state, WidgetState::Pending) {
                debug!("checkout for {} already in flight", self.product_id);
                return Activation::Ignored;
            }
            *state = WidgetState::Pending;
        }
        let guard = PendingGuard {
            state: self.state.clone(),
            product_id: self.product_id.clone(),
            armed: true,
        };

        let result = self.transport.checkout(&self.product_id).await;

        let mut state = self.state.lock().await;
        guard.disarm();
        match result {
            Ok(receipt) => {
                info!(
                    "checkout for {} resolved, reference {}",
                    self.product_id, receipt.reference
                );
                *state = WidgetState::Resolved(receipt.clone());
                drop(state);
                if let Some(navigator) = &self.navigator {
                    navigator.open_in_new_context(&receipt.payment_url);
                }
                Activation::Resolved(receipt)
            }
            Err(e) => {
                warn!("checkout for {} failed: {}", self.product_id, e);
                let message = self.failure_message();
                *state = WidgetState::Failed(message.clone());
                Activation::Failed(message)
            }
        }
    }

    pub async fn render_html(&self) -> String {
        let state = self.state().await;
        render_widget(&self.product_id, &self.product_name, &state)
    }
}

/// Puts the widget back to `Idle` when an activation is dropped mid-flight
/// (timeout, `select!`, aborted task), so the control does not stay disabled.
struct PendingGuard {
    state: Arc<Mutex<WidgetState>>,
    product_id: String,
    armed: bool,
}

impl PendingGuard {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("checkout for {} dropped before completion", self.product_id);
        match self.state.try_lock() {
            Ok(mut state) => release_pending(&mut state),
            Err(_) => {
                // Nobody else can leave `Pending`, so resetting later is safe.
                let state = self.state.clone();
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    handle.spawn(async move { release_pending(&mut *state.lock().await) });
                }
            }
        }
    }
}

fn release_pending(state: &mut WidgetState) {
    if matches!(state, WidgetState::Pending) {
        *state = WidgetState::Idle;
    }
}

pub fn failure_message(product_name: &str) -> String {
    format!(
        "Unable to launch checkout for {}. Please try again. If the problem persists, check your connection or contact support.",
        product_name
    )
}

/// HTML for the widget in `state`. The receipt and the error block are mutually exclusive.
pub fn render_widget(product_id: &str, product_name: &str, state: &WidgetState) -> String {
    let pending = matches!(state, WidgetState::Pending);
    let button = format!(
        r#"<button type="button" class="checkout-button" data-checkout-endpoint="/api/checkout/{}"{}>{}</button>"#,
        escape_html(product_id),
        if pending { " disabled" } else { "" },
        if pending { "Processing…" } else { "Initiate Checkout" },
    );

    let detail = match state {
        WidgetState::Resolved(receipt) => format!(
            r#"<div class="checkout-receipt"><p class="checkout-title">Signal Locked · {}</p><p>{}</p><p class="checkout-reference">Reference {}</p><a href="{}" target="_blank" rel="noreferrer">View payment session</a></div>"#,
            escape_html(product_name),
            escape_html(&receipt.message),
            escape_html(&receipt.reference),
            escape_html(&receipt.payment_url),
        ),
        WidgetState::Failed(message) => format!(
            r#"<div class="checkout-error" role="alert">{}</div>"#,
            escape_html(message)
        ),
        WidgetState::Idle | WidgetState::Pending => String::new(),
    };

    format!(
        r#"<div class="checkout-widget" aria-live="polite" aria-label="Checkout {}">{}{}</div>"#,
        escape_html(product_name),
        button,
        detail
    )
}
