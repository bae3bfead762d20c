//! # Mock Renderer
//!
//! A scripted [`Renderer`] for testing code that consumes renderers
//! (services, orchestrators) without depending on a real format.
//!
//! This module is public instead of `#[cfg(test)]` so it works with
//! integration tests.
//!
//! # Example
//! ```rust
//! use receipt_dispatch::model::Order;
//! use receipt_dispatch::renderer::mock::MockRenderer;
//! use receipt_dispatch::renderer::{Output, Renderer};
//!
//! let mock = MockRenderer::new("fax");
//! mock.expect_render().return_ok(Output::Text("sent".into()));
//! mock.expect_render().return_err("line busy");
//!
//! let order = Order::builder(1).build();
//! assert_eq!(mock.render(&order).unwrap().as_text(), Some("sent"));
//! assert_eq!(mock.render(&order).unwrap_err().reason, "line busy");
//!
//! mock.verify();
//! assert_eq!(mock.calls(), 2);
//! ```

use crate::model::{Order, OrderId};
use crate::renderer::{Output, RenderError, Renderer};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    expectations: VecDeque<Result<Output, RenderError>>,
    fallback: Option<Output>,
    rendered: Vec<OrderId>,
}

/// A renderer that replays queued results in order.
///
/// When the queue is empty the mock returns its fallback output (see
/// [`MockRenderer::returning`]); without one, an unexpected call panics.
#[derive(Debug, Clone)]
pub struct MockRenderer {
    format: String,
    state: Arc<Mutex<MockState>>,
}

impl MockRenderer {
    /// Creates a mock with no expectations.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Creates a mock that answers every call with `output`.
    pub fn returning(format: impl Into<String>, output: Output) -> Self {
        let mock = Self::new(format);
        mock.state.lock().unwrap().fallback = Some(output);
        mock
    }

    /// Queues the result of the next `render` call.
    pub fn expect_render(&self) -> RenderExpectationBuilder<'_> {
        RenderExpectationBuilder { mock: self }
    }

    /// Number of `render` calls so far.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().rendered.len()
    }

    /// Ids of the orders rendered so far, in call order.
    pub fn rendered_orders(&self) -> Vec<OrderId> {
        self.state.lock().unwrap().rendered.clone()
    }

    /// Panics if queued expectations were never consumed.
    pub fn verify(&self) {
        let pending = self.state.lock().unwrap().expectations.len();
        if pending > 0 {
            panic!("{} render expectation(s) not met for mock `{}`", pending, self.format);
        }
    }
}

impl Renderer for MockRenderer {
    fn format(&self) -> &str {
        &self.format
    }

    fn render(&self, order: &Order) -> Result<Output, RenderError> {
        let mut state = self.state.lock().unwrap();
        state.rendered.push(order.id());
        let next = state
            .expectations
            .pop_front()
            .or_else(|| state.fallback.clone().map(Ok));
        // release the lock first so a panic does not poison it
        drop(state);
        match next {
            Some(result) => result,
            None => panic!("Unexpected render call on mock `{}`", self.format),
        }
    }
}

/// Builder returned by [`MockRenderer::expect_render`].
pub struct RenderExpectationBuilder<'a> {
    mock: &'a MockRenderer,
}

impl RenderExpectationBuilder<'_> {
    pub fn return_ok(self, output: Output) {
        self.push(Ok(output));
    }

    pub fn return_err(self, reason: impl Into<String>) {
        let err = RenderError::new(self.mock.format.clone(), reason);
        self.push(Err(err));
    }

    fn push(self, result: Result<Output, RenderError>) {
        self.mock.state.lock().unwrap().expectations.push_back(result);
    }
}
