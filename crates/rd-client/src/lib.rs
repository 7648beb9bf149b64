//! Client for the remote risk computation service.
//!
//! [`RiskService`] is the seam the orchestration layer talks through;
//! [`HttpRiskService`] is the production implementation. Tests plug in their
//! own mocks.

pub mod http;
pub mod service;

pub use http::HttpRiskService;
pub use service::{RiskService, ServiceResult};
