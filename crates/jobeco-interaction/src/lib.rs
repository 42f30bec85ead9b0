//! Interaction layer: HTTP transport, authenticated gateway, backend API.

pub mod api;
pub mod dto;
pub mod gateway;
pub mod reqwest_transport;
pub mod transport;

pub use api::{Authorized, JobBoardApi};
pub use gateway::{AuthenticatedGateway, GatewayOutcome};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, Headers, HttpTransport, Method, RequestOptions};
