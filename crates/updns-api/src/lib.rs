// # updns-api
//
// HTTP surface for the UpDNS update service.
//
// Three routes, one wire protocol:
//
// - `GET /`: fixed identity/version document
// - `POST /update/{hostname}/{token}`: publish the caller's address,
//   resolved from the connection (and `X-Forwarded-For` when the peer
//   is a trusted proxy)
// - `POST /update/{hostname}/{token}/{ip}`: publish an explicit address
//
// Success is `200 SUCCESS`; every pipeline failure is `500` with a
// plain-text message. All decision logic lives in `updns-core`; this
// crate only extracts, delegates, and maps errors onto responses.

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_routes;
pub use state::AppState;
