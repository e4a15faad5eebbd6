/// Blocking HTTP client and the transport abstraction.
pub mod http;
