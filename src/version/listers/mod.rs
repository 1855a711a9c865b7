//! Ref lister implementations for fetching tag advertisements

pub mod pkt_line;
pub mod smart_http;

pub use smart_http::SmartHttpLister;
