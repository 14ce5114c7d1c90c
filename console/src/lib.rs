//! Console glue around the search engine: line-oriented input parsing,
//! pagination for display, and per-session request statistics.

pub mod input;
pub mod paginate;
pub mod request_queue;

pub use paginate::paginate;
pub use request_queue::RequestQueue;
