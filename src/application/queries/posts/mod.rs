mod listing;
mod service;

pub use service::BlogQueryService;
