//! Dashboard context - configuration, formatter and catalog bundled once.

mod dashboard_service;


pub use dashboard_service::Dashboard;
