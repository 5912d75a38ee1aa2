pub mod booking_service;
pub mod dashboard_service;
pub mod payment;
pub mod pricing_service;
pub mod rate_import_service;
pub mod rate_resolver;
