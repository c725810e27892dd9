pub mod auth_service;
pub mod auth_service_impl;
pub mod report_service;
pub mod report_service_impl;

pub use auth_service::{AuthError, AuthService};
pub use auth_service_impl::SeaOrmAuthService;
pub use report_service::{ReportError, ReportService};
pub use report_service_impl::SeaOrmReportService;
