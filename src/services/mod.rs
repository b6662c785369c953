pub mod karma_service;
pub mod plot_service;
pub mod summary_service;
