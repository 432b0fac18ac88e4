// Library exports for testing and binaries
pub mod config;
pub mod i18n;
