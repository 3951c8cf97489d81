//! Service startup logging for the hotel aggregator

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	let service_name = "hotel-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Hotel Aggregator Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the effective supplier and cache configuration
pub fn log_configuration(settings: &Settings) {
	let suppliers = settings.enabled_suppliers();
	info!("🏨 Enabled suppliers: {}", suppliers.len());
	for (name, supplier) in &suppliers {
		info!(
			"   - {} ({}) -> {} [timeout {}ms]",
			name, supplier.adapter, supplier.endpoint, supplier.timeout_ms
		);
	}
	info!(
		"🗄️ Cache TTL: {}s, cleanup every {}s",
		settings.cache.ttl_secs, settings.cache.cleanup_interval_secs
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Hotel Aggregator Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Hotel Aggregator Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
}
