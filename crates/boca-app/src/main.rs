mod app_state;
mod cli;
mod link_forward;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use boca_config::schema::{BocaConfig, LogLevel};
use boca_shell::{DeepLinkRouter, OriginPolicy};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "boca=info";

fn install_panic_hook(redact: Arc<AtomicBool>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = boca_platform::crash_report::write_crash_report(
            info,
            redact.load(Ordering::Relaxed),
        );

        eprintln!("\n--- Boca crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("--------------------\n");

        default_hook(info);
    }));
}

/// `--log-level` accepts a bare level (scoped to the shell's crates) or a
/// full filter directive.
fn log_directive(cli_level: Option<&str>, config: Option<&BocaConfig>) -> String {
    if let Some(raw) = cli_level {
        let level = match raw.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        };
        return level.map_or_else(|| raw.to_string(), |l| l.directive().to_string());
    }
    config
        .map(|c| c.logging.level.directive().to_string())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    let mut applied = 0;
    for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<Directive>() {
            Ok(d) => {
                filter = filter.add_directive(d);
                applied += 1;
            }
            Err(e) => eprintln!("Ignoring log directive '{part}': {e}"),
        }
    }
    if applied == 0 {
        if let Ok(d) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(d);
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let redact = Arc::new(AtomicBool::new(true));
    install_panic_hook(Arc::clone(&redact));

    let args = cli::parse();

    // Config is loaded before logging so its level can apply; failures are
    // reported once the subscriber exists.
    let loaded = boca_config::load_config_from(args.config.as_deref());
    init_logging(&log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok(),
    ));

    tracing::info!("Boca v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BocaConfig::default()
    });
    redact.store(config.logging.redact_secrets, Ordering::Relaxed);
    tracing::info!(site = %config.site.base_url, "Config loaded");

    // A running instance takes the link and this launch ends here.
    if let Some(ref link) = args.link {
        if link_forward::forward_to_running(config.deep_link.forward_port, link) {
            tracing::info!("Link handed to running instance");
            return;
        }
    }

    if let Err(e) = boca_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let policy = match OriginPolicy::from_config(&config.site) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Invalid site configuration: {e}");
            return;
        }
    };
    let router = DeepLinkRouter::from_config(&config, policy.clone());
    let initial_url = router.initial_url(args.link.as_deref(), config.site.start_url());
    tracing::info!(url = %initial_url, "Initial URL");

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::BocaApp::new(config, policy, router, initial_url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_scoped() {
        assert_eq!(log_directive(Some("debug"), None), "boca=debug");
        assert_eq!(log_directive(Some("WARN"), None), "boca=warn");
    }

    #[test]
    fn full_directives_pass_through() {
        assert_eq!(
            log_directive(Some("boca_shell=trace,wry=warn"), None),
            "boca_shell=trace,wry=warn"
        );
    }

    #[test]
    fn config_level_then_default() {
        let mut config = BocaConfig::default();
        config.logging.level = LogLevel::Error;
        assert_eq!(log_directive(None, Some(&config)), "boca=error");
        assert_eq!(log_directive(None, None), DEFAULT_DIRECTIVE);
    }
}
