//! BocaApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;
use winit::window::Window;

use boca_common::{EventBus, ShellEvent};
use boca_config::BocaConfig;
use boca_platform::ClipboardShare;
use boca_shell::{
    ConnectivityMonitor, DeepLinkRouter, HttpReachability, MessageBridge, OriginPolicy, Prompter,
    ViewController,
};
use boca_webview::{WebViewHandle, WebViewManager};

use super::dialogs::DialogPrompter;
use super::services::Services;
use super::types::ServiceEvent;

/// Top-level application state.
pub struct BocaApp {
    pub(super) config: BocaConfig,
    pub(super) policy: OriginPolicy,
    pub(super) router: DeepLinkRouter,
    pub(super) bridge: MessageBridge,
    pub(super) view: ViewController<WebViewHandle>,
    pub(super) monitor: ConnectivityMonitor,
    /// Kept for on-demand checks; the periodic task owns a clone.
    pub(super) reachability: Option<HttpReachability>,
    pub(super) prompter: Box<dyn Prompter>,
    pub(super) share: Option<ClipboardShare>,

    // Background tasks publish here; the UI loop drains `shell_rx`.
    pub(super) event_bus: EventBus,
    pub(super) shell_rx: broadcast::Receiver<ShellEvent>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) services: Option<Services>,
    pub(super) service_tx: std::sync::mpsc::Sender<ServiceEvent>,
    pub(super) service_rx: std::sync::mpsc::Receiver<ServiceEvent>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: Option<WebViewManager>,
    pub(super) page_title: String,
    /// Last text set on the window.
    pub(super) window_title: String,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl BocaApp {
    pub fn new(
        config: BocaConfig,
        policy: OriginPolicy,
        router: DeepLinkRouter,
        initial_url: String,
    ) -> Self {
        let event_bus = EventBus::new(64);
        let shell_rx = event_bus.subscribe();
        let (service_tx, service_rx) = std::sync::mpsc::channel();
        let bridge = MessageBridge::new(&config, policy.clone());
        let view = ViewController::new(initial_url, policy.clone());
        let window_title = config.site.title.clone();
        Self {
            config,
            policy,
            router,
            bridge,
            view,
            monitor: ConnectivityMonitor::new(),
            reachability: None,
            prompter: Box::new(DialogPrompter::new()),
            share: None,
            event_bus,
            shell_rx,
            tokio_runtime: None,
            services: None,
            service_tx,
            service_rx,
            window: None,
            webviews: None,
            page_title: String::new(),
            window_title,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
