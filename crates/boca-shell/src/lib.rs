//! Platform-independent core of the Boca shell.
//!
//! Everything here is driven by plain method calls and talks to the outside
//! world only through the [`Surface`] and [`Prompter`] traits, so the whole
//! flow can be exercised without a window or a web engine.

pub mod bridge;
pub mod connectivity;
pub mod deep_link;
pub mod origin;
pub mod surface;
pub mod view;

pub use bridge::{BridgeAction, BridgeMessage, MessageBridge, OFFLINE_HTML};
pub use connectivity::{
    check_now, spawn_probe, ConnectivityMonitor, ConnectivityTransition, HttpReachability,
    Reachability,
};
pub use deep_link::DeepLinkRouter;
pub use origin::OriginPolicy;
pub use surface::{Prompter, Surface};
pub use view::{Content, ViewController, ViewState};
