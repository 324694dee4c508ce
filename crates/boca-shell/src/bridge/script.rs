//! Scripts installed into every document the surface loads.
//!
//! Messages flow one way, page to shell: page script calls
//! `window.boca.postMessage({...})`, which serializes the object and hands
//! it to the engine's native `window.ipc.postMessage` channel.

/// Exposes `window.boca.postMessage` on top of the engine IPC channel.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.boca && window.boca.postMessage) { return; }
    window.boca = window.boca || {};
    window.boca.postMessage = function(msg) {
        var body = typeof msg === 'string' ? msg : JSON.stringify(msg);
        window.ipc.postMessage(body);
    };
})();
"#;

/// Site capabilities: selection styling, safe-area padding, share and
/// calendar buttons, load notification, and the back/reload keys (the
/// engine holds keyboard focus, so the window never sees them).
/// Inert outside http(s) documents.
pub const CAPABILITY_SCRIPT: &str = r#"
(function() {
    if (location.protocol !== 'https:' && location.protocol !== 'http:') { return; }
    var post = function(msg) { window.boca.postMessage(msg); };

    var install = function() {
        var style = document.createElement('style');
        style.textContent =
            '* { -webkit-user-select: none; user-select: none; -webkit-touch-callout: none; }' +
            'body { padding-top: env(safe-area-inset-top); padding-bottom: env(safe-area-inset-bottom); }';
        (document.head || document.documentElement).appendChild(style);
    };

    var bindButtons = function() {
        document.querySelectorAll('[data-share]').forEach(function(button) {
            button.addEventListener('click', function(e) {
                e.preventDefault();
                post({ type: 'share', url: window.location.href, title: document.title });
            });
        });
        document.querySelectorAll('[data-add-to-calendar]').forEach(function(button) {
            button.addEventListener('click', function(e) {
                e.preventDefault();
                var d = button.dataset;
                post({
                    type: 'add-to-calendar',
                    title: d.title,
                    startDate: d.startDate,
                    endDate: d.endDate,
                    location: d.location,
                    notes: d.notes,
                    url: d.url
                });
            });
        });
        post({ type: 'page-loaded', url: window.location.href });
    };

    document.addEventListener('keydown', function(e) {
        if (e.defaultPrevented || e.repeat) { return; }
        var editing = e.target && (e.target.isContentEditable ||
            /^(INPUT|TEXTAREA|SELECT)$/.test(e.target.tagName));
        var back = e.key === 'BrowserBack' ||
            (e.key === 'ArrowLeft' && e.altKey) ||
            (e.key === 'Escape' && !editing);
        var reload = e.key === 'F5' || e.key === 'BrowserRefresh' ||
            ((e.ctrlKey || e.metaKey) && (e.key === 'r' || e.key === 'R'));
        if (back) {
            e.preventDefault();
            post({ type: 'back' });
        } else if (reload) {
            e.preventDefault();
            post({ type: 'reload' });
        }
    }, true);

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', install);
    } else {
        install();
    }
    if (document.readyState === 'complete') {
        bindButtons();
    } else {
        window.addEventListener('load', bindButtons);
    }
})();
"#;

/// All scripts, in install order.
pub fn init_scripts() -> [&'static str; 2] {
    [IPC_INIT_SCRIPT, CAPABILITY_SCRIPT]
}
