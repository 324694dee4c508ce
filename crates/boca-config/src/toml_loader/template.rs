//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Boca Parliament shell configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[site]
# base_url = "https://israeliparliament.org/boca/user/"   # must end with '/'
# start_url = ""                  # empty = base_url
# title = "Boca Parliament"
# share_message = "Check out Boca Parliament: {url}"
# allowed_origins = []            # extra origins, e.g. ["https://cdn.example.org"]

[deep_link]
# scheme = "bocaparliament"       # bocaparliament://path -> base_url + path
# forward_port = 47621            # 0 disables single-instance link forwarding

[webview]
# user_agent = ""
# devtools = false
# cache_enabled = true            # keep the engine's persistent cache
# autoplay = true
# clipboard = true
# back_navigation_gestures = true

[connectivity]
# probe_url = ""                  # empty = base_url
# interval_secs = 5               # 1-3600
# timeout_secs = 4                # 1-120, <= interval_secs

[bridge]
# max_message_bytes = 65536       # 256-1048576
# calendar_enabled = true

[calendar]
# directory = ""                  # empty = <data dir>/calendar
# open_after_save = true

[notifications]
# enabled = true
# token_key = "fcm_token"

[logging]
# level = "info"                  # trace, debug, info, warn, error
# redact_secrets = true
"##
    .to_string()
}
