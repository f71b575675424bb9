//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Hearth Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[service]
# base_url = "http://127.0.0.1:5000"
# chat_path = "/chat"
# connect_timeout_secs = 10   # 1-120

[pacing]
# Reply delay in ms = min(max_ms, base_ms + per_char_ms * reply length)
# base_ms = 350
# per_char_ms = 12
# max_ms = 1800               # 1-60000

[session]
# greeting = "Hey... I missed you thoda sa. How was your day? 💜"
# serialize_exchanges = false  # true ignores input while a reply is pending

[storage]
# path = ""                   # empty = platform data dir / hearth / storage.json

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
