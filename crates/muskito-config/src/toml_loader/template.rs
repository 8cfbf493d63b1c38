//! Commented default config file written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r#"# Muskito Configuration
# Only override what you want to change -- missing fields use defaults.
# The API key is never read from this file; set GROQ_API_KEY instead.

[model]
# name = "llama-3.1-8b-instant"
# temperature = 0.9          # 0.0-2.0
# max_tokens = 512           # 1-32768
# base_url = "https://api.groq.com/openai/v1"

[session]
# default_mode = "happy_delusional"   # happy_delusional, brutal_roaster
# stream = true
# rollback_failed_turns = false       # drop the user message when its reply fails

[logging]
# level = "info"             # trace, debug, info, warn, error
"#
}
