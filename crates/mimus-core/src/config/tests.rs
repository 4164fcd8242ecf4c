use super::*;

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/mimus-config.toml").unwrap();
    assert_eq!(cfg.mimus.name, "Mimus");
    assert_eq!(cfg.mimus.data_dir, "~/.mimus");
    assert_eq!(cfg.engine.default, "ollama");
    assert!(cfg.channel.discord.is_none());
}

#[test]
fn test_discord_config_defaults() {
    let toml_str = r#"
        enabled = true
        bot_token = "abc"
    "#;
    let dc: DiscordConfig = toml::from_str(toml_str).unwrap();
    assert!(dc.enabled);
    assert_eq!(dc.bot_token, "abc");
    assert_eq!(dc.message_limit, 2000);
}

#[test]
fn test_ollama_config_defaults() {
    let oc = OllamaConfig::default();
    assert_eq!(oc.base_url, "http://localhost:11434");
    assert_eq!(oc.temperature, 0.2);
    assert_eq!(oc.repeat_penalty, 1.1);
    assert_eq!(oc.repeat_last_n, 64);
    assert_eq!(oc.max_tokens, 2560);
    assert_eq!(oc.threads, 8);
    assert!(oc.seed.is_none());
}

#[test]
fn test_full_config_from_toml() {
    let toml_str = r#"
        [mimus]
        name = "Echo"
        data_dir = "/var/lib/mimus"

        [channel.discord]
        enabled = true
        bot_token = "token"
        message_limit = 4000

        [engine]
        default = "ollama"

        [engine.ollama]
        model = "mistral"
        seed = 42
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.mimus.name, "Echo");
    assert_eq!(cfg.mimus.log_level, "info");

    let discord = cfg.channel.discord.unwrap();
    assert_eq!(discord.message_limit, 4000);

    let ollama = cfg.engine.ollama.unwrap();
    assert_eq!(ollama.model, "mistral");
    assert_eq!(ollama.seed, Some(42));
    // Unlisted sampling parameters keep their defaults.
    assert_eq!(ollama.temperature, 0.2);
}

#[test]
fn test_custom_log_level_from_toml() {
    let cfg: Config = toml::from_str("[mimus]\nlog_level = \"debug\"").unwrap();
    assert_eq!(cfg.mimus.log_level, "debug");
}

#[test]
fn test_shellexpand_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let home = home.to_string_lossy().to_string();
        assert_eq!(shellexpand("~/data"), format!("{home}/data"));
        assert_eq!(shellexpand("~"), home);
    }
    assert_eq!(shellexpand("/absolute/path"), "/absolute/path");
    // Only a bare `~` or a `~/` prefix expands.
    assert_eq!(shellexpand("~user/data"), "~user/data");
}
