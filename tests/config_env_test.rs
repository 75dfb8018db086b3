use calcdemo::Settings;
use calcdemo::io::OutputFormat;
use std::env;
use std::fs;
use tempfile::TempDir;

// Single test per binary: environment variables are process-global.
#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.toml");
    fs::write(
        &config_path,
        r#"
version = 2

[logging]
default = "info"
"#,
    )
    .unwrap();

    unsafe {
        env::set_var("CALCDEMO_OUTPUT__FORMAT", "json");
        env::set_var("CALCDEMO_LOGGING__DEFAULT", "debug");
    }

    let settings = Settings::load_from(&config_path).unwrap();

    // Environment variable overrides config file
    assert_eq!(settings.logging.default, "debug");
    // Env var sets a value the file does not mention
    assert_eq!(settings.output.format, OutputFormat::Json);
    // Config file value remains
    assert_eq!(settings.version, 2);

    unsafe {
        env::remove_var("CALCDEMO_OUTPUT__FORMAT");
        env::remove_var("CALCDEMO_LOGGING__DEFAULT");
    }
}
