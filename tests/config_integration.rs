use design_button::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const ARGS: [&str; 1] = ["design-button"];

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("GALLERY_SERVER__PORT");
        env::remove_var("GALLERY_GALLERY__TITLE");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("STATIC_DIR");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(ARGS).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.gallery.title, "Button");
    assert_eq!(config.gallery.stylesheet, "/static/app.css");
    assert_eq!(config.gallery.static_dir, "static");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("GALLERY_SERVER__PORT", "9090");
        env::set_var("GALLERY_GALLERY__TITLE", "Components");
    }

    let config = AppConfig::load_from_args(ARGS).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.gallery.title, "Components");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(file, "server:\n  port: 7070\ngallery:\n  title: From file").unwrap();

    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args(ARGS).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.gallery.title, "From file");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["design-button", "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("GALLERY_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["design-button", "--port", "4040", "--host", "0.0.0.0"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4040);
    assert_eq!(config.bind_address(), "0.0.0.0:4040");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args(ARGS);

    // Clean up before asserting so a failure doesn't leave the file behind
    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
