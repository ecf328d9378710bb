//! Tests for layered settings loading

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use dossier::application::ApplicationError;
use dossier::config::{RenderStyle, Settings};

// Settings::load_from reads DOSSIER_* from the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clear_env() {
    for key in ["DOSSIER_STYLE", "DOSSIER_COLOR", "DOSSIER_DATA", "DOSSIER_TEST_HOME"] {
        std::env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("dossier.toml");
    std::fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_global_file_when_loading_then_defaults_apply() {
    let _guard = env_lock();
    clear_env();
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(temp.path().join("absent.toml").as_path())).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_loading_then_specified_values_override_defaults() {
    let _guard = env_lock();
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "style = \"tree\"\ndata = \"/srv/dossier.toml\"\n");

    let settings = Settings::load_from(Some(path.as_path())).unwrap();

    assert_eq!(settings.style, RenderStyle::Tree);
    assert!(settings.color);
    assert_eq!(settings.data, Some(PathBuf::from("/srv/dossier.toml")));
}

#[test]
fn given_invalid_global_file_when_loading_then_config_error() {
    let _guard = env_lock();
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "style = \"fancy\"\n");

    let err = Settings::load_from(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_settings_when_serializing_then_toml_round_trips_through_loader() {
    let _guard = env_lock();
    clear_env();
    let temp = TempDir::new().unwrap();
    let settings = Settings {
        style: RenderStyle::Tree,
        color: false,
        data: None,
    };
    let path = write_config(&temp, &settings.to_toml().unwrap());

    let loaded = Settings::load_from(Some(path.as_path())).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn given_env_vars_when_loading_then_they_override_global_file() {
    let _guard = env_lock();
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        "style = \"plain\"\ncolor = true\ndata = \"/srv/dossier.toml\"\n",
    );
    std::env::set_var("DOSSIER_STYLE", "tree");
    std::env::set_var("DOSSIER_COLOR", "false");
    std::env::set_var("DOSSIER_DATA", "/tmp/from-env.toml");

    let result = Settings::load_from(Some(path.as_path()));
    clear_env();

    let settings = result.unwrap();
    assert_eq!(settings.style, RenderStyle::Tree);
    assert!(!settings.color);
    assert_eq!(settings.data, Some(PathBuf::from("/tmp/from-env.toml")));
}

#[test]
fn given_invalid_style_env_when_loading_then_config_error() {
    let _guard = env_lock();
    clear_env();
    std::env::set_var("DOSSIER_STYLE", "fancy");

    let result = Settings::load_from(None);
    clear_env();

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_data_path_with_variable_when_loading_then_it_is_expanded() {
    let _guard = env_lock();
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "data = \"$DOSSIER_TEST_HOME/dossier.toml\"\n");
    std::env::set_var("DOSSIER_TEST_HOME", "/home/colaborador");

    let result = Settings::load_from(Some(path.as_path()));
    clear_env();

    let expected = PathBuf::from("/home/colaborador/dossier.toml");
    assert_eq!(result.unwrap().data, Some(expected));
}

#[test]
fn given_data_env_with_tilde_when_loading_then_home_is_expanded() {
    let _guard = env_lock();
    clear_env();
    let home = std::env::var_os("HOME");
    std::env::set_var("HOME", "/home/colaborador");
    std::env::set_var("DOSSIER_DATA", "~/dossier.toml");

    let result = Settings::load_from(None);
    clear_env();
    match home {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }

    let expected = PathBuf::from("/home/colaborador/dossier.toml");
    assert_eq!(result.unwrap().data, Some(expected));
}
