use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_stemix_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("STEMIX_CONFIG_PATH", "/tmp/stemix-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/stemix-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("stemix")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("stemix")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
directory = "/music/stems"
extensions = ["mp3"]

[playback]
speed = 1.25
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("STEMIX_CONFIG_PATH", cfg_path.to_str().unwrap());

    let settings = Settings::load().unwrap();
    assert_eq!(
        settings.library.directory,
        std::path::PathBuf::from("/music/stems")
    );
    assert_eq!(settings.library.extensions, vec!["mp3".to_string()]);
    assert!((settings.playback.speed - 1.25).abs() < f32::EPSILON);
    assert!(settings.validate().is_ok());
}

#[test]
fn settings_defaults_are_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
    assert!((settings.playback.speed - 1.0).abs() < f32::EPSILON);
    assert!(settings.library.extensions.contains(&"mp3".to_string()));
}

#[test]
fn validate_rejects_non_positive_speed() {
    let mut settings = Settings::default();
    settings.playback.speed = 0.0;
    assert!(settings.validate().is_err());
    settings.playback.speed = -1.0;
    assert!(settings.validate().is_err());
}

#[test]
fn validate_rejects_empty_extension_list() {
    let mut settings = Settings::default();
    settings.library.extensions.clear();
    assert!(settings.validate().is_err());
}
