mod support;

use dropzone::app_dirs::APP_DIR_NAME;
use dropzone::config::{self, CONFIG_FILE_NAME, DropZoneConfig};
use dropzone::drop_filter::AcceptancePolicy;
use support::dropzone_env::DropzoneEnvGuard;

#[test]
fn config_home_env_relocates_settings() {
    let temp = tempfile::tempdir().unwrap();
    let _env = DropzoneEnvGuard::set_config_home(temp.path().to_path_buf());

    let path = config::config_path().unwrap();
    assert_eq!(path, temp.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    assert_eq!(config::load_or_default().unwrap(), DropZoneConfig::default());

    let mut updated = DropZoneConfig::default();
    updated.policy = AcceptancePolicy::new(["wav", "FLAC"]).with_directories(true);
    config::save(&updated).unwrap();

    let reloaded = config::load_or_default().unwrap();
    assert_eq!(reloaded.policy.describe_extensions(), "wav/flac");
    assert!(reloaded.policy.accepts_directories());
    assert_eq!(reloaded.prompt_text(), "Drag wav/flac files or folders over here");
}

#[test]
fn hand_written_config_is_read() {
    let temp = tempfile::tempdir().unwrap();
    let _env = DropzoneEnvGuard::set_config_home(temp.path().to_path_buf());
    let root = temp.path().join(APP_DIR_NAME);
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join(CONFIG_FILE_NAME),
        "prompt = \"Drop a log bundle\"\n\n[policy]\nallowed_extensions = [\"log\", \"zip\"]\n\n[highlight]\ntint = [0, 120, 255, 90]\n",
    )
    .unwrap();

    let config = config::load_or_default().unwrap();
    assert_eq!(config.prompt_text(), "Drop a log bundle");
    assert!(config.policy.allows_extension("ZIP"));
    assert_eq!(config.highlight.tint, [0, 120, 255, 90]);
    assert_eq!(config.highlight.corner_radius, 10.0);
}
