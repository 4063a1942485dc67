use crate::commands::{CmdMessage, CmdResult};
use crate::config::ContactsConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ContactsConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KEY_DATA_FILE, KEY_LOG_LEVEL};
    use std::path::PathBuf;

    #[test]
    fn set_persists_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        run(
            temp_dir.path(),
            ConfigAction::Set(KEY_DATA_FILE.into(), "book.json".into()),
        )
        .unwrap();

        let loaded = ContactsConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.data_file(), PathBuf::from("book.json"));
    }

    #[test]
    fn show_key_reports_value() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(temp_dir.path(), ConfigAction::ShowKey(KEY_LOG_LEVEL.into())).unwrap();
        assert_eq!(result.messages[0].content, "log-level = warn");
    }

    #[test]
    fn show_all_returns_config_without_writing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(temp_dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ContactsConfig::default()));
        assert!(!temp_dir.path().join("config.json").exists());
    }

    #[test]
    fn invalid_value_is_not_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = run(
            temp_dir.path(),
            ConfigAction::Set(KEY_LOG_LEVEL.into(), "shouty".into()),
        );
        assert!(err.is_err());
        assert!(!temp_dir.path().join("config.json").exists());
    }
}
