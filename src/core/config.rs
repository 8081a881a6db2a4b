use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{}", yaml);
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file with `editor` (or $EDITOR/$VISUAL), falling back
    /// to the platform default when the requested one is not available.
    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} not found, run `rponto init` first",
                path.display()
            )));
        }

        let default_editor = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", requested));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            )),
        }

        match Command::new(&default_editor).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", default_editor));
                Ok(())
            }
            _ => {
                error(format!("Failed to edit configuration with '{}'", default_editor));
                Err(AppError::Config("no usable editor".into()))
            }
        }
    }
}
