//! `pagesearch settings ...`

use pagesearch_common::PageSearchError;
use pagesearch_config::{ModelPreference, Settings};

use super::mask_key;
use crate::cli::{ModelArg, SettingsCommand};

pub(super) fn run(cmd: SettingsCommand, settings: &Settings) -> Result<(), PageSearchError> {
    match cmd {
        SettingsCommand::Show => {
            for line in describe(settings)? {
                println!("{line}");
            }
        }
        SettingsCommand::SetKey { key } => {
            settings.save_api_key(&key)?;
            println!("API key saved");
        }
        SettingsCommand::ClearKey => {
            settings.clear_api_key()?;
            println!("API key removed");
        }
        SettingsCommand::Model { preference } => {
            let pref = model_preference(preference);
            settings.save_model_preference(pref)?;
            println!("model: {pref} ({})", pref.model_identifier());
        }
    }
    Ok(())
}

fn model_preference(arg: ModelArg) -> ModelPreference {
    match arg {
        ModelArg::Fast => ModelPreference::Fast,
        ModelArg::Slow => ModelPreference::Slow,
    }
}

fn describe(settings: &Settings) -> Result<Vec<String>, PageSearchError> {
    let snapshot = settings.snapshot()?;
    let key = if snapshot.has_api_key {
        mask_key(&snapshot.api_key)
    } else {
        "(not set)".to_string()
    };
    let pref = snapshot.model_preference;
    Ok(vec![
        format!("api key: {key}"),
        format!("model:   {pref} ({})", pref.model_identifier()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesearch_common::SettingsError;
    use pagesearch_config::FileSettingsStore;

    #[test]
    fn set_show_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(FileSettingsStore::new(dir.path().join("settings.json")));

        run(
            SettingsCommand::SetKey {
                key: "vck_1234567890abcd".into(),
            },
            &settings,
        )
        .unwrap();
        run(
            SettingsCommand::Model {
                preference: ModelArg::Fast,
            },
            &settings,
        )
        .unwrap();

        let lines = describe(&settings).unwrap();
        assert_eq!(lines[0], "api key: vck_...abcd");
        assert!(lines[1].starts_with("model:   fast"));

        run(SettingsCommand::ClearKey, &settings).unwrap();
        assert_eq!(describe(&settings).unwrap()[0], "api key: (not set)");
    }

    #[test]
    fn short_key_is_rejected() {
        let settings = Settings::in_memory();
        let err = run(SettingsCommand::SetKey { key: "abc".into() }, &settings).unwrap_err();
        assert!(matches!(
            err,
            PageSearchError::Settings(SettingsError::InvalidApiKey)
        ));
    }
}
