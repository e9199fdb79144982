// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

type Bundles = HashMap<LanguageIdentifier, FluentBundle<FluentResource>>;

pub struct I18n {
    bundles: Bundles,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the translation catalog and resolves the startup locale.
    ///
    /// When `i18n_dir` is given, `.ftl` files are loaded from that directory
    /// instead of the embedded catalogs (useful for translation work without
    /// rebuilding). A directory that cannot be read falls back to the
    /// embedded catalogs.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<PathBuf>, config: &Config) -> Self {
        let (bundles, available_locales) = i18n_dir
            .as_deref()
            .and_then(load_bundles_from_dir)
            .unwrap_or_else(load_embedded_bundles);

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the active locale. Locales without a loaded bundle are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Translates a message key for the current locale.
    ///
    /// Missing keys resolve to `MISSING: <key>` so untranslated strings are
    /// visible in the UI instead of silently blank.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates a message key with Fluent arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn load_embedded_bundles() -> (Bundles, Vec<LanguageIdentifier>) {
    let mut bundles = HashMap::new();
    let mut available_locales = Vec::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(".ftl") {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                if let Some(content) = Asset::get(filename) {
                    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                    add_bundle(&mut bundles, &mut available_locales, locale, source, filename);
                }
            }
        }
    }

    (bundles, available_locales)
}

fn load_bundles_from_dir(dir: &Path) -> Option<(Bundles, Vec<LanguageIdentifier>)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!(
                "Failed to read i18n dir {}: {}. Using embedded catalogs.",
                dir.display(),
                err
            );
            return None;
        }
    };

    let mut bundles = HashMap::new();
    let mut available_locales = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale_str) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".ftl"))
        else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                let name = path.display().to_string();
                add_bundle(&mut bundles, &mut available_locales, locale, source, &name);
            }
            Err(err) => eprintln!("Failed to read {}: {}", path.display(), err),
        }
    }

    if available_locales.is_empty() {
        eprintln!(
            "No usable .ftl files in {}. Using embedded catalogs.",
            dir.display()
        );
        return None;
    }

    Some((bundles, available_locales))
}

fn add_bundle(
    bundles: &mut Bundles,
    available_locales: &mut Vec<LanguageIdentifier>,
    locale: LanguageIdentifier,
    source: String,
    origin: &str,
) {
    let res = match FluentResource::try_new(source) {
        Ok(res) => res,
        Err((res, errors)) => {
            eprintln!("Parse errors in {}: {:?}", origin, errors);
            res
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    if let Err(errors) = bundle.add_resource(res) {
        eprintln!("Failed to add resource from {}: {:?}", origin, errors);
        return;
    }
    bundles.insert(locale.clone(), bundle);
    available_locales.push(locale);
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
