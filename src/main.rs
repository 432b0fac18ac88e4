//! Look up a translation from the command line.
//!
//! Usage:
//!   app-i18n --list
//!   app-i18n [--locale <code>] <key> [name=value ...]
//!
//! Optional environment variables:
//! - APP_LOCALE (locale override, same as --locale)
//! - APP_I18N_DIR (directory of <code>.json bundles; embedded bundles otherwise)
//! - LC_ALL / LC_MESSAGES / LANG (initial locale hint)

use anyhow::{bail, Context, Result};
use app_i18n::config::Config;
use app_i18n::i18n::{available_locales, TranslationStore, Translator, Vars};
use std::sync::Arc;
use tracing::{debug, info};

const USAGE: &str = "Usage: app-i18n --list\n       app-i18n [--locale <code>] <key> [name=value ...]";

struct Args {
    list: bool,
    locale: Option<String>,
    key: Option<String>,
    vars: Vec<(String, String)>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        list: false,
        locale: None,
        key: None,
        vars: Vec::new(),
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => parsed.list = true,
            "--locale" => {
                parsed.locale = Some(args.next().context("--locale needs a value")?);
            }
            "-h" | "--help" => bail!("{}", USAGE),
            _ if parsed.key.is_none() => parsed.key = Some(arg),
            _ => {
                let (name, value) = arg
                    .split_once('=')
                    .with_context(|| format!("Expected name=value, got '{}'", arg))?;
                parsed.vars.push((name.to_string(), value.to_string()));
            }
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the translation
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("app_i18n=info".parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::from_env()?;

    if args.list {
        for locale in available_locales() {
            let marker = if locale.is_default() { "*" } else { "" };
            println!("{}{}\t{}", locale, marker, locale.native_name());
        }
        return Ok(());
    }

    let key = args.key.context(USAGE)?;

    let store = match &config.bundle_dir {
        Some(dir) => TranslationStore::load_dir(dir)
            .with_context(|| format!("Failed to load bundles from {}", dir.display()))?,
        None => TranslationStore::embedded().context("Embedded bundles are invalid")?,
    };

    let override_locale = args.locale.or(config.locale_override);
    let translator = Translator::init(
        Arc::new(store),
        config.language_hint.as_deref(),
        override_locale.as_deref(),
    );
    info!("Active locale: {}", translator.locale());

    let text = if args.vars.is_empty() {
        translator.t(&key)
    } else {
        let vars: Vars = args.vars.into_iter().collect();
        debug!("Interpolating {} variable(s)", vars.len());
        translator.t_with(&key, &vars)
    };
    println!("{}", text);

    Ok(())
}
