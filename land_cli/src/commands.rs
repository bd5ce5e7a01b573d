//! Command handlers shared by the subcommands and the interactive prompt.
//!
//! Handlers take raw text for numeric fields so every entry point goes
//! through the same validation before any arithmetic runs.

use anyhow::Context as _;
use serde::Serialize;
use tracing::{debug, warn};

use land_core::conversions::{calculate, convert, decompose, AreaInput, ConversionInput};
use land_core::format::{format_area_output, format_breakdown, format_conversion, format_conversion_details};
use land_core::units::SqFt;
use land_core::validation::parse_positive;
use land_core::{
    AreaUnit, CalculationRecord, ConversionRecord, HistoryEntry, Language, LinearUnit, Settings, Store, UnitSystem,
};

use crate::cli::Cli;

/// Per-run state: where data lives and how output is rendered.
pub struct Context {
    store: Option<Store>,
    settings: Settings,
    pub language: Language,
    pub json: bool,
    record: bool,
}

impl Context {
    /// Resolve the data directory and load saved settings.
    ///
    /// A missing or unusable data directory is not fatal: calculations still
    /// run, only history and settings are unavailable.
    pub fn init(cli: &Cli) -> Self {
        let store = match Store::resolve(cli.data_dir.as_deref()) {
            Ok(store) => Some(store),
            Err(error) => {
                warn!(%error, "data directory unavailable; history disabled");
                None
            }
        };

        let settings = store
            .as_ref()
            .map(|store| {
                store.load_settings().unwrap_or_else(|error| {
                    warn!(%error, "could not load settings; using defaults");
                    Settings::default()
                })
            })
            .unwrap_or_default();

        Context {
            language: cli.lang.unwrap_or(settings.language),
            settings,
            store,
            json: cli.json,
            record: !cli.no_history,
        }
    }

    fn t(&self, key: &'static str) -> &'static str {
        self.language.t(key)
    }

    fn store(&self) -> anyhow::Result<&Store> {
        self.store.as_ref().context(self.t("errorStorage"))
    }

    /// Print `value` as JSON, or `text` otherwise.
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    /// Append a result to history. Failure to save is logged, not fatal.
    fn record(&self, entry: impl Into<HistoryEntry>) {
        if !self.record {
            return;
        }
        let Some(store) = self.store.as_ref() else {
            return;
        };

        let entry = entry.into();
        match store.update_history(|history| history.push(entry)) {
            Ok(history) => debug!(entries = history.len(), "history updated"),
            Err(error) => warn!(%error, "{}", self.t("errorStorage")),
        }
    }
}

pub fn area(ctx: &Context, length: &str, breadth: &str, unit: LinearUnit, output: AreaUnit) -> anyhow::Result<()> {
    let input = AreaInput::parse(length, breadth, unit, output)?;
    let result = calculate(&input)?;
    let text = format_area_output(&result.output, ctx.language);

    ctx.emit(&result, || format!("{}: {}", ctx.t("result"), text))?;
    ctx.record(CalculationRecord::new(&input, text));
    Ok(())
}

pub fn convert_value(ctx: &Context, value: &str, from: AreaUnit, to: AreaUnit, swap: bool) -> anyhow::Result<()> {
    let mut input = ConversionInput::parse(value, from, to)?;
    if swap {
        input = input.swapped();
    }
    let result = convert(&input)?;

    ctx.emit(&result, || format_conversion_details(&result, ctx.language))?;
    ctx.record(ConversionRecord::new(
        &input,
        format_conversion(result.value, result.unit, ctx.language),
    ));
    Ok(())
}

pub fn breakdown(ctx: &Context, square_feet: &str, system: UnitSystem) -> anyhow::Result<()> {
    let area = SqFt(parse_positive("value", square_feet)?);
    let breakdown = decompose(area, system);

    ctx.emit(&breakdown, || {
        format!("{}: {}", ctx.t(system.key()), format_breakdown(&breakdown, ctx.language))
    })
}

pub fn history(ctx: &Context, clear: bool) -> anyhow::Result<()> {
    let store = ctx.store()?;

    if clear {
        store.update_history(|history| history.clear())?;
        println!("{}", ctx.t("historyCleared"));
        return Ok(());
    }

    let history = store.load_history()?;
    ctx.emit(&history, || {
        let mut lines = vec![format!("{}:", ctx.t("savedCalculations"))];
        if history.calculations().is_empty() {
            lines.push(format!("  {}", ctx.t("noCalculations")));
        }
        for record in history.calculations().iter() {
            lines.push(format!(
                "  {}  {} × {} {} → {}",
                record.created.format("%Y-%m-%d %H:%M"),
                record.length,
                record.breadth,
                ctx.t(record.unit.key()),
                record.result,
            ));
        }

        lines.push(format!("{}:", ctx.t("savedConversions")));
        if history.conversions().is_empty() {
            lines.push(format!("  {}", ctx.t("noConversions")));
        }
        for record in history.conversions().iter() {
            lines.push(format!(
                "  {}  {} {} → {}",
                record.created.format("%Y-%m-%d %H:%M"),
                record.value,
                ctx.t(record.from.key()),
                record.result,
            ));
        }
        lines.join("\n")
    })
}

/// Show the saved language, or change it to "en", "np" or "toggle".
pub fn language(ctx: &mut Context, choice: Option<&str>) -> anyhow::Result<()> {
    let Some(choice) = choice else {
        println!("{}: {}", ctx.t("language"), ctx.settings.language);
        return Ok(());
    };

    // Toggle from the language on screen, which --lang may have overridden
    let mut settings = ctx.settings.clone();
    if choice.trim().eq_ignore_ascii_case("toggle") {
        settings.language = ctx.language;
        settings.toggle_language();
    } else {
        settings.language = choice.parse()?;
    }

    ctx.store()?.save_settings(&settings)?;
    ctx.language = settings.language;
    ctx.settings = settings;
    println!("{}", ctx.t("languageChanged"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use land_core::file_io::FileLock;
    use land_core::LandError;
    use tempfile::TempDir;

    use super::*;

    fn context(dir: &TempDir, extra: &[&str]) -> Context {
        let data_dir = dir.path().to_string_lossy().into_owned();
        let mut args = vec!["jagga", "--data-dir", data_dir.as_str()];
        args.extend_from_slice(extra);
        Context::init(&Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_area_records_history() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, &[]);

        area(&ctx, "74", "74", LinearUnit::Feet, AreaUnit::Ropani).unwrap();

        let history = ctx.store().unwrap().load_history().unwrap();
        assert_eq!(history.calculations().len(), 1);
        assert_eq!(
            history.calculations().latest().unwrap().result,
            "1 Ropani, 0 Aana, 0 Paisa, 0 Daam"
        );
    }

    #[test]
    fn test_no_history_flag() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, &["--no-history"]);

        convert_value(&ctx, "1", AreaUnit::Ropani, AreaUnit::Aana, false).unwrap();

        assert!(ctx.store().unwrap().load_history().unwrap().is_empty());
    }

    #[test]
    fn test_swap_records_swapped_units() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, &[]);

        convert_value(&ctx, "16", AreaUnit::Ropani, AreaUnit::Aana, true).unwrap();

        let history = ctx.store().unwrap().load_history().unwrap();
        let record = history.conversions().latest().unwrap();
        assert_eq!(record.from, AreaUnit::Aana);
        assert_eq!(record.to, AreaUnit::Ropani);
        assert_eq!(record.result, "1.0000 Ropani");
    }

    #[test]
    fn test_invalid_input_is_land_error() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, &[]);

        let error = area(&ctx, "0", "10", LinearUnit::Feet, AreaUnit::SquareFeet).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<LandError>(),
            Some(LandError::InvalidInput { .. })
        ));

        let error = breakdown(&ctx, "", UnitSystem::Ropani).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<LandError>(),
            Some(LandError::MissingField { .. })
        ));
        assert!(ctx.store().unwrap().load_history().unwrap().is_empty());
    }

    #[test]
    fn test_language_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, &[]);
        assert_eq!(ctx.language, Language::English);

        language(&mut ctx, Some("toggle")).unwrap();
        assert_eq!(ctx.language, Language::Nepali);

        let reloaded = context(&dir, &[]);
        assert_eq!(reloaded.language, Language::Nepali);

        // --lang overrides the saved preference for one run
        let overridden = context(&dir, &["--lang", "en"]);
        assert_eq!(overridden.language, Language::English);
    }

    #[test]
    fn test_toggle_flips_displayed_language() {
        let dir = TempDir::new().unwrap();
        let mut saved = context(&dir, &[]);
        language(&mut saved, Some("en")).unwrap();

        let mut ctx = context(&dir, &["--lang", "np"]);
        assert_eq!(ctx.language, Language::Nepali);

        language(&mut ctx, Some("toggle")).unwrap();
        assert_eq!(ctx.language, Language::English);
        assert_eq!(ctx.store().unwrap().load_settings().unwrap().language, Language::English);
    }

    #[test]
    fn test_toggle_without_store_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, &[]);
        ctx.store = None;

        assert!(language(&mut ctx, Some("toggle")).is_err());
        assert_eq!(ctx.language, Language::English);
        assert_eq!(ctx.settings.language, Language::English);
    }

    #[test]
    fn test_record_waits_for_concurrent_writer() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, &[]);
        let lock = FileLock::try_acquire(&ctx.store().unwrap().history_path()).unwrap();

        let holder = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(100));
            drop(lock);
        });

        area(&ctx, "74", "74", LinearUnit::Feet, AreaUnit::Ropani).unwrap();
        holder.join().unwrap();

        assert_eq!(ctx.store().unwrap().load_history().unwrap().calculations().len(), 1);
    }

    #[test]
    fn test_history_clear() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, &[]);
        area(&ctx, "10", "10", LinearUnit::Meter, AreaUnit::SquareMeter).unwrap();

        history(&ctx, true).unwrap();
        assert!(ctx.store().unwrap().load_history().unwrap().is_empty());
    }
}
