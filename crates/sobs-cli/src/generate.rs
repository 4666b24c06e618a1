//! `sobs generate`: fetch, aggregate, render.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use sobs_core::{load_brands, AppConfig, Brand, Settings, YearMonth};
use sobs_keywords::{resolve_geo_target, ClientOptions, KeywordPlannerClient};
use sobs_share::{collect_samples, generate_report, ReportError};

use crate::output::{render, resolve_output_path, ReportContext};
use crate::GenerateArgs;

/// Fill in unset arguments from configuration and the calendar.
///
/// Without `--to` the report ends at the month before `today`; without
/// `--from` it starts twelve months before the end month.
pub(crate) fn resolve_settings(args: &GenerateArgs, config: &AppConfig, today: NaiveDate) -> Settings {
    let date_to = args
        .to
        .unwrap_or_else(|| YearMonth::from_date(today).prev());
    let date_from = args.from.unwrap_or_else(|| date_to.years_back(1));

    Settings {
        location: args
            .location
            .clone()
            .unwrap_or_else(|| config.default_location.clone()),
        network: args.network.unwrap_or(config.default_network),
        date_from,
        date_to,
        granularity: args.granularity,
    }
}

/// `true` when the end month has not finished yet as of `today`.
pub(crate) fn ends_in_incomplete_month(settings: &Settings, today: NaiveDate) -> bool {
    settings.date_to >= YearMonth::from_date(today)
}

/// Run the full report pipeline for `args`.
///
/// # Errors
///
/// Returns an error if the brands file cannot be loaded, no brand is
/// eligible, the range or location is invalid, credentials are missing, no
/// brand has data, or the output cannot be written. Individual brand fetch
/// failures are printed as warnings and do not fail the run.
pub(crate) async fn run_generate(config: &AppConfig, args: &GenerateArgs) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let brands_path = args
        .brands
        .clone()
        .unwrap_or_else(|| config.brands_path.clone());
    let brands_file = load_brands(&brands_path)
        .with_context(|| format!("failed to load brands from {}", brands_path.display()))?;

    for brand in brands_file.brands.iter().filter(|b| !b.is_eligible()) {
        tracing::warn!(brand = %brand.name, "skipping brand without name or keywords");
    }
    let brands: Vec<Brand> = brands_file.eligible().cloned().collect();
    if brands.is_empty() {
        anyhow::bail!(
            "no brand in {} has both a name and a keyword",
            brands_path.display()
        );
    }

    let settings = resolve_settings(args, config, today);
    if !settings.has_valid_range() {
        return Err(ReportError::InvalidRange {
            from: settings.date_from,
            to: settings.date_to,
        }
        .into());
    }
    if ends_in_incomplete_month(&settings, today) {
        eprintln!(
            "warning: {} has not finished yet; search volumes for it may be missing or incomplete",
            settings.date_to
        );
    }
    resolve_geo_target(&settings.location)
        .with_context(|| format!("unsupported location '{}'", settings.location))?;

    let credentials = config.google_ads.as_ref().ok_or_else(|| {
        anyhow::anyhow!(
            "Google Ads credentials are not configured; set GOOGLE_ADS_DEVELOPER_TOKEN, \
             GOOGLE_ADS_CLIENT_ID, GOOGLE_ADS_CLIENT_SECRET, GOOGLE_ADS_REFRESH_TOKEN and \
             GOOGLE_ADS_CUSTOMER_ID"
        )
    })?;
    let client = KeywordPlannerClient::new(credentials, &ClientOptions::from_app_config(config))
        .context("failed to build keyword planner client")?;

    tracing::info!(
        brands = brands.len(),
        from = %settings.date_from,
        to = %settings.date_to,
        granularity = %settings.granularity,
        location = %settings.location,
        network = %settings.network,
        "generating share-of-search report"
    );

    let outcome = collect_samples(&client, &brands, &settings).await;
    for warning in &outcome.warnings {
        eprintln!("warning: {}: {}", warning.brand, warning.message);
    }

    let rows = match generate_report(&brands, &settings, &outcome.samples_by_brand) {
        Ok(rows) => rows,
        Err(ReportError::EmptyResult) => {
            anyhow::bail!("no data found for the selected parameters")
        }
        Err(e) => return Err(e.into()),
    };

    let context = ReportContext {
        brands: &brands,
        settings: &settings,
        generated: today,
    };
    let rendered = render(args.format, &rows, &context)?;

    match &args.output {
        Some(path) => {
            let target = resolve_output_path(path, args.format, today);
            std::fs::write(&target, rendered)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("wrote {} rows to {}", rows.len(), target.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
