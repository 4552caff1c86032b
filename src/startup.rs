use meeting_suggester::components::calendar::CalendarEvent;
use meeting_suggester::components::calendar_store::{fetch_for_suggestions, load_snapshot};
use meeting_suggester::components::classifier::{classify_event, event_color, legend};
use meeting_suggester::components::suggestions::{generate_suggestions, SuggestionCandidate};
use meeting_suggester::components::CalendarStoreHandle;
use meeting_suggester::config::Config;
use meeting_suggester::error::{other_error, Error};
use std::collections::BTreeMap;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run one suggestion pass over the configured snapshot and print it
pub async fn run(config: Config, json_output: bool) -> miette::Result<()> {
    rust_i18n::set_locale(&config.locale);
    info!("Using locale {} and timezone {}", config.locale, config.timezone);

    let snapshot = load_snapshot(&config.calendar_snapshot).await?;
    let store = CalendarStoreHandle::new(snapshot);

    let now = config.local_now()?;
    let fetched = fetch_for_suggestions(&store, now, &config.suggestions).await;
    if let Err(e) = store.shutdown().await {
        error!("Error shutting down calendar store: {:?}", e);
    }
    let fetched = fetched?;

    let suggestions = generate_suggestions(&fetched.events, &fetched.users, now, &config.suggestions);
    info!(
        "Generated {} suggestions from {} events and {} users",
        suggestions.len(),
        fetched.events.len(),
        fetched.users.len()
    );

    if json_output {
        let json = serde_json::to_string_pretty(&suggestions).map_err(Error::from)?;
        println!("{}", json);
        return Ok(());
    }

    print_suggestions(&suggestions);
    print_category_counts(&fetched.events);
    Ok(())
}

fn print_suggestions(suggestions: &[SuggestionCandidate]) {
    if suggestions.is_empty() {
        println!("No open slots in the suggestion horizon");
        return;
    }

    println!("Suggested meetings:");
    for suggestion in suggestions {
        println!(
            "  {} {}-{}  {:<16} {}  [{}]",
            suggestion.date_label,
            suggestion.window.start.format("%H:%M"),
            suggestion.window.end.format("%H:%M"),
            suggestion.room.label,
            suggestion.subject,
            suggestion.participants.names().join(", ")
        );
    }
}

fn print_category_counts(events: &[CalendarEvent]) {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(classify_event(event)).or_insert(0usize) += 1;
    }

    println!("Calendar legend:");
    for row in legend() {
        let count = counts.get(&row.category).copied().unwrap_or(0);
        println!("  {} {:<28} {}", row.color, row.label, count);
    }

    let custom: Vec<String> = events
        .iter()
        .filter(|event| event.custom_color.is_some())
        .map(|event| format!("{} {}", event.id, event_color(event)))
        .collect();
    if !custom.is_empty() {
        info!("Events with custom colors: {}", custom.join(", "));
    }
}

/// Fail with a readable message when the arguments make no sense
pub fn parse_args(args: &[String]) -> miette::Result<bool> {
    match args {
        [] => Ok(false),
        [flag] if flag == "--json" => Ok(true),
        other => Err(other_error(&format!("Unknown arguments: {}", other.join(" "))).into()),
    }
}
