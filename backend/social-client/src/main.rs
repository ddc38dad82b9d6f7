use anyhow::{Context, Result};
use nova_common::ApiClient;
use serde::Serialize;
use social_client::{
    Config, ConnectionsScreen, FeedScreen, ProfileSidebar, Session, SuggestionsPanel,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: social-client <command>

Commands:
  suggestions          Users to connect with (capped by SUGGESTION_LIMIT)
  connections          Connected users and remaining candidates
  feed [pages]         Load up to <pages> pages of the session user's posts (default 1)
  profile [user_id]    Post and connection counters (default: session user)
  connect <user_id>    Connect with a user
  delete-account       Delete the session user's account
  help                 Show this message

Environment:
  NOVA_API_URL, NOVA_API_TIMEOUT_SECS, NOVA_USER_ID, NOVA_TOKEN,
  FEED_PAGE_LIMIT, SUGGESTION_LIMIT, MAX_COUNT_PAGES, RUST_LOG, LOG_FORMAT=json";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // Parse command
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    if matches!(command, "help" | "--help" | "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::from_env();
    let session = Session::from_env().context("Failed to load session credentials")?;
    let api = ApiClient::new(&config.api).context("Failed to build API client")?;

    info!(
        "Configuration loaded: api = {}, user = {}, page_limit = {}",
        api.base_url(),
        session.user_id,
        config.feed.page_limit
    );

    let result = run(command, &args[2..], &config, &session, &api).await;
    if let Err(e) = &result {
        error!("❌ Command `{}` failed: {:#}", command, e);
    }
    result
}

async fn run(
    command: &str,
    rest: &[String],
    config: &Config,
    session: &Session,
    api: &ApiClient,
) -> Result<()> {
    match command {
        "suggestions" => {
            let mut panel = SuggestionsPanel::new(config.suggestions.limit);
            let candidates = panel.load(api, session).await?;
            print_json(&candidates)
        }

        "connections" => {
            let view = ConnectionsScreen::new().load(api, session).await?;
            print_json(&view)
        }

        "feed" => {
            let pages: u32 = match rest.first() {
                Some(raw) => raw
                    .parse::<u32>()
                    .with_context(|| format!("Invalid page count `{}`", raw))?,
                None => 1,
            };

            let mut feed = FeedScreen::new(session.user_id.clone(), config.feed.page_limit);
            for _ in 0..pages {
                if feed.load_more(api, session).await?.is_none() {
                    break;
                }
            }
            print_json(feed.accumulator())
        }

        "profile" => {
            let user_id = rest.first().map(String::as_str).unwrap_or(session.user_id.as_str());
            let sidebar = ProfileSidebar::new(config.feed.page_limit, config.feed.max_count_pages);
            let summary = sidebar.load(api, session, user_id).await;
            print_json(&summary)
        }

        "connect" => {
            let target = rest
                .first()
                .context("Usage: social-client connect <user_id>")?;
            let mut panel = SuggestionsPanel::new(config.suggestions.limit);
            let message = panel.add_connection(api, session, target).await?;
            info!("✅ Connected with {}", target);
            print_json(&message)
        }

        "delete-account" => {
            let sidebar = ProfileSidebar::new(config.feed.page_limit, config.feed.max_count_pages);
            let message = sidebar.delete_account(api, session).await?;
            println!("{}", message);
            Ok(())
        }

        other => {
            eprintln!("Unknown command `{}`\n\n{}", other, USAGE);
            anyhow::bail!("unknown command `{}`", other)
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "social_client=info,nova_common=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries command output
    if std::env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}
