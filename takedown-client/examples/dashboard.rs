// takedown-client/examples/dashboard.rs
// CLI walkthrough: login, list pending takedowns, page through history.

use takedown_client::{ClientConfig, DashboardApi, SortDirection};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password> [status-filter]", args[0]);
        println!("  Example: {} admin secret REJECTED", args[0]);
        return Ok(());
    }

    let username = &args[1];
    let password = &args[2];
    let status_filter = args.get(3).map(String::as_str).unwrap_or("all");

    let config = ClientConfig::from_env();
    let api = DashboardApi::connect(&config)?;

    let user = api.login(username, password).await?;
    tracing::info!("Logged in as: {}", user.full_name);

    // Pending review queue
    let pending = api.pending_takedowns().await?;
    tracing::info!("{} requests pending review", pending.count);
    for request in &pending.requests {
        println!(
            "  [{}] {} (found via \"{}\")",
            request.status.as_str(),
            request.infringing_url,
            request.source_query
        );
    }

    // First two pages of the filtered history
    let mut history = api.history_view(10);
    history.set_sort(SortDirection::Desc).await;
    history.set_filter("status", status_filter).await;

    for _ in 0..2 {
        let (page, total_pages) = {
            let snap = history.snapshot();
            if let Some(error) = &snap.result.error {
                tracing::error!("history fetch failed: {}", error);
                break;
            }
            let pagination = snap.result.pagination.clone();
            println!(
                "--- page {} ({} per page) ---",
                snap.intent.page(),
                snap.intent.page_size()
            );
            for item in &snap.result.items {
                println!("  {} -> {}", item.infringing_url, item.status.as_str());
            }
            match pagination {
                Some(p) => (p.current_page, p.total_pages),
                None => break,
            }
        };
        if page >= total_pages {
            break;
        }
        history.set_page(page + 1).await;
    }

    Ok(())
}
