// hemo-client/examples/session_demo.rs
// Login, browse, logout against a running backend

use hemo_client::models::EventStatus;
use hemo_client::{AppContext, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hemo_client=debug,session_demo=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password>", args[0]);
        println!("  Example: {} donor@example.com secret1", args[0]);
        return Ok(());
    }

    let config = ClientConfig::from_env();
    let ctx = AppContext::new(&config)?;

    if let Some(user) = ctx.session.current_user() {
        tracing::info!("Cached identity: {} ({})", user.email, user.role);
    }

    let user = match ctx.session.login(&args[1], &args[2]).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Logged in as {} ({})", user.email, user.role);

    match ctx.api.list_events(Some(EventStatus::Upcoming)).await {
        Ok(events) => {
            for event in events {
                tracing::info!(
                    "{} on {} at {} ({}/{} registered)",
                    event.title,
                    event.date.format("%Y-%m-%d"),
                    event.location,
                    event.registered_donors.len(),
                    event.capacity
                );
            }
        }
        Err(e) => tracing::error!("Failed to list events: {}", e),
    }

    if ctx.session.is_admin() {
        let overview = ctx.api.inventory_overview().await;
        for slot in &overview.inventory {
            tracing::info!(
                "{}: {} units, {} donors on file",
                slot.blood_type,
                slot.units_available,
                overview.donors_for(slot.blood_type).count()
            );
        }
    } else if ctx.session.is_donor() {
        match ctx.api.my_donation_records().await {
            Ok(records) => tracing::info!("{} donations on record", records.len()),
            Err(e) => tracing::error!("Failed to load donation history: {}", e),
        }
    }

    ctx.session.logout();
    Ok(())
}
