//! List reports command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_reports(config: &Config) -> anyhow::Result<()> {
    let store = Store::from_config(config).await?;
    let lost = store.fetch_lost_items().await?;
    let found = store.fetch_found_items().await?;

    println!("Lost Items ({} total)", lost.len());
    println!("{:-<70}", "");
    if lost.is_empty() {
        println!("  (none)");
    }
    for item in lost {
        println!("#{} {} [{}]", item.id, item.item_desc, item.status);
        println!(
            "  Owner: {} | Last seen: {}",
            item.owner_name, item.last_seen_location
        );
    }

    println!();
    println!("Found Items ({} total)", found.len());
    println!("{:-<70}", "");
    if found.is_empty() {
        println!("  (none)");
    }
    for item in found {
        println!("#{} {}", item.id, item.item_desc);
        println!(
            "  Finder: {} | Location/contact: {}",
            item.finder_name, item.found_location
        );
    }

    Ok(())
}
