//! Settings Tour Example
//!
//! Walk through the settings aggregate of an index: read the defaults,
//! apply a partial update, inspect one sub-resource, then reset.
//!
//! Run with: cargo run --example settings_tour

use seekdb_rs::{Client, IndexSpec, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::with_api_key("http://localhost:7700", "masterKey");

    // Fresh uid per run so reruns don't collide with leftover indexes
    let uid = format!("settings_tour_{}", uuid::Uuid::new_v4().simple());
    let index = client
        .create_index(IndexSpec::new("Settings tour").with_uid(uid))
        .await?;

    let defaults = index.settings().await?;
    println!("Default ranking rules: {:?}", defaults.ranking_rules);

    // Partial update: only the supplied fields change, the server merges
    let update = index
        .update_settings(
            &Settings::new()
                .with_ranking_rules(["asc(title)", "typo"])
                .with_distinct_attribute("title"),
        )
        .await?;
    println!("Settings update accepted, id {}", update.update_id);

    // A later stop-words-only update leaves the fields above untouched
    index
        .update_settings(&Settings::new().with_stop_words(["the", "of"]))
        .await?;

    println!("Stop words: {:?}", index.stop_words().await?);
    println!("Distinct attribute: {:?}", index.distinct_attribute().await?);

    // Back to the documented defaults, all seven fields at once
    let update = index.reset_settings().await?;
    println!("Reset accepted, id {}", update.update_id);

    index.delete().await?;
    Ok(())
}
