//! Quickstart Example
//!
//! Create an index, add a few documents and run a search against a local
//! SeekDb server.
//!
//! Run with: cargo run --example quickstart

use seekdb_rs::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Movie {
    #[serde(rename = "objectId")]
    object_id: u64,
    title: String,
    overview: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::with_api_key("http://localhost:7700", "masterKey");
    println!("Connected to {}\n", client.base_url());

    let index = client.create_index("movies").await?;
    println!("📚 Created index: {}", index.uid());

    let update = index
        .add_documents(&[
            Movie {
                object_id: 1,
                title: "Carol".to_string(),
                overview: "A department-store clerk falls for an older woman.".to_string(),
            },
            Movie {
                object_id: 2,
                title: "Wonder Woman".to_string(),
                overview: "An Amazon princess leaves her island home.".to_string(),
            },
        ])
        .await?;
    println!("📝 Documents accepted, update id: {}", update.update_id);

    // Ingestion is asynchronous; poll until the batch has been applied
    loop {
        let status = index.get_update_status(update.update_id).await?;
        if status.status != seekdb_rs::UpdateState::Enqueued {
            println!("   Update finished: {:?}", status.status);
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    let results = index.search::<Movie>("wonder").await?;
    println!("\n🔍 Search results for 'wonder':");
    for (i, hit) in results.hits.iter().enumerate() {
        println!("   {}. {}: {}", i + 1, hit.title, hit.overview);
    }
    println!(
        "   ({} hits in {} ms)",
        results.hits.len(),
        results.processing_time_ms
    );

    index.delete().await?;
    Ok(())
}
