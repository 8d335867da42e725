// Simple test program to exercise the camera-stream API against a live server
// Run with: cargo run --bin test_camera_stream_api

use camera_stream_client::{CameraStreamClient, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let base_url =
        std::env::var("SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:4000".to_string());

    let config = ClientConfig {
        base_url,
        api_key: std::env::var("API_KEY").ok(),
        timeout_secs: 10,
    };

    let client = CameraStreamClient::new(config)?;

    println!("\n=== Listing camera streams ===");
    match client.list().await {
        Ok(streams) => {
            println!("{} stream(s) configured", streams.len());
            for stream in &streams {
                println!(
                    "  {} -> {}",
                    stream.name.as_deref().unwrap_or("(unnamed)"),
                    stream.stream_url
                );
            }
        }
        Err(e) => {
            eprintln!("List error: {}", e);
        }
    }

    println!("\n=== Looking up camera for printer 1 ===");
    match client.get_by_printer(1).await {
        Ok(Some(stream)) => {
            println!("Found: {}", stream.stream_url);
        }
        Ok(None) => {
            println!("No camera bound to printer 1");
        }
        Err(e) => {
            eprintln!("Lookup error: {}", e);
        }
    }

    Ok(())
}
