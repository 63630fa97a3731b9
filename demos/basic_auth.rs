//! Basic authentication example.
//!
//! This example demonstrates the nonce/access-token handshake against the
//! ForTem testnet and a wallet lookup using the cached token.
//!
//! Run with: FORTEM_API_KEY=... cargo run --example basic_auth -- 0xWALLET

use fortem_rs::{FortemClient, Network, WalletAddress};
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> fortem_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get credentials from environment variables
    let api_key = std::env::var("FORTEM_API_KEY")
        .expect("FORTEM_API_KEY environment variable required");
    let wallet = std::env::args()
        .nth(1)
        .expect("usage: basic_auth <wallet-address>");

    println!("Connecting to ForTem testnet...");

    let client = FortemClient::new(api_key, Network::Testnet)?;

    // Explicit handshake; services do this on their own when needed
    let nonce = client.auth().request_nonce().await?;
    println!("Received nonce: {}", nonce.nonce);

    let token = client.auth().exchange_nonce_for_token(&nonce.nonce).await?;
    let secret = token.access_token.expose_secret();
    println!(
        "Successfully authenticated! Token: {}...",
        &secret[..secret.len().min(8)]
    );

    // Reuses the cached token
    let user = client.users().verify(&WalletAddress::new(&wallet)).await?;
    if user.data.is_user {
        println!("\n{} is registered as {}", wallet, user.data.nickname);
    } else {
        println!("\n{} is not a ForTem user", wallet);
    }

    println!("\nDone!");
    Ok(())
}
