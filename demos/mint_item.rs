//! Minting example.
//!
//! Creates a collection, uploads an image and mints one item into it. Each
//! mint consumes the access token; the client fetches a new one for the
//! following call without any extra code.
//!
//! Run with:
//!   FORTEM_API_KEY=... FORTEM_NETWORK=testnet \
//!   cargo run --example mint_item -- <image-path> <recipient-wallet>

use fortem_rs::models::{CreateCollectionParams, CreateItemParams, ImageUpload, ItemAttribute};
use fortem_rs::{CollectionId, FortemClient};

#[tokio::main]
async fn main() -> fortem_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let image_path = args.next().expect("usage: mint_item <image-path> <recipient>");
    let recipient = args.next().expect("usage: mint_item <image-path> <recipient>");

    // Reads FORTEM_API_KEY and FORTEM_NETWORK
    let client = FortemClient::from_env()?;
    println!("Using {} ({})", client.network(), client.api_base_url());

    let collection = client
        .collections()
        .create(
            &CreateCollectionParams::new("Demo Collection", "Created by fortem-rs")
                .with_website("https://example.com"),
        )
        .await?
        .into_data();
    println!("Created collection #{}: {}", collection.id, collection.name);

    let collection_id = CollectionId::new(collection.id);

    let upload = ImageUpload::from_path(&image_path).await?;
    let image = client
        .items()
        .upload_image(collection_id, upload)
        .await?
        .into_data();
    println!("Uploaded image: {}", image.item_image);

    let redeem_code = format!("DEMO-{}", chrono::Utc::now().timestamp());
    let params = CreateItemParams::new("Demo Item", 1, redeem_code.as_str(), recipient)
        .with_description("Minted by the fortem-rs demo")
        .with_item_image(image.item_image)
        .with_attribute(ItemAttribute::new("edition", "first"));

    let item = client.items().create(collection_id, &params).await?.into_data();
    println!("Minted item {:?} ({:?})", item.nft_number, item.status);

    // Look it up again by redeem code
    let fetched = client
        .items()
        .get(collection_id, &redeem_code.as_str().into())
        .await?;
    println!("Fetched {} x{}", fetched.data.name, fetched.data.quantity);

    println!("\nView at {}", client.service_url());
    Ok(())
}
