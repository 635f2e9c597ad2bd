use mongodb::{Client, Database};

/// Connects the process-wide MongoDB client and returns the handle for the
/// logical database holding the `articles` and `categories` collections.
pub async fn init_database(uri: &str, name: &str) -> mongodb::error::Result<Database> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(name))
}
