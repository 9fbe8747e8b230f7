use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    eatery_cli::main_entry().await
}
