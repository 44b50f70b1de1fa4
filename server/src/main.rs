#[tokio::main]
async fn main() {
    if let Err(e) = wishlist_server_lib::start_server().await {
        eprintln!("wishlist server failed: {e}");
        std::process::exit(1);
    }
}
