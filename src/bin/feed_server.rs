use technova_support_server::run_feed_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    run_feed_server().await
}
