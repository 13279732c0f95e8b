use technova_support_server::run_support_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    run_support_server().await
}
