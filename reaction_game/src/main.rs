#[tokio::main]
async fn main() -> std::io::Result<()> {
    reaction_game::run_with_config().await
}
