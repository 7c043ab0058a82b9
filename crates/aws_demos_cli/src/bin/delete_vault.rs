use std::process::exit;

use aws_demos_cli::adapters::vaults::GlacierVaultApi;
use aws_demos_cli::handlers::vaults;
use aws_demos_cli::runtime::outcome::USAGE_EXIT_CODE;
use aws_demos_cli::runtime::requests::DeleteVaultRequest;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match DeleteVaultRequest::from_args(&args) {
        Ok(value) => value,
        Err(error) => {
            println!("{}", error.message());
            exit(USAGE_EXIT_CODE);
        }
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let api = GlacierVaultApi::new(&aws_config);

    let outcome = vaults::delete_vault(&request, &api);
    println!("{}", outcome.message);
    exit(outcome.exit_code);
}
