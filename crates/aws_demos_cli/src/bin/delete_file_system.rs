use std::process::exit;

use aws_demos_cli::adapters::file_systems::EfsFileSystemApi;
use aws_demos_cli::handlers::file_systems;
use aws_demos_core::outcome::USAGE_EXIT_CODE;
use aws_demos_core::requests::DeleteFileSystemRequest;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match DeleteFileSystemRequest::from_args(&args) {
        Ok(value) => value,
        Err(error) => {
            println!("{}", error.message());
            exit(USAGE_EXIT_CODE);
        }
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let api = EfsFileSystemApi::new(&aws_config);

    let outcome = file_systems::delete_file_system(&request, &api);
    println!("{}", outcome.message);
    exit(outcome.exit_code);
}
