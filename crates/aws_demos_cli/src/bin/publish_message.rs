use std::process::exit;

use aws_demos_cli::adapters::topics::SnsTopicApi;
use aws_demos_cli::handlers::topics;
use aws_demos_cli::runtime::outcome::USAGE_EXIT_CODE;
use aws_demos_cli::runtime::requests::PublishMessageRequest;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match PublishMessageRequest::from_args(&args) {
        Ok(value) => value,
        Err(error) => {
            println!("{}", error.message());
            exit(USAGE_EXIT_CODE);
        }
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let api = SnsTopicApi::new(&aws_config);

    let outcome = topics::publish_message(&request, &api);
    println!("{}", outcome.message);
    exit(outcome.exit_code);
}
