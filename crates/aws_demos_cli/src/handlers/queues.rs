//! Command handlers for the SQS queue examples.

use serde_json::json;

use aws_demos_core::outcome::CommandOutcome;
use aws_demos_core::requests::{CreateQueueRequest, DeleteQueueRequest, SendMessageRequest};

use crate::adapters::queues::QueueApi;
use crate::telemetry::{log_command_error, log_command_info};

pub fn create_queue(request: &CreateQueueRequest, api: &impl QueueApi) -> CommandOutcome {
    match api.create_queue(request) {
        Ok(created) => {
            log_command_info(
                "create_queue",
                "command_succeeded",
                json!({
                    "queue_name": request.queue_name,
                    "queue_url": created.queue_url,
                }),
            );
            CommandOutcome::success(format!(
                "Successfully created queue {} at URL {}",
                request.queue_name, created.queue_url
            ))
        }
        Err(error) => {
            log_command_error(
                "create_queue",
                "command_failed",
                json!({ "queue_name": request.queue_name, "error": error }),
            );
            CommandOutcome::failure(format!("Error creating queue: {error}"))
        }
    }
}

pub fn delete_queue(request: &DeleteQueueRequest, api: &impl QueueApi) -> CommandOutcome {
    match api.delete_queue(request) {
        Ok(()) => {
            log_command_info(
                "delete_queue",
                "command_succeeded",
                json!({ "queue_url": request.queue_url }),
            );
            CommandOutcome::success(format!("Successfully deleted queue {}", request.queue_url))
        }
        Err(error) => {
            log_command_error(
                "delete_queue",
                "command_failed",
                json!({ "queue_url": request.queue_url, "error": error }),
            );
            CommandOutcome::failure(format!("Error deleting queue: {error}"))
        }
    }
}

pub fn send_message(request: &SendMessageRequest, api: &impl QueueApi) -> CommandOutcome {
    match api.send_message(request) {
        Ok(sent) => {
            log_command_info(
                "send_message",
                "command_succeeded",
                json!({
                    "queue_url": request.queue_url,
                    "message_id": sent.message_id,
                }),
            );
            CommandOutcome::success(format!(
                "Successfully sent message with ID {}",
                sent.message_id
            ))
        }
        Err(error) => {
            log_command_error(
                "send_message",
                "command_failed",
                json!({ "queue_url": request.queue_url, "error": error }),
            );
            CommandOutcome::failure(format!("Error sending message: {error}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use aws_demos_core::requests::{MessageSent, QueueCreated};

    struct StubQueueApi {
        create_result: Result<QueueCreated, String>,
        delete_result: Result<(), String>,
        send_result: Result<MessageSent, String>,
        sent_bodies: Mutex<Vec<String>>,
    }

    impl StubQueueApi {
        fn new() -> Self {
            Self {
                create_result: Ok(QueueCreated {
                    queue_url: "https://sqs.eu-west-1.amazonaws.com/123456789012/jobs".to_string(),
                }),
                delete_result: Ok(()),
                send_result: Ok(MessageSent {
                    message_id: "msg-42".to_string(),
                }),
                sent_bodies: Mutex::new(Vec::new()),
            }
        }

        fn sent_bodies(&self) -> Vec<String> {
            self.sent_bodies.lock().expect("poisoned mutex").clone()
        }
    }

    impl QueueApi for StubQueueApi {
        fn create_queue(&self, _request: &CreateQueueRequest) -> Result<QueueCreated, String> {
            self.create_result.clone()
        }

        fn delete_queue(&self, _request: &DeleteQueueRequest) -> Result<(), String> {
            self.delete_result.clone()
        }

        fn send_message(&self, request: &SendMessageRequest) -> Result<MessageSent, String> {
            self.sent_bodies
                .lock()
                .expect("poisoned mutex")
                .push(request.message_body.clone());
            self.send_result.clone()
        }
    }

    #[test]
    fn create_queue_success_echoes_queue_url() {
        let api = StubQueueApi::new();
        let request = CreateQueueRequest {
            queue_name: "jobs".to_string(),
        };

        let outcome = create_queue(&request, &api);

        assert!(outcome.is_success());
        assert_eq!(
            outcome.message,
            "Successfully created queue jobs at URL https://sqs.eu-west-1.amazonaws.com/123456789012/jobs"
        );
    }

    #[test]
    fn delete_queue_failure_surfaces_collaborator_error() {
        let mut api = StubQueueApi::new();
        api.delete_result = Err("QueueDoesNotExist".to_string());
        let request = DeleteQueueRequest {
            queue_url: "https://sqs.eu-west-1.amazonaws.com/123456789012/jobs".to_string(),
        };

        let outcome = delete_queue(&request, &api);

        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.message, "Error deleting queue: QueueDoesNotExist");
    }

    #[test]
    fn send_message_forwards_exact_body() {
        let api = StubQueueApi::new();
        let request = SendMessageRequest {
            queue_url: "https://sqs.eu-west-1.amazonaws.com/123456789012/jobs".to_string(),
            message_body: "payload-1".to_string(),
        };

        let outcome = send_message(&request, &api);

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Successfully sent message with ID msg-42");
        assert_eq!(api.sent_bodies(), vec!["payload-1".to_string()]);
    }
}
