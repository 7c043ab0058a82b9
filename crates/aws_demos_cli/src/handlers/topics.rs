//! Command handlers for the SNS topic examples.
//!
//! Each handler is a pure function from (request, client seam) to a rendered
//! outcome; the binaries own printing and process exit.

use serde_json::json;

use aws_demos_core::outcome::CommandOutcome;

use crate::adapters::topics::TopicApi;
use crate::runtime::requests::{CreateTopicRequest, DeleteTopicRequest, PublishMessageRequest};
use crate::telemetry::{log_command_error, log_command_info};

pub fn create_topic(request: &CreateTopicRequest, api: &impl TopicApi) -> CommandOutcome {
    match api.create_topic(request) {
        Ok(created) => {
            log_command_info(
                "create_topic",
                "command_succeeded",
                json!({
                    "topic_name": request.topic_name,
                    "topic_arn": created.topic_arn,
                }),
            );
            CommandOutcome::success(format!(
                "Successfully created topic {} with ARN {}",
                request.topic_name, created.topic_arn
            ))
        }
        Err(error) => {
            log_command_error(
                "create_topic",
                "command_failed",
                json!({ "topic_name": request.topic_name, "error": error }),
            );
            CommandOutcome::failure(format!("Error creating topic: {error}"))
        }
    }
}

pub fn delete_topic(request: &DeleteTopicRequest, api: &impl TopicApi) -> CommandOutcome {
    match api.delete_topic(request) {
        Ok(()) => {
            log_command_info(
                "delete_topic",
                "command_succeeded",
                json!({ "topic_arn": request.topic_arn }),
            );
            CommandOutcome::success(format!("Successfully deleted topic {}", request.topic_arn))
        }
        Err(error) => {
            log_command_error(
                "delete_topic",
                "command_failed",
                json!({ "topic_arn": request.topic_arn, "error": error }),
            );
            CommandOutcome::failure(format!("Error deleting topic: {error}"))
        }
    }
}

pub fn publish_message(request: &PublishMessageRequest, api: &impl TopicApi) -> CommandOutcome {
    match api.publish_message(request) {
        Ok(published) => {
            log_command_info(
                "publish_message",
                "command_succeeded",
                json!({
                    "topic_arn": request.topic_arn,
                    "message_id": published.message_id,
                }),
            );
            CommandOutcome::success(format!(
                "Successfully published message with ID {}",
                published.message_id
            ))
        }
        Err(error) => {
            log_command_error(
                "publish_message",
                "command_failed",
                json!({ "topic_arn": request.topic_arn, "error": error }),
            );
            CommandOutcome::failure(format!("Error publishing message: {error}"))
        }
    }
}
