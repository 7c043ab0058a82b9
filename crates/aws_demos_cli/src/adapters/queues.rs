//! SQS queue operations behind a narrow client seam.

use aws_demos_core::requests::{
    CreateQueueRequest, DeleteQueueRequest, MessageSent, QueueCreated, SendMessageRequest,
};

pub trait QueueApi {
    fn create_queue(&self, request: &CreateQueueRequest) -> Result<QueueCreated, String>;
    fn delete_queue(&self, request: &DeleteQueueRequest) -> Result<(), String>;
    fn send_message(&self, request: &SendMessageRequest) -> Result<MessageSent, String>;
}

pub struct SqsQueueApi {
    sqs_client: aws_sdk_sqs::Client,
}

impl SqsQueueApi {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            sqs_client: aws_sdk_sqs::Client::new(config),
        }
    }
}

impl QueueApi for SqsQueueApi {
    fn create_queue(&self, request: &CreateQueueRequest) -> Result<QueueCreated, String> {
        let client = self.sqs_client.clone();
        let queue_name = request.queue_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .create_queue()
                    .queue_name(queue_name)
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                Ok(QueueCreated {
                    queue_url: output.queue_url().unwrap_or_default().to_string(),
                })
            })
        })
    }

    fn delete_queue(&self, request: &DeleteQueueRequest) -> Result<(), String> {
        let client = self.sqs_client.clone();
        let queue_url = request.queue_url.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_queue()
                    .queue_url(queue_url)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string())
            })
        })
    }

    fn send_message(&self, request: &SendMessageRequest) -> Result<MessageSent, String> {
        let client = self.sqs_client.clone();
        let queue_url = request.queue_url.clone();
        let message_body = request.message_body.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .send_message()
                    .queue_url(queue_url)
                    .message_body(message_body)
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                Ok(MessageSent {
                    message_id: output.message_id().unwrap_or_default().to_string(),
                })
            })
        })
    }
}
