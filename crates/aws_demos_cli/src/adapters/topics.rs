//! SNS topic operations behind a narrow client seam.

use aws_demos_core::requests::{
    CreateTopicRequest, DeleteTopicRequest, MessagePublished, PublishMessageRequest, TopicCreated,
};

pub trait TopicApi {
    fn create_topic(&self, request: &CreateTopicRequest) -> Result<TopicCreated, String>;
    fn delete_topic(&self, request: &DeleteTopicRequest) -> Result<(), String>;
    fn publish_message(&self, request: &PublishMessageRequest) -> Result<MessagePublished, String>;
}

pub struct SnsTopicApi {
    sns_client: aws_sdk_sns::Client,
}

impl SnsTopicApi {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            sns_client: aws_sdk_sns::Client::new(config),
        }
    }
}

impl TopicApi for SnsTopicApi {
    fn create_topic(&self, request: &CreateTopicRequest) -> Result<TopicCreated, String> {
        let client = self.sns_client.clone();
        let topic_name = request.topic_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .create_topic()
                    .name(topic_name)
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                Ok(TopicCreated {
                    topic_arn: output.topic_arn().unwrap_or_default().to_string(),
                })
            })
        })
    }

    fn delete_topic(&self, request: &DeleteTopicRequest) -> Result<(), String> {
        let client = self.sns_client.clone();
        let topic_arn = request.topic_arn.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_topic()
                    .topic_arn(topic_arn)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string())
            })
        })
    }

    fn publish_message(&self, request: &PublishMessageRequest) -> Result<MessagePublished, String> {
        let client = self.sns_client.clone();
        let topic_arn = request.topic_arn.clone();
        let message = request.message.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .publish()
                    .topic_arn(topic_arn)
                    .message(message)
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                Ok(MessagePublished {
                    message_id: output.message_id().unwrap_or_default().to_string(),
                })
            })
        })
    }
}
