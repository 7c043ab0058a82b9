//! Request and response value objects for each example command.
//!
//! Every request is built exactly once per process by `from_args`, is
//! immutable afterwards, and is passed by reference into a single handler
//! call. Response payloads echo only the collaborator fields the rendered
//! confirmation needs.

use serde::{Deserialize, Serialize};

use crate::contract::{expect_args, ValidationError};

// Simple Notification Service

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTopicRequest {
    pub topic_name: String,
}

impl CreateTopicRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("create_topic", &["topic_name"], args)?;
        Ok(Self {
            topic_name: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTopicRequest {
    pub topic_arn: String,
}

impl DeleteTopicRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("delete_topic", &["topic_arn"], args)?;
        Ok(Self {
            topic_arn: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishMessageRequest {
    pub topic_arn: String,
    pub message: String,
}

impl PublishMessageRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("publish_message", &["topic_arn", "message"], args)?;
        let topic_arn = fields.remove(0);
        let message = fields.remove(0);
        Ok(Self { topic_arn, message })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicCreated {
    pub topic_arn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagePublished {
    pub message_id: String,
}

// Simple Queue Service

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateQueueRequest {
    pub queue_name: String,
}

impl CreateQueueRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("create_queue", &["queue_name"], args)?;
        Ok(Self {
            queue_name: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteQueueRequest {
    pub queue_url: String,
}

impl DeleteQueueRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("delete_queue", &["queue_url"], args)?;
        Ok(Self {
            queue_url: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub queue_url: String,
    pub message_body: String,
}

impl SendMessageRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("send_message", &["queue_url", "message_body"], args)?;
        let queue_url = fields.remove(0);
        let message_body = fields.remove(0);
        Ok(Self {
            queue_url,
            message_body,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueCreated {
    pub queue_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageSent {
    pub message_id: String,
}

// S3 Glacier

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateVaultRequest {
    pub vault_name: String,
}

impl CreateVaultRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("create_vault", &["vault_name"], args)?;
        Ok(Self {
            vault_name: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteVaultRequest {
    pub vault_name: String,
}

impl DeleteVaultRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("delete_vault", &["vault_name"], args)?;
        Ok(Self {
            vault_name: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultCreated {
    pub location: String,
}

// Elastic File System

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateFileSystemRequest {
    pub creation_token: String,
}

impl CreateFileSystemRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("create_file_system", &["creation_token"], args)?;
        Ok(Self {
            creation_token: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteFileSystemRequest {
    pub file_system_id: String,
}

impl DeleteFileSystemRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("delete_file_system", &["file_system_id"], args)?;
        Ok(Self {
            file_system_id: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescribeFileSystemsRequest;

impl DescribeFileSystemsRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        expect_args("describe_file_systems", &[], args)?;
        Ok(Self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSystemCreated {
    pub file_system_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSystemSummary {
    pub file_system_id: String,
    pub life_cycle_state: String,
}

// Simple Storage Service

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBucketRequest {
    pub bucket_name: String,
}

impl CreateBucketRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("create_bucket", &["bucket_name"], args)?;
        Ok(Self {
            bucket_name: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteBucketRequest {
    pub bucket_name: String,
}

impl DeleteBucketRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("delete_bucket", &["bucket_name"], args)?;
        Ok(Self {
            bucket_name: fields.remove(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListBucketsRequest;

impl ListBucketsRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        expect_args("list_buckets", &[], args)?;
        Ok(Self)
    }
}

/// Upload of a local file with AES-256 server-side encryption requested on
/// the call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PutEncryptedObjectRequest {
    pub bucket_name: String,
    pub file_name: String,
}

impl PutEncryptedObjectRequest {
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let mut fields = expect_args("put_encrypted_object", &["bucket_name", "file_name"], args)?;
        let bucket_name = fields.remove(0);
        let file_name = fields.remove(0);
        Ok(Self {
            bucket_name,
            file_name,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketSummary {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn create_topic_copies_name_into_request() {
        let request =
            CreateTopicRequest::from_args(&args(&["orders"])).expect("request should build");
        assert_eq!(request.topic_name, "orders");
    }

    #[test]
    fn delete_topic_without_arguments_yields_usage() {
        let error = DeleteTopicRequest::from_args(&[]).expect_err("should reject");
        assert_eq!(error.message(), "Usage: delete_topic <topic_arn>");
    }

    #[test]
    fn publish_message_copies_both_fields_in_order() {
        let request =
            PublishMessageRequest::from_args(&args(&["arn:aws:sns:eu-west-1:123:orders", "hello"]))
                .expect("request should build");
        assert_eq!(request.topic_arn, "arn:aws:sns:eu-west-1:123:orders");
        assert_eq!(request.message, "hello");
    }

    #[test]
    fn send_message_rejects_single_argument() {
        let error =
            SendMessageRequest::from_args(&args(&["https://sqs/queue"])).expect_err("should reject");
        assert_eq!(error.message(), "Usage: send_message <queue_url> <message_body>");
    }

    #[test]
    fn create_vault_copies_name_into_request() {
        let request =
            CreateVaultRequest::from_args(&args(&["myvault"])).expect("request should build");
        assert_eq!(request.vault_name, "myvault");
    }

    #[test]
    fn describe_file_systems_rejects_extra_arguments() {
        let error = DescribeFileSystemsRequest::from_args(&args(&["fs-123"]))
            .expect_err("should reject");
        assert_eq!(error.message(), "Usage: describe_file_systems");
    }

    #[test]
    fn put_encrypted_object_copies_bucket_and_file() {
        let request =
            PutEncryptedObjectRequest::from_args(&args(&["archive-bucket", "report.csv"]))
                .expect("request should build");
        assert_eq!(request.bucket_name, "archive-bucket");
        assert_eq!(request.file_name, "report.csv");
    }
}
