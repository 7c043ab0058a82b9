//! S3 bucket and object operations behind a narrow client seam.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ServerSideEncryption;

use aws_demos_core::requests::{
    BucketSummary, CreateBucketRequest, DeleteBucketRequest, ListBucketsRequest,
    PutEncryptedObjectRequest,
};

pub trait BucketApi {
    fn create_bucket(&self, request: &CreateBucketRequest) -> Result<(), String>;
    fn delete_bucket(&self, request: &DeleteBucketRequest) -> Result<(), String>;
    fn list_buckets(&self, request: &ListBucketsRequest) -> Result<Vec<BucketSummary>, String>;
    fn put_encrypted_object(
        &self,
        request: &PutEncryptedObjectRequest,
        body: &[u8],
    ) -> Result<(), String>;
}

pub struct S3BucketApi {
    s3_client: aws_sdk_s3::Client,
}

impl S3BucketApi {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            s3_client: aws_sdk_s3::Client::new(config),
        }
    }
}

impl BucketApi for S3BucketApi {
    fn create_bucket(&self, request: &CreateBucketRequest) -> Result<(), String> {
        let client = self.s3_client.clone();
        let bucket = request.bucket_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .create_bucket()
                    .bucket(bucket)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string())
            })
        })
    }

    fn delete_bucket(&self, request: &DeleteBucketRequest) -> Result<(), String> {
        let client = self.s3_client.clone();
        let bucket = request.bucket_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_bucket()
                    .bucket(bucket)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string())
            })
        })
    }

    fn list_buckets(&self, _request: &ListBucketsRequest) -> Result<Vec<BucketSummary>, String> {
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .list_buckets()
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                let summaries = output
                    .buckets()
                    .iter()
                    .map(|bucket| BucketSummary {
                        name: bucket.name().unwrap_or_default().to_string(),
                    })
                    .collect();
                Ok(summaries)
            })
        })
    }

    fn put_encrypted_object(
        &self,
        request: &PutEncryptedObjectRequest,
        body: &[u8],
    ) -> Result<(), String> {
        let client = self.s3_client.clone();
        let bucket = request.bucket_name.clone();
        let object_key = request.file_name.clone();
        let body_bytes = body.to_vec();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .server_side_encryption(ServerSideEncryption::Aes256)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string())
            })
        })
    }
}
