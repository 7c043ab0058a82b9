//! Elastic File System operations behind a narrow client seam.

use aws_demos_core::requests::{
    CreateFileSystemRequest, DeleteFileSystemRequest, DescribeFileSystemsRequest,
    FileSystemCreated, FileSystemSummary,
};

pub trait FileSystemApi {
    fn create_file_system(
        &self,
        request: &CreateFileSystemRequest,
    ) -> Result<FileSystemCreated, String>;
    fn delete_file_system(&self, request: &DeleteFileSystemRequest) -> Result<(), String>;
    fn describe_file_systems(
        &self,
        request: &DescribeFileSystemsRequest,
    ) -> Result<Vec<FileSystemSummary>, String>;
}

pub struct EfsFileSystemApi {
    efs_client: aws_sdk_efs::Client,
}

impl EfsFileSystemApi {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            efs_client: aws_sdk_efs::Client::new(config),
        }
    }
}

impl FileSystemApi for EfsFileSystemApi {
    fn create_file_system(
        &self,
        request: &CreateFileSystemRequest,
    ) -> Result<FileSystemCreated, String> {
        let client = self.efs_client.clone();
        let creation_token = request.creation_token.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .create_file_system()
                    .creation_token(creation_token)
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                Ok(FileSystemCreated {
                    file_system_id: output.file_system_id().to_string(),
                })
            })
        })
    }

    fn delete_file_system(&self, request: &DeleteFileSystemRequest) -> Result<(), String> {
        let client = self.efs_client.clone();
        let file_system_id = request.file_system_id.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_file_system()
                    .file_system_id(file_system_id)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string())
            })
        })
    }

    fn describe_file_systems(
        &self,
        _request: &DescribeFileSystemsRequest,
    ) -> Result<Vec<FileSystemSummary>, String> {
        let client = self.efs_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .describe_file_systems()
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                let summaries = output
                    .file_systems()
                    .iter()
                    .map(|description| FileSystemSummary {
                        file_system_id: description.file_system_id().to_string(),
                        life_cycle_state: description
                            .life_cycle_state()
                            .as_str()
                            .to_string(),
                    })
                    .collect();
                Ok(summaries)
            })
        })
    }
}
