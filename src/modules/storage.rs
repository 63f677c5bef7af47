use crate::types::StorageContext;
use axum_typed_multipart::FieldData;
use std::path::Path;
use tempfile::NamedTempFile;
use ulid::Ulid;

pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

#[derive(Debug, PartialEq)]
pub enum Error {
    UnsupportedFileType,
    FileTooLarge,
    InvalidFileName,
    UploadFailed,
    DeleteFailed,
}

impl Error {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnsupportedFileType => "Only JPEG, PNG and WEBP images are allowed",
            Self::FileTooLarge => "File size must not exceed 5MB",
            Self::InvalidFileName => "Invalid file name",
            Self::UploadFailed => "Failed to upload file",
            Self::DeleteFailed => "Failed to delete file",
        }
    }

    /// Whether the error was caused by the uploaded file rather than the server.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::UnsupportedFileType | Self::FileTooLarge)
    }
}

pub struct File {
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub contents: Vec<u8>,
}

impl File {
    pub async fn from_field(field: FieldData<NamedTempFile>) -> Result<Self, Error> {
        let contents = tokio::fs::read(field.contents.path()).await.map_err(|err| {
            tracing::error!("Failed to read the uploaded file {:?}", err);
            Error::UploadFailed
        })?;

        Ok(Self {
            name: field.metadata.file_name,
            content_type: field.metadata.content_type,
            contents,
        })
    }
}

fn content_type_extension(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}

/// Keeps the client's extension only when it agrees with the validated
/// content type, so a stored file is never served as anything but an image.
fn extension_for(file: &File, content_type: &str) -> String {
    let expected = content_type_extension(content_type);

    file.name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_lowercase())
        .filter(|extension| {
            extension == expected || (expected == "jpg" && extension == "jpeg")
        })
        .unwrap_or_else(|| expected.to_string())
}

pub fn validate(file: &File) -> Result<String, Error> {
    let content_type = file
        .content_type
        .as_deref()
        .map(|content_type| content_type.to_lowercase())
        .filter(|content_type| ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()))
        .ok_or(Error::UnsupportedFileType)?;

    if file.contents.len() > MAX_FILE_SIZE {
        return Err(Error::FileTooLarge);
    }

    Ok(content_type)
}

/// Stores the file under a fresh name and returns that name.
pub async fn save(cfg: StorageContext, file: File) -> Result<String, Error> {
    let content_type = validate(&file)?;
    let file_name = format!("{}.{}", Ulid::new(), extension_for(&file, &content_type));

    tokio::fs::write(cfg.upload_dir.join(&file_name), &file.contents)
        .await
        .map_err(|err| {
            tracing::error!("Failed to write uploaded file {}: {}", file_name, err);
            Error::UploadFailed
        })?;

    Ok(file_name)
}

/// Removes a stored file. Missing files are not an error.
pub async fn delete(cfg: StorageContext, file_name: &str) -> Result<(), Error> {
    if file_name.is_empty() {
        return Ok(());
    }

    if Path::new(file_name).file_name().and_then(|name| name.to_str()) != Some(file_name) {
        tracing::warn!("Refusing to delete file outside the upload directory: {}", file_name);
        return Err(Error::InvalidFileName);
    }

    match tokio::fs::remove_file(cfg.upload_dir.join(file_name)).await {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            tracing::error!("Failed to delete file {}: {}", file_name, err);
            Err(Error::DeleteFailed)
        }
    }
}

/// Best-effort delete for cleanup paths, failures are only logged.
pub async fn discard(cfg: StorageContext, file_name: Option<String>) {
    if let Some(file_name) = file_name {
        let _ = delete(cfg, &file_name).await;
    }
}

pub fn url_for(cfg: &StorageContext, file_name: &str) -> String {
    if file_name.is_empty() {
        return String::new();
    }

    format!("{}/{}", cfg.public_path, file_name)
}
