use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::timeout;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::programs::models::ImageUpload;
use crate::modules::storage::ObjectStorage;

/// Maximum image size in bytes (15MB)
pub const MAX_IMAGE_SIZE: usize = 15 * 1024 * 1024;

/// Accepted image MIME types
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

pub const IMAGE_TOO_LARGE: &str = "फाईल खूप मोठी आहे. कृपया 15MB पेक्षा लहान फाईल निवडा.";
const INVALID_IMAGE_TYPE: &str = "अवैध फाईल प्रकार. कृपया JPG, PNG, GIF किंवा WEBP फाईल निवडा.";
const UPLOAD_TIMED_OUT: &str =
    "अपलोड खूप वेळ घेत आहे. कृपया लहान फाईल वापरा किंवा पुन्हा प्रयत्न करा. (Upload outcome unknown)";
const UPLOAD_FAILED: &str = "फोटो अपलोड अयशस्वी. स्टोरेज सेटअप तपासा.";

const KEY_PREFIX: &str = "program-images";

/// Size and type checks; runs before any storage call
pub fn check_image(size: usize, content_type: &str) -> Result<()> {
    if size > MAX_IMAGE_SIZE {
        return Err(AppError::UploadRejected(IMAGE_TOO_LARGE.to_string()));
    }
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(AppError::UploadRejected(INVALID_IMAGE_TYPE.to_string()));
    }
    Ok(())
}

fn extension(file_name: &str, content_type: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => match content_type {
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "jpg",
        }
        .to_string(),
    }
}

/// `program-images/{millis}_{random}.{ext}`
pub fn image_key(file_name: &str, content_type: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{}/{}_{}.{}",
        KEY_PREFIX,
        Utc::now().timestamp_millis(),
        &random[..8],
        extension(file_name, content_type)
    )
}

/// Uploads program images and returns their public URL
pub struct ImageUploadService {
    storage: Arc<dyn ObjectStorage>,
    upload_timeout: Duration,
}

impl ImageUploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, upload_timeout: Duration) -> Self {
        Self {
            storage,
            upload_timeout,
        }
    }

    /// A timed-out transfer may still complete in the background; nothing is
    /// cleaned up.
    pub async fn upload(&self, image: ImageUpload) -> Result<String> {
        check_image(image.data.len(), &image.content_type)?;

        let key = image_key(&image.file_name, &image.content_type);
        let size = image.data.len();

        let stored_key = match timeout(
            self.upload_timeout,
            self.storage.upload(&key, image.data, &image.content_type),
        )
        .await
        {
            Ok(Ok(stored_key)) => stored_key,
            Ok(Err(e)) => {
                tracing::error!("Image upload failed for {}: {}", key, e);
                return Err(AppError::UploadFailed(format!("{} ({})", UPLOAD_FAILED, e)));
            }
            Err(_) => {
                tracing::warn!(
                    "Image upload for {} exceeded {:?}",
                    key,
                    self.upload_timeout
                );
                return Err(AppError::UploadFailed(UPLOAD_TIMED_OUT.to_string()));
            }
        };

        tracing::info!("Uploaded program image {} ({} bytes)", stored_key, size);
        Ok(self.storage.public_url(&stored_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::CountingStorage;
    use async_trait::async_trait;
    use tokio_test::{assert_err, assert_ok};

    fn image(size: usize, content_type: &str) -> ImageUpload {
        ImageUpload {
            data: vec![0; size],
            file_name: "poster.PNG".to_string(),
            content_type: content_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_oversized_image_never_reaches_storage() {
        let storage = Arc::new(CountingStorage::default());
        let service = ImageUploadService::new(storage.clone(), Duration::from_secs(5));

        let result = service.upload(image(20 * 1024 * 1024, "image/png")).await;

        match result {
            Err(AppError::UploadRejected(msg)) => assert_eq!(msg, IMAGE_TOO_LARGE),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(storage.uploads(), 0);
    }

    #[tokio::test]
    async fn test_wrong_type_never_reaches_storage() {
        let storage = Arc::new(CountingStorage::default());
        let service = ImageUploadService::new(storage.clone(), Duration::from_secs(5));

        let error = assert_err!(service.upload(image(10, "application/pdf")).await);

        assert!(matches!(error, AppError::UploadRejected(_)));
        assert_eq!(storage.uploads(), 0);
    }

    #[tokio::test]
    async fn test_accepted_image_returns_public_url() {
        let storage = Arc::new(CountingStorage::default());
        let service = ImageUploadService::new(storage.clone(), Duration::from_secs(5));

        let url = assert_ok!(service.upload(image(MAX_IMAGE_SIZE, "image/png")).await);

        assert_eq!(storage.uploads(), 1);
        assert!(url.starts_with("http://storage.test/trust-uploads/public/program-images/"));
        assert!(url.ends_with(".png"));
    }

    struct StalledStorage;

    #[async_trait]
    impl ObjectStorage for StalledStorage {
        async fn upload(&self, _key: &str, _data: Vec<u8>, _content_type: &str) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }

        fn public_url(&self, key: &str) -> String {
            key.to_string()
        }
    }

    #[tokio::test]
    async fn test_timeout_is_reported_as_failed() {
        let service = ImageUploadService::new(Arc::new(StalledStorage), Duration::from_millis(50));

        let result = service.upload(image(10, "image/jpeg")).await;

        match result {
            Err(AppError::UploadFailed(msg)) => assert_eq!(msg, UPLOAD_TIMED_OUT),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_image_key_shape() {
        let key = image_key("photo.JPeG", "image/jpeg");
        assert!(key.starts_with("program-images/"));
        assert!(key.ends_with(".jpeg"));

        let (_, name) = key.split_once('/').unwrap();
        let (millis, rest) = name.split_once('_').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(rest.len(), "12345678.jpeg".len());

        assert!(image_key("noext", "image/webp").ends_with(".webp"));
    }
}
