//! Gallery use-cases.

use crate::model::gallery::{GalleryImage, NewGalleryImage};
use crate::repo::gallery_repo::GalleryRepository;
use crate::service::{non_blank, ServiceResult};

pub struct GalleryService<R: GalleryRepository> {
    repo: R,
}

impl<R: GalleryRepository> GalleryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Owner's images, most recently uploaded first.
    pub fn images(&self, owner_id: &str) -> ServiceResult<Vec<GalleryImage>> {
        let mut images = self.repo.list_by_owner(owner_id)?;
        images.sort_by(|left, right| right.upload_date.cmp(&left.upload_date));
        Ok(images)
    }

    /// Adds an image reference. The url is trimmed but not validated.
    pub fn add(&self, owner_id: &str, title: &str, url: &str) -> ServiceResult<GalleryImage> {
        let title = non_blank(title, "image title cannot be blank")?;
        let url = non_blank(url, "image url cannot be blank")?;
        Ok(self
            .repo
            .create(&NewGalleryImage::new(owner_id, title, url))?)
    }

    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.repo.delete(id)?)
    }
}
