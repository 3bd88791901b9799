//! Gallery repository contract and key-value implementation.
//!
//! Images are immutable once added; there is no update path.

use crate::clock::Clock;
use crate::model::gallery::{GalleryImage, NewGalleryImage};
use crate::model::new_record_id;
use crate::repo::{RecordCollection, RepoResult};
use crate::store::{keys, KeyValueStore, StoreAdapter};

pub trait GalleryRepository {
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<GalleryImage>>;
    /// Assigns id and `upload_date`, then appends.
    fn create(&self, image: &NewGalleryImage) -> RepoResult<GalleryImage>;
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

pub struct KvGalleryRepository<'s, S: KeyValueStore + ?Sized> {
    records: RecordCollection<'s, S, GalleryImage>,
    clock: &'s dyn Clock,
}

impl<'s, S: KeyValueStore + ?Sized> KvGalleryRepository<'s, S> {
    pub fn new(adapter: StoreAdapter<'s, S>, clock: &'s dyn Clock) -> Self {
        Self {
            records: RecordCollection::new(adapter, keys::GALLERY),
            clock,
        }
    }
}

impl<S: KeyValueStore + ?Sized> GalleryRepository for KvGalleryRepository<'_, S> {
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<GalleryImage>> {
        self.records.list_by_owner(owner_id)
    }

    fn create(&self, image: &NewGalleryImage) -> RepoResult<GalleryImage> {
        self.records.insert(GalleryImage {
            id: new_record_id(),
            title: image.title.clone(),
            url: image.url.clone(),
            upload_date: self.clock.now(),
            user_id: image.user_id.clone(),
        })
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        self.records.remove(id)
    }
}
