//! Persistence collaborator for the content service.
//!
//! Storage technology sits behind the `ContentStore` trait; the service ships
//! with a concurrent in-memory implementation. Updates are whole-row puts, so
//! concurrent reviews of the same entity resolve last-write-wins, which is
//! the documented behavior for this workflow.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Agency, Beach, Business, ReviewStatus, Tag, Tour};

#[async_trait]
pub trait ContentStore: Send + Sync {
    // Businesses
    async fn insert_business(&self, business: Business) -> Result<Business, AppError>;
    async fn find_business(&self, id: Uuid) -> Result<Option<Business>, AppError>;
    async fn find_business_by_owner(&self, owner_id: Uuid) -> Result<Option<Business>, AppError>;
    async fn put_business(&self, business: Business) -> Result<Business, AppError>;
    async fn list_businesses(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<Business>, AppError>;
    async fn delete_business(&self, id: Uuid) -> Result<bool, AppError>;

    // Agencies
    async fn insert_agency(&self, agency: Agency) -> Result<Agency, AppError>;
    async fn find_agency(&self, id: Uuid) -> Result<Option<Agency>, AppError>;
    async fn find_agency_by_owner(&self, owner_id: Uuid) -> Result<Option<Agency>, AppError>;
    async fn put_agency(&self, agency: Agency) -> Result<Agency, AppError>;
    async fn list_agencies(&self, status: Option<ReviewStatus>) -> Result<Vec<Agency>, AppError>;
    async fn delete_agency(&self, id: Uuid) -> Result<bool, AppError>;

    // Tours
    async fn insert_tour(&self, tour: Tour) -> Result<Tour, AppError>;
    async fn find_tour(&self, id: Uuid) -> Result<Option<Tour>, AppError>;
    async fn list_tours_by_owner(&self, owner_id: Uuid) -> Result<Vec<Tour>, AppError>;
    async fn put_tour(&self, tour: Tour) -> Result<Tour, AppError>;
    async fn list_tours(&self, status: Option<ReviewStatus>) -> Result<Vec<Tour>, AppError>;
    async fn delete_tour(&self, id: Uuid) -> Result<bool, AppError>;

    // Beaches
    async fn insert_beach(&self, beach: Beach) -> Result<Beach, AppError>;
    async fn find_beach(&self, id: Uuid) -> Result<Option<Beach>, AppError>;
    async fn put_beach(&self, beach: Beach) -> Result<Beach, AppError>;
    async fn list_beaches(&self) -> Result<Vec<Beach>, AppError>;
    async fn delete_beach(&self, id: Uuid) -> Result<bool, AppError>;

    // Tags
    async fn insert_tag(&self, tag: Tag) -> Result<Tag, AppError>;
    async fn find_tag(&self, id: Uuid) -> Result<Option<Tag>, AppError>;
    async fn put_tag(&self, tag: Tag) -> Result<Tag, AppError>;
    async fn list_tags(&self) -> Result<Vec<Tag>, AppError>;
    async fn delete_tag(&self, id: Uuid) -> Result<bool, AppError>;
}

/// In-memory store backed by concurrent maps.
#[derive(Default)]
pub struct InMemoryStore {
    businesses: DashMap<Uuid, Business>,
    agencies: DashMap<Uuid, Agency>,
    tours: DashMap<Uuid, Tour>,
    beaches: DashMap<Uuid, Beach>,
    tags: DashMap<Uuid, Tag>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn business_name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.businesses.iter().any(|entry| {
            Some(entry.id) != except && entry.name.eq_ignore_ascii_case(name)
        })
    }

    fn agency_name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.agencies.iter().any(|entry| {
            Some(entry.id) != except && entry.name.eq_ignore_ascii_case(name)
        })
    }

    fn tag_name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.tags.iter().any(|entry| {
            Some(entry.id) != except && entry.name.eq_ignore_ascii_case(name)
        })
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn insert_business(&self, business: Business) -> Result<Business, AppError> {
        if self.business_name_taken(&business.name, None) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "A business named '{}' already exists",
                business.name
            )));
        }
        if self
            .businesses
            .iter()
            .any(|entry| entry.owner_id == business.owner_id)
        {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "This user already owns a business"
            )));
        }
        self.businesses.insert(business.id, business.clone());
        Ok(business)
    }

    async fn find_business(&self, id: Uuid) -> Result<Option<Business>, AppError> {
        Ok(self.businesses.get(&id).map(|b| b.value().clone()))
    }

    async fn find_business_by_owner(&self, owner_id: Uuid) -> Result<Option<Business>, AppError> {
        Ok(self
            .businesses
            .iter()
            .find(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.value().clone()))
    }

    async fn put_business(&self, business: Business) -> Result<Business, AppError> {
        if self.business_name_taken(&business.name, Some(business.id)) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "A business named '{}' already exists",
                business.name
            )));
        }
        self.businesses.insert(business.id, business.clone());
        Ok(business)
    }

    async fn list_businesses(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<Business>, AppError> {
        let mut all: Vec<Business> = self
            .businesses
            .iter()
            .filter(|entry| status.map_or(true, |s| entry.status == s))
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|b| b.created_utc);
        Ok(all)
    }

    async fn delete_business(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.businesses.remove(&id).is_some())
    }

    async fn insert_agency(&self, agency: Agency) -> Result<Agency, AppError> {
        if self.agency_name_taken(&agency.name, None) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "An agency named '{}' already exists",
                agency.name
            )));
        }
        if self
            .agencies
            .iter()
            .any(|entry| entry.owner_id == agency.owner_id)
        {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "This user already owns an agency"
            )));
        }
        self.agencies.insert(agency.id, agency.clone());
        Ok(agency)
    }

    async fn find_agency(&self, id: Uuid) -> Result<Option<Agency>, AppError> {
        Ok(self.agencies.get(&id).map(|a| a.value().clone()))
    }

    async fn find_agency_by_owner(&self, owner_id: Uuid) -> Result<Option<Agency>, AppError> {
        Ok(self
            .agencies
            .iter()
            .find(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.value().clone()))
    }

    async fn put_agency(&self, agency: Agency) -> Result<Agency, AppError> {
        if self.agency_name_taken(&agency.name, Some(agency.id)) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "An agency named '{}' already exists",
                agency.name
            )));
        }
        self.agencies.insert(agency.id, agency.clone());
        Ok(agency)
    }

    async fn list_agencies(&self, status: Option<ReviewStatus>) -> Result<Vec<Agency>, AppError> {
        let mut all: Vec<Agency> = self
            .agencies
            .iter()
            .filter(|entry| status.map_or(true, |s| entry.status == s))
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|a| a.created_utc);
        Ok(all)
    }

    async fn delete_agency(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.agencies.remove(&id).is_some())
    }

    async fn insert_tour(&self, tour: Tour) -> Result<Tour, AppError> {
        self.tours.insert(tour.id, tour.clone());
        Ok(tour)
    }

    async fn find_tour(&self, id: Uuid) -> Result<Option<Tour>, AppError> {
        Ok(self.tours.get(&id).map(|t| t.value().clone()))
    }

    async fn list_tours_by_owner(&self, owner_id: Uuid) -> Result<Vec<Tour>, AppError> {
        let mut owned: Vec<Tour> = self
            .tours
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by_key(|t| t.created_utc);
        Ok(owned)
    }

    async fn put_tour(&self, tour: Tour) -> Result<Tour, AppError> {
        self.tours.insert(tour.id, tour.clone());
        Ok(tour)
    }

    async fn list_tours(&self, status: Option<ReviewStatus>) -> Result<Vec<Tour>, AppError> {
        let mut all: Vec<Tour> = self
            .tours
            .iter()
            .filter(|entry| status.map_or(true, |s| entry.status == s))
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|t| t.created_utc);
        Ok(all)
    }

    async fn delete_tour(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.tours.remove(&id).is_some())
    }

    async fn insert_beach(&self, beach: Beach) -> Result<Beach, AppError> {
        self.beaches.insert(beach.id, beach.clone());
        Ok(beach)
    }

    async fn find_beach(&self, id: Uuid) -> Result<Option<Beach>, AppError> {
        Ok(self.beaches.get(&id).map(|b| b.value().clone()))
    }

    async fn put_beach(&self, beach: Beach) -> Result<Beach, AppError> {
        self.beaches.insert(beach.id, beach.clone());
        Ok(beach)
    }

    async fn list_beaches(&self) -> Result<Vec<Beach>, AppError> {
        let mut all: Vec<Beach> = self.beaches.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by_key(|b| b.created_utc);
        Ok(all)
    }

    async fn delete_beach(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.beaches.remove(&id).is_some())
    }

    async fn insert_tag(&self, tag: Tag) -> Result<Tag, AppError> {
        if self.tag_name_taken(&tag.name, None) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "A tag named '{}' already exists",
                tag.name
            )));
        }
        self.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    async fn find_tag(&self, id: Uuid) -> Result<Option<Tag>, AppError> {
        Ok(self.tags.get(&id).map(|t| t.value().clone()))
    }

    async fn put_tag(&self, tag: Tag) -> Result<Tag, AppError> {
        if self.tag_name_taken(&tag.name, Some(tag.id)) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "A tag named '{}' already exists",
                tag.name
            )));
        }
        self.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        let mut all: Vec<Tag> = self.tags.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by_key(|t| t.created_utc);
        Ok(all)
    }

    async fn delete_tag(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.tags.remove(&id).is_some())
    }
}
