use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::locations::MarathiResolver;
use crate::features::members::dtos::MemberRequestDto;
use crate::features::members::models::{Member, MemberFilter};
use crate::modules::document_store::{
    changed_fields, CollectionSpec, DocumentStore, OrderBy, OrderField, Record,
    SoftDeleteRepository,
};
use crate::shared::bilingual::non_empty;
use crate::shared::constants::{DEFAULT_STATE, DEFAULT_STATE_MARATHI, MEMBERS_COLLECTION};

pub const MEMBERS: CollectionSpec = CollectionSpec {
    name: MEMBERS_COLLECTION,
    order: OrderBy::asc(OrderField::CreatedAt),
    not_found: "सदस्य सापडला नाही (Member not found)",
};

const FULL_NAME_REQUIRED: &str = "सदस्याचे नाव आवश्यक आहे (Full name is required)";

#[derive(Clone, Copy)]
enum Source {
    /// Dictionary first, then transliteration
    Place,
    /// Transliteration only
    Text,
}

/// Service for member registry operations
pub struct MemberService {
    repo: SoftDeleteRepository<Member>,
    resolver: Arc<MarathiResolver>,
}

impl MemberService {
    pub fn new(store: Arc<dyn DocumentStore>, resolver: Arc<MarathiResolver>) -> Self {
        Self {
            repo: SoftDeleteRepository::new(store, MEMBERS),
            resolver,
        }
    }

    /// Active members in creation order, narrowed by `filter`
    pub async fn list(&self, filter: &MemberFilter) -> Result<Vec<Record<Member>>> {
        let members = self.repo.list().await?;
        if filter.is_empty() {
            return Ok(members);
        }
        Ok(members
            .into_iter()
            .filter(|record| filter.matches(&record.data))
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Record<Member>> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, dto: &MemberRequestDto) -> Result<Record<Member>> {
        if dto.full_name.is_none() {
            return Err(AppError::Validation(FULL_NAME_REQUIRED.to_string()));
        }

        let mut member = Member::default();
        dto.apply_to(&mut member);
        if member.state.is_none() {
            member.state = Some(DEFAULT_STATE.to_string());
            if member.state_marathi.is_none() {
                member.state_marathi = Some(DEFAULT_STATE_MARATHI.to_string());
            }
        }
        self.fill_marathi(&mut member, &MemberRequestDto::default())
            .await;

        let record = self.repo.create(&member).await?;
        tracing::info!("Member {} registered", record.id);
        Ok(record)
    }

    /// Overwrite provided fields only.
    ///
    /// An English value sent without its Marathi counterpart regenerates the
    /// Marathi value; the stored Marathi is kept otherwise.
    pub async fn update(&self, id: Uuid, dto: &MemberRequestDto) -> Result<Record<Member>> {
        let existing = self.repo.get_by_id(id).await?;

        let mut member = existing.data.clone();
        dto.apply_to(&mut member);
        self.fill_marathi(&mut member, dto).await;

        let patch = changed_fields(&existing.data, &member)?;
        tracing::debug!("Member {} update touches {} fields", id, patch.len());
        self.repo.update(id, &patch).await
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<Record<Member>> {
        self.repo.soft_delete(id).await
    }

    pub async fn restore(&self, id: Uuid) -> Result<Record<Member>> {
        self.repo.restore(id).await
    }

    pub async fn list_deleted(&self) -> Vec<Record<Member>> {
        self.repo.list_deleted().await
    }

    async fn fill_marathi(&self, member: &mut Member, dto: &MemberRequestDto) {
        let full_name = Some(member.full_name.clone());
        self.fill(
            full_name.as_deref(),
            &mut member.full_name_marathi,
            Source::Text,
            dto.full_name.is_some() && dto.full_name_marathi.is_none(),
        )
        .await;
        self.fill(
            member.address_line1.as_deref(),
            &mut member.address_line1_marathi,
            Source::Text,
            dto.address_line1.is_some() && dto.address_line1_marathi.is_none(),
        )
        .await;
        self.fill(
            member.address_line2.as_deref(),
            &mut member.address_line2_marathi,
            Source::Text,
            dto.address_line2.is_some() && dto.address_line2_marathi.is_none(),
        )
        .await;
        self.fill(
            member.state.as_deref(),
            &mut member.state_marathi,
            Source::Place,
            dto.state.is_some() && dto.state_marathi.is_none(),
        )
        .await;
        self.fill(
            member.district.as_deref(),
            &mut member.district_marathi,
            Source::Place,
            dto.district.is_some() && dto.district_marathi.is_none(),
        )
        .await;
        self.fill(
            member.taluka.as_deref(),
            &mut member.taluka_marathi,
            Source::Place,
            dto.taluka.is_some() && dto.taluka_marathi.is_none(),
        )
        .await;
        self.fill(
            member.city.as_deref(),
            &mut member.city_marathi,
            Source::Place,
            dto.city.is_some() && dto.city_marathi.is_none(),
        )
        .await;
        self.fill(
            member.post_office.as_deref(),
            &mut member.post_office_marathi,
            Source::Place,
            dto.post_office.is_some() && dto.post_office_marathi.is_none(),
        )
        .await;
    }

    async fn fill(
        &self,
        english: Option<&str>,
        marathi: &mut Option<String>,
        source: Source,
        regenerate: bool,
    ) {
        let Some(english) = non_empty(english) else {
            return;
        };
        if !regenerate && non_empty(marathi.as_deref()).is_some() {
            return;
        }

        let resolved = match source {
            Source::Place => self.resolver.place_name(english).await,
            Source::Text => self.resolver.text(english).await,
        };
        *marathi = Some(resolved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{memory_store, stub_resolver, StubTransliterator};

    fn service() -> MemberService {
        let transliterator = Arc::new(StubTransliterator::with_words(&[("Ramesh", "रमेश")]));
        MemberService::new(memory_store(), stub_resolver(transliterator))
    }

    fn request(full_name: &str) -> MemberRequestDto {
        MemberRequestDto {
            full_name: Some(full_name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_backfills_marathi_and_defaults_state() {
        let service = service();
        let dto = MemberRequestDto {
            district: Some("Pune".to_string()),
            taluka: Some("Haveli".to_string()),
            city: Some("Wagholi".to_string()),
            ..request("Ramesh")
        };

        let record = service.create(&dto).await.unwrap();

        assert!(!record.is_deleted);
        assert_eq!(record.data.full_name_marathi.as_deref(), Some("रमेश"));
        assert_eq!(record.data.district_marathi.as_deref(), Some("पुणे"));
        assert_eq!(record.data.taluka_marathi.as_deref(), Some("हवेली"));
        assert_eq!(record.data.city_marathi.as_deref(), Some("वाघोली"));
        assert_eq!(record.data.state.as_deref(), Some(DEFAULT_STATE));
        assert_eq!(record.data.state_marathi.as_deref(), Some(DEFAULT_STATE_MARATHI));
    }

    #[tokio::test]
    async fn test_provided_marathi_is_kept() {
        let transliterator = Arc::new(StubTransliterator::default());
        let service = MemberService::new(memory_store(), stub_resolver(transliterator.clone()));
        let dto = MemberRequestDto {
            full_name_marathi: Some("रमेश पाटील".to_string()),
            ..request("Ramesh")
        };

        let record = service.create(&dto).await.unwrap();
        assert_eq!(record.data.full_name_marathi.as_deref(), Some("रमेश पाटील"));
        assert_eq!(transliterator.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_without_name_is_rejected() {
        let service = service();

        let result = service.create(&MemberRequestDto::default()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(service
            .list(&MemberFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_only_provided_fields() {
        let service = service();
        let created = service
            .create(&MemberRequestDto {
                mobile: Some("9876543210".to_string()),
                district: Some("Pune".to_string()),
                ..request("Ramesh")
            })
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                &MemberRequestDto {
                    district: Some("Nashik".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.data.full_name, "Ramesh");
        assert_eq!(updated.data.mobile.as_deref(), Some("9876543210"));
        assert_eq!(updated.data.district.as_deref(), Some("Nashik"));
        assert_eq!(updated.data.district_marathi.as_deref(), Some("नाशिक"));
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_soft_delete_round_trip() {
        let service = service();
        let member = service.create(&request("Ramesh")).await.unwrap();

        service.soft_delete(member.id).await.unwrap();
        assert!(service
            .list(&MemberFilter::default())
            .await
            .unwrap()
            .is_empty());
        assert_eq!(service.list_deleted().await.len(), 1);
        assert!(service.get(member.id).await.unwrap().is_deleted);

        service.restore(member.id).await.unwrap();
        let active = service.list(&MemberFilter::default()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, member.id);
        assert!(service.list_deleted().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_applies_filter() {
        let service = service();
        for district in ["Pune", "Nashik", "Pune"] {
            service
                .create(&MemberRequestDto {
                    district: Some(district.to_string()),
                    ..request("Member")
                })
                .await
                .unwrap();
        }

        let filter = MemberFilter {
            district: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(service.list(&filter).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let result = service().update(Uuid::new_v4(), &request("X")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
