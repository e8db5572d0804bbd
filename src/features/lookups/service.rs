use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::lookups::dto::{TransliterateRequestDto, TransliterateResponseDto};
use crate::modules::postal::{PostOffice, PostalClient};
use crate::modules::transliteration::{SequencedTransliterator, Transliterator};
use crate::shared::validation::PINCODE_REGEX;

/// Data-entry assists: transliteration and post office lookup
pub struct LookupService {
    transliterator: Arc<dyn Transliterator>,
    sequenced: SequencedTransliterator,
    postal: Arc<PostalClient>,
}

impl LookupService {
    pub fn new(transliterator: Arc<dyn Transliterator>, postal: Arc<PostalClient>) -> Self {
        Self {
            sequenced: SequencedTransliterator::new(transliterator.clone()),
            transliterator,
            postal,
        }
    }

    pub async fn transliterate(
        &self,
        request: &TransliterateRequestDto,
    ) -> Result<TransliterateResponseDto> {
        match (&request.text, &request.texts) {
            (Some(text), None) => {
                let (text, stale) = match (&request.form_id, &request.field) {
                    (Some(form_id), Some(field)) => {
                        match self.sequenced.transliterate_field(*form_id, field, text).await {
                            Some(text) => (Some(text), false),
                            None => (None, true),
                        }
                    }
                    (None, None) => (
                        Some(self.transliterator.transliterate_or_original(text).await),
                        false,
                    ),
                    _ => {
                        return Err(AppError::BadRequest(
                            "'formId' and 'field' must be given together".to_string(),
                        ))
                    }
                };
                Ok(TransliterateResponseDto {
                    text,
                    texts: None,
                    stale,
                })
            }
            (None, Some(texts)) => Ok(TransliterateResponseDto {
                text: None,
                texts: Some(self.transliterator.transliterate_all(texts).await),
                stale: false,
            }),
            _ => Err(AppError::BadRequest(
                "Provide exactly one of 'text' or 'texts'".to_string(),
            )),
        }
    }

    pub async fn post_offices_by_name(&self, name: &str) -> Vec<PostOffice> {
        self.postal.by_office_name(name).await
    }

    pub async fn post_offices_by_pincode(&self, pincode: &str) -> Result<Vec<PostOffice>> {
        if !PINCODE_REGEX.is_match(pincode) {
            return Err(AppError::Validation(
                "अवैध पिनकोड (Pincode must be 6 digits)".to_string(),
            ));
        }
        Ok(self.postal.by_pincode(pincode).await)
    }
}
