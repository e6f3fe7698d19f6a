//! Gallery model
//!
//! Displayed photos with metadata, unrelated to vehicles and bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub id: String,
    pub judul: String,
    pub deskripsi: String,
    /// Base64 data URL.
    pub foto: String,
    pub kategori: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateGalleryRequest {
    pub judul: Option<String>,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
    pub kategori: Option<String>,
}

impl CreateGalleryRequest {
    /// Gallery has its own dedicated error message instead of the generic
    /// missing-field listing.
    pub fn into_item(self) -> AppResult<GalleryItem> {
        let judul = self.judul.unwrap_or_default();
        let foto = self.foto.unwrap_or_default();
        if judul.trim().is_empty() || foto.trim().is_empty() {
            return Err(AppError::BadRequest("Foto dan judul wajib diisi".to_string()));
        }
        let now = Utc::now();
        Ok(GalleryItem {
            id: Uuid::new_v4().to_string(),
            judul,
            deskripsi: self.deskripsi.unwrap_or_default(),
            foto,
            kategori: self.kategori.unwrap_or_else(|| "kendaraan".to_string()),
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults_to_kendaraan() {
        let item = CreateGalleryRequest {
            judul: Some("Toyota Avanza Interior".to_string()),
            deskripsi: None,
            foto: Some("data:image/jpeg;base64,AAAA".to_string()),
            kategori: None,
        }
        .into_item()
        .unwrap();
        assert_eq!(item.kategori, "kendaraan");
        assert_eq!(item.deskripsi, "");
    }

    #[test]
    fn judul_and_foto_are_both_required() {
        let missing_photo = CreateGalleryRequest {
            judul: Some("Interior".to_string()),
            deskripsi: Some("Test description".to_string()),
            foto: None,
            kategori: None,
        };
        assert!(missing_photo.into_item().is_err());
    }
}
