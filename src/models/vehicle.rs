//! Vehicle (kendaraan) model
//!
//! Rentable car record plus its create/update request variants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::{absent_int, absent_str, ensure_required, RequiredFields};

/// Availability state of a vehicle. Serialized with the Indonesian wire
/// names: `Tersedia` (available), `Disewa` (rented), `Perbaikan` (maintenance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Tersedia,
    Disewa,
    Perbaikan,
}

#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub nama: String,
    pub merek: String,
    pub plat_nomor: String,
    pub kategori: String,
    pub harga_harian: i64,
    pub harga_bulanan: i64,
    pub kapasitas: i64,
    pub transmisi: String,
    pub bahan_bakar: String,
    pub status: VehicleStatus,
    pub deskripsi: String,
    /// Base64 data URL, may be empty.
    pub foto: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create request. Every field is optional so that all missing required
/// fields can be reported together in a single 400.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub nama: Option<String>,
    pub merek: Option<String>,
    pub plat_nomor: Option<String>,
    pub kategori: Option<String>,
    #[validate(range(min = 1))]
    pub harga_harian: Option<i64>,
    #[validate(range(min = 1))]
    pub harga_bulanan: Option<i64>,
    #[validate(range(min = 1, max = 100))]
    pub kapasitas: Option<i64>,
    pub transmisi: Option<String>,
    pub bahan_bakar: Option<String>,
    pub status: Option<VehicleStatus>,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
}

impl RequiredFields for CreateVehicleRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if absent_str(&self.nama) {
            missing.push("nama");
        }
        if absent_str(&self.merek) {
            missing.push("merek");
        }
        if absent_str(&self.plat_nomor) {
            missing.push("plat_nomor");
        }
        if absent_str(&self.kategori) {
            missing.push("kategori");
        }
        if absent_int(&self.harga_harian) {
            missing.push("harga_harian");
        }
        if absent_int(&self.harga_bulanan) {
            missing.push("harga_bulanan");
        }
        if absent_int(&self.kapasitas) {
            missing.push("kapasitas");
        }
        if absent_str(&self.transmisi) {
            missing.push("transmisi");
        }
        if absent_str(&self.bahan_bakar) {
            missing.push("bahan_bakar");
        }
        missing
    }
}

impl CreateVehicleRequest {
    /// Turn a validated request into a fresh record. Server owns the id,
    /// the timestamps and the status default.
    pub fn into_vehicle(self) -> AppResult<Vehicle> {
        ensure_required(&self)?;
        let now = Utc::now();
        Ok(Vehicle {
            id: Uuid::new_v4().to_string(),
            nama: self.nama.unwrap_or_default(),
            merek: self.merek.unwrap_or_default(),
            plat_nomor: self.plat_nomor.unwrap_or_default(),
            kategori: self.kategori.unwrap_or_default(),
            harga_harian: self.harga_harian.unwrap_or_default(),
            harga_bulanan: self.harga_bulanan.unwrap_or_default(),
            kapasitas: self.kapasitas.unwrap_or_default(),
            transmisi: self.transmisi.unwrap_or_default(),
            bahan_bakar: self.bahan_bakar.unwrap_or_default(),
            status: self.status.unwrap_or(VehicleStatus::Tersedia),
            deskripsi: self.deskripsi.unwrap_or_default(),
            foto: self.foto.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update. Only present fields are applied; `id` is immutable.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub nama: Option<String>,
    pub merek: Option<String>,
    pub plat_nomor: Option<String>,
    pub kategori: Option<String>,
    #[validate(range(min = 1))]
    pub harga_harian: Option<i64>,
    #[validate(range(min = 1))]
    pub harga_bulanan: Option<i64>,
    #[validate(range(min = 1, max = 100))]
    pub kapasitas: Option<i64>,
    pub transmisi: Option<String>,
    pub bahan_bakar: Option<String>,
    pub status: Option<VehicleStatus>,
    pub deskripsi: Option<String>,
    pub foto: Option<String>,
}

impl Vehicle {
    /// Apply a partial update in place and bump `updated_at`.
    pub fn apply_update(&mut self, update: UpdateVehicleRequest) {
        if let Some(nama) = update.nama {
            self.nama = nama;
        }
        if let Some(merek) = update.merek {
            self.merek = merek;
        }
        if let Some(plat_nomor) = update.plat_nomor {
            self.plat_nomor = plat_nomor;
        }
        if let Some(kategori) = update.kategori {
            self.kategori = kategori;
        }
        if let Some(harga_harian) = update.harga_harian {
            self.harga_harian = harga_harian;
        }
        if let Some(harga_bulanan) = update.harga_bulanan {
            self.harga_bulanan = harga_bulanan;
        }
        if let Some(kapasitas) = update.kapasitas {
            self.kapasitas = kapasitas;
        }
        if let Some(transmisi) = update.transmisi {
            self.transmisi = transmisi;
        }
        if let Some(bahan_bakar) = update.bahan_bakar {
            self.bahan_bakar = bahan_bakar;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(deskripsi) = update.deskripsi {
            self.deskripsi = deskripsi;
        }
        if let Some(foto) = update.foto {
            self.foto = foto;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateVehicleRequest {
        CreateVehicleRequest {
            nama: Some("Toyota Avanza 2022".to_string()),
            merek: Some("Toyota".to_string()),
            plat_nomor: Some("PB 1234 AB".to_string()),
            kategori: Some("MPV".to_string()),
            harga_harian: Some(350_000),
            harga_bulanan: Some(8_500_000),
            kapasitas: Some(7),
            transmisi: Some("Manual".to_string()),
            bahan_bakar: Some("Bensin".to_string()),
            status: None,
            deskripsi: None,
            foto: None,
        }
    }

    #[test]
    fn create_defaults_status_and_optionals() {
        let vehicle = full_request().into_vehicle().unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Tersedia);
        assert_eq!(vehicle.deskripsi, "");
        assert_eq!(vehicle.foto, "");
        assert!(!vehicle.id.is_empty());
    }

    #[test]
    fn create_reports_every_missing_field() {
        let request = CreateVehicleRequest {
            nama: Some("Test Car".to_string()),
            merek: None,
            plat_nomor: None,
            kategori: None,
            harga_harian: None,
            harga_bulanan: None,
            kapasitas: None,
            transmisi: None,
            bahan_bakar: None,
            status: None,
            deskripsi: None,
            foto: None,
        };
        let missing = request.missing_fields();
        assert_eq!(
            missing,
            vec![
                "merek",
                "plat_nomor",
                "kategori",
                "harga_harian",
                "harga_bulanan",
                "kapasitas",
                "transmisi",
                "bahan_bakar"
            ]
        );
    }

    #[test]
    fn zero_price_counts_as_missing() {
        let mut request = full_request();
        request.harga_harian = Some(0);
        assert_eq!(request.missing_fields(), vec!["harga_harian"]);
    }

    #[test]
    fn apply_update_only_touches_present_fields() {
        let mut vehicle = full_request().into_vehicle().unwrap();
        vehicle.apply_update(UpdateVehicleRequest {
            status: Some(VehicleStatus::Perbaikan),
            deskripsi: Some("Sedang dalam perbaikan rutin".to_string()),
            ..Default::default()
        });
        assert_eq!(vehicle.status, VehicleStatus::Perbaikan);
        assert_eq!(vehicle.deskripsi, "Sedang dalam perbaikan rutin");
        assert_eq!(vehicle.nama, "Toyota Avanza 2022");
        assert_eq!(vehicle.harga_harian, 350_000);
    }
}
