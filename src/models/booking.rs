//! Booking model
//!
//! A reservation of a vehicle for a renter over a duration. Bookings are
//! created `Pending`; confirmation happens out of band and is what the
//! financial report aggregates over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::{absent_int, absent_str, ensure_required, parse_datetime, RequiredFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Dikonfirmasi,
    Selesai,
    Dibatalkan,
}

impl BookingStatus {
    /// Only confirmed or completed bookings count as revenue.
    pub fn is_revenue(self) -> bool {
        matches!(self, BookingStatus::Dikonfirmasi | BookingStatus::Selesai)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: String,
    pub kendaraan_id: String,
    pub nama_penyewa: String,
    pub no_hp: String,
    pub email: String,
    pub tanggal_sewa: DateTime<Utc>,
    pub durasi: i64,
    /// `harian` or `bulanan`.
    pub tipe_sewa: String,
    pub dengan_sopir: bool,
    pub alamat_jemput: String,
    pub catatan: String,
    pub status: BookingStatus,
    pub total_harga: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub kendaraan_id: Option<String>,
    pub nama_penyewa: Option<String>,
    pub no_hp: Option<String>,
    pub email: Option<String>,
    pub tanggal_sewa: Option<String>,
    #[validate(range(min = 1, max = 365))]
    pub durasi: Option<i64>,
    pub tipe_sewa: Option<String>,
    pub dengan_sopir: Option<bool>,
    pub alamat_jemput: Option<String>,
    pub catatan: Option<String>,
    #[validate(range(min = 0))]
    pub total_harga: Option<i64>,
    /// Write-only: when set, the vehicle flips to `Disewa` immediately.
    #[serde(default)]
    pub confirm_booking: bool,
}

impl RequiredFields for CreateBookingRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if absent_str(&self.kendaraan_id) {
            missing.push("kendaraan_id");
        }
        if absent_str(&self.nama_penyewa) {
            missing.push("nama_penyewa");
        }
        if absent_str(&self.no_hp) {
            missing.push("no_hp");
        }
        if absent_str(&self.tanggal_sewa) {
            missing.push("tanggal_sewa");
        }
        if absent_int(&self.durasi) {
            missing.push("durasi");
        }
        missing
    }
}

impl CreateBookingRequest {
    /// Build the stored record. The caller is responsible for checking the
    /// referenced vehicle first; this only shapes the data.
    pub fn into_booking(self) -> AppResult<Booking> {
        ensure_required(&self)?;
        let tanggal_sewa = parse_datetime(self.tanggal_sewa.as_deref().unwrap_or_default())?;
        let now = Utc::now();
        Ok(Booking {
            id: Uuid::new_v4().to_string(),
            kendaraan_id: self.kendaraan_id.unwrap_or_default(),
            nama_penyewa: self.nama_penyewa.unwrap_or_default(),
            no_hp: self.no_hp.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            tanggal_sewa,
            durasi: self.durasi.unwrap_or_default(),
            tipe_sewa: self.tipe_sewa.unwrap_or_else(|| "harian".to_string()),
            dengan_sopir: self.dengan_sopir.unwrap_or(false),
            alamat_jemput: self.alamat_jemput.unwrap_or_default(),
            catatan: self.catatan.unwrap_or_default(),
            status: BookingStatus::Pending,
            total_harga: self.total_harga.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(vehicle_id: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            kendaraan_id: Some(vehicle_id.to_string()),
            nama_penyewa: Some("Budi Santoso".to_string()),
            no_hp: Some("081234567890".to_string()),
            email: Some("budi.santoso@email.com".to_string()),
            tanggal_sewa: Some("2026-08-07T09:30:00".to_string()),
            durasi: Some(3),
            tipe_sewa: None,
            dengan_sopir: None,
            alamat_jemput: None,
            catatan: None,
            total_harga: Some(1_050_000),
            confirm_booking: false,
        }
    }

    #[test]
    fn booking_is_created_pending_with_defaults() {
        let booking = request("abc").into_booking().unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.tipe_sewa, "harian");
        assert!(!booking.dengan_sopir);
        assert_eq!(booking.total_harga, 1_050_000);
    }

    #[test]
    fn missing_fields_are_collected_in_wire_order() {
        let incomplete = CreateBookingRequest {
            kendaraan_id: None,
            nama_penyewa: Some("Test User".to_string()),
            no_hp: None,
            email: None,
            tanggal_sewa: None,
            durasi: None,
            tipe_sewa: None,
            dengan_sopir: None,
            alamat_jemput: None,
            catatan: None,
            total_harga: None,
            confirm_booking: false,
        };
        assert_eq!(
            incomplete.missing_fields(),
            vec!["kendaraan_id", "no_hp", "tanggal_sewa", "durasi"]
        );
    }

    #[test]
    fn unparseable_rental_date_is_rejected() {
        let mut bad = request("abc");
        bad.tanggal_sewa = Some("besok pagi".to_string());
        assert!(bad.into_booking().is_err());
    }

    #[test]
    fn only_confirmed_and_finished_bookings_are_revenue() {
        assert!(BookingStatus::Dikonfirmasi.is_revenue());
        assert!(BookingStatus::Selesai.is_revenue());
        assert!(!BookingStatus::Pending.is_revenue());
        assert!(!BookingStatus::Dibatalkan.is_revenue());
    }
}
