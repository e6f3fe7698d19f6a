//! Test payloads
//!
//! Realistic Indonesian rental-car data, matching what the fleet in
//! Sorong actually lists. The photo fixture is a 1x1 JPEG encoded into
//! the data-URL form the API stores.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

/// Smallest JPEG the gallery will take: a single grey pixel.
const PIXEL_JPEG: &[u8] = &[
    0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46, 0x00, 0x01,
    0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0xff, 0xdb, 0x00, 0x43,
    0x00, 0x06, 0x04, 0x05, 0x06, 0x05, 0x04, 0x06, 0x06, 0x05, 0x06, 0x07,
    0x07, 0x06, 0x08, 0x0a, 0x10, 0x0a, 0x0a, 0x09, 0x09, 0x0a, 0x14, 0x0e,
    0x0f, 0x0c, 0x10, 0x17, 0x14, 0x18, 0x18, 0x17, 0x14, 0x16, 0x16, 0x1a,
    0x1d, 0x25, 0x1f, 0x1a, 0x1b, 0x23, 0x1c, 0x16, 0x16, 0x20, 0x2c, 0x20,
    0x23, 0x26, 0x27, 0x29, 0x2a, 0x29, 0x19, 0x1f, 0x2d, 0x30, 0x2d, 0x28,
    0x30, 0x25, 0x28, 0x29, 0x28, 0xff, 0xdb, 0x00, 0x43, 0x01, 0x07, 0x07,
    0x07, 0x0a, 0x08, 0x0a, 0x13, 0x0a, 0x0a, 0x13, 0x28, 0x1a, 0x16, 0x1a,
    0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28,
    0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28,
    0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28,
    0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28,
    0x28, 0x28, 0xff, 0xc0, 0x00, 0x11, 0x08, 0x00, 0x01, 0x00, 0x01, 0x03,
    0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01, 0xff, 0xc4, 0x00,
    0x15, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0b, 0xff, 0xc4, 0x00, 0x14,
    0x10, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xc4, 0x00, 0x15, 0x01, 0x01,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x05, 0xff, 0xc4, 0x00, 0x14, 0x11, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xff, 0xda, 0x00, 0x0c, 0x03, 0x01, 0x00, 0x02, 0x11,
    0x03, 0x11, 0x00, 0x3f, 0x00, 0x9d, 0x00, 0x19, 0x97, 0xff, 0xd9,
];

pub fn photo_data_url() -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(PIXEL_JPEG))
}

pub fn vehicle_avanza() -> Value {
    json!({
        "nama": "Toyota Avanza 2022",
        "merek": "Toyota",
        "plat_nomor": "PB 1234 AB",
        "kategori": "MPV",
        "harga_harian": 350000,
        "harga_bulanan": 8500000,
        "kapasitas": 7,
        "transmisi": "Manual",
        "bahan_bakar": "Bensin",
        "deskripsi": "Mobil keluarga yang nyaman untuk perjalanan dalam kota maupun luar kota",
        "foto": photo_data_url()
    })
}

pub fn vehicle_brio() -> Value {
    json!({
        "nama": "Honda Brio Satya 2021",
        "merek": "Honda",
        "plat_nomor": "PB 5678 CD",
        "kategori": "Hatchback",
        "harga_harian": 250000,
        "harga_bulanan": 6000000,
        "kapasitas": 5,
        "transmisi": "Automatic",
        "bahan_bakar": "Bensin",
        "deskripsi": "Mobil compact yang irit dan mudah dikendarai",
        "foto": ""
    })
}

/// Missing almost every required vehicle field.
pub fn vehicle_invalid() -> Value {
    json!({ "nama": "Test Car" })
}

pub fn booking_for(vehicle_id: &str) -> Value {
    json!({
        "kendaraan_id": vehicle_id,
        "nama_penyewa": "Budi Santoso",
        "no_hp": "081234567890",
        "email": "budi.santoso@email.com",
        "tanggal_sewa": (Utc::now() + Duration::days(1)).to_rfc3339(),
        "durasi": 3,
        "tipe_sewa": "harian",
        "dengan_sopir": false,
        "alamat_jemput": "Jl. Ahmad Yani No. 123, Sorong",
        "catatan": "Untuk perjalanan keluarga",
        "total_harga": 1050000
    })
}

/// Missing every required booking field except the renter name.
pub fn booking_invalid() -> Value {
    json!({ "nama_penyewa": "Test User" })
}

/// Well-formed booking pointing at an id the server never issued.
pub fn booking_unknown_vehicle() -> Value {
    booking_for("non-existent-id")
}

pub fn gallery_item() -> Value {
    json!({
        "judul": "Toyota Avanza Interior",
        "deskripsi": "Interior yang nyaman dan luas untuk keluarga",
        "foto": photo_data_url(),
        "kategori": "interior"
    })
}

/// Missing both judul and foto.
pub fn gallery_invalid() -> Value {
    json!({ "deskripsi": "Test description" })
}

pub const REPORT_PERIODS: [&str; 3] = ["1-hari", "7-hari", "1-bulan"];
pub const DEFAULT_REPORT_PERIOD: &str = "1-hari";

pub fn admin_login() -> Value {
    json!({ "username": "admin", "password": "admin123" })
}

pub fn admin_login_wrong_password() -> Value {
    json!({ "username": "admin", "password": "wrongpassword" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_fixture_is_a_jpeg_data_url() {
        let url = photo_data_url();
        assert!(url.starts_with("data:image/jpeg;base64,/9j/"));
    }

    #[test]
    fn valid_vehicle_carries_every_required_field() {
        let vehicle = vehicle_avanza();
        for field in [
            "nama",
            "merek",
            "plat_nomor",
            "kategori",
            "harga_harian",
            "harga_bulanan",
            "kapasitas",
            "transmisi",
            "bahan_bakar",
        ] {
            assert!(!vehicle[field].is_null(), "missing {field}");
        }
    }

    #[test]
    fn booking_fixture_rents_tomorrow() {
        let booking = booking_for("abc");
        assert_eq!(booking["kendaraan_id"], "abc");
        assert_eq!(booking["durasi"], 3);
        assert!(booking["tanggal_sewa"].as_str().unwrap().len() >= 20);
    }
}
