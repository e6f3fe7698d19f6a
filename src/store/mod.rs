//! In-memory store
//!
//! Every collection lives behind its own `RwLock` so handlers only take
//! the lock they need. Listings return newest first by creation time.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::{
    AdminSession, Booking, FinancialReport, GalleryItem, ReportPeriod, Statistics,
    UpdateVehicleRequest, Vehicle, VehicleStatus,
};

#[derive(Default)]
pub struct RentalStore {
    vehicles: RwLock<Vec<Vehicle>>,
    bookings: RwLock<Vec<Booking>>,
    gallery: RwLock<Vec<GalleryItem>>,
    admin_sessions: RwLock<Vec<AdminSession>>,
}

impl RentalStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- kendaraan ---

    pub async fn insert_vehicle(&self, vehicle: Vehicle) -> Vehicle {
        let mut vehicles = self.vehicles.write().await;
        vehicles.push(vehicle.clone());
        log::info!("🚗 Kendaraan stored: '{}' ({})", vehicle.nama, vehicle.id);
        vehicle
    }

    pub async fn list_vehicles(&self) -> Vec<Vehicle> {
        let vehicles = self.vehicles.read().await;
        let mut list: Vec<Vehicle> = vehicles.clone();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    pub async fn get_vehicle(&self, id: &str) -> Option<Vehicle> {
        let vehicles = self.vehicles.read().await;
        vehicles.iter().find(|v| v.id == id).cloned()
    }

    pub async fn update_vehicle(
        &self,
        id: &str,
        update: UpdateVehicleRequest,
    ) -> Option<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles.iter_mut().find(|v| v.id == id)?;
        vehicle.apply_update(update);
        Some(vehicle.clone())
    }

    pub async fn set_vehicle_status(&self, id: &str, status: VehicleStatus) -> bool {
        let mut vehicles = self.vehicles.write().await;
        match vehicles.iter_mut().find(|v| v.id == id) {
            Some(vehicle) => {
                vehicle.status = status;
                vehicle.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    pub async fn delete_vehicle(&self, id: &str) -> bool {
        let mut vehicles = self.vehicles.write().await;
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        let deleted = vehicles.len() < before;
        if deleted {
            log::info!("🗑️ Kendaraan deleted: {id}");
        }
        deleted
    }

    // --- booking ---

    pub async fn insert_booking(&self, booking: Booking) -> Booking {
        let mut bookings = self.bookings.write().await;
        bookings.push(booking.clone());
        log::info!(
            "📒 Booking stored: '{}' for kendaraan {}",
            booking.nama_penyewa,
            booking.kendaraan_id
        );
        booking
    }

    pub async fn list_bookings(&self) -> Vec<Booking> {
        let bookings = self.bookings.read().await;
        let mut list: Vec<Booking> = bookings.clone();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    /// Revenue bookings created inside `[start, end)`.
    pub async fn revenue_bookings_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Booking> {
        let bookings = self.bookings.read().await;
        bookings
            .iter()
            .filter(|b| b.status.is_revenue() && b.created_at >= start && b.created_at < end)
            .cloned()
            .collect()
    }

    pub async fn financial_report(&self, period: ReportPeriod) -> FinancialReport {
        let (start, end) = period.range(Utc::now());
        let bookings = self.revenue_bookings_between(start, end).await;
        FinancialReport::from_bookings(period, bookings)
    }

    // --- gallery ---

    pub async fn insert_gallery_item(&self, item: GalleryItem) -> GalleryItem {
        let mut gallery = self.gallery.write().await;
        gallery.push(item.clone());
        item
    }

    pub async fn list_gallery(&self) -> Vec<GalleryItem> {
        let gallery = self.gallery.read().await;
        let mut list: Vec<GalleryItem> = gallery.clone();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    // --- admin sessions ---

    /// Stores the session, dropping any that already expired.
    pub async fn insert_session(&self, session: AdminSession) -> AdminSession {
        let mut sessions = self.admin_sessions.write().await;
        sessions.retain(|s| !s.is_expired());
        log::info!("🔐 Admin session opened for '{}'", session.username);
        sessions.push(session.clone());
        session
    }

    /// Best-effort removal; unknown ids are not an error.
    pub async fn remove_session(&self, id: &str) -> bool {
        let mut sessions = self.admin_sessions.write().await;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        sessions.len() < before
    }

    pub async fn session_count(&self) -> usize {
        self.admin_sessions.read().await.len()
    }

    // --- statistics ---

    pub async fn statistics(&self) -> Statistics {
        let vehicles = self.vehicles.read().await;
        let bookings = self.bookings.read().await;
        Statistics {
            total_kendaraan: vehicles.len() as u64,
            total_booking: bookings.len() as u64,
            kendaraan_tersedia: vehicles
                .iter()
                .filter(|v| v.status == VehicleStatus::Tersedia)
                .count() as u64,
            kendaraan_disewa: vehicles
                .iter()
                .filter(|v| v.status == VehicleStatus::Disewa)
                .count() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingStatus;
    use crate::models::CreateVehicleRequest;
    use chrono::Duration;

    fn vehicle(nama: &str) -> Vehicle {
        CreateVehicleRequest {
            nama: Some(nama.to_string()),
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
        .into_vehicle()
        .unwrap()
    }

    fn booking(status: BookingStatus, total_harga: i64, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id: uuid::Uuid::new_v4().to_string(),
            kendaraan_id: "v-1".to_string(),
            nama_penyewa: "Budi Santoso".to_string(),
            no_hp: "081234567890".to_string(),
            email: String::new(),
            tanggal_sewa: created_at,
            durasi: 3,
            tipe_sewa: "harian".to_string(),
            dengan_sopir: false,
            alamat_jemput: String::new(),
            catatan: String::new(),
            status,
            total_harga,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn vehicle_crud_round_trip() {
        let store = RentalStore::new();
        let created = store.insert_vehicle(vehicle("Toyota Avanza 2022")).await;

        assert_eq!(store.get_vehicle(&created.id).await.unwrap().nama, created.nama);
        assert!(store.get_vehicle("non-existent-id").await.is_none());

        let updated = store
            .update_vehicle(
                &created.id,
                UpdateVehicleRequest {
                    status: Some(VehicleStatus::Perbaikan),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, VehicleStatus::Perbaikan);

        assert!(store.delete_vehicle(&created.id).await);
        assert!(!store.delete_vehicle(&created.id).await);
        assert!(store.list_vehicles().await.is_empty());
    }

    #[tokio::test]
    async fn listings_are_newest_first() {
        let store = RentalStore::new();
        let mut older = vehicle("Honda Brio Satya 2021");
        older.created_at = Utc::now() - Duration::minutes(5);
        store.insert_vehicle(older).await;
        store.insert_vehicle(vehicle("Toyota Avanza 2022")).await;

        let list = store.list_vehicles().await;
        assert_eq!(list[0].nama, "Toyota Avanza 2022");
        assert_eq!(list[1].nama, "Honda Brio Satya 2021");
    }

    #[tokio::test]
    async fn report_counts_only_confirmed_bookings_in_period() {
        let store = RentalStore::new();
        let now = Utc::now();
        store.insert_booking(booking(BookingStatus::Dikonfirmasi, 1_050_000, now)).await;
        store.insert_booking(booking(BookingStatus::Selesai, 250_000, now)).await;
        store.insert_booking(booking(BookingStatus::Pending, 999_999, now)).await;
        store
            .insert_booking(booking(
                BookingStatus::Dikonfirmasi,
                500_000,
                now - Duration::days(3),
            ))
            .await;

        let daily = store.financial_report(ReportPeriod::Harian).await;
        assert_eq!(daily.total_transaksi, 2);
        assert_eq!(daily.total_pendapatan, 1_300_000);
        assert_eq!(daily.rata_rata_per_transaksi, 650_000);

        let weekly = store.financial_report(ReportPeriod::Mingguan).await;
        assert_eq!(weekly.total_transaksi, 3);
        assert_eq!(weekly.total_pendapatan, 1_800_000);
    }

    #[tokio::test]
    async fn statistics_track_vehicle_statuses() {
        let store = RentalStore::new();
        let rented = store.insert_vehicle(vehicle("Toyota Avanza 2022")).await;
        store.insert_vehicle(vehicle("Honda Brio Satya 2021")).await;
        store.set_vehicle_status(&rented.id, VehicleStatus::Disewa).await;
        store
            .insert_booking(booking(BookingStatus::Pending, 0, Utc::now()))
            .await;

        let stats = store.statistics().await;
        assert_eq!(stats.total_kendaraan, 2);
        assert_eq!(stats.total_booking, 1);
        assert_eq!(stats.kendaraan_tersedia, 1);
        assert_eq!(stats.kendaraan_disewa, 1);
    }

    #[tokio::test]
    async fn sessions_are_removed_once_and_expired_ones_purged() {
        let store = RentalStore::new();
        let mut stale = AdminSession::new("admin".to_string());
        stale.expires_at = Utc::now() - Duration::hours(1);
        store.insert_session(stale).await;

        let session = store.insert_session(AdminSession::new("admin".to_string())).await;
        assert_eq!(store.session_count().await, 1);

        assert!(store.remove_session(&session.id).await);
        assert!(!store.remove_session(&session.id).await);
        assert_eq!(store.session_count().await, 0);
    }
}
