//! Domain models
//!
//! Wire-facing structs for every resource the API owns. Field names follow
//! the Indonesian wire contract (`nama`, `harga_harian`, ...).

pub mod admin;
pub mod booking;
pub mod gallery;
pub mod report;
pub mod vehicle;

pub use admin::{AdminSession, LoginRequest, LogoutRequest};
pub use booking::{Booking, BookingStatus, CreateBookingRequest};
pub use gallery::{CreateGalleryRequest, GalleryItem};
pub use report::{DailyRevenue, FinancialReport, ReportPeriod, Statistics};
pub use vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleStatus};
