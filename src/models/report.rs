//! Financial report and statistics models
//!
//! Laporan keuangan aggregates confirmed bookings over a reporting period;
//! statistics are plain collection counts.

use chrono::{DateTime, Duration, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::booking::Booking;

/// Reporting window. Unknown or omitted values fall back to `1-hari`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today, midnight to midnight (UTC).
    Harian,
    /// Trailing seven days.
    Mingguan,
    /// Trailing calendar month.
    Bulanan,
}

impl ReportPeriod {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("7-hari") => ReportPeriod::Mingguan,
            Some("1-bulan") => ReportPeriod::Bulanan,
            _ => ReportPeriod::Harian,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportPeriod::Harian => "1-hari",
            ReportPeriod::Mingguan => "7-hari",
            ReportPeriod::Bulanan => "1-bulan",
        }
    }

    /// Half-open interval `[start, end)` relative to `now`.
    pub fn range(self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            ReportPeriod::Harian => {
                let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
                (midnight, midnight + Duration::days(1))
            }
            ReportPeriod::Mingguan => (now - Duration::days(7), now),
            ReportPeriod::Bulanan => {
                let start = now
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(now - Duration::days(30));
                (start, now)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub tanggal: String,
    pub pendapatan: i64,
}

#[derive(Debug, Serialize)]
pub struct FinancialReport {
    pub periode: &'static str,
    pub total_pendapatan: i64,
    pub total_transaksi: u64,
    pub rata_rata_per_transaksi: i64,
    pub pendapatan_harian: Vec<DailyRevenue>,
    pub detail_booking: Vec<Booking>,
}

impl FinancialReport {
    /// Aggregate a set of revenue bookings (already filtered to the period
    /// and to confirmed statuses by the store).
    pub fn from_bookings(period: ReportPeriod, bookings: Vec<Booking>) -> Self {
        let total_pendapatan: i64 = bookings.iter().map(|b| b.total_harga).sum();
        let total_transaksi = bookings.len() as u64;
        let rata_rata_per_transaksi = if total_transaksi > 0 {
            (total_pendapatan as f64 / total_transaksi as f64).round() as i64
        } else {
            0
        };

        // Group by calendar day for the revenue chart, oldest day first.
        let mut pendapatan_harian: Vec<DailyRevenue> = Vec::new();
        let mut sorted: Vec<&Booking> = bookings.iter().collect();
        sorted.sort_by_key(|b| b.created_at);
        for booking in sorted {
            let tanggal = booking.created_at.format("%Y-%m-%d").to_string();
            match pendapatan_harian.iter_mut().find(|d| d.tanggal == tanggal) {
                Some(day) => day.pendapatan += booking.total_harga,
                None => pendapatan_harian.push(DailyRevenue {
                    tanggal,
                    pendapatan: booking.total_harga,
                }),
            }
        }

        Self {
            periode: period.as_str(),
            total_pendapatan,
            total_transaksi,
            rata_rata_per_transaksi,
            pendapatan_harian,
            detail_booking: bookings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub total_kendaraan: u64,
    pub total_booking: u64,
    pub kendaraan_tersedia: u64,
    pub kendaraan_disewa: u64,
}
