use super::super::domain::{Company, Listing};
use super::views::{AverageGhostScore, CompanyMetricsView};
use super::{FILL_RATE_CEILING_PCT, FILL_RATE_FLOOR_PCT};

/// Aggregate hiring statistics for one company, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyMetrics {
    pub open_roles: usize,
    pub avg_days_posted: u32,
    pub avg_ghost_score: AverageGhostScore,
    pub estimated_fill_rate_pct: u8,
}

impl CompanyMetrics {
    pub fn compute<'a, I>(company: &Company, listings: I) -> Self
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut open_roles = 0usize;
        let mut days_total = 0u64;
        let mut score_total = 0u64;
        for listing in listings {
            open_roles += 1;
            days_total += u64::from(listing.days_posted);
            score_total += u64::from(listing.ghost_score);
        }

        let avg_days_posted = if open_roles == 0 {
            0
        } else {
            let rounded = round_half_up_div(days_total, open_roles as u64);
            u32::try_from(rounded).unwrap_or(u32::MAX)
        };

        let avg_ghost_score = if open_roles == 0 {
            AverageGhostScore::NoData
        } else {
            let tenths = round_half_up_div(score_total * 10, open_roles as u64);
            AverageGhostScore::Tenths(u16::try_from(tenths).unwrap_or(u16::MAX))
        };

        Self {
            open_roles,
            avg_days_posted,
            avg_ghost_score,
            estimated_fill_rate_pct: estimated_fill_rate_pct(company.ghost_score, open_roles),
        }
    }

    pub fn to_view(&self) -> CompanyMetricsView {
        CompanyMetricsView {
            open_roles: self.open_roles,
            avg_days_posted: self.avg_days_posted,
            avg_ghost_score: self.avg_ghost_score,
            avg_ghost_score_label: self.avg_ghost_score.label(),
            estimated_fill_rate_pct: self.estimated_fill_rate_pct,
            fill_rate_is_estimate: true,
        }
    }
}

/// Display-only fill rate estimate. There is no measured fill-rate source; the value is a
/// fixed function of the company score and role count, always within 60..=95.
pub fn estimated_fill_rate_pct(company_ghost_score: u8, open_roles: usize) -> u8 {
    let raw = 55 + i64::from(company_ghost_score) * 4 + (open_roles % 7) as i64;
    raw.clamp(
        i64::from(FILL_RATE_FLOOR_PCT),
        i64::from(FILL_RATE_CEILING_PCT),
    ) as u8
}

/// Listings ordered by most recently posted; equal ages keep their input order.
pub fn hiring_activity<'a, I>(listings: I) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut timeline: Vec<&Listing> = listings.into_iter().collect();
    timeline.sort_by_key(|listing| listing.days_posted);
    timeline
}

fn round_half_up_div(numerator: u64, denominator: u64) -> u64 {
    (numerator * 2 + denominator) / (denominator * 2)
}
