//! Filter types shared by the listing operations.
//!
//! Every field is optional; unset fields and empty lists are left out of the
//! request entirely.

use chrono::NaiveDate;
use serde::Serialize;

/// Well-scoped listing filter (production, warehouse).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellQuery {
    /// Restrict to these wells.
    pub well_ids: Vec<String>,
    /// Restrict to wells at these facilities.
    pub facility_ids: Vec<String>,
    /// First day included.
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    pub end_date: Option<NaiveDate>,
}

/// Facility-scoped listing filter (production, daily sales).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityQuery {
    /// Restrict to these facilities.
    pub facility_ids: Vec<String>,
    /// First day included.
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    pub end_date: Option<NaiveDate>,
}

/// Compressor downtime filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DowntimeQuery {
    /// Restrict to these compressors.
    pub compressor_ids: Vec<String>,
    /// Restrict to compressors at these facilities.
    pub facility_ids: Vec<String>,
    /// First day included.
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    pub end_date: Option<NaiveDate>,
}

/// Truck ticket filter, shared by manual and automatic tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruckTicketQuery {
    /// Facility the tickets belong to.
    pub facility: Option<String>,
    /// Ticket type, sent as `type`.
    pub kind: Option<String>,
    /// Earliest ticket timestamp.
    pub start_ts: Option<i64>,
    /// Latest ticket timestamp.
    pub end_ts: Option<i64>,
}

/// Time-series window for datapoint reads.
///
/// Defaults to the newest 100 points, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatapointQuery {
    /// Earliest timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ts: Option<i64>,
    /// Latest timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_ts: Option<i64>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Maximum number of points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Default for DatapointQuery {
    fn default() -> Self {
        Self {
            start_ts: None,
            end_ts: None,
            sort: Some("desc".to_string()),
            limit: Some(100),
        }
    }
}

/// Type curve filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCurveQuery {
    /// Restrict to these wells.
    pub well_ids: Vec<String>,
    /// Restrict to these facilities.
    pub facility_ids: Vec<String>,
    /// Restrict to these leases.
    pub lease_ids: Vec<String>,
    /// First day included.
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    pub end_date: Option<NaiveDate>,
    /// Merge the curves into one; always sent.
    pub combine: bool,
}

impl Default for TypeCurveQuery {
    fn default() -> Self {
        Self {
            well_ids: Vec::new(),
            facility_ids: Vec::new(),
            lease_ids: Vec::new(),
            start_date: None,
            end_date: None,
            combine: true,
        }
    }
}

/// Financials filter.
///
/// `asset_type` selects the path (`/v1/financials/{asset_type}`); it is not
/// repeated in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialsQuery {
    /// Asset family, e.g. `wells`.
    pub asset_type: String,
    /// Financials type, sent as `type`, e.g. `production`.
    pub kind: String,
    /// Restrict to these wells.
    pub well_ids: Vec<String>,
    /// Restrict to these facilities.
    pub facility_ids: Vec<String>,
    /// Restrict to these leases.
    pub lease_ids: Vec<String>,
    /// First day included.
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    pub end_date: Option<NaiveDate>,
    /// First month included.
    pub start_month: Option<String>,
    /// Last month included.
    pub end_month: Option<String>,
}

impl Default for FinancialsQuery {
    fn default() -> Self {
        Self {
            asset_type: "wells".to_string(),
            kind: "production".to_string(),
            well_ids: Vec::new(),
            facility_ids: Vec::new(),
            lease_ids: Vec::new(),
            start_date: None,
            end_date: None,
            start_month: None,
            end_month: None,
        }
    }
}
