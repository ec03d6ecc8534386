use serde::Deserialize;

use crate::core::ZoneCounts;
use crate::error::FetchError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZoneCountsPayload {
    com_domain_name_base: DomainNameBase,
    net_domain_name_base: DomainNameBase,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DomainNameBase {
    domain_name_counts: u64,
}

/// Extract the .com and .net domain name base from the feed body.
///
/// Counts must be non-negative JSON integers; everything else in the payload
/// is ignored.
pub(crate) fn parse_zone_counts(body: &str) -> Result<ZoneCounts, FetchError> {
    let payload: ZoneCountsPayload =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let com = payload.com_domain_name_base.domain_name_counts;
    let net = payload.net_domain_name_base.domain_name_counts;
    ZoneCounts::new(com, net)
        .ok_or_else(|| FetchError::Parse(format!("total of {com} and {net} overflows")))
}
