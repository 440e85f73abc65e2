//! Supplier performance: on-time rates, rankings and weekly history

use super::{MetricsError, MetricsResult};
use crate::model::{Shipment, Supplier, SupplyChainData};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Bundled performance metrics for one supplier.
///
/// `on_time_delivery_rate` is recomputed from delivered shipments, not the
/// value stored on the supplier record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierMetrics {
    pub supplier_id: String,
    pub supplier_name: String,
    pub on_time_delivery_rate: f64,
    pub quality_score: f64,
    pub average_lead_time: f64,
    pub total_shipments: u64,
    pub performance_score: f64,
}

/// One supplier's position in a ranking, rank 1 being best.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRanking {
    pub rank: usize,
    pub supplier_id: String,
    pub supplier_name: String,
    /// Value of the ranked metric.
    pub score: f64,
    pub metrics: SupplierMetrics,
}

/// Metrics suppliers can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMetric {
    OnTimeDeliveryRate,
    QualityScore,
    PerformanceScore,
    AverageLeadTime,
}

impl RankingMetric {
    fn value_of(&self, metrics: &SupplierMetrics) -> f64 {
        match self {
            RankingMetric::OnTimeDeliveryRate => metrics.on_time_delivery_rate,
            RankingMetric::QualityScore => metrics.quality_score,
            RankingMetric::PerformanceScore => metrics.performance_score,
            RankingMetric::AverageLeadTime => metrics.average_lead_time,
        }
    }
}

impl FromStr for RankingMetric {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_time_delivery_rate" => Ok(RankingMetric::OnTimeDeliveryRate),
            "quality_score" => Ok(RankingMetric::QualityScore),
            "performance_score" => Ok(RankingMetric::PerformanceScore),
            "average_lead_time" => Ok(RankingMetric::AverageLeadTime),
            other => Err(MetricsError::InvalidMetric(other.to_string())),
        }
    }
}

/// One calendar week of a supplier's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceDataPoint {
    /// Midnight UTC on the Monday the week starts.
    pub date: DateTime<Utc>,
    /// 0.0 when no shipments were delivered that week.
    pub on_time_delivery_rate: f64,
    pub quality_score: f64,
    /// Mean lead time in whole days over delivered shipments; 0.0 when none.
    pub average_lead_time: f64,
    /// All shipments created in the week, delivered or not.
    pub shipment_count: usize,
}

/// Supplier analytics over a snapshot.
#[derive(Debug, Default)]
pub struct SupplierTracker;

impl SupplierTracker {
    pub fn new() -> Self {
        SupplierTracker
    }

    /// Percentage of a supplier's delivered shipments that arrived on or
    /// before their estimate. 0.0 when nothing has been delivered.
    pub fn on_time_rate(&self, data: &SupplyChainData, supplier_id: &str) -> f64 {
        let delivered: Vec<&Shipment> = data
            .shipments
            .iter()
            .filter(|s| s.supplier_id == supplier_id && s.actual_delivery.is_some())
            .collect();

        if delivered.is_empty() {
            return 0.0;
        }

        let on_time = delivered
            .iter()
            .filter(|s| s.delivered_on_time() == Some(true))
            .count();
        on_time as f64 / delivered.len() as f64 * 100.0
    }

    /// Metrics bundle for one supplier; NotFound when the id is absent.
    pub fn supplier_metrics(
        &self,
        data: &SupplyChainData,
        supplier_id: &str,
    ) -> MetricsResult<SupplierMetrics> {
        let supplier = find_supplier(data, supplier_id)?;
        Ok(self.metrics_for(data, supplier))
    }

    /// Rank all suppliers by the named metric.
    ///
    /// `ascending = true` puts lower values first (useful for lead time).
    /// Ties keep their input order; ranks run 1..N. Unknown metric names
    /// fail with `InvalidMetric`.
    pub fn rank_suppliers(
        &self,
        data: &SupplyChainData,
        metric: &str,
        ascending: bool,
    ) -> MetricsResult<Vec<SupplierRanking>> {
        let metric: RankingMetric = metric.parse()?;

        let mut all: Vec<SupplierMetrics> = data
            .suppliers
            .iter()
            .map(|s| self.metrics_for(data, s))
            .collect();

        // Stable sort keeps input order for equal scores.
        all.sort_by(|a, b| {
            let (a, b) = (metric.value_of(a), metric.value_of(b));
            let ord = a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });

        Ok(all
            .into_iter()
            .enumerate()
            .map(|(i, metrics)| SupplierRanking {
                rank: i + 1,
                supplier_id: metrics.supplier_id.clone(),
                supplier_name: metrics.supplier_name.clone(),
                score: metric.value_of(&metrics),
                metrics,
            })
            .collect())
    }

    /// Weekly performance history over the trailing `days` window.
    ///
    /// Shipments created in the window are bucketed by the Monday of their
    /// creation week. A week with shipments but no deliveries is still
    /// reported, with rate and lead time 0.0. Chronological order.
    pub fn performance_history(
        &self,
        data: &SupplyChainData,
        supplier_id: &str,
        days: i64,
    ) -> MetricsResult<Vec<PerformanceDataPoint>> {
        if days < 0 {
            return Err(MetricsError::NegativeDays(days));
        }
        let supplier = find_supplier(data, supplier_id)?;

        let end = Utc::now();
        let start = end - Duration::days(days);

        let mut weeks: BTreeMap<NaiveDate, Vec<&Shipment>> = BTreeMap::new();
        for shipment in &data.shipments {
            if shipment.supplier_id != supplier_id {
                continue;
            }
            if shipment.created_at < start || shipment.created_at > end {
                continue;
            }
            let date = shipment.created_at.date_naive();
            let week_start =
                date - Duration::days(date.weekday().num_days_from_monday() as i64);
            weeks.entry(week_start).or_default().push(shipment);
        }

        let history = weeks
            .into_iter()
            .map(|(week_start, shipments)| {
                let delivered: Vec<&&Shipment> = shipments
                    .iter()
                    .filter(|s| s.actual_delivery.is_some())
                    .collect();

                let (on_time_rate, average_lead_time) = if delivered.is_empty() {
                    (0.0, 0.0)
                } else {
                    let on_time = delivered
                        .iter()
                        .filter(|s| s.delivered_on_time() == Some(true))
                        .count();
                    let lead_days: i64 = delivered
                        .iter()
                        .filter_map(|s| {
                            s.actual_delivery.map(|a| (a - s.created_at).num_days())
                        })
                        .sum();
                    (
                        on_time as f64 / delivered.len() as f64 * 100.0,
                        lead_days as f64 / delivered.len() as f64,
                    )
                };

                PerformanceDataPoint {
                    date: week_start.and_time(NaiveTime::MIN).and_utc(),
                    on_time_delivery_rate: on_time_rate,
                    quality_score: supplier.quality_score,
                    average_lead_time,
                    shipment_count: shipments.len(),
                }
            })
            .collect();

        Ok(history)
    }

    fn metrics_for(&self, data: &SupplyChainData, supplier: &Supplier) -> SupplierMetrics {
        SupplierMetrics {
            supplier_id: supplier.id.clone(),
            supplier_name: supplier.name.clone(),
            on_time_delivery_rate: self.on_time_rate(data, &supplier.id),
            quality_score: supplier.quality_score,
            average_lead_time: supplier.average_lead_time,
            total_shipments: supplier.total_shipments,
            performance_score: supplier.performance_score,
        }
    }
}

fn find_supplier<'a>(
    data: &'a SupplyChainData,
    supplier_id: &str,
) -> MetricsResult<&'a Supplier> {
    data.suppliers
        .iter()
        .find(|s| s.id == supplier_id)
        .ok_or_else(|| MetricsError::SupplierNotFound(supplier_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShipmentStatus, SupplyChainData};

    fn supplier(id: &str, performance: f64) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: format!("Supplier {id}"),
            contact: "ops@example.com".to_string(),
            performance_score: performance,
            on_time_delivery_rate: 0.0,
            quality_score: 90.0,
            average_lead_time: 4.0,
            total_shipments: 10,
            last_updated: Utc::now(),
        }
    }

    fn shipment(id: &str, supplier_id: &str, on_time: Option<bool>) -> Shipment {
        let now = Utc::now();
        let estimated = now - Duration::hours(12);
        let actual = on_time.map(|ok| {
            if ok {
                estimated - Duration::hours(1)
            } else {
                estimated + Duration::hours(1)
            }
        });
        Shipment {
            id: id.to_string(),
            origin: "Hamburg".to_string(),
            destination: "Oslo".to_string(),
            current_location: "Oslo".to_string(),
            status: if actual.is_some() {
                ShipmentStatus::Delivered
            } else {
                ShipmentStatus::InTransit
            },
            estimated_delivery: estimated,
            actual_delivery: actual,
            items: vec![],
            supplier_id: supplier_id.to_string(),
            created_at: now - Duration::days(3),
            updated_at: now,
        }
    }

    #[test]
    fn test_on_time_rate_bounds() {
        let tracker = SupplierTracker::new();
        let mut data = SupplyChainData::empty();
        data.suppliers.push(supplier("sup-1", 80.0));

        // No delivered shipments at all.
        assert_eq!(tracker.on_time_rate(&data, "sup-1"), 0.0);

        data.shipments.push(shipment("shp-1", "sup-1", Some(true)));
        data.shipments.push(shipment("shp-2", "sup-1", Some(false)));
        data.shipments.push(shipment("shp-3", "sup-1", None));

        let rate = tracker.on_time_rate(&data, "sup-1");
        assert_eq!(rate, 50.0);
        assert!((0.0..=100.0).contains(&rate));
    }

    #[test]
    fn test_rank_rejects_unknown_metric() {
        let tracker = SupplierTracker::new();
        let data = SupplyChainData::empty();
        let err = tracker.rank_suppliers(&data, "vibes", false).unwrap_err();
        assert_eq!(err, MetricsError::InvalidMetric("vibes".to_string()));
    }

    #[test]
    fn test_rank_descending_with_stable_ties() {
        let tracker = SupplierTracker::new();
        let mut data = SupplyChainData::empty();
        data.suppliers.push(supplier("a", 80.0));
        data.suppliers.push(supplier("b", 95.0));
        data.suppliers.push(supplier("c", 80.0));

        let ranked = tracker
            .rank_suppliers(&data, "performance_score", false)
            .unwrap();
        let ids: Vec<&str> = ranked.iter().map(|r| r.supplier_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_history_rejects_negative_days() {
        let tracker = SupplierTracker::new();
        let mut data = SupplyChainData::empty();
        data.suppliers.push(supplier("sup-1", 80.0));
        let err = tracker
            .performance_history(&data, "sup-1", -1)
            .unwrap_err();
        assert_eq!(err, MetricsError::NegativeDays(-1));
    }

    #[test]
    fn test_history_unknown_supplier() {
        let tracker = SupplierTracker::new();
        let data = SupplyChainData::empty();
        let err = tracker.performance_history(&data, "ghost", 30).unwrap_err();
        assert_eq!(err, MetricsError::SupplierNotFound("ghost".to_string()));
    }

    #[test]
    fn test_history_buckets_include_undelivered_weeks() {
        let tracker = SupplierTracker::new();
        let mut data = SupplyChainData::empty();
        data.suppliers.push(supplier("sup-1", 80.0));
        data.shipments.push(shipment("shp-1", "sup-1", None));

        let history = tracker.performance_history(&data, "sup-1", 30).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].shipment_count, 1);
        assert_eq!(history[0].on_time_delivery_rate, 0.0);
        assert_eq!(history[0].average_lead_time, 0.0);
    }
}
