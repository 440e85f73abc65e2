//! Metrics engines over a shared snapshot: dashboard counts, supplier
//! rankings and history, inventory trends, shipment and node lookups.

use chainview::filter::FilterCriteria;
use chainview::metrics::{
    Dashboard, InventoryMonitor, MetricsError, NetworkMonitor, ShipmentTracker, SupplierTracker,
};
use chainview::model::{
    Edge, InventoryItem, Node, NodeStatus, NodeType, Shipment, ShipmentStatus, Supplier,
    SupplyChainData,
};
use chrono::{Duration, Utc};

fn shipment(id: &str, supplier_id: &str, status: ShipmentStatus) -> Shipment {
    let now = Utc::now();
    Shipment {
        id: id.to_string(),
        origin: "Hamburg".to_string(),
        destination: "Oslo".to_string(),
        current_location: "Copenhagen".to_string(),
        status,
        estimated_delivery: now + Duration::days(1),
        actual_delivery: None,
        items: vec![],
        supplier_id: supplier_id.to_string(),
        created_at: now - Duration::days(2),
        updated_at: now,
    }
}

fn supplier(id: &str, name: &str, performance: f64, quality: f64) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        contact: "ops@example.com".to_string(),
        performance_score: performance,
        on_time_delivery_rate: 0.0,
        quality_score: quality,
        average_lead_time: 4.0,
        total_shipments: 12,
        last_updated: Utc::now(),
    }
}

fn item(id: &str, quantity: f64, reorder_point: f64) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: format!("item {id}"),
        category: "parts".to_string(),
        location: "Hamburg".to_string(),
        quantity,
        unit: "pcs".to_string(),
        reorder_point,
        last_updated: Utc::now(),
    }
}

fn snapshot() -> SupplyChainData {
    let mut data = SupplyChainData::empty();
    data.shipments = vec![
        shipment("shp-1", "sup-1", ShipmentStatus::InTransit),
        shipment("shp-2", "sup-1", ShipmentStatus::Delayed),
        shipment("shp-3", "sup-2", ShipmentStatus::Delivered),
        shipment("shp-4", "sup-2", ShipmentStatus::Pending),
    ];
    data.inventory = vec![item("inv-1", 5.0, 20.0), item("inv-2", 50.0, 20.0)];
    data.suppliers = vec![
        supplier("sup-1", "Acme Logistics", 95.0, 88.0),
        supplier("sup-2", "Nordkap", 90.0, 92.0),
    ];
    data
}

#[test]
fn dashboard_status_counts_sum_to_total() {
    let metrics = Dashboard::new().metrics(&snapshot());

    assert_eq!(metrics.total_shipments, 4);
    assert_eq!(
        metrics.in_transit_count
            + metrics.delayed_count
            + metrics.delivered_count
            + metrics.pending_count,
        metrics.total_shipments
    );
    assert_eq!(metrics.low_stock_count, 1);
    assert_eq!(metrics.total_inventory_items, 2);
    assert_eq!(metrics.total_suppliers, 2);
    assert!((metrics.average_supplier_performance - 92.5).abs() < 1e-9);
}

#[test]
fn dashboard_respects_filters() {
    let criteria = FilterCriteria {
        status: Some(vec!["delayed".to_string()]),
        ..Default::default()
    };
    let metrics = Dashboard::new().metrics_filtered(&snapshot(), &criteria);

    assert_eq!(metrics.total_shipments, 1);
    assert_eq!(metrics.delayed_count, 1);
    // Suppliers are unaffected by a status filter.
    assert_eq!(metrics.total_suppliers, 2);
}

#[test]
fn higher_score_ranks_first_descending() {
    let ranked = SupplierTracker::new()
        .rank_suppliers(&snapshot(), "performance_score", false)
        .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].supplier_name, "Acme Logistics");
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[0].score, 95.0);
    assert_eq!(ranked[1].supplier_name, "Nordkap");
    assert_eq!(ranked[1].rank, 2);
}

#[test]
fn ascending_ranking_flips_order() {
    let tracker = SupplierTracker::new();
    let data = snapshot();

    let asc = tracker.rank_suppliers(&data, "quality_score", true).unwrap();
    assert_eq!(asc[0].supplier_id, "sup-1");

    let desc = tracker.rank_suppliers(&data, "quality_score", false).unwrap();
    assert_eq!(desc[0].supplier_id, "sup-2");
}

#[test]
fn on_time_rate_counts_only_delivered() {
    let tracker = SupplierTracker::new();
    let mut data = snapshot();

    // One late delivery for sup-1: estimated in the past, delivered now.
    let now = Utc::now();
    data.shipments[0].status = ShipmentStatus::Delivered;
    data.shipments[0].estimated_delivery = now - Duration::hours(6);
    data.shipments[0].actual_delivery = Some(now);

    assert_eq!(tracker.on_time_rate(&data, "sup-1"), 0.0);

    // And one on-time delivery.
    data.shipments[1].status = ShipmentStatus::Delivered;
    data.shipments[1].actual_delivery = Some(now);
    assert_eq!(tracker.on_time_rate(&data, "sup-1"), 50.0);
}

#[test]
fn supplier_metrics_unknown_id() {
    let err = SupplierTracker::new()
        .supplier_metrics(&snapshot(), "ghost")
        .unwrap_err();
    assert_eq!(err, MetricsError::SupplierNotFound("ghost".to_string()));
}

#[test]
fn history_is_chronological_and_windowed() {
    let tracker = SupplierTracker::new();
    let mut data = snapshot();
    let now = Utc::now();

    // Two shipments three weeks apart, one outside the window.
    data.shipments[0].created_at = now - Duration::days(21);
    data.shipments[1].created_at = now - Duration::days(1);
    data.shipments.push({
        let mut s = shipment("shp-5", "sup-1", ShipmentStatus::Delivered);
        s.created_at = now - Duration::days(90);
        s
    });

    let history = tracker.performance_history(&data, "sup-1", 30).unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].date < history[1].date);
    assert_eq!(history.iter().map(|p| p.shipment_count).sum::<usize>(), 2);
}

#[test]
fn inventory_levels_apply_criteria() {
    let monitor = InventoryMonitor::new();
    let criteria = FilterCriteria {
        location: Some(vec!["Hamburg".to_string()]),
        ..Default::default()
    };
    let levels = monitor.inventory_levels(&snapshot(), &criteria);
    assert_eq!(levels.len(), 2);

    let criteria = FilterCriteria {
        location: Some(vec!["Oslo".to_string()]),
        ..Default::default()
    };
    assert!(monitor.inventory_levels(&snapshot(), &criteria).is_empty());
}

#[test]
fn trends_series_is_aligned_and_ordered() {
    let monitor = InventoryMonitor::new();
    let series = monitor.inventory_trends(&snapshot(), "inv-2", 14).unwrap();

    assert_eq!(series.item_id, "inv-2");
    assert_eq!(series.dates.len(), series.values.len());
    assert!(series.dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn shipment_details_join_supplier_name() {
    let details = ShipmentTracker::new()
        .shipment_details(&snapshot(), "shp-3")
        .unwrap();
    assert_eq!(details.shipment.id, "shp-3");
    assert_eq!(details.supplier_name.as_deref(), Some("Nordkap"));
}

#[test]
fn shipment_search_single_field() {
    let tracker = ShipmentTracker::new();
    let hits = tracker
        .search_shipments(&snapshot(), "copen", "current_location")
        .unwrap();
    assert_eq!(hits.len(), 4);

    let err = tracker
        .search_shipments(&snapshot(), "copen", "supplier_id")
        .unwrap_err();
    assert_eq!(
        err,
        MetricsError::InvalidSearchField("supplier_id".to_string())
    );
}

#[test]
fn node_details_resolve_connectivity() {
    let mut data = snapshot();
    data.nodes.push(Node {
        id: "n1".to_string(),
        name: "Hamburg DC".to_string(),
        node_type: NodeType::DistributionCenter,
        location: "Hamburg".to_string(),
        latitude: Some(53.55),
        longitude: Some(9.99),
        status: NodeStatus::Normal,
        capacity: Some(1000.0),
    });
    data.edges.push(Edge {
        id: "e1".to_string(),
        source_node_id: "n1".to_string(),
        target_node_id: "n1".to_string(),
        shipment_ids: vec!["shp-1".to_string()],
        active: true,
    });

    let details = NetworkMonitor::new().node_details(&data, "n1").unwrap();
    assert_eq!(details.incoming_edges, 1);
    assert_eq!(details.outgoing_edges, 1);
    assert_eq!(details.connected_shipment_ids, vec!["shp-1"]);
}
