use anyhow::Result;
use contracts::dashboards::d400_inventory_by_store::{InventoryLine, InventoryReportResponse};
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

use super::repository::{self, InventoryRow};

pub const REPORT_TITLE: &str = "Inventory report by store and product";
const UNKNOWN: &str = "Unknown";

pub async fn get_inventory_report(
    conn: &DatabaseConnection,
    store_id: Option<i32>,
) -> Result<InventoryReportResponse> {
    let rows = repository::get_inventory_rows(conn, store_id).await?;

    let report_title = match store_id {
        Some(id) => format!("{} (store_id: {})", REPORT_TITLE, id),
        None => REPORT_TITLE.to_string(),
    };

    Ok(InventoryReportResponse {
        report_title,
        data: group_by_store(rows),
    })
}

/// Rows arrive sorted, so each store's lines keep product-name order.
fn group_by_store(rows: Vec<InventoryRow>) -> BTreeMap<String, Vec<InventoryLine>> {
    let mut grouped: BTreeMap<String, Vec<InventoryLine>> = BTreeMap::new();
    for row in rows {
        let store_name = row.store_name.unwrap_or_else(|| UNKNOWN.to_string());
        grouped.entry(store_name).or_default().push(InventoryLine {
            product_id: row.product_id,
            product_name: row.product_name.unwrap_or_else(|| UNKNOWN.to_string()),
            quantity: row.quantity,
        });
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(store: Option<&str>, product: Option<(i32, &str)>, quantity: i32) -> InventoryRow {
        InventoryRow {
            store_name: store.map(str::to_string),
            product_id: product.map(|p| p.0),
            product_name: product.map(|p| p.1.to_string()),
            quantity,
        }
    }

    #[test]
    fn test_group_by_store_keeps_row_order() {
        let grouped = group_by_store(vec![
            row(Some("Baldwin Bikes"), Some((2, "Alpha")), 3),
            row(Some("Baldwin Bikes"), Some((1, "Beta")), 0),
            row(Some("Rowlett Bikes"), Some((2, "Alpha")), 7),
        ]);

        assert_eq!(grouped.len(), 2);
        let baldwin = &grouped["Baldwin Bikes"];
        assert_eq!(baldwin[0].product_name, "Alpha");
        assert_eq!(baldwin[1].product_name, "Beta");
        assert_eq!(grouped["Rowlett Bikes"][0].quantity, 7);
    }

    #[test]
    fn test_missing_names_are_unknown() {
        let grouped = group_by_store(vec![row(None, None, 4)]);
        let lines = &grouped[UNKNOWN];
        assert_eq!(lines[0].product_id, None);
        assert_eq!(lines[0].product_name, UNKNOWN);
    }
}
