//! USB identifier table model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product details for one vendor/product/variant triple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInfo {
    pub description: String,
    pub keyboard: String,
    pub manufacturer: String,
    pub vendor_id: String,
    pub product_id: String,
    pub device_ver: String,
}

/// Nested lookup: vendor ID → product ID → variant → [`ProductInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsbTable {
    pub vendors: BTreeMap<String, BTreeMap<String, BTreeMap<String, ProductInfo>>>,
}

impl UsbTable {
    /// All variants registered under a vendor/product pair.
    pub fn lookup(&self, vendor_id: &str, product_id: &str) -> Option<&BTreeMap<String, ProductInfo>> {
        self.vendors.get(vendor_id)?.get(product_id)
    }

    /// Total number of variants across all vendors and products.
    pub fn variant_count(&self) -> usize {
        self.vendors
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usb_table_lookup() {
        let table: UsbTable = serde_json::from_str(
            r#"{"0x16C0": {"0x27DB": {"plaid": {"keyboard": "plaid", "manufacturer": "dm9records", "vendor_id": "0x16C0", "product_id": "0x27DB", "device_ver": "0x0002"}}}}"#,
        )
        .unwrap();
        let variants = table.lookup("0x16C0", "0x27DB").unwrap();
        assert_eq!(variants["plaid"].manufacturer, "dm9records");
        assert_eq!(table.variant_count(), 1);
        assert!(table.lookup("0x16C0", "0x0000").is_none());
    }
}
