pub mod a001_supplier;
pub mod a002_warehouse;
pub mod a003_product;
pub mod a004_vat_rate;
pub mod a005_purchase_order;
