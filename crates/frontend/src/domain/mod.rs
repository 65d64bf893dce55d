pub mod a005_purchase_order;
