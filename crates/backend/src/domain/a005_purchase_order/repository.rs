use chrono::Utc;
use contracts::domain::a005_purchase_order::aggregate::{
    OrderTotals, PurchaseOrder, PurchaseOrderId,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::order_status::OrderStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_purchase_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub po_number: String,
    pub supplier: String,
    pub warehouse: String,
    pub shipping_address: String,
    pub vat_rate: f64,
    pub order_date: String,
    pub lines_json: Option<String>,
    pub subtotal: f64,
    pub vat_amount: f64,
    pub grand_total: f64,
    pub status: String,
    pub notes: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PurchaseOrder {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        PurchaseOrder {
            base: BaseAggregate::with_metadata(
                PurchaseOrderId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            po_number: m.po_number,
            supplier: m.supplier,
            warehouse: m.warehouse,
            shipping_address: m.shipping_address,
            vat_rate: m.vat_rate,
            order_date: m.order_date,
            lines_json: m.lines_json,
            totals: OrderTotals {
                subtotal: m.subtotal,
                vat_amount: m.vat_amount,
                grand_total: m.grand_total,
            },
            status: OrderStatus::from_code(&m.status).unwrap_or_default(),
            notes: m.notes,
        }
    }
}

fn active_model(aggregate: &PurchaseOrder) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        po_number: Set(aggregate.po_number.clone()),
        supplier: Set(aggregate.supplier.clone()),
        warehouse: Set(aggregate.warehouse.clone()),
        shipping_address: Set(aggregate.shipping_address.clone()),
        vat_rate: Set(aggregate.vat_rate),
        order_date: Set(aggregate.order_date.clone()),
        lines_json: Set(aggregate.lines_json.clone()),
        subtotal: Set(aggregate.totals.subtotal),
        vat_amount: Set(aggregate.totals.vat_amount),
        grand_total: Set(aggregate.totals.grand_total),
        status: Set(aggregate.status.code().to_string()),
        notes: Set(aggregate.notes.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Все неудаленные заказы, новые сверху
pub async fn list_all() -> anyhow::Result<Vec<PurchaseOrder>> {
    let items: Vec<PurchaseOrder> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::OrderDate)
        .order_by_desc(Column::PoNumber)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<PurchaseOrder>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Количество когда-либо созданных заказов (включая удаленные),
/// используется для генерации следующего номера
pub async fn count_all() -> anyhow::Result<u64> {
    let count = Entity::find().count(conn()).await?;
    Ok(count)
}

pub async fn insert(aggregate: &PurchaseOrder) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &PurchaseOrder) -> anyhow::Result<()> {
    let mut active = active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
