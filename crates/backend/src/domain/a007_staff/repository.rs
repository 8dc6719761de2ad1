use contracts::domain::a007_staff::aggregate::{Staff, StaffFilter};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staffs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub store_id: i32,
    pub manager_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Staff {
    fn from(m: Model) -> Self {
        Staff {
            staff_id: m.staff_id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            active: m.active,
            store_id: m.store_id,
            manager_id: m.manager_id,
        }
    }
}

fn to_active(aggregate: &Staff) -> ActiveModel {
    ActiveModel {
        staff_id: Set(aggregate.staff_id),
        first_name: Set(aggregate.first_name.clone()),
        last_name: Set(aggregate.last_name.clone()),
        email: Set(aggregate.email.clone()),
        phone: Set(aggregate.phone.clone()),
        active: Set(aggregate.active),
        store_id: Set(aggregate.store_id),
        manager_id: Set(aggregate.manager_id),
    }
}

pub async fn list(conn: &DatabaseConnection, filter: &StaffFilter) -> anyhow::Result<Vec<Staff>> {
    let mut query = Entity::find();
    if let Some(store_id) = filter.store_id {
        query = query.filter(Column::StoreId.eq(store_id));
    }
    if let Some(active) = filter.active {
        query = query.filter(Column::Active.eq(active));
    }

    let items = query
        .order_by_asc(Column::StaffId)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Staff>> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id).count(conn).await? > 0)
}

/// Staff member other than `except_id` already using `email`
pub async fn email_taken(
    conn: &DatabaseConnection,
    email: &str,
    except_id: Option<i32>,
) -> anyhow::Result<bool> {
    let mut query = Entity::find().filter(Column::Email.eq(email));
    if let Some(id) = except_id {
        query = query.filter(Column::StaffId.ne(id));
    }
    Ok(query.count(conn).await? > 0)
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Staff) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Staff) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

/// Subordinates lose their manager (ON DELETE SET NULL).
pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
