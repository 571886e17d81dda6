use sea_orm::entity::prelude::*;

/// ext 表实体
/// name 列带唯一约束，是并发插入时的最终防线
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ext")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idx: i32,

    #[sea_orm(column_name = "type", column_type = "String(Some(10))")]
    pub kind: String,

    #[sea_orm(unique, column_type = "String(Some(20))")]
    pub name: String,

    pub reg_id: Option<String>,

    pub reg_date: DateTimeUtc,

    pub mod_id: Option<String>,

    pub mod_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
