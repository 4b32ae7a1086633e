// notify-backend/src/domain/organization_model.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// SeaORM Entity Model for organizations table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::unified_job_template_model::Entity")]
    UnifiedJobTemplates,
}

impl Related<super::unified_job_template_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnifiedJobTemplates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
