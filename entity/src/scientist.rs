use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scientists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub field_of_study: String,
    pub avatar: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission::Entity")]
    Mission,
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

/// Planets visited by a scientist, resolved through the `missions` join table.
impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission::Relation::Scientist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
