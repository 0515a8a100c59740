use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub distance_from_earth: Option<String>,
    pub nearest_star: Option<String>,
    pub image: Option<String>,
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

/// Scientists who have flown missions to a planet, resolved through the `missions` join table.
impl Related<super::scientist::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission::Relation::Scientist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
