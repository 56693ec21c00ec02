//! Author entity for SeaORM.

use sea_orm::entity::prelude::*;

use folio_core::ContentError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub avatar: String,
    pub email: String,
    /// JSON object of platform name to handle (or null).
    #[sea_orm(column_type = "JsonBinary")]
    pub social: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl TryFrom<Model> for folio_core::domain::Author {
    type Error = ContentError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let social = serde_json::from_value(model.social).map_err(|e| {
            ContentError::BackingStore(format!(
                "author {} has malformed social links: {e}",
                model.id
            ))
        })?;

        Ok(Self {
            id: model.id,
            name: model.name,
            bio: model.bio,
            avatar: model.avatar,
            email: model.email,
            social,
        })
    }
}
