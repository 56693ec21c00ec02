//! Static page copy entity for SeaORM.

use sea_orm::entity::prelude::*;

use folio_core::ContentError;
use folio_core::domain::PageKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "page_contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `home`, `about` or `contact`.
    pub page: String,
    pub locale: String,
    pub title: String,
    pub subtitle: String,
    /// JSON array of paragraphs.
    #[sea_orm(column_type = "JsonBinary")]
    pub body: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for folio_core::domain::PageContent {
    type Error = ContentError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let page: PageKind = model.page.parse().map_err(|_| {
            ContentError::BackingStore(format!("unknown page kind '{}'", model.page))
        })?;
        let body = serde_json::from_value(model.body).map_err(|e| {
            ContentError::BackingStore(format!("page {}/{} has malformed body: {e}", page, model.locale))
        })?;

        Ok(Self {
            page,
            locale: model.locale,
            title: model.title,
            subtitle: model.subtitle,
            body,
        })
    }
}
