use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::labels::labeled_enum;

labeled_enum! {
    /// Administrative region, the primary partition key of every record
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
        Serialize, Deserialize, sqlx::Type, ToSchema,
    )]
    #[sqlx(type_name = "region", rename_all = "lowercase")]
    #[serde(rename_all = "lowercase")]
    pub enum Region {
        Hhohho = ("hhohho", "Hhohho"),
        Manzini = ("manzini", "Manzini"),
        Lubombo = ("lubombo", "Lubombo"),
        Shiselweni = ("shiselweni", "Shiselweni"),
    }
}
