/// A table whose rows are hidden from the public by a fixed predicate.
///
/// Public list, detail, map and statistics queries all start from
/// [`public_select`], so a record is either visible everywhere or nowhere.
pub trait PublicVisibility {
    const TABLE: &'static str;

    /// Column list selected into the row model
    const COLUMNS: &'static str;

    /// SQL predicate selecting publicly visible rows
    const VISIBLE: &'static str;
}

/// `SELECT <columns> FROM <table> WHERE <visible>`; callers append `AND ...` clauses
pub fn public_select<T: PublicVisibility>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {}",
        T::COLUMNS,
        T::TABLE,
        T::VISIBLE
    )
}
