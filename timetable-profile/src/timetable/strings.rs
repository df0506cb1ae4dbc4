//! The string table shared by the textual views.

use std::sync::Arc;

use crate::error::{Result, check_index};

/// Ordered strings addressed by index from the records.
///
/// Records store an index instead of inline text so that they stay fixed
/// width. One table is shared by all views of a timetable.
pub type StringTable = Arc<[Arc<str>]>;

/// Build a string table.
///
/// # Examples
///
/// ```
/// use timetable_profile::timetable::string_table;
///
/// let table = string_table(["Lausanne", "Luzern"]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(&*table[1], "Luzern");
/// ```
pub fn string_table<I, S>(strings: I) -> StringTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .map(|s| Arc::<str>::from(s.as_ref()))
        .collect()
}

/// Look up a string by index.
pub(crate) fn resolve(table: &StringTable, index: usize) -> Result<&str> {
    check_index("string", index, table.len())?;
    Ok(&table[index])
}
