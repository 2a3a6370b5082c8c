use std::fmt;

use compnet_core::{GroupId, IncidenceStructure};

use crate::incidence::IncidenceStore;

const CELL_WIDTH: usize = 6;

/// Renders the incidence matrix: one column per group key, one row per
/// vertex, and the group weight in every incident cell.
impl<T> fmt::Display for IncidenceStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.group_count() as u64;
        write!(f, "{:>width$}|", "", width = CELL_WIDTH)?;
        for group in 0..columns {
            write!(f, "{:>width$}|", group, width = CELL_WIDTH)?;
        }
        writeln!(f)?;
        for (vertex, row) in self.rows() {
            write!(f, "{:>width$}|", vertex.as_raw(), width = CELL_WIDTH)?;
            for group in 0..columns {
                match row.get(&GroupId::from_raw(group)) {
                    Some(weight) => write!(f, "{:>width$.2}|", weight, width = CELL_WIDTH)?,
                    None => write!(f, "{:>width$}|", "", width = CELL_WIDTH)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
