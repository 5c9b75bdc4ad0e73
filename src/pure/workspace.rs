//! The top level container managing tables and the allocation policy
use crate::{pure::Table, Error, Result};
use rand::Rng;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// The result of [organizing][Workspace::organize] a roster into a
/// [Workspace].
///
/// Allocation degrades gracefully when demand exceeds seating: names that
/// could not be seated are recorded here rather than raised as an error.
/// Callers that want the arrangement regardless can simply ignore the
/// report.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[must_use]
pub struct SeatingReport {
    /// How many names from the roster were assigned a seat.
    pub seated: usize,
    /// Names left over once every seat was taken, in the order they
    /// remained in the draw pool.
    pub unseated: Vec<String>,
}

impl SeatingReport {
    /// Whether every name in the roster found a seat.
    pub fn is_complete(&self) -> bool {
        self.unseated.is_empty()
    }
}

/// An ordered collection of [Table]s and the seating allocation policy
/// over them.
///
/// A workspace is built with a fixed number of uniform capacity tables and
/// seats a roster of names via [organize][Workspace::organize]. The model
/// assumes a single allocation run per workspace lifetime: there is no
/// rebalancing of an arrangement once it has been made.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub(crate) tables: Vec<Table>,
    pub(crate) table_limit: usize,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::try_new(Self::DEFAULT_TABLE_LIMIT, Table::DEFAULT_CAPACITY)
            .expect("default workspace dimensions to be valid")
    }
}

fn check_table_invariants(tables: &[Table]) -> Result<()> {
    let expected = match tables.first() {
        Some(t) => t.capacity(),
        None => return Err(Error::NoTables),
    };

    for (index, table) in tables.iter().enumerate() {
        let found = table.capacity();
        if found == 0 {
            return Err(Error::ZeroCapacityTable { index });
        }
        if found != expected {
            return Err(Error::MixedTableCapacities { expected, found });
        }
    }

    Ok(())
}

impl Workspace {
    /// The number of tables configured when no explicit count is given.
    pub const DEFAULT_TABLE_LIMIT: usize = 6;

    /// Create a workspace with `number_of_tables` tables of `capacity`
    /// seats each.
    ///
    /// # Errors
    /// This method will error if `number_of_tables` or `capacity` is zero.
    pub fn try_new(number_of_tables: usize, capacity: usize) -> Result<Self> {
        Self::try_from_tables((0..number_of_tables).map(|_| Table::new(capacity)).collect())
    }

    /// Create a workspace from an explicit list of tables.
    ///
    /// The table limit used by the allocation policy is the number of
    /// tables supplied.
    ///
    /// # Errors
    /// This method will error if the list is empty ([Error::NoTables]), if
    /// any table can never seat anyone ([Error::ZeroCapacityTable]) or if
    /// the tables do not share a uniform capacity
    /// ([Error::MixedTableCapacities]).
    pub fn try_from_tables(tables: Vec<Table>) -> Result<Self> {
        check_table_invariants(&tables)?;

        Ok(Self {
            table_limit: tables.len(),
            tables,
        })
    }

    /// The tables in this workspace, in sequence order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// The configured table count.
    ///
    /// [organize][Workspace::organize] may append a single overflow table,
    /// in which case `tables().len() == table_limit() + 1`.
    pub fn table_limit(&self) -> usize {
        self.table_limit
    }

    /// Seat a roster of names, drawing from the pool at random.
    ///
    /// Equivalent to [organize_with_rng][Workspace::organize_with_rng]
    /// using the thread local RNG: see there for the allocation policy
    /// itself.
    pub fn organize(&mut self, names: Vec<String>) -> SeatingReport {
        self.organize_with_rng(names, &mut rand::thread_rng())
    }

    /// Seat a roster of names using `rng` for the pool draws.
    ///
    /// Tables are filled strictly in sequence order and seats within a
    /// table in seat order; which name lands in which seat is decided by
    /// drawing uniformly at random from the remaining pool, without
    /// replacement. If the roster is larger than the configured seating
    /// capacity a single default capacity overflow table is appended before
    /// assignment begins. Names still in the pool once every free seat is
    /// taken are returned in the [SeatingReport] and logged: running out of
    /// seats is not an error.
    #[tracing::instrument(level = "trace", skip(self, names, rng))]
    pub fn organize_with_rng<R: Rng>(&mut self, names: Vec<String>, rng: &mut R) -> SeatingReport {
        let roster_size = names.len();

        // Configured tables are uniform by construction, so the first
        // table's capacity is representative.
        let total_capacity = self.table_limit * self.tables[0].capacity();
        if roster_size > total_capacity {
            trace!(roster_size, total_capacity, "appending an overflow table");
            self.tables.push(Table::default());
        }

        let mut pool = names;

        for table in self.tables.iter_mut() {
            if !table.has_free_spot() {
                continue;
            }

            // The free seat count is snapshotted once per table: only pool
            // exhaustion is re-checked between draws.
            for _ in 0..table.free_seat_count() {
                if pool.is_empty() {
                    return SeatingReport {
                        seated: roster_size,
                        unseated: Vec::new(),
                    };
                }

                let name = pool.swap_remove(rng.gen_range(0..pool.len()));
                table.assign_seat(name);
            }
        }

        if !pool.is_empty() {
            warn!(
                unseated = pool.len(),
                "roster exceeds seating even with an overflow table"
            );
        }

        SeatingReport {
            seated: roster_size - pool.len(),
            unseated: pool,
        }
    }

    /// Print the current arrangement to stdout: one block per table listing
    /// each seat's occupant in seat order.
    pub fn display(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, table) in self.tables.iter().enumerate() {
            writeln!(f, "---- Table {} ----", i + 1)?;
            for seat in table.seats() {
                writeln!(f, "{}", seat.name())?;
            }
            writeln!(f, "{}", "-".repeat(28))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pure::Seat, tables};
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};
    use simple_test_case::test_case;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("colleague-{i}")).collect()
    }

    #[test]
    fn the_default_workspace_has_six_tables_of_four() {
        let ws = Workspace::default();

        assert_eq!(ws.table_limit(), 6);
        assert_eq!(ws.tables().len(), 6);
        assert!(ws.tables().iter().all(|t| t.capacity() == 4));
    }

    #[test]
    fn try_from_tables_rejects_an_empty_table_list() {
        let res = Workspace::try_from_tables(vec![]);

        assert!(matches!(res, Err(Error::NoTables)));
    }

    #[test]
    fn try_from_tables_rejects_zero_capacity_tables() {
        let res = Workspace::try_from_tables(tables!(4, 0, 4));

        assert!(matches!(res, Err(Error::ZeroCapacityTable { index: 1 })));
    }

    #[test]
    fn try_from_tables_rejects_mixed_capacities() {
        let res = Workspace::try_from_tables(tables!(4, 4, 6));

        assert!(matches!(
            res,
            Err(Error::MixedTableCapacities {
                expected: 4,
                found: 6
            })
        ));
    }

    #[test_case(0, 4; "no tables")]
    #[test_case(6, 0; "no seats")]
    #[test]
    fn try_new_rejects_zero_dimensions(number_of_tables: usize, capacity: usize) {
        assert!(Workspace::try_new(number_of_tables, capacity).is_err());
    }

    #[test]
    fn organize_with_an_empty_roster_leaves_every_seat_free() {
        let mut ws = Workspace::default();

        let report = ws.organize(vec![]);

        assert!(report.is_complete());
        assert_eq!(report.seated, 0);
        assert_eq!(ws.tables().len(), 6);
        assert!(ws.tables().iter().all(|t| t.free_seat_count() == t.capacity()));
    }

    #[test]
    fn an_exact_fit_roster_fills_every_seat_without_overflow() {
        let mut ws = Workspace::default();

        let report = ws.organize_with_rng(roster(24), &mut StdRng::seed_from_u64(0));

        assert!(report.is_complete());
        assert_eq!(report.seated, 24);
        assert_eq!(ws.tables().len(), 6);
        assert!(ws.tables().iter().all(|t| !t.has_free_spot()));
    }

    #[test]
    fn a_roster_one_over_capacity_gains_a_single_overflow_table() {
        let mut ws = Workspace::default();

        let report = ws.organize_with_rng(roster(25), &mut StdRng::seed_from_u64(0));

        assert!(report.is_complete());
        assert_eq!(report.seated, 25);
        assert_eq!(ws.tables().len(), 7);

        let occupied: usize = ws.tables().iter().map(Table::occupied_seat_count).sum();
        assert_eq!(occupied, 25);
    }

    #[test]
    fn overflow_beyond_the_extra_table_truncates_and_reports() {
        // 2 tables of 2 seats, plus a default capacity overflow table
        let mut ws = Workspace::try_new(2, 2).unwrap();
        let names = roster(10);

        let report = ws.organize_with_rng(names.clone(), &mut StdRng::seed_from_u64(0));

        assert_eq!(ws.tables().len(), 3);
        assert_eq!(report.seated, 8);
        assert_eq!(report.unseated.len(), 2);
        assert!(report.unseated.iter().all(|n| names.contains(n)));
        assert!(ws.tables().iter().all(|t| !t.has_free_spot()));
    }

    #[test_case(1; "single name")]
    #[test_case(10; "partial fill")]
    #[test_case(24; "exact fit")]
    #[test]
    fn organize_conserves_the_roster(n: usize) {
        let names = roster(n);
        let mut ws = Workspace::default();

        let report = ws.organize_with_rng(names.clone(), &mut StdRng::seed_from_u64(7));

        assert_eq!(report.seated, n);

        let seated: Vec<&str> = ws
            .tables()
            .iter()
            .flat_map(|t| t.seats())
            .filter_map(Seat::occupant)
            .collect();

        assert_eq!(seated.len(), n);
        assert_eq!(seated.iter().collect::<HashSet<_>>().len(), n);
        assert!(seated.iter().all(|s| names.iter().any(|n| n == s)));
    }

    #[test]
    fn tables_fill_in_sequence_order() {
        let mut ws = Workspace::try_new(3, 2).unwrap();

        let _ = ws.organize_with_rng(roster(3), &mut StdRng::seed_from_u64(0));

        let counts: Vec<usize> = ws.tables().iter().map(Table::occupied_seat_count).collect();
        assert_eq!(counts, vec![2, 1, 0]);
    }

    #[test]
    fn repeated_runs_vary_the_arrangement() {
        let names = roster(12);
        let mut arrangements = HashSet::new();

        for seed in 0..16 {
            let mut ws = Workspace::default();
            let _ = ws.organize_with_rng(names.clone(), &mut StdRng::seed_from_u64(seed));

            let order: Vec<String> = ws
                .tables()
                .iter()
                .flat_map(|t| t.seats())
                .map(|s| s.name().to_string())
                .collect();
            arrangements.insert(order);
        }

        assert!(arrangements.len() > 1);
    }

    #[test]
    fn display_lists_every_seat_for_every_table() {
        let mut ws = Workspace::try_new(2, 3).unwrap();
        let names = roster(4);
        let _ = ws.organize_with_rng(names.clone(), &mut StdRng::seed_from_u64(3));

        let rendered = ws.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        // header + one line per seat + footer, per table
        assert_eq!(lines.len(), 2 * (1 + 3 + 1));
        assert_eq!(lines[0], "---- Table 1 ----");
        assert_eq!(lines[5], "---- Table 2 ----");

        for block in lines.chunks(5) {
            assert_eq!(block[4], "-".repeat(28));
            for line in &block[1..4] {
                assert!(names.iter().any(|n| n == line) || *line == Seat::NO_ONE);
            }
        }
    }

    #[quickcheck]
    fn seat_accounting_holds_for_arbitrary_rosters(
        n_names: u8,
        n_tables: u8,
        capacity: u8,
    ) -> bool {
        let n_tables = (n_tables % 8) as usize + 1;
        let capacity = (capacity % 6) as usize + 1;
        let names = roster(n_names as usize);
        let n = names.len();

        let mut ws = Workspace::try_new(n_tables, capacity).unwrap();
        let report = ws.organize_with_rng(names, &mut StdRng::seed_from_u64(n as u64));

        let accounting = ws
            .tables()
            .iter()
            .all(|t| t.free_seat_count() + t.occupied_seat_count() == t.capacity());
        let occupied: usize = ws.tables().iter().map(Table::occupied_seat_count).sum();

        accounting && occupied == report.seated && report.seated + report.unseated.len() == n
    }

    #[quickcheck]
    fn at_most_one_overflow_table_is_appended(n_names: u8) -> bool {
        let mut ws = Workspace::default();

        let _ = ws.organize_with_rng(roster(n_names as usize), &mut StdRng::seed_from_u64(42));

        let expected = if n_names as usize > 24 { 7 } else { 6 };
        ws.tables().len() == expected
    }
}
