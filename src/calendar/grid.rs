use std::iter::successors;
use time::{error::ComponentRange, Date, Month};

/// Number of slots in a month's row: five full weeks plus two more days, which
/// is enough for a 31-day month starting on a Saturday
pub const SLOT_COUNT: u8 = 37;

const MONTHS_IN_YEAR: usize = 12;

/// A cell of the year grid: a month plus a 1-based slot counted from the
/// Sunday on or before the first of the month
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GridPosition {
    pub month: Month,
    pub slot: u8,
}

impl GridPosition {
    pub fn new(month: Month, slot: u8) -> GridPosition {
        GridPosition { month, slot }
    }

    // `None` if the slot is outside `1..=SLOT_COUNT`
    fn index(self) -> Option<(usize, usize)> {
        let slot = usize::from(self.slot.checked_sub(1)?);
        (slot < usize::from(SLOT_COUNT)).then(|| (month_index(self.month), slot))
    }
}

/// The dates of a single year laid out by month and slot.  Every date of the
/// year occupies exactly one position; slots before the first and after the
/// last day of a month are empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarGrid {
    year: i32,
    cells: [[Option<Date>; SLOT_COUNT as usize]; MONTHS_IN_YEAR],
}

impl CalendarGrid {
    /// Lay out every date of `year`.
    ///
    /// # Errors
    ///
    /// Returns the `time` crate's range error if `year` cannot be represented
    /// as a [`Date`].
    pub fn for_year(year: i32) -> Result<CalendarGrid, ComponentRange> {
        let mut cells = [[None; SLOT_COUNT as usize]; MONTHS_IN_YEAR];
        for (row, month) in cells.iter_mut().zip(months()) {
            let first = Date::from_calendar_date(year, month, 1)?;
            let offset = first.weekday().number_days_from_sunday();
            for date in iter_month_days(first) {
                // A month spans at most 31 days after an offset of at most 6,
                // so the slot always fits in the row.
                if let Some(cell) = row.get_mut(usize::from(offset + date.day() - 1)) {
                    *cell = Some(date);
                }
            }
        }
        tracing::trace!(year, "built calendar grid");
        Ok(CalendarGrid { year, cells })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the date at `(month, slot)`, or `None` if no day of the month
    /// falls in that slot or the slot is out of range
    pub fn get(&self, month: Month, slot: u8) -> Option<Date> {
        let (m, s) = GridPosition::new(month, slot).index()?;
        self.cells.get(m)?.get(s).copied().flatten()
    }

    /// Iterate over the occupied slots of `month` in order
    pub fn dates_in(&self, month: Month) -> impl Iterator<Item = (GridPosition, Date)> + '_ {
        (1..=SLOT_COUNT).filter_map(move |slot| {
            self.get(month, slot)
                .map(|date| (GridPosition::new(month, slot), date))
        })
    }

    /// Returns the position of `date` within the grid, or `None` if it belongs
    /// to a different year
    pub fn position_of(&self, date: Date) -> Option<GridPosition> {
        if date.year() != self.year {
            return None;
        }
        let first = date.replace_day(1).ok()?;
        Some(GridPosition::new(
            date.month(),
            first.weekday().number_days_from_sunday() + date.day(),
        ))
    }
}

pub(crate) fn months() -> impl Iterator<Item = Month> {
    successors(Some(Month::January), |&m| match m {
        Month::December => None,
        m => Some(m.next()),
    })
}

fn month_index(month: Month) -> usize {
    usize::from(u8::from(month) - 1)
}

// Yields `first` and the days after it up to the end of its month
fn iter_month_days(first: Date) -> impl Iterator<Item = Date> {
    let month = first.month();
    successors(Some(first), |&d| d.next_day()).take_while(move |d| d.month() == month)
}
